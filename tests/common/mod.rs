mod assertions;
mod fixtures;

// Re-export
pub use assertions::{assert_result_finite, assert_state_finite, assert_within_percent};
pub use fixtures::*;
