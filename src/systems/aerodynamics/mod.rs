mod air_data;
mod damping;
mod drag;
mod force_calculator;

pub use air_data::{air_data_from_state, calculate_air_data};
pub use damping::{pitch_moment_coefficient, roll_moment_coefficient, yaw_moment_coefficient};
pub use drag::sphere_drag_coefficient;
pub use force_calculator::calculate_aerodynamic_forces_moments;
