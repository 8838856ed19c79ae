mod aero_coef;
mod body;
pub mod catalog;
mod geometry;
mod loader;
mod mass;

pub use aero_coef::{BodyAeroCoefficients, DampingDerivatives, DragModel};
pub use body::{BodyModel, BodySource, BodyType};
pub use catalog::{sphere_properties, SphereProperties};
pub use geometry::BodyGeometry;
pub use loader::{ConfigError, DragModelKind, RawBodyConfig, REQUIRED_PARAMETERS};
pub use mass::{InertiaCoefficients, MassModel};
