use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Reference geometry used to dimensionalise aerodynamic coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyGeometry {
    /// Reference area (m²).
    pub reference_area: f64,
    /// Reference span for roll and yaw moments (m).
    pub span: f64,
    /// Reference chord for pitch moments (m).
    pub chord: f64,
}

impl BodyGeometry {
    /// Creates a new `BodyGeometry` instance with the specified parameters.
    ///
    /// # Arguments
    /// * `reference_area` - The reference area (m²).
    /// * `span` - The reference span (m).
    /// * `chord` - The reference chord (m).
    pub fn new(reference_area: f64, span: f64, chord: f64) -> Self {
        Self {
            reference_area,
            span,
            chord,
        }
    }

    /// Frontal area of a sphere, with span and chord equal to its radius.
    pub fn sphere(radius: f64) -> Self {
        Self::new(PI * radius * radius, radius, radius)
    }
}
