use nalgebra::{Matrix3, Vector3};
use serde::Serialize;

use super::loader::ConfigError;

/// Inertia terms of the coupled roll/pitch/yaw equations, with
/// `gamma = ixx * izz - ixz²` already divided out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InertiaCoefficients {
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,
    pub c5: f64,
    pub c6: f64,
    pub c7: f64,
    pub c8: f64,
    pub c9: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MassModel {
    /// Total mass of the body (kg).
    pub mass: f64,
    /// Moment of inertia about the body x-axis (kg·m²).
    pub ixx: f64,
    /// Moment of inertia about the body y-axis (kg·m²).
    pub iyy: f64,
    /// Moment of inertia about the body z-axis (kg·m²).
    pub izz: f64,
    /// Product of inertia between the x and z axes (kg·m²).
    pub ixz: f64,
    /// The inertia matrix (3x3) representing the moments and products of inertia.
    pub inertia: Matrix3<f64>,
    /// Shared denominator of the roll and yaw equations.
    pub gamma: f64,
    pub coefficients: InertiaCoefficients,
}

impl MassModel {
    /// Creates a new `MassModel` with specified mass and inertia components.
    ///
    /// # Arguments
    /// * `mass` - Total mass of the body (kg).
    /// * `ixx` - Moment of inertia about the x-axis (kg·m²).
    /// * `iyy` - Moment of inertia about the y-axis (kg·m²).
    /// * `izz` - Moment of inertia about the z-axis (kg·m²).
    /// * `ixz` - Product of inertia between the x and z axes (kg·m²).
    ///
    /// # Returns
    /// The mass model, `ConfigError::ValidationError` when the mass or a principal
    /// moment is not positive, or `ConfigError::DegenerateInertia` when
    /// `ixx * izz - ixz²` vanishes.
    pub fn new(mass: f64, ixx: f64, iyy: f64, izz: f64, ixz: f64) -> Result<Self, ConfigError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "mass must be positive and finite, got {mass}"
            )));
        }

        for (axis, moment) in [("ixx", ixx), ("iyy", iyy), ("izz", izz)] {
            if !(moment.is_finite() && moment > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{axis} must be positive and finite, got {moment}"
                )));
            }
        }
        if !ixz.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "ixz must be finite, got {ixz}"
            )));
        }

        let gamma = ixx * izz - ixz * ixz;
        let scale = (ixx * izz).max(ixz * ixz);
        if !gamma.is_finite() || gamma.abs() <= 1e-12 * scale {
            return Err(ConfigError::DegenerateInertia(format!(
                "ixx*izz - ixz^2 = {gamma} (ixx = {ixx}, izz = {izz}, ixz = {ixz})"
            )));
        }

        let inertia = Matrix3::from_columns(&[
            Vector3::new(ixx, 0.0, -ixz),
            Vector3::new(0.0, iyy, 0.0),
            Vector3::new(-ixz, 0.0, izz),
        ]);

        let coefficients = InertiaCoefficients {
            c1: ((iyy - izz) * izz - ixz * ixz) / gamma,
            c2: (ixx - iyy + izz) * ixz / gamma,
            c3: izz / gamma,
            c4: ixz / gamma,
            c5: (izz - ixx) / iyy,
            c6: ixz / iyy,
            c7: 1.0 / iyy,
            c8: ((ixx - iyy) * ixx + ixz * ixz) / gamma,
            c9: ixx / gamma,
        };

        Ok(Self {
            mass,
            ixx,
            iyy,
            izz,
            ixz,
            inertia,
            gamma,
            coefficients,
        })
    }

    /// Rotational kinetic energy ½ωᵀJω for body rates `omega` (J).
    pub fn rotational_energy(&self, omega: &Vector3<f64>) -> f64 {
        0.5 * omega.dot(&(self.inertia * omega))
    }

    /// Angular momentum Jω in body axes (kg·m²/s).
    pub fn angular_momentum(&self, omega: &Vector3<f64>) -> Vector3<f64> {
        self.inertia * omega
    }
}
