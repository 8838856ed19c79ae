use serde::{Deserialize, Serialize};

use super::atmosphere::AtmosphereProperties;
use crate::utils::constants::DEFAULT_GRAVITY;

/// Atmosphere and gravity data handed to the equations of motion.
///
/// `density` and `speed_of_sound` describe the reference altitude only; the
/// equations of motion query [`AtmosphereProperties`] at the instantaneous altitude
/// instead. They are kept for reporting initial conditions. `gravity` is used as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentModel {
    /// Reference altitude (m).
    pub altitude: f64,
    /// Air density at the reference altitude (kg/m³).
    pub density: f64,
    /// Speed of sound at the reference altitude (m/s).
    pub speed_of_sound: f64,
    /// Gravitational acceleration along NED down (m/s²).
    pub gravity: f64,
}

impl Default for EnvironmentModel {
    fn default() -> Self {
        Self::at_altitude(0.0)
    }
}

impl EnvironmentModel {
    /// Builds the environment at `altitude` with the default gravity.
    pub fn at_altitude(altitude: f64) -> Self {
        Self::with_gravity(altitude, DEFAULT_GRAVITY)
    }

    pub fn with_gravity(altitude: f64, gravity: f64) -> Self {
        let atmosphere = AtmosphereProperties::at(altitude);
        Self {
            altitude,
            density: atmosphere.air_density,
            speed_of_sound: atmosphere.speed_of_sound,
            gravity,
        }
    }
}
