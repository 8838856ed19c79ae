use serde::{Deserialize, Serialize};

/// Air data of the body relative to still air.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirData {
    /// True airspeed (m/s).
    pub true_airspeed: f64,
    /// Angle of attack (α) in radians.
    pub alpha: f64,
    /// Sideslip angle (β) in radians.
    pub beta: f64,
    /// Mach number from the local speed of sound.
    pub mach: f64,
    /// Dynamic pressure ½ρV² (Pa).
    pub dynamic_pressure: f64,
    /// Air density (kg/m³).
    pub density: f64,
    /// Local speed of sound (m/s).
    pub speed_of_sound: f64,
    /// Geometric altitude (m).
    pub altitude: f64,
}

impl Default for AirData {
    /// Zero airspeed at sea level.
    fn default() -> Self {
        Self {
            true_airspeed: 0.0,
            alpha: 0.0,
            beta: 0.0,
            mach: 0.0,
            dynamic_pressure: 0.0,
            density: 1.225,
            speed_of_sound: 340.29,
            altitude: 0.0,
        }
    }
}
