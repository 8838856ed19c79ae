// Standard atmosphere (two-layer approximation)
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8.314462618; // J/(mol·K)
pub const AIR_MOLAR_MASS: f64 = 0.0289644; // kg/mol
pub const AIR_GAS_CONSTANT: f64 = UNIVERSAL_GAS_CONSTANT / AIR_MOLAR_MASS; // J/(kg·K)
pub const STANDARD_GRAVITY: f64 = 9.80665; // m/s^2
pub const ISA_SEA_LEVEL_TEMP: f64 = 288.15; // K
pub const ISA_SEA_LEVEL_PRESSURE: f64 = 101325.0; // Pa
pub const ISA_LAPSE_RATE: f64 = 0.0065; // K/m
pub const TROPOPAUSE_ALTITUDE: f64 = 11000.0; // m
pub const STRATOSPHERE_TEMP: f64 = 216.65; // K
pub const HEAT_CAPACITY_RATIO: f64 = 1.4;

// Molecular properties of air
pub const BOLTZMANN_CONSTANT: f64 = 1.380649e-23; // J/K
pub const AIR_MOLECULE_DIAMETER: f64 = 3.65e-10; // m
pub const SUTHERLAND_BETA: f64 = 1.458e-6; // kg/(m·s·K^0.5)
pub const SUTHERLAND_TEMP: f64 = 110.4; // K
pub const AIR_SPECIFIC_HEAT: f64 = 1005.0; // J/(kg·K)
pub const AIR_PRANDTL_NUMBER: f64 = 0.72;

/// Gravity used by the equations of motion unless a scenario overrides it.
pub const DEFAULT_GRAVITY: f64 = 9.81; // m/s^2

/// Below this airspeed the damping coefficients are forced to zero.
pub const MIN_AIRSPEED_THRESHOLD: f64 = 1e-6; // m/s

// Unit conversions
pub const INCH_TO_METER: f64 = 0.0254;
pub const FOOT_TO_METER: f64 = 0.304878;
pub const SLUG_TO_KG: f64 = 14.5959;
