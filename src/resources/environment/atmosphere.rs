use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::utils::constants::{
    AIR_GAS_CONSTANT, AIR_MOLAR_MASS, AIR_MOLECULE_DIAMETER, AIR_PRANDTL_NUMBER,
    AIR_SPECIFIC_HEAT, BOLTZMANN_CONSTANT, HEAT_CAPACITY_RATIO, ISA_LAPSE_RATE,
    ISA_SEA_LEVEL_PRESSURE, ISA_SEA_LEVEL_TEMP, STANDARD_GRAVITY, STRATOSPHERE_TEMP,
    SUTHERLAND_BETA, SUTHERLAND_TEMP, TROPOPAUSE_ALTITUDE, UNIVERSAL_GAS_CONSTANT,
};

/// Thermophysical properties of the standard atmosphere at one geometric altitude.
///
/// Two layers are modelled: a linear lapse-rate troposphere below 11 km and an
/// isothermal lower stratosphere above it. Every field is a closed-form function
/// of temperature and pressure, so `at` never fails for finite input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereProperties {
    /// Static temperature (K).
    pub temperature: f64,
    /// Static pressure (Pa).
    pub pressure: f64,
    /// Air density (kg/m³).
    pub air_density: f64,
    /// Molar volume (m³/mol).
    pub air_molar_volume: f64,
    /// Molar density, density over molar mass (mol/m³).
    pub number_density: f64,
    /// Molecules per unit volume (1/m³).
    pub air_number_density: f64,
    /// Pressure scale height (m).
    pub pressure_scale_height: f64,
    /// Mean particle speed (m/s).
    pub particles_mean_speed: f64,
    /// Mean free path between collisions (m).
    pub particles_mean_free_path: f64,
    /// Collision frequency (1/s).
    pub particles_collision_frequency: f64,
    /// Speed of sound (m/s).
    pub speed_of_sound: f64,
    /// Dynamic viscosity from Sutherland's law (Pa·s).
    pub dynamic_viscosity: f64,
    /// Kinematic viscosity (m²/s).
    pub kinematic_viscosity: f64,
    /// Thermal conductivity (W/(m·K)).
    pub thermal_conductivity: f64,
}

impl AtmosphereProperties {
    /// Computes the atmosphere at `altitude` metres above sea level.
    pub fn at(altitude: f64) -> Self {
        let (temperature, pressure) = temperature_and_pressure(altitude);

        let air_density = pressure / (AIR_GAS_CONSTANT * temperature);
        let particles_mean_speed =
            ((8.0 * BOLTZMANN_CONSTANT * temperature) / (AIR_MOLAR_MASS * 1e3)).sqrt() / PI.sqrt();
        let particles_mean_free_path = BOLTZMANN_CONSTANT * temperature
            / (2.0f64.sqrt() * PI * AIR_MOLECULE_DIAMETER.powi(2) * pressure);
        let dynamic_viscosity =
            SUTHERLAND_BETA * temperature.powf(1.5) / (temperature + SUTHERLAND_TEMP);

        Self {
            temperature,
            pressure,
            air_density,
            air_molar_volume: UNIVERSAL_GAS_CONSTANT * temperature / pressure,
            number_density: air_density / AIR_MOLAR_MASS,
            air_number_density: pressure / (BOLTZMANN_CONSTANT * temperature),
            pressure_scale_height: AIR_GAS_CONSTANT * temperature / STANDARD_GRAVITY,
            particles_mean_speed,
            particles_mean_free_path,
            particles_collision_frequency: particles_mean_speed / particles_mean_free_path,
            speed_of_sound: (HEAT_CAPACITY_RATIO * AIR_GAS_CONSTANT * temperature).sqrt(),
            dynamic_viscosity,
            kinematic_viscosity: dynamic_viscosity / air_density,
            thermal_conductivity: dynamic_viscosity * AIR_SPECIFIC_HEAT / AIR_PRANDTL_NUMBER,
        }
    }
}

fn troposphere_pressure(altitude: f64) -> f64 {
    let exponent = STANDARD_GRAVITY / (AIR_GAS_CONSTANT * ISA_LAPSE_RATE);
    ISA_SEA_LEVEL_PRESSURE * (1.0 - ISA_LAPSE_RATE * altitude / ISA_SEA_LEVEL_TEMP).powf(exponent)
}

fn temperature_and_pressure(altitude: f64) -> (f64, f64) {
    if altitude < TROPOPAUSE_ALTITUDE {
        let temperature = ISA_SEA_LEVEL_TEMP - ISA_LAPSE_RATE * altitude;
        (temperature, troposphere_pressure(altitude))
    } else {
        // Isothermal layer, decaying from the tropopause pressure
        let base_pressure = troposphere_pressure(TROPOPAUSE_ALTITUDE);
        let pressure = base_pressure
            * (-STANDARD_GRAVITY * (altitude - TROPOPAUSE_ALTITUDE)
                / (AIR_GAS_CONSTANT * STRATOSPHERE_TEMP))
                .exp();
        (STRATOSPHERE_TEMP, pressure)
    }
}
