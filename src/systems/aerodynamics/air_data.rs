use nalgebra::Vector3;

use crate::components::{index, AirData, StateVector};
use crate::resources::AtmosphereProperties;

/// Air data for a body-frame velocity in still air.
///
/// The angle guards compare against exactly zero: α is 0 only when both `u` and `w`
/// vanish, β only when both `v` and the airspeed vanish.
pub fn calculate_air_data(
    velocity_body: &Vector3<f64>,
    atmosphere: &AtmosphereProperties,
    altitude: f64,
) -> AirData {
    let airspeed = velocity_body.norm();
    let density = atmosphere.air_density;

    AirData {
        true_airspeed: airspeed,
        alpha: calculate_alpha(velocity_body.x, velocity_body.z),
        beta: calculate_beta(velocity_body.y, airspeed),
        mach: airspeed / atmosphere.speed_of_sound,
        dynamic_pressure: 0.5 * density * airspeed * airspeed,
        density,
        speed_of_sound: atmosphere.speed_of_sound,
        altitude,
    }
}

/// Air data at the altitude encoded in a state vector.
pub fn air_data_from_state(x: &StateVector) -> AirData {
    let altitude = -x[index::DOWN];
    let atmosphere = AtmosphereProperties::at(altitude);
    let velocity = Vector3::new(x[index::U], x[index::V], x[index::W]);
    calculate_air_data(&velocity, &atmosphere, altitude)
}

fn calculate_alpha(u: f64, w: f64) -> f64 {
    if u == 0.0 && w == 0.0 {
        0.0
    } else {
        w.atan2(u)
    }
}

fn calculate_beta(v: f64, airspeed: f64) -> f64 {
    let ratio = if airspeed == 0.0 && v == 0.0 {
        0.0
    } else {
        v / airspeed
    };
    ratio.asin()
}
