use nalgebra::Vector3;

use super::damping::{pitch_moment_coefficient, roll_moment_coefficient, yaw_moment_coefficient};
use crate::components::{AirData, BodyModel};
use crate::utils::wind_to_body_dcm;

/// Pure function computing body-frame aerodynamic forces and moments.
///
/// Drag acts along the negative wind x-axis; side force and lift are zero. Moments come
/// from the rate damping derivatives only.
pub fn calculate_aerodynamic_forces_moments(
    body: &BodyModel,
    air_data: &AirData,
    angular_velocity: &Vector3<f64>,
) -> (Vector3<f64>, Vector3<f64>) {
    let geometry = &body.geometry;
    let damping = &body.aero_coef.damping;
    let q_dyn = air_data.dynamic_pressure;
    let airspeed = air_data.true_airspeed;
    let (p, q, r) = (angular_velocity.x, angular_velocity.y, angular_velocity.z);

    // --- Coefficients ---
    let c_d = body.aero_coef.drag.coefficient(air_data.mach);
    let c_l_roll =
        roll_moment_coefficient(damping.c_l_p, damping.c_l_r, p, r, geometry.span, airspeed);
    let c_m = pitch_moment_coefficient(damping.c_m_q, q, geometry.chord, airspeed);
    let c_n = yaw_moment_coefficient(damping.c_n_p, damping.c_n_r, p, r, geometry.span, airspeed);

    // --- Forces (wind axes, then body) ---
    let drag = c_d * q_dyn * geometry.reference_area;
    let forces_wind = Vector3::new(drag, 0.0, 0.0);
    let forces_body = -(wind_to_body_dcm(air_data.alpha, air_data.beta) * forces_wind);

    // --- Moments (body axes) ---
    let moments_body = Vector3::new(
        c_l_roll * q_dyn * geometry.reference_area * geometry.span,
        c_m * q_dyn * geometry.reference_area * geometry.chord,
        c_n * q_dyn * geometry.reference_area * geometry.span,
    );

    (forces_body, moments_body)
}
