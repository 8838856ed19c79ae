use nalgebra::{Matrix3, Vector3};
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Direction cosine matrix taking body-frame vectors into the NED frame.
///
/// Built from the 3-2-1 (yaw, pitch, roll) Euler sequence. The third row is the
/// NED down axis seen from the body, which is what resolves gravity into body axes.
pub fn body_to_ned_dcm(phi: f64, theta: f64, psi: f64) -> Matrix3<f64> {
    let (s_phi, c_phi) = phi.sin_cos();
    let (s_theta, c_theta) = theta.sin_cos();
    let (s_psi, c_psi) = psi.sin_cos();

    Matrix3::new(
        c_theta * c_psi,
        -c_phi * s_psi + s_phi * s_theta * c_psi,
        s_phi * s_psi + c_phi * s_theta * c_psi,
        c_theta * s_psi,
        c_phi * c_psi + s_phi * s_theta * s_psi,
        -s_phi * c_psi + c_phi * s_theta * s_psi,
        -s_theta,
        s_phi * c_theta,
        c_phi * c_theta,
    )
}

/// Direction cosine matrix taking wind-axis vectors into the body frame.
pub fn wind_to_body_dcm(alpha: f64, beta: f64) -> Matrix3<f64> {
    let (s_alpha, c_alpha) = alpha.sin_cos();
    let (s_beta, c_beta) = beta.sin_cos();

    Matrix3::new(
        c_alpha * c_beta,
        -c_alpha * s_beta,
        -s_alpha,
        s_beta,
        c_beta,
        0.0,
        s_alpha * c_beta,
        -s_alpha * s_beta,
        c_alpha,
    )
}

/// Resolve a downward NED acceleration into body axes using the DCM's third row.
pub fn gravity_in_body(body_to_ned: &Matrix3<f64>, gravity: f64) -> Vector3<f64> {
    Vector3::new(
        body_to_ned[(2, 0)] * gravity,
        body_to_ned[(2, 1)] * gravity,
        body_to_ned[(2, 2)] * gravity,
    )
}
