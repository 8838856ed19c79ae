use crate::utils::constants::MIN_AIRSPEED_THRESHOLD;

/// Roll moment coefficient from roll and yaw rate damping.
///
/// Rates are non-dimensionalised by `span / (2 V)`. Returns exactly zero below
/// [`MIN_AIRSPEED_THRESHOLD`].
pub fn roll_moment_coefficient(
    c_l_p: f64,
    c_l_r: f64,
    p: f64,
    r: f64,
    span: f64,
    airspeed: f64,
) -> f64 {
    if airspeed.abs() < MIN_AIRSPEED_THRESHOLD {
        return 0.0;
    }
    c_l_p * p * span / (2.0 * airspeed) + c_l_r * r * span / (2.0 * airspeed)
}

/// Pitch moment coefficient from pitch rate damping, scaled by `chord / (2 V)`.
pub fn pitch_moment_coefficient(c_m_q: f64, q: f64, chord: f64, airspeed: f64) -> f64 {
    if airspeed.abs() < MIN_AIRSPEED_THRESHOLD {
        return 0.0;
    }
    c_m_q * q * chord / (2.0 * airspeed)
}

/// Yaw moment coefficient from roll and yaw rate damping.
pub fn yaw_moment_coefficient(
    c_n_p: f64,
    c_n_r: f64,
    p: f64,
    r: f64,
    span: f64,
    airspeed: f64,
) -> f64 {
    if airspeed.abs() < MIN_AIRSPEED_THRESHOLD {
        return 0.0;
    }
    c_n_p * p * span / (2.0 * airspeed) + c_n_r * r * span / (2.0 * airspeed)
}
