use nalgebra::Vector3;

use crate::components::{index, BodyModel, StateVector};
use crate::resources::EnvironmentModel;
use crate::systems::aerodynamics::{air_data_from_state, calculate_aerodynamic_forces_moments};
use crate::utils::{body_to_ned_dcm, gravity_in_body};

/// Time derivative of the 12-element flat-Earth state.
///
/// The atmosphere is evaluated at the instantaneous altitude `-x[DOWN]`; only
/// `environment.gravity` is read from the environment. The function keeps no state,
/// so repeated calls with identical inputs return identical outputs.
///
/// The Euler-angle kinematics divide by `cos θ` and are undefined at θ = ±90°.
pub fn flat_earth_eom(
    _t: f64,
    x: &StateVector,
    body: &BodyModel,
    environment: &EnvironmentModel,
) -> StateVector {
    let velocity = Vector3::new(x[index::U], x[index::V], x[index::W]);
    let omega = Vector3::new(x[index::P], x[index::Q], x[index::R]);
    let (u, v, w) = (velocity.x, velocity.y, velocity.z);
    let (p, q, r) = (omega.x, omega.y, omega.z);
    let (phi, theta, psi) = (x[index::PHI], x[index::THETA], x[index::PSI]);

    let body_to_ned = body_to_ned_dcm(phi, theta, psi);
    let gravity = gravity_in_body(&body_to_ned, environment.gravity);

    let air_data = air_data_from_state(x);
    let (forces, moments) = calculate_aerodynamic_forces_moments(body, &air_data, &omega);

    let mut dx = StateVector::zeros();

    // Translational dynamics in the rotating body frame
    let m = body.mass.mass;
    dx[index::U] = forces.x / m + gravity.x - w * q + v * r;
    dx[index::V] = forces.y / m + gravity.y - u * r + w * p;
    dx[index::W] = forces.z / m + gravity.z - v * p + u * q;

    // Rotational dynamics
    let c = &body.mass.coefficients;
    let (l, m_pitch, n) = (moments.x, moments.y, moments.z);
    dx[index::P] = (c.c1 * r + c.c2 * p) * q + c.c3 * l + c.c4 * n;
    dx[index::Q] = c.c5 * p * r - c.c6 * (p * p - r * r) + c.c7 * m_pitch;
    dx[index::R] = (c.c8 * p - c.c2 * r) * q + c.c4 * l + c.c9 * n;

    // Euler angle kinematics
    let (s_phi, c_phi) = phi.sin_cos();
    let (c_theta, t_theta) = (theta.cos(), theta.tan());
    dx[index::PHI] = p + s_phi * t_theta * q + c_phi * t_theta * r;
    dx[index::THETA] = c_phi * q - s_phi * r;
    dx[index::PSI] = (s_phi * q + c_phi * r) / c_theta;

    // Navigation
    let ned_rates = body_to_ned * velocity;
    dx.fixed_rows_mut::<3>(index::NORTH).copy_from(&ned_rates);

    dx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{catalog, BodyState, BodyType, STATE_DIM};
    use approx::assert_relative_eq;

    #[test]
    fn test_rest_state_only_falls() {
        let body = BodyModel::from_programmed(&BodyType::BowlingBall).unwrap();
        let environment = EnvironmentModel::default();
        let x = BodyState::at_altitude(1000.0).to_vector();

        let dx = flat_earth_eom(0.0, &x, &body, &environment);

        for i in 0..STATE_DIM {
            if i == index::W {
                assert_eq!(dx[i], environment.gravity);
            } else {
                assert_eq!(dx[i], 0.0, "component {} should be zero", i);
            }
        }
    }

    #[test]
    fn test_gravity_resolves_through_attitude() {
        let body = catalog::nasa_atmos02_brick().unwrap();
        let environment = EnvironmentModel::with_gravity(0.0, 9.81);
        let mut state = BodyState::at_altitude(500.0);
        state.theta = 0.3;
        state.phi = -0.2;

        let dx = flat_earth_eom(0.0, &state.to_vector(), &body, &environment);

        assert_relative_eq!(dx[index::U], -9.81 * 0.3_f64.sin(), epsilon = 1e-12);
        assert_relative_eq!(
            dx[index::V],
            9.81 * (-0.2_f64).sin() * 0.3_f64.cos(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            dx[index::W],
            9.81 * (-0.2_f64).cos() * 0.3_f64.cos(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_identical_inputs_give_identical_outputs() {
        let body = catalog::nasa_atmos03_brick().unwrap();
        let environment = EnvironmentModel::default();
        let state = BodyState {
            u: 12.0,
            v: -3.0,
            w: 40.0,
            p: 1.5,
            q: -0.7,
            r: 2.2,
            phi: 0.1,
            theta: -0.4,
            psi: 1.2,
            north: 10.0,
            east: -5.0,
            down: -3000.0,
        };
        let x = state.to_vector();

        let first = flat_earth_eom(1.0, &x, &body, &environment);
        let second = flat_earth_eom(1.0, &x, &body, &environment);

        for i in 0..STATE_DIM {
            assert_eq!(first[i].to_bits(), second[i].to_bits());
        }
    }

    #[test]
    fn test_position_rates_follow_heading() {
        let body = BodyModel::from_programmed(&BodyType::Blueberry).unwrap();
        let environment = EnvironmentModel::default();
        let mut state = BodyState::at_altitude(0.0);
        state.u = 10.0;
        state.psi = std::f64::consts::FRAC_PI_2;

        let dx = flat_earth_eom(0.0, &state.to_vector(), &body, &environment);

        assert_relative_eq!(dx[index::NORTH], 0.0, epsilon = 1e-12);
        assert_relative_eq!(dx[index::EAST], 10.0, epsilon = 1e-12);
        assert_relative_eq!(dx[index::DOWN], 0.0, epsilon = 1e-12);
        assert!(dx[index::U] < 0.0);
    }

    #[test]
    fn test_torque_free_rotation_conserves_energy_rate() {
        // d/dt (½ ωᵀJω) = ωᵀJω̇ must vanish without applied moments
        let body = catalog::nasa_atmos02_brick().unwrap();
        let environment = EnvironmentModel::default();
        let mut state = BodyState::at_altitude(1000.0);
        state.p = 3.0;
        state.q = -1.0;
        state.r = 0.5;

        let dx = flat_earth_eom(0.0, &state.to_vector(), &body, &environment);
        let omega = state.angular_rates();
        let omega_dot = Vector3::new(dx[index::P], dx[index::Q], dx[index::R]);

        let energy_rate = omega.dot(&(body.mass.inertia * omega_dot));
        assert_relative_eq!(energy_rate, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_product_of_inertia_coupling() {
        let mut raw = catalog::nasa_atmos03_brick().unwrap().to_raw_config();
        raw.Jxz_b_kgm2 = 0.4 * raw.Jxx_b_kgm2;
        let body = BodyModel::from_raw_config(raw).unwrap();
        let environment = EnvironmentModel::default();
        let state = BodyState {
            u: 25.0,
            v: 10.0,
            w: 12.0,
            p: 1.3,
            q: -0.6,
            r: 0.9,
            down: -2000.0,
            ..Default::default()
        };
        let x = state.to_vector();

        let dx = flat_earth_eom(0.0, &x, &body, &environment);

        let omega = state.angular_rates();
        let (_, moments) =
            calculate_aerodynamic_forces_moments(&body, &air_data_from_state(&x), &omega);
        assert!(moments.norm() > 0.0);

        let inertia = body.mass.inertia;
        let expected = inertia.try_inverse().unwrap() * (moments - omega.cross(&(inertia * omega)));
        assert_relative_eq!(dx[index::P], expected.x, max_relative = 1e-9);
        assert_relative_eq!(dx[index::Q], expected.y, max_relative = 1e-9);
        assert_relative_eq!(dx[index::R], expected.z, max_relative = 1e-9);
    }
}
