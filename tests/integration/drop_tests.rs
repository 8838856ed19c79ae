use approx::assert_relative_eq;
use tumble::{
    components::index, AtmosphereProperties, BodyType, IntegrationMethod, Simulation,
};

use crate::common::{assert_result_finite, assert_within_percent, drop_config};

#[test]
fn test_sphere_reaches_terminal_velocity() {
    let config = drop_config(
        BodyType::Blueberry,
        9000.0,
        30.0,
        0.01,
        IntegrationMethod::RungeKutta4,
    );
    let simulation = Simulation::new(config).unwrap();
    let result = simulation.run();
    assert_result_finite(&result);

    let final_state = result.final_state();
    let density = AtmosphereProperties::at(final_state.altitude()).air_density;
    let terminal_velocity = simulation
        .body()
        .analytic_terminal_velocity(density, simulation.environment().gravity)
        .unwrap();

    assert_within_percent(final_state.w, terminal_velocity, 1.0);
    assert_relative_eq!(final_state.u, 0.0, epsilon = 1e-9);
    assert_relative_eq!(final_state.v, 0.0, epsilon = 1e-9);
}

#[test]
fn test_falling_sphere_stays_on_vertical() {
    let config = drop_config(
        BodyType::BowlingBall,
        5000.0,
        10.0,
        0.01,
        IntegrationMethod::RungeKutta4,
    );
    let result = Simulation::new(config).unwrap().run();
    assert_result_finite(&result);

    let final_state = result.final_state();
    assert_relative_eq!(final_state.north, 0.0, epsilon = 1e-6);
    assert_relative_eq!(final_state.east, 0.0, epsilon = 1e-6);
    assert_eq!(final_state.phi, 0.0);
    assert_eq!(final_state.theta, 0.0);
    assert_eq!(final_state.psi, 0.0);

    // Descent rate never decreases while drag builds up
    let w: Vec<f64> = result.history.row(index::W).collect();
    assert!(w.windows(2).all(|pair| pair[1] >= pair[0]));
    assert!(final_state.altitude() < 5000.0);
}

#[test]
fn test_drag_slows_descent_below_free_fall() {
    let config = drop_config(
        BodyType::Musketball50Cal,
        2000.0,
        5.0,
        0.01,
        IntegrationMethod::RungeKutta4,
    );
    let result = Simulation::new(config).unwrap().run();
    let final_state = result.final_state();

    let free_fall_speed = 9.81 * 5.0;
    assert!(final_state.w < free_fall_speed);
    assert!(final_state.w > 0.5 * free_fall_speed);
    assert!(final_state.altitude() > 2000.0 - 0.5 * 9.81 * 25.0);
}

#[test]
fn test_higher_order_methods_are_more_accurate() {
    let reference = Simulation::new(drop_config(
        BodyType::Blueberry,
        9000.0,
        5.0,
        0.001,
        IntegrationMethod::RungeKutta4,
    ))
    .unwrap()
    .run()
    .final_state();

    let errors: Vec<f64> = IntegrationMethod::ALL
        .iter()
        .map(|method| {
            let config = drop_config(BodyType::Blueberry, 9000.0, 5.0, 0.1, *method);
            let final_state = Simulation::new(config).unwrap().run().final_state();
            (final_state.w - reference.w).abs()
        })
        .collect();

    assert!(errors[0] > errors[1], "euler {} ab2 {}", errors[0], errors[1]);
    assert!(errors[1] > errors[2], "ab2 {} rk4 {}", errors[1], errors[2]);
}
