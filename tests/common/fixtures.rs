use std::path::PathBuf;

use tumble::{BodySource, BodyState, BodyType, IntegrationMethod, SimulationConfig};

pub fn scenario_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(name)
}

/// A preset body released at rest from `altitude`.
pub fn drop_config(
    preset: BodyType,
    altitude: f64,
    end_time: f64,
    time_step: f64,
    integrator: IntegrationMethod,
) -> SimulationConfig {
    SimulationConfig {
        name: format!("{:?}_drop", preset),
        body: BodySource::Programmed { preset },
        integrator,
        start_time: 0.0,
        end_time,
        time_step,
        initial_state: BodyState::at_altitude(altitude),
        ..Default::default()
    }
}

/// The undamped brick spinning mostly about its minor axis.
pub fn spinning_brick_config(
    end_time: f64,
    time_step: f64,
    integrator: IntegrationMethod,
) -> SimulationConfig {
    let mut config = drop_config(
        BodyType::NasaAtmos02Brick,
        9000.0,
        end_time,
        time_step,
        integrator,
    );
    config.name = "spinning_brick".to_string();
    config.initial_state.p = 3.0;
    config.initial_state.q = 0.3;
    config.initial_state.r = 0.3;
    config
}
