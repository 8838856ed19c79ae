use pretty_assertions::assert_eq;
use tempfile::TempDir;
use tumble::{
    components::DragModel, run_batch, BodySource, BodyType, IntegrationMethod, Simulation,
    SimulationConfig, SimulationReport,
};

use crate::common::{assert_result_finite, assert_state_finite, scenario_path};

const SCENARIOS: [&str; 3] = [
    "damped_brick.yaml",
    "blueberry_drop.yaml",
    "steel_sphere_drop.yaml",
];

#[test]
fn test_bundled_scenarios_load() {
    for name in SCENARIOS {
        let config = SimulationConfig::load(scenario_path(name)).unwrap();
        assert!(config.time_step > 0.0, "{} has no time step", name);
        assert!(config.end_time > config.start_time);
    }
}

#[test]
fn test_damped_brick_scenario_matches_default() {
    let loaded = SimulationConfig::load(scenario_path("damped_brick.yaml")).unwrap();
    let default = SimulationConfig::default();

    assert_eq!(loaded.name, default.name);
    assert_eq!(loaded.body, default.body);
    assert_eq!(loaded.integrator, default.integrator);
    assert_eq!(loaded.time_step, default.time_step);
    assert_eq!(loaded.end_time, default.end_time);
    assert!((loaded.initial_state.altitude() - default.initial_state.altitude()).abs() < 1.0);
    assert!((loaded.initial_state.r - default.initial_state.r).abs() < 1e-12);
}

#[test]
fn test_body_file_resolves_next_to_scenario() {
    let config = SimulationConfig::load(scenario_path("steel_sphere_drop.yaml")).unwrap();
    let expected = scenario_path("bodies/steel_sphere.yaml");
    assert_eq!(
        config.body,
        BodySource::File {
            file: expected.clone()
        }
    );
    assert_eq!(config.integrator, IntegrationMethod::AdamsBashforth2);

    let simulation = Simulation::new(config).unwrap();
    assert_eq!(simulation.body().name, "steel_sphere");
    assert_eq!(
        simulation.body().body_type,
        BodyType::Custom("steel_sphere".to_string())
    );
    assert_eq!(simulation.body().aero_coef.drag, DragModel::SphereMach);
}

#[test]
fn test_steel_sphere_trajectory_bends_down() {
    let config = SimulationConfig::load(scenario_path("steel_sphere_drop.yaml")).unwrap();
    let result = Simulation::new(config).unwrap().run();
    assert_result_finite(&result);

    let final_state = result.final_state();
    assert_state_finite(&final_state);
    assert!(final_state.north > 0.0);
    assert!(final_state.altitude() < 3000.0);

    let air_data = result.air_data();
    assert_eq!(air_data.len(), result.len());
    assert!(air_data[0].mach > 0.4 && air_data[0].mach < 0.5);
    // Flight path rotates from horizontal toward the vertical
    assert!(air_data[air_data.len() - 1].alpha > air_data[0].alpha);
}

#[test]
fn test_report_written_as_json() {
    let mut config = SimulationConfig::load(scenario_path("blueberry_drop.yaml")).unwrap();
    config.end_time = 1.0;
    let result = Simulation::new(config).unwrap().run();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.json");
    result.report().save(&path).unwrap();

    let report = SimulationReport::load(&path).unwrap();
    assert_eq!(report.name, "blueberry_drop");
    assert_eq!(report.body, "A Blueberry");
    assert_eq!(report.integrator, "runge-kutta-4");
    assert_eq!(report.len(), 101);
    assert_eq!(report.altitude[0], 9000.0);
    assert!(report.altitude[100] < 9000.0);
}

#[test]
fn test_batch_runs_every_scenario() {
    let configs: Vec<SimulationConfig> = SCENARIOS
        .iter()
        .map(|name| {
            let mut config = SimulationConfig::load(scenario_path(name)).unwrap();
            config.end_time = config.start_time + 1.0;
            config
        })
        .collect();

    let results = run_batch(&configs);
    assert_eq!(results.len(), SCENARIOS.len());
    for (config, result) in configs.iter().zip(results) {
        let result = result.unwrap();
        assert_eq!(result.name, config.name);
        assert_result_finite(&result);
    }
}

#[test]
fn test_missing_body_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scenario.yaml");
    std::fs::write(
        &path,
        "body:\n  file: nowhere.yaml\nend_time: 1.0\ntime_step: 0.1\n",
    )
    .unwrap();

    let config = SimulationConfig::load(&path).unwrap();
    assert!(matches!(
        Simulation::new(config),
        Err(tumble::SimError::Config(_))
    ));
}
