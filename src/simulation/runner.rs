use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::config::{time_grid, SimulationConfig};
use super::report::SimulationReport;
use crate::components::{AirData, BodyModel, BodyState, StateHistory, StateVector, STATE_DIM};
use crate::resources::EnvironmentModel;
use crate::systems::aerodynamics::air_data_from_state;
use crate::systems::physics::{flat_earth_eom, Dynamics, IntegrationMethod};
use crate::utils::errors::Result;

/// Flat-Earth equations of motion bound to one body and environment.
#[derive(Debug, Clone, Copy)]
pub struct FlatEarthDynamics<'a> {
    body: &'a BodyModel,
    environment: &'a EnvironmentModel,
}

impl<'a> FlatEarthDynamics<'a> {
    pub fn new(body: &'a BodyModel, environment: &'a EnvironmentModel) -> Self {
        Self { body, environment }
    }
}

impl Dynamics<STATE_DIM> for FlatEarthDynamics<'_> {
    fn derivative(&self, t: f64, x: &StateVector) -> StateVector {
        flat_earth_eom(t, x, self.body, self.environment)
    }
}

/// A validated scenario with its body built and time grid laid out.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    body: BodyModel,
    environment: EnvironmentModel,
    times: Vec<f64>,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let body = BodyModel::new(&config.body)?;
        Self::with_body(config, body)
    }

    /// Uses an already built body instead of the one named in the config.
    pub fn with_body(config: SimulationConfig, body: BodyModel) -> Result<Self> {
        config.validate()?;
        let times = time_grid(config.start_time, config.end_time, config.time_step)?;
        let environment =
            EnvironmentModel::with_gravity(config.initial_state.altitude(), config.gravity);

        debug!(
            "Prepared '{}' with body '{}': {} samples, density {:.4} kg/m³ at release",
            config.name,
            body.name,
            times.len(),
            environment.density
        );

        Ok(Self {
            config,
            body,
            environment,
            times,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn body(&self) -> &BodyModel {
        &self.body
    }

    pub fn environment(&self) -> &EnvironmentModel {
        &self.environment
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn integrator(&self) -> IntegrationMethod {
        self.config.integrator
    }

    /// Integrates the scenario over its whole time grid.
    pub fn run(&self) -> SimulationResult {
        info!(
            "Running '{}' ({}, {}, h = {} s, {} samples)",
            self.config.name,
            self.body.name,
            self.config.integrator.name(),
            self.config.time_step,
            self.times.len()
        );

        let mut history =
            StateHistory::new(self.config.initial_state.to_vector(), self.times.len());
        let dynamics = FlatEarthDynamics::new(&self.body, &self.environment);
        self.config
            .integrator
            .integrate(&dynamics, &self.times, &mut history, self.config.time_step);

        if let Some(sample) = history.first_non_finite() {
            warn!(
                "'{}' produced non-finite state at t = {} s (sample {})",
                self.config.name, self.times[sample], sample
            );
        }

        let result = SimulationResult {
            name: self.config.name.clone(),
            body: self.body.name.clone(),
            integrator: self.config.integrator,
            times: self.times.clone(),
            history,
        };

        let final_state = result.final_state();
        info!(
            "Finished '{}': altitude {:.1} m, airspeed {:.2} m/s",
            self.config.name,
            final_state.altitude(),
            final_state.velocity().norm()
        );
        result
    }
}

/// Time grid and state history of one finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub name: String,
    pub body: String,
    pub integrator: IntegrationMethod,
    pub times: Vec<f64>,
    pub history: StateHistory<STATE_DIM>,
}

impl SimulationResult {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn state_at(&self, sample: usize) -> Option<BodyState> {
        self.history
            .columns()
            .get(sample)
            .map(BodyState::from_vector)
    }

    pub fn final_state(&self) -> BodyState {
        BodyState::from_vector(self.history.last())
    }

    /// Airspeed, angles and Mach number at every sample.
    pub fn air_data(&self) -> Vec<AirData> {
        self.history
            .columns()
            .iter()
            .map(air_data_from_state)
            .collect()
    }

    pub fn report(&self) -> SimulationReport {
        let states: Vec<BodyState> = self
            .history
            .columns()
            .iter()
            .map(BodyState::from_vector)
            .collect();
        let air_data = self.air_data();

        SimulationReport {
            name: self.name.clone(),
            body: self.body.clone(),
            integrator: self.integrator.name().to_string(),
            time: self.times.clone(),
            north: states.iter().map(|s| s.north).collect(),
            east: states.iter().map(|s| s.east).collect(),
            altitude: states.iter().map(|s| s.altitude()).collect(),
            roll: states.iter().map(|s| s.phi).collect(),
            pitch: states.iter().map(|s| s.theta).collect(),
            yaw: states.iter().map(|s| s.psi).collect(),
            airspeed: air_data.iter().map(|a| a.true_airspeed).collect(),
            mach: air_data.iter().map(|a| a.mach).collect(),
            alpha: air_data.iter().map(|a| a.alpha).collect(),
            beta: air_data.iter().map(|a| a.beta).collect(),
        }
    }
}

/// Runs independent scenarios in parallel. Each run owns its own history.
pub fn run_batch(configs: &[SimulationConfig]) -> Vec<Result<SimulationResult>> {
    configs
        .par_iter()
        .map(|config| Simulation::new(config.clone()).map(|simulation| simulation.run()))
        .collect()
}
