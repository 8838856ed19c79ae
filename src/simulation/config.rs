use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::{BodySource, BodyState, BodyType, ConfigError};
use crate::systems::IntegrationMethod;
use crate::utils::constants::DEFAULT_GRAVITY;
use crate::utils::errors::{Result, SimError};
use crate::utils::{deg_to_rad, FOOT_TO_METER};

fn default_name() -> String {
    "scenario".to_string()
}

fn default_gravity() -> f64 {
    DEFAULT_GRAVITY
}

/// A single drop or tumble scenario.
///
/// Angles are radians and lengths metres. The initial state uses NED position, so a body
/// released at altitude `h` has `down = -h`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_name")]
    pub name: String,
    pub body: BodySource,
    #[serde(default)]
    pub integrator: IntegrationMethod,
    #[serde(default)]
    pub start_time: f64,
    pub end_time: f64,
    pub time_step: f64,
    #[serde(default = "default_gravity")]
    pub gravity: f64,
    #[serde(default)]
    pub initial_state: BodyState,
}

impl Default for SimulationConfig {
    /// Damped brick released at 30 000 ft with a slight forward drift and a 10/20/30 °/s spin.
    fn default() -> Self {
        let mut initial_state = BodyState::at_altitude(30000.0 * FOOT_TO_METER);
        initial_state.u = 0.001;
        initial_state.p = deg_to_rad(10.0);
        initial_state.q = deg_to_rad(20.0);
        initial_state.r = deg_to_rad(30.0);

        Self {
            name: "damped_brick".to_string(),
            body: BodySource::Programmed {
                preset: BodyType::NasaAtmos03Brick,
            },
            integrator: IntegrationMethod::RungeKutta4,
            start_time: 0.0,
            end_time: 30.0,
            time_step: 0.01,
            gravity: DEFAULT_GRAVITY,
            initial_state,
        }
    }
}

impl SimulationConfig {
    /// Loads a scenario file. A relative body file path is taken relative to the scenario.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let mut config: Self = serde_yaml::from_reader(file)?;

        if let BodySource::File { file } = &mut config.body {
            if let Some(dir) = path.parent().filter(|_| file.is_relative()) {
                let resolved = dir.join(&*file);
                *file = resolved;
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// Checks everything that can be checked without building the body.
    pub fn validate(&self) -> Result<()> {
        time_grid(self.start_time, self.end_time, self.time_step)?;
        if !self.gravity.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "gravity must be finite, got {}",
                self.gravity
            ))
            .into());
        }
        if let Some(component) = self.initial_state.to_vector().iter().position(|v| !v.is_finite())
        {
            return Err(ConfigError::ValidationError(format!(
                "initial state component {} is not finite",
                component
            ))
            .into());
        }
        Ok(())
    }

    /// Number of samples on the time grid, including the initial one.
    pub fn sample_count(&self) -> Result<usize> {
        Ok(time_grid(self.start_time, self.end_time, self.time_step)?.len())
    }
}

/// Fixed-step sample times `t_i = start + i·step` up to and including `end`.
///
/// A small tolerance keeps `end` on the grid when `(end - start) / step` lands just under
/// an integer.
pub fn time_grid(start: f64, end: f64, step: f64) -> Result<Vec<f64>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(SimError::InvalidTimeGrid(format!(
            "time step must be positive and finite, got {}",
            step
        )));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(SimError::InvalidTimeGrid(format!(
            "time span [{}, {}] is not finite",
            start, end
        )));
    }
    if end < start {
        return Err(SimError::InvalidTimeGrid(format!(
            "end time {} precedes start time {}",
            end, start
        )));
    }

    let intervals = ((end - start) / step + 1e-9).floor() as usize;
    Ok((0..=intervals).map(|i| start + i as f64 * step).collect())
}
