use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::errors::Result;

/// Column-oriented time series of a finished run, ready for plotting front ends.
///
/// Angles are radians. Mach uses the speed of sound at each sample's altitude.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub name: String,
    pub body: String,
    pub integrator: String,
    pub time: Vec<f64>,
    pub north: Vec<f64>,
    pub east: Vec<f64>,
    pub altitude: Vec<f64>,
    pub roll: Vec<f64>,
    pub pitch: Vec<f64>,
    pub yaw: Vec<f64>,
    pub airspeed: Vec<f64>,
    pub mach: Vec<f64>,
    pub alpha: Vec<f64>,
    pub beta: Vec<f64>,
}

impl SimulationReport {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}
