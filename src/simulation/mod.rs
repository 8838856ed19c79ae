mod config;
mod report;
mod runner;

pub use config::{time_grid, SimulationConfig};
pub use report::SimulationReport;
pub use runner::{run_batch, FlatEarthDynamics, Simulation, SimulationResult};
