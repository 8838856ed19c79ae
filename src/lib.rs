pub mod components;
pub mod resources;
pub mod simulation;
pub mod systems;
pub mod utils;

pub use components::{BodyModel, BodySource, BodyState, BodyType, StateHistory, StateVector};
pub use resources::{AtmosphereProperties, EnvironmentModel};
pub use simulation::{run_batch, Simulation, SimulationConfig, SimulationReport, SimulationResult};
pub use systems::{flat_earth_eom, IntegrationMethod};
pub use utils::errors::{Result, SimError};
