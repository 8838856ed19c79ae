pub mod environment;

pub use environment::{AtmosphereProperties, EnvironmentModel};
