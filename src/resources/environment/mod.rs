mod atmosphere;
mod environment;

pub use atmosphere::AtmosphereProperties;
pub use environment::EnvironmentModel;
