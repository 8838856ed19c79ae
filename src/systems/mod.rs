pub mod aerodynamics;
pub mod physics;

pub use aerodynamics::{
    air_data_from_state, calculate_aerodynamic_forces_moments, calculate_air_data,
    sphere_drag_coefficient,
};
pub use physics::{flat_earth_eom, Dynamics, IntegrationMethod, Integrator};
