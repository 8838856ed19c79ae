mod eom;
mod integrator;

pub use eom::flat_earth_eom;
pub use integrator::{
    AdamsBashforth2, Dynamics, ForwardEuler, IntegrationMethod, Integrator, RungeKutta4,
};
