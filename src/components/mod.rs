pub mod air_data;
pub mod body;
pub mod history;
pub mod state;

pub use air_data::AirData;
pub use body::{
    catalog, sphere_properties, BodyAeroCoefficients, BodyGeometry, BodyModel, BodySource,
    BodyType, ConfigError, DampingDerivatives, DragModel, DragModelKind, InertiaCoefficients,
    MassModel, RawBodyConfig, SphereProperties, REQUIRED_PARAMETERS,
};
pub use history::StateHistory;
pub use state::{index, BodyState, StateVector, STATE_DIM};
