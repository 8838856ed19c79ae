use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use super::aero_coef::{BodyAeroCoefficients, DampingDerivatives, DragModel};
use super::geometry::BodyGeometry;
use super::mass::MassModel;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Missing body parameter: {0}")]
    MissingParameter(String),
    #[error("Degenerate inertia: {0}")]
    DegenerateInertia(String),
    #[error("Invalid body configuration: {0}")]
    ValidationError(String),
}

/// Selects the drag law in a body file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragModelKind {
    #[default]
    Constant,
    SphereMach,
}

/// Flat body description as stored in YAML files, keyed like the parameter maps.
#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBodyConfig {
    /// Body identification
    pub name: String,

    /// Mass properties
    pub m_kg: f64,
    pub Jxx_b_kgm2: f64,
    pub Jyy_b_kgm2: f64,
    pub Jzz_b_kgm2: f64,
    pub Jxz_b_kgm2: f64,

    /// Reference geometry
    pub Aref_m2: f64,
    pub b_m: f64,
    pub c_m: f64,

    /// Drag
    pub CD_approx: f64,
    #[serde(default)]
    pub drag_model: DragModelKind,

    /// Damping derivatives
    pub Clp: f64,
    pub Clr: f64,
    pub Cmq: f64,
    pub Cnp: f64,
    pub Cnr: f64,
}

/// Every key a parameter map must carry.
pub const REQUIRED_PARAMETERS: [&str; 14] = [
    "m_kg",
    "Jxx_b_kgm2",
    "Jyy_b_kgm2",
    "Jzz_b_kgm2",
    "Jxz_b_kgm2",
    "Aref_m2",
    "b_m",
    "c_m",
    "CD_approx",
    "Clp",
    "Clr",
    "Cmq",
    "Cnp",
    "Cnr",
];

fn required(parameters: &HashMap<String, f64>, key: &str) -> Result<f64, ConfigError> {
    parameters
        .get(key)
        .copied()
        .ok_or_else(|| ConfigError::MissingParameter(key.to_string()))
}

impl RawBodyConfig {
    /// Builds a raw config from a named parameter map, failing on the first absent key.
    pub fn from_parameters(
        name: &str,
        parameters: &HashMap<String, f64>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            name: name.to_string(),
            m_kg: required(parameters, "m_kg")?,
            Jxx_b_kgm2: required(parameters, "Jxx_b_kgm2")?,
            Jyy_b_kgm2: required(parameters, "Jyy_b_kgm2")?,
            Jzz_b_kgm2: required(parameters, "Jzz_b_kgm2")?,
            Jxz_b_kgm2: required(parameters, "Jxz_b_kgm2")?,
            Aref_m2: required(parameters, "Aref_m2")?,
            b_m: required(parameters, "b_m")?,
            c_m: required(parameters, "c_m")?,
            CD_approx: required(parameters, "CD_approx")?,
            drag_model: DragModelKind::Constant,
            Clp: required(parameters, "Clp")?,
            Clr: required(parameters, "Clr")?,
            Cmq: required(parameters, "Cmq")?,
            Cnp: required(parameters, "Cnp")?,
            Cnr: required(parameters, "Cnr")?,
        })
    }

    pub fn to_parameters(&self) -> HashMap<String, f64> {
        [
            ("m_kg", self.m_kg),
            ("Jxx_b_kgm2", self.Jxx_b_kgm2),
            ("Jyy_b_kgm2", self.Jyy_b_kgm2),
            ("Jzz_b_kgm2", self.Jzz_b_kgm2),
            ("Jxz_b_kgm2", self.Jxz_b_kgm2),
            ("Aref_m2", self.Aref_m2),
            ("b_m", self.b_m),
            ("c_m", self.c_m),
            ("CD_approx", self.CD_approx),
            ("Clp", self.Clp),
            ("Clr", self.Clr),
            ("Cmq", self.Cmq),
            ("Cnp", self.Cnp),
            ("Cnr", self.Cnr),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
    }

    pub fn mass_model(&self) -> Result<MassModel, ConfigError> {
        MassModel::new(
            self.m_kg,
            self.Jxx_b_kgm2,
            self.Jyy_b_kgm2,
            self.Jzz_b_kgm2,
            self.Jxz_b_kgm2,
        )
    }

    pub fn geometry(&self) -> Result<BodyGeometry, ConfigError> {
        if !(self.Aref_m2.is_finite() && self.Aref_m2 > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "Aref_m2 must be positive and finite, got {}",
                self.Aref_m2
            )));
        }
        for (key, value) in [("b_m", self.b_m), ("c_m", self.c_m)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{key} must be non-negative and finite, got {value}"
                )));
            }
        }
        Ok(BodyGeometry::new(self.Aref_m2, self.b_m, self.c_m))
    }

    pub fn aero_coefficients(&self) -> BodyAeroCoefficients {
        let drag = match self.drag_model {
            DragModelKind::Constant => DragModel::Constant(self.CD_approx),
            DragModelKind::SphereMach => DragModel::SphereMach,
        };
        BodyAeroCoefficients::new(
            drag,
            DampingDerivatives::new(self.Clp, self.Clr, self.Cmq, self.Cnp, self.Cnr),
        )
    }
}
