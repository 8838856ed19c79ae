use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::aero_coef::BodyAeroCoefficients;
use super::catalog;
use super::geometry::BodyGeometry;
use super::loader::{ConfigError, RawBodyConfig};
use super::mass::MassModel;
use crate::utils::constants::DEFAULT_GRAVITY;

/// Named body presets, plus `Custom` for anything loaded from a file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyType {
    Musketball50Cal,
    Carronade12Lb,
    Blueberry,
    BowlingBall,
    TsarCannonball,
    NasaAtmos01Sphere,
    NasaAtmos02Brick,
    NasaAtmos03Brick,
    Custom(String),
}

/// Where a body model comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BodySource {
    /// A YAML file holding a [`RawBodyConfig`].
    File { file: PathBuf },
    /// One of the built-in presets.
    Programmed { preset: BodyType },
}

/// Immutable mass, geometry and aerodynamic description of a simulated body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyModel {
    /// Display name of the body.
    pub name: String,
    pub body_type: BodyType,
    pub mass: MassModel,
    pub geometry: BodyGeometry,
    pub aero_coef: BodyAeroCoefficients,
}

impl BodyModel {
    /// Creates a body model from a given source.
    ///
    /// # Arguments
    /// * `source` - A `BodySource` selecting a preset or a YAML file.
    ///
    /// # Returns
    /// A `Result` containing the body or an error if the file fails to load or validate.
    pub fn new(source: &BodySource) -> Result<Self, ConfigError> {
        match source {
            BodySource::Programmed { preset } => Self::from_programmed(preset),
            BodySource::File { file } => Self::from_file(file),
        }
    }

    /// Creates a body model for a predefined type.
    pub fn from_programmed(body_type: &BodyType) -> Result<Self, ConfigError> {
        match body_type {
            BodyType::Musketball50Cal => catalog::musketball_50cal(),
            BodyType::Carronade12Lb => catalog::carronade_12lb(),
            BodyType::Blueberry => catalog::blueberry(),
            BodyType::BowlingBall => catalog::bowling_ball(),
            BodyType::TsarCannonball => catalog::tsar_cannonball(),
            BodyType::NasaAtmos01Sphere => catalog::nasa_atmos01_sphere(),
            BodyType::NasaAtmos02Brick => catalog::nasa_atmos02_brick(),
            BodyType::NasaAtmos03Brick => catalog::nasa_atmos03_brick(),
            BodyType::Custom(name) => Err(ConfigError::ValidationError(format!(
                "custom body '{name}' has no preset, load it from a file"
            ))),
        }
    }

    /// Creates a body model by reading a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        debug!("Loading body model from {:?}", path.as_ref());
        let file_contents = std::fs::read_to_string(path)?;
        let raw_config: RawBodyConfig = serde_yaml::from_str(&file_contents)?;
        Self::from_raw_config(raw_config)
    }

    /// Converts a raw configuration into a validated body model.
    pub fn from_raw_config(raw: RawBodyConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            mass: raw.mass_model()?,
            geometry: raw.geometry()?,
            aero_coef: raw.aero_coefficients(),
            body_type: BodyType::Custom(raw.name.clone()),
            name: raw.name,
        })
    }

    /// Builds a body from a named parameter map such as
    /// `{"m_kg": .., "Jxx_b_kgm2": .., "Aref_m2": .., "Clp": .., ..}`.
    pub fn from_parameters(
        name: &str,
        parameters: &std::collections::HashMap<String, f64>,
    ) -> Result<Self, ConfigError> {
        Self::from_raw_config(RawBodyConfig::from_parameters(name, parameters)?)
    }

    /// Flattens the model back into its file representation.
    pub fn to_raw_config(&self) -> RawBodyConfig {
        use super::aero_coef::DragModel;
        use super::loader::DragModelKind;

        let (c_d, drag_model) = match self.aero_coef.drag {
            DragModel::Constant(c_d) => (c_d, DragModelKind::Constant),
            DragModel::SphereMach => (0.0, DragModelKind::SphereMach),
        };
        let damping = self.aero_coef.damping;
        RawBodyConfig {
            name: self.name.clone(),
            m_kg: self.mass.mass,
            Jxx_b_kgm2: self.mass.ixx,
            Jyy_b_kgm2: self.mass.iyy,
            Jzz_b_kgm2: self.mass.izz,
            Jxz_b_kgm2: self.mass.ixz,
            Aref_m2: self.geometry.reference_area,
            b_m: self.geometry.span,
            c_m: self.geometry.chord,
            CD_approx: c_d,
            drag_model,
            Clp: damping.c_l_p,
            Clr: damping.c_l_r,
            Cmq: damping.c_m_q,
            Cnp: damping.c_n_p,
            Cnr: damping.c_n_r,
        }
    }

    /// Terminal velocity √(2mg / (ρ·CD·A)) for a body falling with its low-speed drag.
    ///
    /// `None` when the body has no drag or the air has no density.
    pub fn analytic_terminal_velocity(&self, density: f64, gravity: f64) -> Option<f64> {
        let drag_area = density * self.aero_coef.drag.coefficient(0.0) * self.geometry.reference_area;
        if drag_area <= 0.0 {
            return None;
        }
        Some((2.0 * self.mass.mass * gravity / drag_area).sqrt())
    }

    /// Catalog figure of merit: terminal velocity in 1.2 kg/m³ air.
    pub fn nominal_terminal_velocity(&self) -> Option<f64> {
        self.analytic_terminal_velocity(1.2, DEFAULT_GRAVITY)
    }
}
