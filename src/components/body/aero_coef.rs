use serde::{Deserialize, Serialize};

use crate::systems::aerodynamics::sphere_drag_coefficient;

/// How the drag coefficient is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DragModel {
    /// Constant drag coefficient.
    Constant(f64),
    /// Empirical sphere drag curve as a function of Mach number.
    SphereMach,
}

impl Default for DragModel {
    fn default() -> Self {
        DragModel::Constant(0.0)
    }
}

impl DragModel {
    pub fn coefficient(&self, mach: f64) -> f64 {
        match self {
            DragModel::Constant(c_d) => *c_d,
            DragModel::SphereMach => sphere_drag_coefficient(mach),
        }
    }
}

/// Rate damping derivatives of the moment coefficients.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DampingDerivatives {
    /// Roll moment coefficient due to roll rate (p).
    pub c_l_p: f64,
    /// Roll moment coefficient due to yaw rate (r).
    pub c_l_r: f64,
    /// Pitch moment coefficient due to pitch rate (q).
    pub c_m_q: f64,
    /// Yaw moment coefficient due to roll rate (p).
    pub c_n_p: f64,
    /// Yaw moment coefficient due to yaw rate (r).
    pub c_n_r: f64,
}

impl DampingDerivatives {
    pub fn new(c_l_p: f64, c_l_r: f64, c_m_q: f64, c_n_p: f64, c_n_r: f64) -> Self {
        Self {
            c_l_p,
            c_l_r,
            c_m_q,
            c_n_p,
            c_n_r,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyAeroCoefficients {
    pub drag: DragModel,
    pub damping: DampingDerivatives,
}

impl BodyAeroCoefficients {
    pub fn new(drag: DragModel, damping: DampingDerivatives) -> Self {
        Self { drag, damping }
    }

    /// Drag only, no rate damping.
    pub fn drag_only(c_d: f64) -> Self {
        Self {
            drag: DragModel::Constant(c_d),
            damping: DampingDerivatives::default(),
        }
    }
}
