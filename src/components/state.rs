use nalgebra::{SVector, Vector3};
use serde::{Deserialize, Serialize};

/// Number of entries in the rigid-body state vector.
pub const STATE_DIM: usize = 12;

/// Rigid-body state in the fixed order the equations of motion use.
///
/// | index | quantity |
/// |-------|----------|
/// | 0..3  | body-frame velocity u, v, w (m/s) |
/// | 3..6  | body angular rates p, q, r (rad/s) |
/// | 6..9  | Euler angles φ, θ, ψ (rad), body relative to NED |
/// | 9..12 | NED position north, east, down (m) |
pub type StateVector = SVector<f64, STATE_DIM>;

/// Named indices into a [`StateVector`].
pub mod index {
    pub const U: usize = 0;
    pub const V: usize = 1;
    pub const W: usize = 2;
    pub const P: usize = 3;
    pub const Q: usize = 4;
    pub const R: usize = 5;
    pub const PHI: usize = 6;
    pub const THETA: usize = 7;
    pub const PSI: usize = 8;
    pub const NORTH: usize = 9;
    pub const EAST: usize = 10;
    pub const DOWN: usize = 11;
}

/// Named view of the twelve states, used for configuration files and reports.
///
/// Pitch angles of ±90° are a singularity of the Euler kinematics and lie outside
/// the modelled envelope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    /// Axial velocity (m/s).
    #[serde(default)]
    pub u: f64,
    /// Lateral velocity (m/s).
    #[serde(default)]
    pub v: f64,
    /// Vertical velocity (m/s).
    #[serde(default)]
    pub w: f64,
    /// Roll rate (rad/s).
    #[serde(default)]
    pub p: f64,
    /// Pitch rate (rad/s).
    #[serde(default)]
    pub q: f64,
    /// Yaw rate (rad/s).
    #[serde(default)]
    pub r: f64,
    /// Roll angle (rad).
    #[serde(default)]
    pub phi: f64,
    /// Pitch angle (rad).
    #[serde(default)]
    pub theta: f64,
    /// Yaw angle (rad).
    #[serde(default)]
    pub psi: f64,
    /// North position (m).
    #[serde(default)]
    pub north: f64,
    /// East position (m).
    #[serde(default)]
    pub east: f64,
    /// Down position (m), negative above the reference plane.
    #[serde(default)]
    pub down: f64,
}

impl BodyState {
    /// A body at rest and level at `altitude` metres.
    pub fn at_altitude(altitude: f64) -> Self {
        Self {
            down: -altitude,
            ..Default::default()
        }
    }

    pub fn altitude(&self) -> f64 {
        -self.down
    }

    pub fn velocity(&self) -> Vector3<f64> {
        Vector3::new(self.u, self.v, self.w)
    }

    pub fn angular_rates(&self) -> Vector3<f64> {
        Vector3::new(self.p, self.q, self.r)
    }

    pub fn to_vector(&self) -> StateVector {
        StateVector::from_column_slice(&[
            self.u, self.v, self.w, self.p, self.q, self.r, self.phi, self.theta, self.psi,
            self.north, self.east, self.down,
        ])
    }

    pub fn from_vector(x: &StateVector) -> Self {
        Self {
            u: x[index::U],
            v: x[index::V],
            w: x[index::W],
            p: x[index::P],
            q: x[index::Q],
            r: x[index::R],
            phi: x[index::PHI],
            theta: x[index::THETA],
            psi: x[index::PSI],
            north: x[index::NORTH],
            east: x[index::EAST],
            down: x[index::DOWN],
        }
    }
}

impl From<BodyState> for StateVector {
    fn from(state: BodyState) -> Self {
        state.to_vector()
    }
}

impl From<&StateVector> for BodyState {
    fn from(x: &StateVector) -> Self {
        Self::from_vector(x)
    }
}
