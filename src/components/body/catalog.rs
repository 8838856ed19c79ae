//! Built-in bodies: solid spheres of common materials and the NASA tumbling-brick cases.

use std::f64::consts::PI;

use super::aero_coef::{BodyAeroCoefficients, DampingDerivatives, DragModel};
use super::body::{BodyModel, BodyType};
use super::geometry::BodyGeometry;
use super::loader::ConfigError;
use super::mass::MassModel;
use crate::utils::constants::{FOOT_TO_METER, INCH_TO_METER, SLUG_TO_KG};

const SPHERE_DRAG_COEFFICIENT: f64 = 0.5;

/// Mass properties of a homogeneous sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereProperties {
    /// Volume (m³).
    pub volume: f64,
    /// Mass (kg).
    pub mass: f64,
    /// Moment of inertia about any diameter (kg·m²).
    pub inertia: f64,
    /// Frontal reference area (m²).
    pub reference_area: f64,
}

pub fn sphere_properties(radius: f64, material_density: f64) -> SphereProperties {
    let volume = 4.0 / 3.0 * PI * radius.powi(3);
    let mass = material_density * volume;
    SphereProperties {
        volume,
        mass,
        inertia: 0.4 * mass * radius.powi(2),
        reference_area: PI * radius.powi(2),
    }
}

fn solid_sphere(
    name: &str,
    body_type: BodyType,
    radius_in: f64,
    material_density: f64,
) -> Result<BodyModel, ConfigError> {
    let radius = radius_in * INCH_TO_METER;
    let props = sphere_properties(radius, material_density);

    Ok(BodyModel {
        name: name.to_string(),
        body_type,
        mass: MassModel::new(props.mass, props.inertia, props.inertia, props.inertia, 0.0)?,
        geometry: BodyGeometry::sphere(radius),
        aero_coef: BodyAeroCoefficients::drag_only(SPHERE_DRAG_COEFFICIENT),
    })
}

pub fn musketball_50cal() -> Result<BodyModel, ConfigError> {
    solid_sphere("50 Cal Lead Ball", BodyType::Musketball50Cal, 0.495, 11300.0)
}

pub fn carronade_12lb() -> Result<BodyModel, ConfigError> {
    solid_sphere(
        "Carronade 12 lb (5.4 kg) Cannonball",
        BodyType::Carronade12Lb,
        4.4,
        7000.0,
    )
}

pub fn blueberry() -> Result<BodyModel, ConfigError> {
    solid_sphere("A Blueberry", BodyType::Blueberry, 0.3, 786.0)
}

pub fn bowling_ball() -> Result<BodyModel, ConfigError> {
    solid_sphere("Bowling Ball", BodyType::BowlingBall, 4.4, 1500.0)
}

pub fn tsar_cannonball() -> Result<BodyModel, ConfigError> {
    solid_sphere("Tsar Cannonball", BodyType::TsarCannonball, 35.0, 7000.0)
}

pub fn nasa_atmos01_sphere() -> Result<BodyModel, ConfigError> {
    solid_sphere(
        "NASA Atmos01 1-Slug Cannonball",
        BodyType::NasaAtmos01Sphere,
        3.0,
        7868.36,
    )
}

/// The 8 in × 4 in brick of the NASA check cases, in slug/ft units converted to SI.
fn brick(
    name: &str,
    body_type: BodyType,
    damping: DampingDerivatives,
) -> Result<BodyModel, ConfigError> {
    let slug_ft2 = SLUG_TO_KG * FOOT_TO_METER.powi(2);

    let mass = MassModel::new(
        0.1554048 * SLUG_TO_KG,
        0.00189422 * slug_ft2,
        0.00621102 * slug_ft2,
        0.00719467 * slug_ft2,
        0.0,
    )?;
    let geometry = BodyGeometry::new(
        (8.0 * INCH_TO_METER) * (4.0 * INCH_TO_METER),
        0.33333 * FOOT_TO_METER,
        0.66666667 * FOOT_TO_METER,
    );

    Ok(BodyModel {
        name: name.to_string(),
        body_type,
        mass,
        geometry,
        aero_coef: BodyAeroCoefficients::new(DragModel::Constant(0.0), damping),
    })
}

pub fn nasa_atmos02_brick() -> Result<BodyModel, ConfigError> {
    brick(
        "Tumbling Brick (No Damping or Drag)",
        BodyType::NasaAtmos02Brick,
        DampingDerivatives::default(),
    )
}

pub fn nasa_atmos03_brick() -> Result<BodyModel, ConfigError> {
    brick(
        "Tumbling Brick With Aerodynamic Damping",
        BodyType::NasaAtmos03Brick,
        DampingDerivatives::new(-1.0, 0.0, -1.0, 0.0, -1.0),
    )
}
