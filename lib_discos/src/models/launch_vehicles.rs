//! Launch vehicles, their families, engines, stages and propellants.

use serde::{Deserialize, Serialize};

/// Attributes of a `launchVehicle` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchVehicle {
    /// Vehicle name.
    pub name: Option<String>,
    /// Lift-off mass, kg.
    pub mass: Option<f32>,
    /// Height, m.
    pub height: Option<f32>,
    /// Core diameter, m.
    pub diameter: Option<f32>,
    /// Payload to low Earth orbit, kg.
    pub leo_capacity: Option<f32>,
    /// Payload to geostationary transfer orbit, kg.
    pub gto_capacity: Option<f32>,
    /// Lift-off thrust, kN.
    pub thrust_level: Option<f32>,
    /// Successful launches to date.
    pub successful_launches: Option<u32>,
    /// Failed launches to date.
    pub failed_launches: Option<u32>,
}

/// Attributes of a `launchVehicleFamily` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchVehicleFamily {
    /// Family name.
    pub name: Option<String>,
}

/// Attributes of a `launchVehicleEngine` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchVehicleEngine {
    /// Engine name.
    pub name: Option<String>,
    /// Thrust, kN.
    pub thrust_level: Option<f32>,
    /// Propellant mass flow, kg/s.
    pub mass_flow: Option<f32>,
    /// Chamber pressure, bar.
    pub chamber_pressure: Option<f32>,
    /// Dry mass, kg.
    pub mass: Option<f32>,
    /// Height, m.
    pub height: Option<f32>,
    /// Exit diameter, m.
    pub diameter: Option<f32>,
}

/// Attributes of a `launchVehicleStage` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchVehicleStage {
    /// Stage name.
    pub name: Option<String>,
}

/// Attributes of a `propellant` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Propellant {
    /// Oxidiser of a liquid combination.
    pub oxidiser: Option<String>,
    /// Fuel of a liquid combination.
    pub fuel: Option<String>,
    /// Propellant of a solid motor.
    pub solid_propellant: Option<String>,
}
