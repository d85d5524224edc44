//! Launches, launch sites and launch systems.

use serde::{Deserialize, Serialize};

/// Attributes of a `launch` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Launch {
    /// Launch time, ISO 8601.
    pub epoch: Option<String>,
    /// Flight number within the launch system.
    pub flight_no: Option<String>,
    /// Whether the launch failed.
    pub failure: Option<bool>,
    /// COSPAR launch number, e.g. `1991-075`.
    pub cospar_launch_no: Option<String>,
}

/// Attributes of a `launchSite` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchSite {
    /// Site name.
    pub name: Option<String>,
    /// Geodetic latitude, degrees.
    pub latitude: Option<f64>,
    /// Longitude, degrees east.
    pub longitude: Option<f64>,
}

/// Attributes of a `launchSystem` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchSystem {
    /// System name.
    pub name: Option<String>,
}
