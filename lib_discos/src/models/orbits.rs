//! Orbital elements and the events that end or fragment an orbit.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Keplerian elements of an orbit. All elements are double precision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitDetails {
    pub epoch: Option<String>,
    /// Semi-major axis, metres.
    pub sma: Option<f64>,
    /// Inclination, degrees.
    pub inc: Option<f64>,
    pub ecc: Option<f64>,
    /// Right ascension of the ascending node, degrees.
    pub raan: Option<f64>,
    /// Argument of perigee, degrees.
    pub a_per: Option<f64>,
    /// Mean anomaly, degrees.
    pub m_ano: Option<f64>,
    /// Reference frame the elements are given in.
    pub frame: Option<String>,
}

/// Attributes of an `initialOrbit` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InitialOrbit(pub OrbitDetails);

/// Attributes of a `destinationOrbit` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationOrbit(pub OrbitDetails);

impl Deref for InitialOrbit {
    type Target = OrbitDetails;

    fn deref(&self) -> &OrbitDetails {
        &self.0
    }
}

impl Deref for DestinationOrbit {
    type Target = OrbitDetails;

    fn deref(&self) -> &OrbitDetails {
        &self.0
    }
}

/// Attributes of a `fragmentation` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentationEvent {
    pub event_type: Option<String>,
    pub epoch: Option<String>,
    pub comment: Option<String>,
    pub altitude: Option<f32>,
    pub latitude: Option<f32>,
    pub longitude: Option<f32>,
}

/// Attributes of a `reentry` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reentry {
    pub epoch: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn orbit_elements_keep_double_precision() {
        let orbit: InitialOrbit = serde_json::from_value(json!({
            "epoch": "2019-10-11T01:59:05",
            "sma": 6_921_113.812_345_678_9,
            "ecc": 0.000_123_456_789_012_3,
            "frame": "J2000"
        }))
        .unwrap();
        assert_eq!(orbit.sma, Some(6_921_113.812_345_678_9_f64));
        assert_eq!(orbit.ecc, Some(0.000_123_456_789_012_3_f64));
        assert_eq!(orbit.frame.as_deref(), Some("J2000"));
        assert_eq!(orbit.inc, None);
    }
}
