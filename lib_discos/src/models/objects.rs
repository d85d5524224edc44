//! Space objects and their classification.

use serde::{Deserialize, Serialize};

/// Catalogue classification of a space object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectClass {
    #[serde(rename = "Payload")]
    Payload,
    #[serde(rename = "Payload Mission Related Object")]
    PayloadMissionRelatedObject,
    #[serde(rename = "Payload Fragmentation Debris")]
    PayloadFragmentationDebris,
    #[serde(rename = "Payload Debris")]
    PayloadDebris,
    #[serde(rename = "Rocket Body")]
    RocketBody,
    #[serde(rename = "Rocket Mission Related Object")]
    RocketMissionRelatedObject,
    #[serde(rename = "Rocket Fragmentation Debris")]
    RocketFragmentationDebris,
    #[serde(rename = "Rocket Debris")]
    RocketDebris,
    #[serde(rename = "Other Mission Related Object")]
    OtherMissionRelatedObject,
    #[serde(rename = "Other Debris")]
    OtherDebris,
    #[serde(rename = "Unknown")]
    Unknown,
}

/// Attributes of an `object` resource.
///
/// Dimensions and mass are single precision, cross-sections double precision,
/// matching the precision the catalogue publishes them with. `None` means the
/// catalogue holds no value (the attribute was `null` or not served).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscosObject {
    /// International designator, e.g. `1991-075B`.
    pub cospar_id: Option<String>,
    /// USSPACECOM catalogue number.
    pub satno: Option<u32>,
    /// Vimpel catalogue id; often `null`.
    pub vimpel_id: Option<u32>,
    /// Common name.
    pub name: Option<String>,
    /// Catalogue classification.
    pub object_class: Option<ObjectClass>,
    /// Mission type of the payload.
    pub mission: Option<String>,
    /// Shape description, e.g. `Cyl + 1 Nozzle`.
    pub shape: Option<String>,
    /// Mass, kg.
    pub mass: Option<f32>,
    /// Length, m.
    pub length: Option<f32>,
    /// Height, m.
    pub height: Option<f32>,
    /// Depth, m.
    pub depth: Option<f32>,
    /// Width, m.
    pub width: Option<f32>,
    /// Diameter, m.
    pub diameter: Option<f32>,
    /// Span with deployed appendages, m.
    pub span: Option<f32>,
    /// Maximum cross-section, m².
    pub x_sect_max: Option<f64>,
    /// Minimum cross-section, m².
    pub x_sect_min: Option<f64>,
    /// Average cross-section, m².
    pub x_sect_avg: Option<f64>,
    /// Epoch of the first orbit, ISO 8601.
    pub first_epoch: Option<String>,
    /// Predicted decay date, ISO 8601.
    pub pred_decay_date: Option<String>,
    /// Whether the object is operational.
    pub active: Option<bool>,
    /// Fragments catalogued from this object.
    pub catalogued_fragments: Option<u32>,
    /// Catalogued fragments still in orbit.
    pub on_orbit_catalogued_fragments: Option<u32>,
}

/// Attributes of an `objectClass` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscosObjectClass {
    /// Class name, as used in `objectClass`.
    pub name: Option<String>,
    /// Free-text definition.
    pub definition: Option<String>,
}
