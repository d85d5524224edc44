use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::ModelKind;

/// The JSON:API `type` discriminator of a resource object.
///
/// One variant per concrete attribute schema. The wire strings are the
/// camelCase names the catalog service emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceType {
    Object,
    ObjectClass,
    Country,
    Organisation,
    Fragmentation,
    Launch,
    LaunchSite,
    LaunchSystem,
    LaunchVehicle,
    LaunchVehicleFamily,
    LaunchVehicleEngine,
    LaunchVehicleStage,
    InitialOrbit,
    DestinationOrbit,
    Propellant,
    Reentry,
}

impl ResourceType {
    pub const ALL: [ResourceType; 16] = [
        ResourceType::Object,
        ResourceType::ObjectClass,
        ResourceType::Country,
        ResourceType::Organisation,
        ResourceType::Fragmentation,
        ResourceType::Launch,
        ResourceType::LaunchSite,
        ResourceType::LaunchSystem,
        ResourceType::LaunchVehicle,
        ResourceType::LaunchVehicleFamily,
        ResourceType::LaunchVehicleEngine,
        ResourceType::LaunchVehicleStage,
        ResourceType::InitialOrbit,
        ResourceType::DestinationOrbit,
        ResourceType::Propellant,
        ResourceType::Reentry,
    ];

    /// Discriminator string as it appears on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            ResourceType::Object => "object",
            ResourceType::ObjectClass => "objectClass",
            ResourceType::Country => "country",
            ResourceType::Organisation => "organisation",
            ResourceType::Fragmentation => "fragmentation",
            ResourceType::Launch => "launch",
            ResourceType::LaunchSite => "launchSite",
            ResourceType::LaunchSystem => "launchSystem",
            ResourceType::LaunchVehicle => "launchVehicle",
            ResourceType::LaunchVehicleFamily => "launchVehicleFamily",
            ResourceType::LaunchVehicleEngine => "launchVehicleEngine",
            ResourceType::LaunchVehicleStage => "launchVehicleStage",
            ResourceType::InitialOrbit => "initialOrbit",
            ResourceType::DestinationOrbit => "destinationOrbit",
            ResourceType::Propellant => "propellant",
            ResourceType::Reentry => "reentry",
        }
    }

    /// Looks up a discriminator string. `None` means no schema is registered.
    pub fn from_discriminator(s: &str) -> Option<Self> {
        ResourceType::ALL.into_iter().find(|t| t.as_str() == s)
    }

    /// The concrete kind this discriminator decodes to.
    pub const fn kind(self) -> ModelKind {
        match self {
            ResourceType::Object => ModelKind::Object,
            ResourceType::ObjectClass => ModelKind::ObjectClass,
            ResourceType::Country => ModelKind::Country,
            ResourceType::Organisation => ModelKind::Organisation,
            ResourceType::Fragmentation => ModelKind::Fragmentation,
            ResourceType::Launch => ModelKind::Launch,
            ResourceType::LaunchSite => ModelKind::LaunchSite,
            ResourceType::LaunchSystem => ModelKind::LaunchSystem,
            ResourceType::LaunchVehicle => ModelKind::LaunchVehicle,
            ResourceType::LaunchVehicleFamily => ModelKind::LaunchVehicleFamily,
            ResourceType::LaunchVehicleEngine => ModelKind::LaunchVehicleEngine,
            ResourceType::LaunchVehicleStage => ModelKind::LaunchVehicleStage,
            ResourceType::InitialOrbit => ModelKind::InitialOrbit,
            ResourceType::DestinationOrbit => ModelKind::DestinationOrbit,
            ResourceType::Propellant => ModelKind::Propellant,
            ResourceType::Reentry => ModelKind::Reentry,
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_strings_match_serde_names() {
        for t in ResourceType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
            assert_eq!(ResourceType::from_discriminator(t.as_str()), Some(t));
        }
    }

    #[test]
    fn every_discriminator_is_accepted_by_its_kind() {
        for t in ResourceType::ALL {
            assert!(t.kind().accepts(t));
        }
    }

    #[test]
    fn unknown_discriminator_has_no_schema() {
        assert_eq!(ResourceType::from_discriminator("satellite"), None);
        assert_eq!(ResourceType::from_discriminator("Object"), None);
    }
}
