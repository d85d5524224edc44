//! # Endpoint Registry
//!
//! [`ModelKind`] is the closed set of resource kinds the client can fetch.
//! Each kind carries its REST path segment; the mapping is an exhaustive
//! `match`, so adding a kind without an endpoint does not compile.

use std::fmt;
use std::str::FromStr;

use crate::errors::DiscosError;
use crate::models::ResourceType;

/// A fetchable resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Object,
    ObjectClass,
    /// Either a [`ModelKind::Country`] or an [`ModelKind::Organisation`].
    Entity,
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

impl ModelKind {
    /// Every registered kind, in registry order.
    pub const ALL: [ModelKind; 17] = [
        ModelKind::Object,
        ModelKind::ObjectClass,
        ModelKind::Entity,
        ModelKind::Country,
        ModelKind::Organisation,
        ModelKind::Fragmentation,
        ModelKind::Launch,
        ModelKind::LaunchSite,
        ModelKind::LaunchSystem,
        ModelKind::LaunchVehicle,
        ModelKind::LaunchVehicleFamily,
        ModelKind::LaunchVehicleEngine,
        ModelKind::LaunchVehicleStage,
        ModelKind::InitialOrbit,
        ModelKind::DestinationOrbit,
        ModelKind::Propellant,
        ModelKind::Reentry,
    ];

    /// REST path segment, relative to the API base URL.
    ///
    /// Several kinds share a segment: country and organisation both live
    /// under `entities` and are told apart by their discriminator.
    pub const fn endpoint(self) -> &'static str {
        match self {
            ModelKind::Object => "objects",
            ModelKind::ObjectClass => "object-classes",
            ModelKind::Entity | ModelKind::Country | ModelKind::Organisation => "entities",
            ModelKind::Fragmentation => "fragmentations",
            ModelKind::Launch => "launches",
            ModelKind::LaunchSite => "launch-sites",
            ModelKind::LaunchSystem => "launch-systems",
            ModelKind::LaunchVehicle => "launch-vehicles",
            ModelKind::LaunchVehicleFamily => "launch-vehicles/families",
            ModelKind::LaunchVehicleEngine => "launch-vehicles/engines",
            ModelKind::LaunchVehicleStage => "launch-vehicles/stages",
            ModelKind::InitialOrbit => "initial-orbits",
            ModelKind::DestinationOrbit => "destination-orbits",
            ModelKind::Propellant => "propellants",
            ModelKind::Reentry => "reentries",
        }
    }

    /// Stable kebab-case name, used for parsing and in log fields.
    pub const fn name(self) -> &'static str {
        match self {
            ModelKind::Object => "object",
            ModelKind::ObjectClass => "object-class",
            ModelKind::Entity => "entity",
            ModelKind::Country => "country",
            ModelKind::Organisation => "organisation",
            ModelKind::Fragmentation => "fragmentation",
            ModelKind::Launch => "launch",
            ModelKind::LaunchSite => "launch-site",
            ModelKind::LaunchSystem => "launch-system",
            ModelKind::LaunchVehicle => "launch-vehicle",
            ModelKind::LaunchVehicleFamily => "launch-vehicle-family",
            ModelKind::LaunchVehicleEngine => "launch-vehicle-engine",
            ModelKind::LaunchVehicleStage => "launch-vehicle-stage",
            ModelKind::InitialOrbit => "initial-orbit",
            ModelKind::DestinationOrbit => "destination-orbit",
            ModelKind::Propellant => "propellant",
            ModelKind::Reentry => "reentry",
        }
    }

    /// Whether a resource with this discriminator is a valid instance of the kind.
    pub fn accepts(self, resource_type: ResourceType) -> bool {
        match self {
            ModelKind::Entity => matches!(
                resource_type,
                ResourceType::Country | ResourceType::Organisation
            ),
            other => resource_type.kind() == other,
        }
    }
}

/// Resolves a kind name to its endpoint.
///
/// This is the string-keyed face of the registry, for callers that receive
/// kind names at runtime (CLI arguments, config files).
pub fn resolve(name: &str) -> Result<&'static str, DiscosError> {
    name.parse::<ModelKind>().map(ModelKind::endpoint)
}

impl FromStr for ModelKind {
    type Err = DiscosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| DiscosError::UnregisteredKind { name: s.to_string() })
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
