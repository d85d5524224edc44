//! # Catalogue Models
//!
//! This module holds everything that describes *what* can be fetched:
//!
//! - **`kind`**: [`ModelKind`] and the endpoint registry.
//! - **`resource_type`**: [`ResourceType`], the JSON:API discriminator.
//! - Attribute schemas, one per discriminator, grouped by domain area.
//! - [`AnyModel`], the tagged union over every schema, and the explicit
//!   discriminator-to-decoder table ([`AnyModel::decode`]).
//! - [`DiscosModel`], the trait tying a Rust type to a kind so the client can
//!   offer a single generic fetch operation.
//! - [`Resource`], a decoded resource object: identity, links and attributes.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::jsonapi::{Relationship, ResourceLinks};

pub mod entities;
pub mod kind;
pub mod launch_vehicles;
pub mod launches;
pub mod objects;
pub mod orbits;
pub mod resource_type;

pub use entities::{Country, Entity, EntityAttributes, Organisation};
pub use kind::ModelKind;
pub use launch_vehicles::{
    LaunchVehicle, LaunchVehicleEngine, LaunchVehicleFamily, LaunchVehicleStage, Propellant,
};
pub use launches::{Launch, LaunchSite, LaunchSystem};
pub use objects::{DiscosObject, DiscosObjectClass, ObjectClass};
pub use orbits::{DestinationOrbit, FragmentationEvent, InitialOrbit, OrbitDetails, Reentry};
pub use resource_type::ResourceType;

/// A Rust type that the typed client can fetch.
///
/// `KIND` selects the endpoint and the set of acceptable discriminators;
/// `from_any` narrows a decoded [`AnyModel`] to `Self`, handing it back
/// unchanged when it is some other shape.
pub trait DiscosModel: Sized + Send + 'static {
    const KIND: ModelKind;

    fn from_any(model: AnyModel) -> Result<Self, AnyModel>;
}

/// Attributes of any resource, tagged by discriminator.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyModel {
    Object(DiscosObject),
    ObjectClass(DiscosObjectClass),
    Country(Country),
    Organisation(Organisation),
    Fragmentation(FragmentationEvent),
    Launch(Launch),
    LaunchSite(LaunchSite),
    LaunchSystem(LaunchSystem),
    LaunchVehicle(LaunchVehicle),
    LaunchVehicleFamily(LaunchVehicleFamily),
    LaunchVehicleEngine(LaunchVehicleEngine),
    LaunchVehicleStage(LaunchVehicleStage),
    InitialOrbit(InitialOrbit),
    DestinationOrbit(DestinationOrbit),
    Propellant(Propellant),
    Reentry(Reentry),
}

impl AnyModel {
    /// Decodes an attribute bag with the schema registered for `resource_type`.
    pub fn decode(resource_type: ResourceType, attributes: Value) -> Result<Self, serde_json::Error> {
        use serde_json::from_value as de;

        Ok(match resource_type {
            ResourceType::Object => AnyModel::Object(de(attributes)?),
            ResourceType::ObjectClass => AnyModel::ObjectClass(de(attributes)?),
            ResourceType::Country => AnyModel::Country(de(attributes)?),
            ResourceType::Organisation => AnyModel::Organisation(de(attributes)?),
            ResourceType::Fragmentation => AnyModel::Fragmentation(de(attributes)?),
            ResourceType::Launch => AnyModel::Launch(de(attributes)?),
            ResourceType::LaunchSite => AnyModel::LaunchSite(de(attributes)?),
            ResourceType::LaunchSystem => AnyModel::LaunchSystem(de(attributes)?),
            ResourceType::LaunchVehicle => AnyModel::LaunchVehicle(de(attributes)?),
            ResourceType::LaunchVehicleFamily => AnyModel::LaunchVehicleFamily(de(attributes)?),
            ResourceType::LaunchVehicleEngine => AnyModel::LaunchVehicleEngine(de(attributes)?),
            ResourceType::LaunchVehicleStage => AnyModel::LaunchVehicleStage(de(attributes)?),
            ResourceType::InitialOrbit => AnyModel::InitialOrbit(de(attributes)?),
            ResourceType::DestinationOrbit => AnyModel::DestinationOrbit(de(attributes)?),
            ResourceType::Propellant => AnyModel::Propellant(de(attributes)?),
            ResourceType::Reentry => AnyModel::Reentry(de(attributes)?),
        })
    }

    pub fn resource_type(&self) -> ResourceType {
        match self {
            AnyModel::Object(_) => ResourceType::Object,
            AnyModel::ObjectClass(_) => ResourceType::ObjectClass,
            AnyModel::Country(_) => ResourceType::Country,
            AnyModel::Organisation(_) => ResourceType::Organisation,
            AnyModel::Fragmentation(_) => ResourceType::Fragmentation,
            AnyModel::Launch(_) => ResourceType::Launch,
            AnyModel::LaunchSite(_) => ResourceType::LaunchSite,
            AnyModel::LaunchSystem(_) => ResourceType::LaunchSystem,
            AnyModel::LaunchVehicle(_) => ResourceType::LaunchVehicle,
            AnyModel::LaunchVehicleFamily(_) => ResourceType::LaunchVehicleFamily,
            AnyModel::LaunchVehicleEngine(_) => ResourceType::LaunchVehicleEngine,
            AnyModel::LaunchVehicleStage(_) => ResourceType::LaunchVehicleStage,
            AnyModel::InitialOrbit(_) => ResourceType::InitialOrbit,
            AnyModel::DestinationOrbit(_) => ResourceType::DestinationOrbit,
            AnyModel::Propellant(_) => ResourceType::Propellant,
            AnyModel::Reentry(_) => ResourceType::Reentry,
        }
    }
}

// ---------------------------------------------------------------------------
// One concrete schema per discriminator.
// Generates: DiscosModel impl and From<schema> for AnyModel.
// ---------------------------------------------------------------------------
macro_rules! discos_model {
    ($($schema:ty => $variant:ident),* $(,)?) => {
        $(
            impl DiscosModel for $schema {
                const KIND: ModelKind = ModelKind::$variant;

                fn from_any(model: AnyModel) -> Result<Self, AnyModel> {
                    match model {
                        AnyModel::$variant(m) => Ok(m),
                        other => Err(other),
                    }
                }
            }

            impl From<$schema> for AnyModel {
                fn from(model: $schema) -> Self {
                    AnyModel::$variant(model)
                }
            }
        )*
    };
}

discos_model! {
    DiscosObject => Object,
    DiscosObjectClass => ObjectClass,
    Country => Country,
    Organisation => Organisation,
    FragmentationEvent => Fragmentation,
    Launch => Launch,
    LaunchSite => LaunchSite,
    LaunchSystem => LaunchSystem,
    LaunchVehicle => LaunchVehicle,
    LaunchVehicleFamily => LaunchVehicleFamily,
    LaunchVehicleEngine => LaunchVehicleEngine,
    LaunchVehicleStage => LaunchVehicleStage,
    InitialOrbit => InitialOrbit,
    DestinationOrbit => DestinationOrbit,
    Propellant => Propellant,
    Reentry => Reentry,
}

impl DiscosModel for Entity {
    const KIND: ModelKind = ModelKind::Entity;

    fn from_any(model: AnyModel) -> Result<Self, AnyModel> {
        match model {
            AnyModel::Country(c) => Ok(Entity::Country(c)),
            AnyModel::Organisation(o) => Ok(Entity::Organisation(o)),
            other => Err(other),
        }
    }
}

impl From<Entity> for AnyModel {
    fn from(entity: Entity) -> Self {
        match entity {
            Entity::Country(c) => AnyModel::Country(c),
            Entity::Organisation(o) => AnyModel::Organisation(o),
        }
    }
}

/// A decoded JSON:API resource object.
///
/// Every resource, whatever its schema, exposes the same identity and link
/// accessors; `attributes` holds the schema-specific part.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<T> {
    pub id: String,
    pub resource_type: ResourceType,
    pub links: ResourceLinks,
    pub relationships: BTreeMap<String, Relationship>,
    pub attributes: T,
}

impl<T> Resource<T> {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    /// The resource's canonical link, when the service provided one.
    pub fn self_link(&self) -> Option<&str> {
        self.links.self_link.as_deref()
    }

    /// The `related` link of a named relationship, e.g. `"launch"`.
    pub fn related_link(&self, relationship: &str) -> Option<&str> {
        self.relationships
            .get(relationship)
            .and_then(|r| r.links.related.as_deref())
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resource<U> {
        Resource {
            id: self.id,
            resource_type: self.resource_type,
            links: self.links,
            relationships: self.relationships,
            attributes: f(self.attributes),
        }
    }

    /// Erases the concrete schema so resources of mixed kinds can share a collection.
    pub fn into_any(self) -> Resource<AnyModel>
    where
        T: Into<AnyModel>,
    {
        self.map(Into::into)
    }
}
