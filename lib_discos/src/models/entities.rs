//! Entities: countries and organisations.
//!
//! Both are served from the `entities` endpoint and distinguished only by
//! their discriminator, so [`Entity`] wraps whichever one a document holds.

use serde::{Deserialize, Serialize};

/// Capabilities shared by every entity shape.
pub trait EntityAttributes {
    /// Display name of the entity.
    fn name(&self) -> Option<&str>;
}

/// Attributes of a `country` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Country name.
    pub name: Option<String>,
    /// ISO 3166-1 alpha-2 code.
    pub alpha2_code: Option<String>,
    /// ISO 3166-1 alpha-3 code.
    pub alpha3_code: Option<String>,
}

/// Attributes of an `organisation` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organisation {
    /// Organisation name.
    pub name: Option<String>,
}

/// A resource from the `entities` endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Country(Country),
    Organisation(Organisation),
}

impl Entity {
    pub fn as_country(&self) -> Option<&Country> {
        match self {
            Entity::Country(c) => Some(c),
            Entity::Organisation(_) => None,
        }
    }

    pub fn as_organisation(&self) -> Option<&Organisation> {
        match self {
            Entity::Organisation(o) => Some(o),
            Entity::Country(_) => None,
        }
    }
}

impl EntityAttributes for Country {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl EntityAttributes for Organisation {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl EntityAttributes for Entity {
    fn name(&self) -> Option<&str> {
        match self {
            Entity::Country(c) => c.name(),
            Entity::Organisation(o) => o.name(),
        }
    }
}
