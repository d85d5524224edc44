//! Wire shapes of the JSON:API subset served by the catalogue.
//!
//! Attributes stay as a raw [`Value`] here; they are only decoded once the
//! discriminator has been looked up.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{DiscosError, DiscosResult};

/// `self` / `related` links of a resource or relationship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLinks {
    #[serde(rename = "self", default)]
    pub self_link: Option<String>,
    #[serde(default)]
    pub related: Option<String>,
}

/// A named relationship. Only links are kept; linkage data is not resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub links: ResourceLinks,
}

/// Resource object exactly as received.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawResource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
    #[serde(default)]
    pub attributes: Option<Value>,
    #[serde(default)]
    pub relationships: Option<BTreeMap<String, Relationship>>,
    #[serde(default)]
    pub links: Option<ResourceLinks>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SingleDocument {
    pub data: Option<RawResource>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CollectionDocument {
    pub data: Vec<RawResource>,
}

impl SingleDocument {
    pub(crate) fn parse(body: &[u8]) -> DiscosResult<RawResource> {
        let doc: SingleDocument = parse_envelope(body)?;
        let data = doc.data.ok_or_else(|| DiscosError::MalformedEnvelope {
            detail: "`data` is null".to_string(),
        })?;
        data.validated()
    }
}

impl CollectionDocument {
    pub(crate) fn parse(body: &[u8]) -> DiscosResult<Vec<RawResource>> {
        let doc: CollectionDocument = parse_envelope(body)?;
        doc.data.into_iter().map(RawResource::validated).collect()
    }
}

impl RawResource {
    fn validated(self) -> DiscosResult<Self> {
        if self.resource_type.is_empty() {
            return Err(DiscosError::MalformedEnvelope {
                detail: format!("resource {} has an empty `type`", self.id),
            });
        }
        Ok(self)
    }
}

fn parse_envelope<D: serde::de::DeserializeOwned>(body: &[u8]) -> DiscosResult<D> {
    serde_json::from_slice(body).map_err(|e| DiscosError::MalformedEnvelope {
        detail: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_data_is_malformed() {
        let err = SingleDocument::parse(br#"{"meta":{}}"#).unwrap_err();
        assert!(matches!(err, DiscosError::MalformedEnvelope { .. }));
    }

    #[test]
    fn null_data_is_malformed() {
        let err = SingleDocument::parse(br#"{"data":null}"#).unwrap_err();
        assert!(matches!(err, DiscosError::MalformedEnvelope { .. }));
    }

    #[test]
    fn non_json_is_malformed() {
        let err = CollectionDocument::parse(b"<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, DiscosError::MalformedEnvelope { .. }));
    }

    #[test]
    fn single_object_where_array_expected_is_malformed() {
        let err = CollectionDocument::parse(br#"{"data":{"type":"object","id":"1"}}"#).unwrap_err();
        assert!(matches!(err, DiscosError::MalformedEnvelope { .. }));
    }

    #[test]
    fn empty_type_is_malformed() {
        let err = SingleDocument::parse(br#"{"data":{"type":"","id":"1"}}"#).unwrap_err();
        assert!(matches!(err, DiscosError::MalformedEnvelope { .. }));
    }

    #[test]
    fn relationship_links_are_kept() {
        let raw = SingleDocument::parse(
            br#"{"data":{"type":"object","id":"61272",
                "relationships":{"launch":{"links":{"self":"/api/objects/61272/relationships/launch","related":"/api/objects/61272/launch"}}},
                "links":{"self":"/api/objects/61272"}}}"#,
        )
        .unwrap();
        let rels = raw.relationships.unwrap();
        assert_eq!(
            rels["launch"].links.related.as_deref(),
            Some("/api/objects/61272/launch")
        );
        assert_eq!(raw.links.unwrap().self_link.as_deref(), Some("/api/objects/61272"));
    }
}
