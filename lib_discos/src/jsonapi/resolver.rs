//! # Document Resolver
//!
//! Turns a JSON:API response body into typed [`Resource`]s.
//!
//! ## Steps
//! 1. Parse the envelope (`data` object or `data` array).
//! 2. Look up each resource's discriminator. Unregistered strings fail with
//!    [`DiscosError::UnknownResourceType`]; nothing is decoded partially.
//! 3. Check the discriminator is acceptable for the requested kind (an
//!    `entity` request accepts `country` and `organisation`).
//! 4. Decode the attribute bag with the discriminator's own schema.

use tracing::{debug, error};

use crate::errors::{DiscosError, DiscosResult};
use crate::jsonapi::document::{CollectionDocument, RawResource, SingleDocument};
use crate::models::{AnyModel, DiscosModel, ModelKind, Resource, ResourceType};

/// Resolves a single-resource document into `T`.
pub fn resolve_single<T: DiscosModel>(body: &[u8]) -> DiscosResult<Resource<T>> {
    let raw = SingleDocument::parse(body)?;
    narrow(decode_resource(raw, T::KIND)?)
}

/// Resolves a collection document into `T`s, preserving order.
pub fn resolve_many<T: DiscosModel>(body: &[u8]) -> DiscosResult<Vec<Resource<T>>> {
    resolve_many_as(T::KIND, body)?
        .into_iter()
        .map(narrow)
        .collect()
}

/// Kind-keyed variant of [`resolve_single`] returning the schema-erased form.
pub fn resolve_single_as(kind: ModelKind, body: &[u8]) -> DiscosResult<Resource<AnyModel>> {
    let raw = SingleDocument::parse(body)?;
    decode_resource(raw, kind)
}

/// Kind-keyed variant of [`resolve_many`] returning the schema-erased form.
pub fn resolve_many_as(kind: ModelKind, body: &[u8]) -> DiscosResult<Vec<Resource<AnyModel>>> {
    let raws = CollectionDocument::parse(body)?;
    let resources = raws
        .into_iter()
        .map(|raw| decode_resource(raw, kind))
        .collect::<DiscosResult<Vec<_>>>()?;
    debug!(kind = %kind, count = resources.len(), "Resolved collection");
    Ok(resources)
}

fn decode_resource(raw: RawResource, kind: ModelKind) -> DiscosResult<Resource<AnyModel>> {
    let Some(resource_type) = ResourceType::from_discriminator(&raw.resource_type) else {
        error!(kind = %kind, id = %raw.id, discriminator = %raw.resource_type, "No schema registered for discriminator");
        return Err(DiscosError::UnknownResourceType {
            discriminator: raw.resource_type,
        });
    };

    if !kind.accepts(resource_type) {
        return Err(DiscosError::ResourceTypeMismatch {
            expected: kind,
            found: resource_type,
            id: raw.id,
        });
    }

    let attributes = raw
        .attributes
        .unwrap_or_else(|| serde_json::Value::Object(Default::default()));
    let model = AnyModel::decode(resource_type, attributes).map_err(|source| {
        DiscosError::Attributes {
            discriminator: resource_type,
            id: raw.id.clone(),
            source,
        }
    })?;

    Ok(Resource {
        id: raw.id,
        resource_type,
        links: raw.links.unwrap_or_default(),
        relationships: raw.relationships.unwrap_or_default(),
        attributes: model,
    })
}

fn narrow<T: DiscosModel>(resource: Resource<AnyModel>) -> DiscosResult<Resource<T>> {
    let Resource {
        id,
        resource_type,
        links,
        relationships,
        attributes,
    } = resource;

    match T::from_any(attributes) {
        Ok(attributes) => Ok(Resource {
            id,
            resource_type,
            links,
            relationships,
            attributes,
        }),
        Err(_) => Err(DiscosError::ResourceTypeMismatch {
            expected: T::KIND,
            found: resource_type,
            id,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Country, DiscosObject, Entity, EntityAttributes, InitialOrbit, ObjectClass, Organisation,
    };

    const ROCKET_BODY: &str = r#"{
        "data": {
            "type": "object",
            "attributes": {
                "shape": "Cyl + 1 Nozzle",
                "xSectMin": 0.731382404709789,
                "satno": 44629,
                "depth": 1.34,
                "objectClass": "Rocket Body",
                "cosparId": "2019-068B",
                "length": 0.965,
                "height": 1.34,
                "mass": 202.0,
                "xSectMax": 1.48560689010218,
                "vimpelId": null,
                "xSectAvg": 1.38128956744413,
                "name": "ORION 38 (Pegasus XL)"
            },
            "relationships": {
                "launch": {
                    "links": {
                        "self": "/api/objects/61272/relationships/launch",
                        "related": "/api/objects/61272/launch"
                    }
                },
                "reentry": {
                    "links": {
                        "self": "/api/objects/61272/relationships/reentry",
                        "related": "/api/objects/61272/reentry"
                    }
                }
            },
            "id": "61272",
            "links": { "self": "/api/objects/61272" }
        }
    }"#;

    const ENTITIES: &str = r#"{
        "data": [
            { "type": "country", "id": "1", "attributes": { "name": "United Kingdom", "alpha2Code": "GB" } },
            { "type": "organisation", "id": "2", "attributes": { "name": "United Launch Alliance" } }
        ]
    }"#;

    #[test]
    fn space_object_decodes_with_declared_precision() {
        let res = resolve_single::<DiscosObject>(ROCKET_BODY.as_bytes()).unwrap();
        let obj = &res.attributes;

        assert_eq!(res.id(), "61272");
        assert_eq!(res.resource_type(), ResourceType::Object);
        assert_eq!(obj.mass, Some(202.0_f32));
        assert_eq!(obj.depth, Some(1.34_f32));
        assert_eq!(obj.length, Some(0.965_f32));
        assert_eq!(obj.x_sect_min, Some(0.731382404709789_f64));
        assert_eq!(obj.x_sect_max, Some(1.48560689010218_f64));
        assert_eq!(obj.x_sect_avg, Some(1.38128956744413_f64));
        assert_eq!(obj.satno, Some(44629));
        assert_eq!(obj.object_class, Some(ObjectClass::RocketBody));
        assert_eq!(obj.cospar_id.as_deref(), Some("2019-068B"));
        assert_eq!(obj.shape.as_deref(), Some("Cyl + 1 Nozzle"));
        assert_eq!(obj.vimpel_id, None);
        assert_eq!(res.self_link(), Some("/api/objects/61272"));
        assert_eq!(res.related_link("launch"), Some("/api/objects/61272/launch"));
        assert_eq!(res.related_link("operators"), None);
    }

    #[test]
    fn entity_request_yields_each_concrete_shape() {
        let entities = resolve_many::<Entity>(ENTITIES.as_bytes()).unwrap();
        assert_eq!(entities.len(), 2);

        assert_eq!(entities[0].resource_type(), ResourceType::Country);
        let country: &Country = entities[0].attributes.as_country().unwrap();
        assert_eq!(country.alpha2_code.as_deref(), Some("GB"));

        assert_eq!(entities[1].resource_type(), ResourceType::Organisation);
        let org: &Organisation = entities[1].attributes.as_organisation().unwrap();
        assert_eq!(org.name.as_deref(), Some("United Launch Alliance"));

        let names: Vec<_> = entities.iter().filter_map(|e| e.attributes.name()).collect();
        assert_eq!(names, ["United Kingdom", "United Launch Alliance"]);
    }

    #[test]
    fn country_request_rejects_organisations() {
        let err = resolve_many::<Country>(ENTITIES.as_bytes()).unwrap_err();
        match err {
            DiscosError::ResourceTypeMismatch { expected, found, id } => {
                assert_eq!(expected, ModelKind::Country);
                assert_eq!(found, ResourceType::Organisation);
                assert_eq!(id, "2");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_discriminator_is_an_error() {
        let body = br#"{"data":{"type":"satellite","id":"9","attributes":{"name":"x"}}}"#;
        let err = resolve_single_as(ModelKind::Object, body).unwrap_err();
        assert!(matches!(
            err,
            DiscosError::UnknownResourceType { ref discriminator } if discriminator == "satellite"
        ));
    }

    #[test]
    fn empty_collection_is_not_an_error() {
        let items = resolve_many::<InitialOrbit>(br#"{"data":[],"meta":{}}"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn missing_attributes_decode_as_all_absent() {
        let res = resolve_single::<DiscosObject>(br#"{"data":{"type":"object","id":"5"}}"#).unwrap();
        assert_eq!(res.attributes, DiscosObject::default());
        assert!(res.relationships.is_empty());
    }

    #[test]
    fn schema_violations_name_the_resource() {
        let body = br#"{"data":{"type":"object","id":"7","attributes":{"mass":"heavy"}}}"#;
        match resolve_single::<DiscosObject>(body).unwrap_err() {
            DiscosError::Attributes { discriminator, id, .. } => {
                assert_eq!(discriminator, ResourceType::Object);
                assert_eq!(id, "7");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn mixed_kinds_can_share_one_collection() {
        let obj = resolve_single::<DiscosObject>(ROCKET_BODY.as_bytes()).unwrap();
        let ents = resolve_many::<Entity>(ENTITIES.as_bytes()).unwrap();

        let all: Vec<Resource<AnyModel>> = std::iter::once(obj.into_any())
            .chain(ents.into_iter().map(Resource::into_any))
            .collect();
        let ids: Vec<_> = all.iter().map(Resource::id).collect();
        assert_eq!(ids, ["61272", "1", "2"]);
    }
}
