//! # Pagination Extractor
//!
//! Reads page state from the `meta.pagination` block of a collection
//! response. Page size is not always served, so it is derived in order from:
//! `meta.pagination.pageSize`, the `page[size]` parameter of `links.self`,
//! the number of items on the page, and finally the service default.

use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::errors::{DiscosError, DiscosResult};

/// Page size the catalogue uses when the request does not set one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Position of one page within a paginated collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// 1-based.
    pub current_page: u32,
    /// Always greater than zero.
    pub page_size: u32,
    pub total_pages: u32,
    /// `None` when the service omits `totalCount`.
    pub total_items: Option<u64>,
}

impl PageState {
    pub fn is_last(&self) -> bool {
        self.current_page >= self.total_pages.max(1)
    }
}

/// Items of one page together with its page state.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionResult<T> {
    pub items: Vec<T>,
    pub page: PageState,
}

#[derive(Debug, Deserialize)]
struct PagedEnvelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    meta: Option<Meta>,
    #[serde(default)]
    links: Option<TopLinks>,
}

#[derive(Debug, Deserialize)]
struct Meta {
    #[serde(default)]
    pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Pagination {
    current_page: Option<u32>,
    total_pages: Option<u32>,
    total_count: Option<u64>,
    page_size: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct TopLinks {
    #[serde(rename = "self")]
    self_link: Option<String>,
}

/// Extracts [`PageState`] from a collection response body.
pub fn extract_page(body: &[u8]) -> DiscosResult<PageState> {
    let envelope: PagedEnvelope =
        serde_json::from_slice(body).map_err(|e| DiscosError::MalformedEnvelope {
            detail: e.to_string(),
        })?;

    let Some(pagination) = envelope.meta.and_then(|m| m.pagination) else {
        return Err(missing("no `meta.pagination` block"));
    };
    let current_page = pagination
        .current_page
        .ok_or_else(|| missing("`meta.pagination.currentPage` absent"))?;
    let total_pages = pagination
        .total_pages
        .ok_or_else(|| missing("`meta.pagination.totalPages` absent"))?;

    if current_page == 0 || current_page > total_pages.max(1) {
        return Err(missing(&format!(
            "currentPage {current_page} outside 1..={}",
            total_pages.max(1)
        )));
    }

    let item_count = envelope
        .data
        .as_ref()
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    let page_size = pagination
        .page_size
        .filter(|n| *n > 0)
        .or_else(|| {
            envelope
                .links
                .as_ref()
                .and_then(|l| l.self_link.as_deref())
                .and_then(page_size_from_link)
        })
        .or_else(|| u32::try_from(item_count).ok().filter(|n| *n > 0))
        .unwrap_or(DEFAULT_PAGE_SIZE);

    Ok(PageState {
        current_page,
        page_size,
        total_pages,
        total_items: pagination.total_count,
    })
}

fn missing(detail: &str) -> DiscosError {
    DiscosError::MissingPaginationMetadata {
        detail: detail.to_string(),
    }
}

/// Reads `page[size]` from a (possibly relative) link.
fn page_size_from_link(link: &str) -> Option<u32> {
    let base = Url::parse("http://localhost/").ok()?;
    let url = base.join(link).ok()?;
    url.query_pairs()
        .find(|(k, _)| k == "page[size]")
        .and_then(|(_, v)| v.parse::<u32>().ok())
        .filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(v: serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(&v).unwrap()
    }

    #[test]
    fn reads_pagination_and_derives_size_from_items() {
        let b = body(json!({
            "data": [{}, {}, {}, {}, {}],
            "meta": { "pagination": { "currentPage": 1, "totalPages": 3, "totalCount": 50 } }
        }));
        let page = extract_page(&b).unwrap();
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, Some(50));
        assert_eq!(page.page_size, 5);
        assert!(!page.is_last());
    }

    #[test]
    fn explicit_page_size_wins() {
        let b = body(json!({
            "data": [{}],
            "meta": { "pagination": { "currentPage": 4, "totalPages": 4, "pageSize": 30 } }
        }));
        let page = extract_page(&b).unwrap();
        assert_eq!(page.page_size, 30);
        assert_eq!(page.total_items, None);
        assert!(page.is_last());
    }

    #[test]
    fn page_size_from_self_link() {
        let b = body(json!({
            "data": [{}],
            "meta": { "pagination": { "currentPage": 2, "totalPages": 2 } },
            "links": { "self": "/api/objects?page%5Bnumber%5D=2&page%5Bsize%5D=25" }
        }));
        assert_eq!(extract_page(&b).unwrap().page_size, 25);
    }

    #[test]
    fn empty_collection_falls_back_to_default_size() {
        let b = body(json!({
            "data": [],
            "meta": { "pagination": { "currentPage": 1, "totalPages": 0, "totalCount": 0 } }
        }));
        let page = extract_page(&b).unwrap();
        assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(page.total_pages, 0);
        assert!(page.is_last());
    }

    #[test]
    fn single_resource_document_has_no_pagination() {
        let b = body(json!({ "data": { "type": "object", "id": "1" } }));
        assert!(matches!(
            extract_page(&b),
            Err(DiscosError::MissingPaginationMetadata { .. })
        ));
    }

    #[test]
    fn single_resource_with_meta_is_still_judged_by_pagination() {
        let b = body(json!({
            "data": { "type": "object", "id": "1" },
            "meta": { "pagination": { "currentPage": 1, "totalPages": 1 } }
        }));
        let page = extract_page(&b).unwrap();
        assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn partial_pagination_is_missing_metadata() {
        let b = body(json!({ "data": [], "meta": { "pagination": { "totalPages": 2 } } }));
        assert!(matches!(
            extract_page(&b),
            Err(DiscosError::MissingPaginationMetadata { .. })
        ));
    }

    #[test]
    fn current_page_beyond_total_is_rejected() {
        let b = body(json!({
            "data": [],
            "meta": { "pagination": { "currentPage": 5, "totalPages": 3 } }
        }));
        assert!(matches!(
            extract_page(&b),
            Err(DiscosError::MissingPaginationMetadata { .. })
        ));
    }
}
