//! # JSON:API Mapping
//!
//! Everything between raw response bytes and typed resources.
//!
//! ## Contained Modules:
//!
//! - **`document`**: envelope and link shapes of the JSON:API subset in use.
//! - **`resolver`**: the Document Resolver, which dispatches attribute decoding
//!   on the resource discriminator.
//! - **`pagination`**: the Pagination Extractor for collection responses.

pub mod document;
pub mod pagination;
pub mod resolver;

pub use document::{Relationship, ResourceLinks};
pub use pagination::{extract_page, CollectionResult, PageState, DEFAULT_PAGE_SIZE};
pub use resolver::{resolve_many, resolve_many_as, resolve_single, resolve_single_as};
