//! # Data Retrieval Module
//!
//! HTTP access to the catalogue, in two layers:
//!
//! - **`http_get`**: [`HttpGet`], the single-request seam, and its production
//!   implementation [`ReqwestTransport`] (pooled `reqwest` client, bearer auth).
//! - **`resilient`**: [`ResilientTransport`], which retries 429 and 502
//!   responses within the bounds of a [`RetryPolicy`].
//!
//! Suspension happens only inside these two layers: the network exchange
//! and the retry waits.

pub mod http_get;
pub mod resilient;

#[cfg(test)]
pub(crate) mod testing;

pub use http_get::{HttpGet, RawResponse, ReqwestTransport, JSON_API_MEDIA_TYPE};
pub use resilient::{ResilientTransport, RetryPolicy};
