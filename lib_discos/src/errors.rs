//! # Error Taxonomy
//!
//! Every failure the client can surface is a variant of [`DiscosError`].
//! Transient failures (429, 502) never appear here while retries remain; the
//! transport hands the final raw response back and the typed client wraps it
//! in [`DiscosError::RetriesExhausted`] so callers can still inspect it.

use http::StatusCode;
use thiserror::Error;

use crate::models::{ModelKind, ResourceType};
use crate::retrieve::RawResponse;

/// Maximum number of body characters kept in error messages.
pub const BODY_SNIPPET_LEN: usize = 512;

/// Shorthand used across the crate.
pub type DiscosResult<T> = Result<T, DiscosError>;

/// Errors produced by the registry, transport, resolver and client.
#[derive(Debug, Error)]
pub enum DiscosError {
    /// A model kind name has no endpoint mapping.
    #[error("Unregistered model kind: '{name}'")]
    UnregisteredKind {
        /// The name that failed to resolve.
        name: String,
    },

    /// A 429 or 502 persisted through every retry. The last response is kept.
    #[error("Retries exhausted for {uri}: last status {}", .response.status)]
    RetriesExhausted {
        /// Request path relative to the base URL.
        uri: String,
        /// The final response, returned verbatim.
        response: Box<RawResponse>,
    },

    /// Any non-2xx status that is not retried.
    #[error("HTTP {status} for {uri}: {body_snippet}")]
    Http {
        /// Request path relative to the base URL.
        uri: String,
        /// Status returned by the service.
        status: StatusCode,
        /// Leading part of the response body.
        body_snippet: String,
    },

    /// The service rate limited us without a usable `Retry-After` header.
    #[error("HTTP 429 for {uri} without a usable Retry-After header (got {value:?})")]
    MissingRetryAfter {
        /// Request path relative to the base URL.
        uri: String,
        /// Raw header value, if one was present but unparsable.
        value: Option<String>,
    },

    /// A resource discriminator with no registered schema.
    #[error("Unknown resource type '{discriminator}'")]
    UnknownResourceType {
        /// The `type` string found in the document.
        discriminator: String,
    },

    /// A registered discriminator that the requested kind cannot hold.
    #[error("Resource {id} has type '{found}' which is not a {expected}")]
    ResourceTypeMismatch {
        /// Kind the caller asked for.
        expected: ModelKind,
        /// Discriminator actually returned.
        found: ResourceType,
        /// Resource id.
        id: String,
    },

    /// The attribute bag does not match the schema of its discriminator.
    #[error("Invalid attributes for {discriminator} {id}: {source}")]
    Attributes {
        /// Discriminator whose schema rejected the attributes.
        discriminator: ResourceType,
        /// Resource id.
        id: String,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// A collection response without pagination metadata.
    #[error("Missing pagination metadata: {detail}")]
    MissingPaginationMetadata {
        /// What was missing or inconsistent.
        detail: String,
    },

    /// The body is not JSON or lacks the `data` member.
    #[error("Malformed JSON:API envelope: {detail}")]
    MalformedEnvelope {
        /// Parser message or structural complaint.
        detail: String,
    },

    /// A 2xx body that could not be resolved, with the request it answered.
    #[error("Failed to resolve {kind} response from {uri}: {source} (body: {body_snippet})")]
    Resolve {
        /// Request path relative to the base URL.
        uri: String,
        /// Kind the caller asked for.
        kind: ModelKind,
        /// Leading part of the response body.
        body_snippet: String,
        /// The resolver or pagination failure.
        #[source]
        source: Box<DiscosError>,
    },

    /// A resource id that is not a single plain path segment.
    #[error("Invalid resource id '{id}'")]
    InvalidId {
        /// The rejected id.
        id: String,
    },

    /// The request path could not be joined onto the base URL.
    #[error("Invalid request URI '{uri}': {source}")]
    InvalidUri {
        /// Offending path.
        uri: String,
        /// Parse failure.
        #[source]
        source: url::ParseError,
    },

    /// Connection, TLS, timeout or body read failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The call was cancelled through its cancellation token.
    #[error("Request cancelled")]
    Cancelled,
}

impl DiscosError {
    /// Builds an [`DiscosError::Http`] from a finished response.
    pub fn http(uri: impl Into<String>, response: &RawResponse) -> Self {
        Self::Http {
            uri: uri.into(),
            status: response.status,
            body_snippet: snippet(&response.body),
        }
    }

    /// HTTP status attached to the error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::RetriesExhausted { response, .. } => Some(response.status),
            Self::MissingRetryAfter { .. } => Some(StatusCode::TOO_MANY_REQUESTS),
            Self::Network(e) => e.status(),
            _ => None,
        }
    }

    /// The underlying failure, looking through [`DiscosError::Resolve`].
    pub fn cause(&self) -> &DiscosError {
        match self {
            Self::Resolve { source, .. } => source.cause(),
            other => other,
        }
    }

    /// True for the rate-limit / gateway classes that outlived their retries.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::RetriesExhausted { .. })
    }

    /// True when the call was cancelled rather than failed.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Lossy UTF-8 prefix of a body, cut on a character boundary.
pub(crate) fn snippet(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    match text.char_indices().nth(BODY_SNIPPET_LEN) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.into_owned(),
    }
}
