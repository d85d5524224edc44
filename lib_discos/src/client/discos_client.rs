//! # Typed Catalogue Client
//!
//! The public entry point. Each call resolves the endpoint from the model
//! kind, fetches through the [`ResilientTransport`], and resolves the body
//! into typed resources.
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use lib_discos::{ClientConfig, DiscosClient, DiscosObject, Entity};
//!
//! let client = DiscosClient::new(&ClientConfig::new("my-token")?)?;
//! let object = client.get_single::<DiscosObject>("61272", "").await?;
//! let page = client
//!     .get_multiple_with_pagination::<Entity>("?filter=contains(name,'United')")
//!     .await?;
//! println!("{:?} / {} entities on page {}", object.attributes.name, page.items.len(), page.page.current_page);
//! # Ok(()) }
//! ```

use std::sync::Arc;

use bytes::Bytes;
use tokio_util::sync::CancellationToken;
use tracing::instrument;

use crate::configs::ClientConfig;
use crate::errors::{snippet, DiscosError, DiscosResult};
use crate::jsonapi::{self, CollectionResult};
use crate::models::{AnyModel, DiscosModel, ModelKind, Resource};
use crate::retrieve::{HttpGet, ReqwestTransport, ResilientTransport, RetryPolicy};

/// Client for the catalogue's read-only JSON:API.
///
/// Cheap to clone; clones share the connection pool. Calls are independent
/// and may run concurrently.
pub struct DiscosClient<H = ReqwestTransport> {
    transport: Arc<ResilientTransport<H>>,
    cancel: CancellationToken,
}

impl<H> Clone for DiscosClient<H> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            cancel: self.cancel.clone(),
        }
    }
}

impl DiscosClient<ReqwestTransport> {
    /// Builds a client over a pooled `reqwest` transport.
    pub fn new(config: &ClientConfig) -> DiscosResult<Self> {
        let http = ReqwestTransport::new(config)?;
        Ok(Self::with_transport(http, config.retry))
    }
}

impl<H: HttpGet> DiscosClient<H> {
    /// Builds a client over any [`HttpGet`] implementation.
    pub fn with_transport(http: H, retry: RetryPolicy) -> Self {
        Self {
            transport: Arc::new(ResilientTransport::new(http, retry)),
            cancel: CancellationToken::new(),
        }
    }

    /// A handle whose calls abort with [`DiscosError::Cancelled`] once `token` fires.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            cancel: token,
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.transport.policy()
    }

    /// Fetches one resource by id. `query` is appended verbatim.
    #[instrument(level = "debug", skip(self), fields(kind = %T::KIND))]
    pub async fn get_single<T: DiscosModel>(&self, id: &str, query: &str) -> DiscosResult<Resource<T>> {
        let uri = single_uri(T::KIND, id, query)?;
        let body = self.fetch_body(&uri).await?;
        in_context(jsonapi::resolve_single::<T>(&body), T::KIND, &uri, &body)
    }

    /// Fetches one page of a collection.
    #[instrument(level = "debug", skip(self), fields(kind = %T::KIND))]
    pub async fn get_multiple<T: DiscosModel>(&self, query: &str) -> DiscosResult<Vec<Resource<T>>> {
        let uri = collection_uri(T::KIND, query);
        let body = self.fetch_body(&uri).await?;
        in_context(jsonapi::resolve_many::<T>(&body), T::KIND, &uri, &body)
    }

    /// Fetches one page of a collection together with its page state.
    #[instrument(level = "debug", skip(self), fields(kind = %T::KIND))]
    pub async fn get_multiple_with_pagination<T: DiscosModel>(
        &self,
        query: &str,
    ) -> DiscosResult<CollectionResult<Resource<T>>> {
        let uri = collection_uri(T::KIND, query);
        let body = self.fetch_body(&uri).await?;
        let result = jsonapi::resolve_many::<T>(&body).and_then(|items| {
            let page = jsonapi::extract_page(&body)?;
            Ok(CollectionResult { items, page })
        });
        in_context(result, T::KIND, &uri, &body)
    }

    /// Kind-keyed [`Self::get_single`], for kinds only known at runtime.
    #[instrument(level = "debug", skip(self), fields(kind = %kind))]
    pub async fn get_single_by_kind(
        &self,
        kind: ModelKind,
        id: &str,
        query: &str,
    ) -> DiscosResult<Resource<AnyModel>> {
        let uri = single_uri(kind, id, query)?;
        let body = self.fetch_body(&uri).await?;
        in_context(jsonapi::resolve_single_as(kind, &body), kind, &uri, &body)
    }

    /// Kind-keyed [`Self::get_multiple`].
    #[instrument(level = "debug", skip(self), fields(kind = %kind))]
    pub async fn get_multiple_by_kind(
        &self,
        kind: ModelKind,
        query: &str,
    ) -> DiscosResult<Vec<Resource<AnyModel>>> {
        let uri = collection_uri(kind, query);
        let body = self.fetch_body(&uri).await?;
        in_context(jsonapi::resolve_many_as(kind, &body), kind, &uri, &body)
    }

    /// Kind-keyed [`Self::get_multiple_with_pagination`].
    #[instrument(level = "debug", skip(self), fields(kind = %kind))]
    pub async fn get_multiple_by_kind_with_pagination(
        &self,
        kind: ModelKind,
        query: &str,
    ) -> DiscosResult<CollectionResult<Resource<AnyModel>>> {
        let uri = collection_uri(kind, query);
        let body = self.fetch_body(&uri).await?;
        let result = jsonapi::resolve_many_as(kind, &body).and_then(|items| {
            let page = jsonapi::extract_page(&body)?;
            Ok(CollectionResult { items, page })
        });
        in_context(result, kind, &uri, &body)
    }

    /// Fetches and unwraps a successful body. A transient status that
    /// outlived its retries comes back as [`DiscosError::RetriesExhausted`]
    /// carrying the untouched response.
    async fn fetch_body(&self, uri: &str) -> DiscosResult<Bytes> {
        let response = self.transport.fetch(uri, &self.cancel).await?;
        if !response.status.is_success() {
            return Err(DiscosError::RetriesExhausted {
                uri: uri.to_string(),
                response: Box::new(response),
            });
        }
        Ok(response.body)
    }
}

/// Attaches the request to a failure from the resolve or pagination step.
fn in_context<R>(result: DiscosResult<R>, kind: ModelKind, uri: &str, body: &[u8]) -> DiscosResult<R> {
    result.map_err(|source| DiscosError::Resolve {
        uri: uri.to_string(),
        kind,
        body_snippet: snippet(body),
        source: Box::new(source),
    })
}

/// Ids must stay one segment below the endpoint.
fn single_uri(kind: ModelKind, id: &str, query: &str) -> DiscosResult<String> {
    let plain = id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if id.is_empty() || !plain || id == "." || id == ".." {
        return Err(DiscosError::InvalidId { id: id.to_string() });
    }
    Ok(format!("{}/{}{}", kind.endpoint(), id, query_suffix(query)))
}

fn collection_uri(kind: ModelKind, query: &str) -> String {
    format!("{}{}", kind.endpoint(), query_suffix(query))
}

/// The query is opaque; it only gains a leading `?` when the caller left it off.
fn query_suffix(query: &str) -> String {
    if query.is_empty() || query.starts_with('?') {
        query.to_string()
    } else {
        format!("?{query}")
    }
}
