//! # HTTP GET Primitive
//!
//! A thin asynchronous wrapper around `reqwest` that performs one GET against
//! the catalogue and hands back the status, headers and body untouched. It
//! never retries and never interprets the status; that is the job of
//! [`super::resilient::ResilientTransport`].

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use reqwest::header::{HeaderValue, ACCEPT, RETRY_AFTER};
use reqwest::Url;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::configs::ClientConfig;
use crate::errors::{DiscosError, DiscosResult};

/// Media type of JSON:API documents.
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// A complete HTTP response, body included.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The headers returned by the server.
    pub headers: HeaderMap,
    /// The full response body.
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Parses `Retry-After` as a delay in (possibly fractional) seconds.
    ///
    /// `Ok(None)` when the header is absent, `Err(raw)` when it is present
    /// but not a non-negative number of seconds.
    pub fn retry_after(&self) -> Result<Option<Duration>, String> {
        let Some(value) = self.headers.get(RETRY_AFTER) else {
            return Ok(None);
        };
        let raw = value.to_str().map_err(|_| format!("{value:?}"))?.trim();

        if let Ok(secs) = raw.parse::<u64>() {
            return Ok(Some(Duration::from_secs(secs)));
        }
        raw.parse::<f64>()
            .ok()
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
            .map(Some)
            .ok_or_else(|| raw.to_string())
    }
}

/// One GET request, relative to some base URL.
///
/// The production implementation is [`ReqwestTransport`]; tests substitute
/// scripted responses.
#[async_trait]
pub trait HttpGet: Send + Sync {
    async fn get(&self, uri: &str) -> DiscosResult<RawResponse>;
}

#[async_trait]
impl<H: HttpGet + ?Sized> HttpGet for Arc<H> {
    async fn get(&self, uri: &str) -> DiscosResult<RawResponse> {
        (**self).get(uri).await
    }
}

/// Pooled `reqwest` client bound to the catalogue base URL.
///
/// `reqwest::Client` keeps its connection pool behind an `Arc`, so one
/// instance is shared by every concurrent call.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    /// The underlying pooled client.
    inner: reqwest::Client,
    /// The base URL to which all relative paths are joined.
    base_url: Url,
    /// Bearer token sent on every request.
    api_key: String,
}

impl ReqwestTransport {
    /// Builds the pooled client from configuration.
    ///
    /// # Errors
    /// Returns [`DiscosError::Network`] if the TLS backend cannot be initialised.
    pub fn new(config: &ClientConfig) -> DiscosResult<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            inner,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl HttpGet for ReqwestTransport {
    async fn get(&self, uri: &str) -> DiscosResult<RawResponse> {
        // 1. Construct the full absolute URL
        let full_url = self
            .base_url
            .join(uri)
            .map_err(|source| DiscosError::InvalidUri {
                uri: uri.to_string(),
                source,
            })?;

        // 2. Execute with bearer authentication
        let response = self
            .inner
            .get(full_url)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, HeaderValue::from_static(JSON_API_MEDIA_TYPE))
            .send()
            .await?;

        // 3. Capture response metadata, then the whole body
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        debug!(uri, status = status.as_u16(), bytes = body.len(), "GET completed");
        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_retry_after(value: &str) -> RawResponse {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_str(value).unwrap());
        RawResponse::new(StatusCode::TOO_MANY_REQUESTS, headers, Bytes::new())
    }

    #[test]
    fn retry_after_integer_seconds() {
        assert_eq!(
            with_retry_after("2").retry_after(),
            Ok(Some(Duration::from_secs(2)))
        );
        assert_eq!(
            with_retry_after(" 17 ").retry_after(),
            Ok(Some(Duration::from_secs(17)))
        );
    }

    #[test]
    fn retry_after_fractional_seconds() {
        assert_eq!(
            with_retry_after("1.5").retry_after(),
            Ok(Some(Duration::from_millis(1500)))
        );
    }

    #[test]
    fn retry_after_too_large_is_unusable() {
        assert_eq!(with_retry_after("1e20").retry_after(), Err("1e20".to_string()));
        assert!(with_retry_after("inf").retry_after().is_err());
    }

    #[test]
    fn retry_after_absent_or_invalid() {
        let none = RawResponse::new(StatusCode::TOO_MANY_REQUESTS, HeaderMap::new(), Bytes::new());
        assert_eq!(none.retry_after(), Ok(None));
        assert!(with_retry_after("-3").retry_after().is_err());
        assert!(with_retry_after("NaN").retry_after().is_err());
        assert!(with_retry_after("Wed, 21 Oct 2015 07:28:00 GMT").retry_after().is_err());
    }
}
