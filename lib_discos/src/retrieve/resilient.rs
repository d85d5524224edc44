//! # Resilient Transport
//!
//! Wraps an [`HttpGet`] in a bounded retry loop for the two failure classes
//! the catalogue signals as transient:
//!
//! | Status | Wait before retry | After `max_retries` |
//! |--------|-------------------|---------------------|
//! | 429 | `Retry-After` seconds (header required) | last response returned as `Ok` |
//! | 502 | fixed `gateway_delay_secs` | last response returned as `Ok` |
//! | other non-2xx | none, fails immediately | n/a |
//!
//! Retry state lives on the stack of a single call. Concurrent calls each
//! observe and back off from a 429 independently; there is no shared
//! cool-down window.

use std::time::Duration;

use http::StatusCode;
use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

use crate::errors::{DiscosError, DiscosResult};
use crate::retrieve::http_get::{HttpGet, RawResponse};

/// Bounds of the retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RetryPolicy {
    /// Retries after the first attempt; 5 means at most 6 requests.
    pub max_retries: u32,
    /// Fixed wait after a 502, in seconds.
    pub gateway_delay_secs: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            gateway_delay_secs: 5,
        }
    }
}

impl RetryPolicy {
    pub fn gateway_delay(&self) -> Duration {
        Duration::from_secs(self.gateway_delay_secs)
    }
}

/// Classification of one attempt's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Success,
    RateLimited,
    GatewayError,
    Fatal,
}

fn classify(status: StatusCode) -> Outcome {
    match status {
        s if s.is_success() => Outcome::Success,
        StatusCode::TOO_MANY_REQUESTS => Outcome::RateLimited,
        StatusCode::BAD_GATEWAY => Outcome::GatewayError,
        _ => Outcome::Fatal,
    }
}

/// GET with retries on rate limiting and gateway errors.
#[derive(Debug, Clone)]
pub struct ResilientTransport<H> {
    http: H,
    policy: RetryPolicy,
}

impl<H: HttpGet> ResilientTransport<H> {
    pub fn new(http: H, policy: RetryPolicy) -> Self {
        Self { http, policy }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    /// Fetches `uri`, masking transient failures up to the retry bound.
    ///
    /// Returns `Ok` with a 2xx response, or with the final 429/502 response
    /// once retries are exhausted. Any other status fails immediately with
    /// [`DiscosError::Http`]; a 429 lacking a usable `Retry-After` fails with
    /// [`DiscosError::MissingRetryAfter`]. Cancelling `cancel` aborts an
    /// in-flight request or wait with [`DiscosError::Cancelled`].
    pub async fn fetch(&self, uri: &str, cancel: &CancellationToken) -> DiscosResult<RawResponse> {
        let mut retries: u32 = 0;

        loop {
            debug!(uri, attempt = retries + 1, "Requesting");
            let response = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(DiscosError::Cancelled),
                res = self.http.get(uri) => res?,
            };

            let outcome = classify(response.status);
            match outcome {
                Outcome::Success => return Ok(response),
                Outcome::Fatal => {
                    error!(uri, status = response.status.as_u16(), "Non-transient HTTP failure");
                    return Err(DiscosError::http(uri, &response));
                }
                Outcome::RateLimited | Outcome::GatewayError => {}
            }

            if retries >= self.policy.max_retries {
                error!(
                    uri,
                    status = response.status.as_u16(),
                    retries,
                    "Retries exhausted, returning last response"
                );
                return Ok(response);
            }

            let wait = if outcome == Outcome::RateLimited {
                match response.retry_after() {
                    Ok(Some(wait)) => wait,
                    Ok(None) => {
                        error!(uri, "Rate limited without Retry-After");
                        return Err(DiscosError::MissingRetryAfter {
                            uri: uri.to_string(),
                            value: None,
                        });
                    }
                    Err(raw) => {
                        error!(uri, retry_after = %raw, "Rate limited with unusable Retry-After");
                        return Err(DiscosError::MissingRetryAfter {
                            uri: uri.to_string(),
                            value: Some(raw),
                        });
                    }
                }
            } else {
                self.policy.gateway_delay()
            };

            retries += 1;
            warn!(
                uri,
                status = response.status.as_u16(),
                wait_secs = wait.as_secs_f64(),
                retry = retries,
                "Transient failure, waiting before retry"
            );

            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(DiscosError::Cancelled),
                _ = sleep(wait) => {}
            }
        }
    }
}
