//! Scripted [`HttpGet`] for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use http::header::{HeaderValue, RETRY_AFTER};
use http::{HeaderMap, StatusCode};
use tokio::time::Instant;

use crate::errors::DiscosResult;
use crate::retrieve::http_get::{HttpGet, RawResponse};

/// Replays canned responses in order and records when and where each call went.
pub(crate) struct ScriptedHttp {
    script: Mutex<VecDeque<RawResponse>>,
    log: Mutex<Vec<(String, Instant)>>,
}

impl ScriptedHttp {
    pub(crate) fn new(script: Vec<RawResponse>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            log: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.log.lock().unwrap().len()
    }

    pub(crate) fn call_times(&self) -> Vec<Instant> {
        self.log.lock().unwrap().iter().map(|(_, t)| *t).collect()
    }

    pub(crate) fn uris(&self) -> Vec<String> {
        self.log.lock().unwrap().iter().map(|(u, _)| u.clone()).collect()
    }
}

#[async_trait]
impl HttpGet for ScriptedHttp {
    async fn get(&self, uri: &str) -> DiscosResult<RawResponse> {
        self.log.lock().unwrap().push((uri.to_string(), Instant::now()));
        let next = self.script.lock().unwrap().pop_front();
        Ok(next.unwrap_or_else(|| panic!("no scripted response left for {uri}")))
    }
}

pub(crate) fn ok_json(body: &str) -> RawResponse {
    RawResponse::new(StatusCode::OK, HeaderMap::new(), body.to_string())
}

pub(crate) fn rate_limited(retry_after: &str) -> RawResponse {
    let mut headers = HeaderMap::new();
    headers.insert(RETRY_AFTER, HeaderValue::from_str(retry_after).unwrap());
    RawResponse::new(StatusCode::TOO_MANY_REQUESTS, headers, "slow down")
}

pub(crate) fn gateway_error() -> RawResponse {
    RawResponse::new(StatusCode::BAD_GATEWAY, HeaderMap::new(), "<html>502 Bad Gateway</html>")
}

pub(crate) fn not_found() -> RawResponse {
    RawResponse::new(
        StatusCode::NOT_FOUND,
        HeaderMap::new(),
        r#"{"errors":[{"status":"404","detail":"not found"}]}"#,
    )
}
