//! # lib_discos
//!
//! Typed client core for the DISCOSweb catalogue of space objects, launches,
//! orbits and reentries, served as a read-only JSON:API.
//!
//! ## Purpose
//!
//! Turns `GET` calls against the catalogue into strongly typed resources:
//! the endpoint is looked up from the model kind, transient 429 and 502
//! responses are retried, and each document is decoded into the concrete
//! model named by its `type` discriminator.
//!
//! ## Contained Modules
//!
//! - **`client`**: [`DiscosClient`], the public entry point.
//! - **`configs`**: [`ClientConfig`] and its environment loader.
//! - **`errors`**: [`DiscosError`], one enum for every failure.
//! - **`jsonapi`**: document envelopes, the resolver and pagination.
//! - **`loggers`** (feature `loggers`): tracing subscriber bootstrap.
//! - **`models`**: the model kinds, discriminators and schemas.
//! - **`retrieve`**: the HTTP seam and the retrying transport.
//!
//! ## Testing
//!
//! `cargo test -p lib_discos --all-features` runs every unit test. The
//! `loggers` tests are compiled only with that feature, which a plain
//! workspace `cargo test` also enables through `project_tests`.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod client;
pub mod configs;
pub mod errors;
pub mod jsonapi;
#[cfg(feature = "loggers")]
pub mod loggers;
pub mod models;
pub mod retrieve;

pub use client::DiscosClient;
pub use configs::{ClientConfig, ConfigError};
pub use errors::{DiscosError, DiscosResult};
pub use jsonapi::{CollectionResult, PageState};
pub use models::*;
pub use retrieve::{HttpGet, RawResponse, ReqwestTransport, ResilientTransport, RetryPolicy};
pub use tokio_util::sync::CancellationToken;
