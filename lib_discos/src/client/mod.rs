//! # Client Module
//!
//! The typed façade over the registry, the resilient transport and the
//! document resolver.

pub mod discos_client;

pub use discos_client::DiscosClient;
