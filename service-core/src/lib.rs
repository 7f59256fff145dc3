//! service-core: Shared infrastructure for the gateway and maintenance crates.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;

