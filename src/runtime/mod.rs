//! Startup wiring and observability.
//!
//! # Main Components
//!
//! - [`ApiSystem`] - builds the repositories and the [`ApiFactory`](crate::http::ApiFactory) from an [`AppConfig`](crate::config::AppConfig)
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod api_system;
pub mod tracing;

pub use self::api_system::*;
pub use self::tracing::*;
