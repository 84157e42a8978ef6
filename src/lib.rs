//! # JSON:API Glue
//!
//! > **Configuration glue for versioned JSON:API resources.**
//!
//! This crate wires together the pieces a JSON:API server needs per API version
//! (schemas, codec matchers, paging keys, url prefix, free-form options) and
//! resolves them into an immutable [`Api`](http::Api) descriptor. The typed view
//! over parsed JSON:API documents lives in the companion [`jsonapi_object`] crate.
//!
//! It does not encode or decode JSON:API, and it does not serve HTTP. Those
//! belong to the engine and framework around it, which this crate only sees
//! through traits.
//!
//! ## Core Concepts
//!
//! ### Namespaces
//! Each API version is a *namespace* (`v1`, `v2`, ...) with its own
//! [`ApiConfig`](config::ApiConfig). Namespaces must be configured before they
//! are resolved; asking for an unknown one is an
//! [`ApiError::NamespaceNotFound`](error::ApiError::NamespaceNotFound).
//!
//! ### Defaults plus overrides
//! Schemas come from the [`SchemasRepository`](repositories::SchemasRepository):
//! a `defaults` set merged with the namespace's own set. Paging keys default to
//! `page[number]` / `page[size]`. Anything in a namespace's config that is not
//! one of `schemas`, `paging`, `url-prefix` or `supported-ext` passes through
//! untouched into [`Api::options`](http::Api::options).
//!
//! ## Module Tour
//!
//! ### 1. The Factory ([`http`])
//! - **Role**: Registers namespaces and builds [`Api`](http::Api) descriptors.
//! - **Key items**: [`ApiFactory`](http::ApiFactory), [`PagingStrategy`](http::PagingStrategy),
//!   [`RequestInterpreter`](http::RequestInterpreter), [`HttpFactory`](http::HttpFactory).
//!
//! ### 2. Shared Configuration ([`repositories`], [`codec`], [`config`])
//! - **Role**: Schema sets, encoder/decoder media types, and the serde models of the config file.
//!
//! ### 3. Data Access ([`store`])
//! - **Role**: Routes resource identifiers to the [`StoreAdapter`](store::StoreAdapter) for their type.
//!
//! ### 4. Wiring ([`runtime`])
//! - **Role**: Builds everything from an [`AppConfig`](config::AppConfig) at startup and sets up tracing.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=debug cargo run -- config/jsonapi.json
//! ```
//!
//! ## Testing
//!
//! See the [`mock`] module for a fixed request interpreter and an
//! expectation-driven store adapter.

pub mod codec;
pub mod config;
pub mod error;
pub mod http;
pub mod mock;
pub mod repositories;
pub mod runtime;
pub mod store;

pub use error::ApiError;
