//! HTTP-facing configuration: the API factory and descriptor, paging keys,
//! media types and the request interpreter seam.

pub mod api;
pub mod api_factory;
pub mod media_type;
pub mod paging;
pub mod request;

pub use api::Api;
pub use api_factory::ApiFactory;
pub use media_type::{AcceptMediaType, DefaultHttpFactory, HttpFactory, MediaType, JSON_API_MEDIA_TYPE};
pub use paging::{PageParameters, PagingStrategy};
pub use request::{HttpMethod, RequestInterpreter};
