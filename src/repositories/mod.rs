//! Repositories of shared configuration that every API draws from.

pub mod codec_matchers;
pub mod schemas;

pub use codec_matchers::{CodecMatcherRepository, CodecMatchersConfig, EncoderConfig};
pub use schemas::{SchemasRepository, DEFAULTS};
