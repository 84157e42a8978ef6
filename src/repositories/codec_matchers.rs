//! # Codec Matcher Repository
//!
//! Holds the encoder/decoder configuration shared by every API and builds a
//! [`CodecMatcher`] per API, attaching that API's url prefix and schemas.

use crate::codec::{CodecMatcher, EncoderOptions, Encoding};
use crate::config::SchemaMap;
use crate::error::ApiError;
use crate::http::{HttpFactory, JSON_API_MEDIA_TYPE};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An entry of the `encoders` list: a bare media type, or one with options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EncoderConfig {
    MediaType(String),
    WithOptions {
        #[serde(rename = "media-type")]
        media_type: String,
        #[serde(flatten)]
        options: EncoderOptions,
    },
}

impl EncoderConfig {
    fn media_type(&self) -> &str {
        match self {
            Self::MediaType(media_type) | Self::WithOptions { media_type, .. } => media_type,
        }
    }

    fn options(&self) -> EncoderOptions {
        match self {
            Self::MediaType(_) => EncoderOptions::default(),
            Self::WithOptions { options, .. } => *options,
        }
    }
}

/// The `codec-matchers` section of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecMatchersConfig {
    #[serde(default = "default_encoders")]
    pub encoders: Vec<EncoderConfig>,
    #[serde(default = "default_decoders")]
    pub decoders: Vec<String>,
}

impl Default for CodecMatchersConfig {
    fn default() -> Self {
        Self {
            encoders: default_encoders(),
            decoders: default_decoders(),
        }
    }
}

fn default_encoders() -> Vec<EncoderConfig> {
    vec![EncoderConfig::MediaType(JSON_API_MEDIA_TYPE.to_string())]
}

fn default_decoders() -> Vec<String> {
    vec![JSON_API_MEDIA_TYPE.to_string()]
}

#[derive(Debug, Clone, Default)]
pub struct CodecMatcherRepository {
    config: CodecMatchersConfig,
}

impl CodecMatcherRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the encoder/decoder configuration.
    pub fn configure(&mut self, config: CodecMatchersConfig) {
        debug!(
            encoders = config.encoders.len(),
            decoders = config.decoders.len(),
            "Configuring codec matchers"
        );
        self.config = config;
    }

    pub fn config(&self) -> &CodecMatchersConfig {
        &self.config
    }

    /// Builds the matcher for one API.
    ///
    /// # Errors
    /// [`ApiError::InvalidMediaType`] if a configured media type does not parse.
    pub fn get_codec_matcher(
        &self,
        http_factory: &dyn HttpFactory,
        url_prefix: Option<&str>,
        schemas: &SchemaMap,
    ) -> Result<CodecMatcher, ApiError> {
        let encoders = self
            .config
            .encoders
            .iter()
            .map(|entry| -> Result<Encoding, ApiError> {
                Ok(Encoding {
                    media_type: http_factory.parse_media_type(entry.media_type())?,
                    options: entry.options(),
                })
            })
            .collect::<Result<Vec<_>, ApiError>>()?;

        let decoders = self
            .config
            .decoders
            .iter()
            .map(|media_type| http_factory.parse_media_type(media_type))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CodecMatcher::new(
            encoders,
            decoders,
            url_prefix.map(str::to_string),
            schemas.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::DefaultHttpFactory;
    use serde_json::json;

    #[test]
    fn test_defaults_to_json_api() {
        let repository = CodecMatcherRepository::new();
        let matcher = repository
            .get_codec_matcher(&DefaultHttpFactory, None, &SchemaMap::new())
            .unwrap();

        assert_eq!(matcher.encoders().len(), 1);
        assert_eq!(matcher.encoders()[0].media_type.to_string(), JSON_API_MEDIA_TYPE);
        assert_eq!(matcher.decoders()[0].to_string(), JSON_API_MEDIA_TYPE);
        assert_eq!(matcher.url_prefix(), None);
    }

    #[test]
    fn test_configure_from_json() {
        let config: CodecMatchersConfig = serde_json::from_value(json!({
            "encoders": [
                "application/vnd.api+json",
                {"media-type": "text/plain", "pretty": true, "depth": 3}
            ]
        }))
        .unwrap();
        assert_eq!(config.decoders, default_decoders());

        let mut repository = CodecMatcherRepository::new();
        repository.configure(config);

        let schemas = SchemaMap::from([("Post".to_string(), "Api\\Posts\\Schema".to_string())]);
        let matcher = repository
            .get_codec_matcher(&DefaultHttpFactory, Some("/api/v1"), &schemas)
            .unwrap();

        let plain = &matcher.encoders()[1];
        assert_eq!(plain.media_type.to_string(), "text/plain");
        assert_eq!(plain.options, EncoderOptions { pretty: true, depth: Some(3) });
        assert_eq!(matcher.url_prefix(), Some("/api/v1"));
        assert_eq!(matcher.schemas(), &schemas);
    }

    #[test]
    fn test_invalid_media_type() {
        let mut repository = CodecMatcherRepository::new();
        repository.configure(CodecMatchersConfig {
            encoders: vec![EncoderConfig::MediaType("not-a-media-type".into())],
            decoders: default_decoders(),
        });

        let err = repository
            .get_codec_matcher(&DefaultHttpFactory, None, &SchemaMap::new())
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidMediaType(_)));
    }
}
