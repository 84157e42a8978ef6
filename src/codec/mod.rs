//! # Codec Matching
//!
//! A [`CodecMatcher`] decides which configured encoder answers a request's
//! `Accept` header and which decoder reads its `Content-Type`. The encoders and
//! decoders themselves belong to the JSON:API engine; here they are only media
//! types plus the options the engine should be called with.

use crate::config::SchemaMap;
use crate::http::{AcceptMediaType, MediaType};
use serde::{Deserialize, Serialize};

/// Options handed to the encoder when it is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderOptions {
    #[serde(default)]
    pub pretty: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
}

/// A configured encoder: the media type it produces and how to call it.
#[derive(Debug, Clone, PartialEq)]
pub struct Encoding {
    pub media_type: MediaType,
    pub options: EncoderOptions,
}

/// Content negotiation for one API.
#[derive(Debug, Clone, PartialEq)]
pub struct CodecMatcher {
    encoders: Vec<Encoding>,
    decoders: Vec<MediaType>,
    url_prefix: Option<String>,
    schemas: SchemaMap,
}

impl CodecMatcher {
    pub fn new(
        encoders: Vec<Encoding>,
        decoders: Vec<MediaType>,
        url_prefix: Option<String>,
        schemas: SchemaMap,
    ) -> Self {
        Self {
            encoders,
            decoders,
            url_prefix,
            schemas,
        }
    }

    pub fn encoders(&self) -> &[Encoding] {
        &self.encoders
    }

    pub fn decoders(&self) -> &[MediaType] {
        &self.decoders
    }

    /// The url prefix encoders use when writing links.
    pub fn url_prefix(&self) -> Option<&str> {
        self.url_prefix.as_deref()
    }

    /// The schemas encoders are built with.
    pub fn schemas(&self) -> &SchemaMap {
        &self.schemas
    }

    /// Picks the encoder for a parsed `Accept` header.
    ///
    /// Each encoder takes the quality of the most specific range that matches
    /// it, so `text/*;q=0, text/plain` still accepts `text/plain`. Encoders at
    /// `q=0` are refused. The rest rank by quality, then by the position of
    /// their range in the header, then by configured order.
    pub fn match_encoder(&self, accepts: &[AcceptMediaType]) -> Option<&Encoding> {
        self.encoders
            .iter()
            .enumerate()
            .filter_map(|(order, encoding)| {
                let range = most_specific(accepts, &encoding.media_type)?;
                (range.quality > 0.0).then_some((range.quality, range.position, order, encoding))
            })
            .min_by(|a, b| {
                b.0.total_cmp(&a.0)
                    .then(a.1.cmp(&b.1))
                    .then(a.2.cmp(&b.2))
            })
            .map(|(.., encoding)| encoding)
    }

    /// Picks the decoder for a parsed `Content-Type`.
    pub fn match_decoder(&self, content_type: &MediaType) -> Option<&MediaType> {
        self.decoders.iter().find(|d| *d == content_type)
    }
}

fn most_specific<'a>(
    accepts: &'a [AcceptMediaType],
    media_type: &MediaType,
) -> Option<&'a AcceptMediaType> {
    accepts
        .iter()
        .filter(|a| a.media_type.matches(media_type))
        .fold(None, |best: Option<&AcceptMediaType>, a| match best {
            Some(b) if b.media_type.precedence() >= a.media_type.precedence() => Some(b),
            _ => Some(a),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{DefaultHttpFactory, HttpFactory, JSON_API_MEDIA_TYPE};

    fn media(value: &str) -> MediaType {
        DefaultHttpFactory.parse_media_type(value).unwrap()
    }

    fn accept(header: &str) -> Vec<AcceptMediaType> {
        DefaultHttpFactory.parse_accept_header(header).unwrap()
    }

    fn matcher() -> CodecMatcher {
        CodecMatcher::new(
            vec![
                Encoding {
                    media_type: media(JSON_API_MEDIA_TYPE),
                    options: EncoderOptions::default(),
                },
                Encoding {
                    media_type: media("text/plain"),
                    options: EncoderOptions { pretty: true, depth: None },
                },
            ],
            vec![media(JSON_API_MEDIA_TYPE)],
            Some("/api/v1".into()),
            SchemaMap::new(),
        )
    }

    #[test]
    fn test_exact_accept() {
        let matcher = matcher();
        let encoding = matcher.match_encoder(&accept("text/plain")).unwrap();
        assert_eq!(encoding.media_type, media("text/plain"));
        assert!(encoding.options.pretty);
    }

    #[test]
    fn test_wildcard_prefers_configured_order() {
        let matcher = matcher();
        let encoding = matcher.match_encoder(&accept("*/*")).unwrap();
        assert_eq!(encoding.media_type, media(JSON_API_MEDIA_TYPE));

        let encoding = matcher.match_encoder(&accept("text/*")).unwrap();
        assert_eq!(encoding.media_type, media("text/plain"));
    }

    #[test]
    fn test_quality_ordering_and_exclusion() {
        let matcher = matcher();
        let encoding = matcher
            .match_encoder(&accept("application/vnd.api+json;q=0.1, text/plain"))
            .unwrap();
        assert_eq!(encoding.media_type, media("text/plain"));

        let encoding = matcher
            .match_encoder(&accept("*/*, application/vnd.api+json;q=0"))
            .unwrap();
        assert_eq!(encoding.media_type, media("text/plain"));
    }

    #[test]
    fn test_most_specific_range_decides() {
        let matcher = matcher();
        let encoding = matcher
            .match_encoder(&accept("text/*;q=0, text/plain"))
            .unwrap();
        assert_eq!(encoding.media_type, media("text/plain"));

        let encoding = matcher
            .match_encoder(&accept("text/plain;q=0, */*;q=0.5"))
            .unwrap();
        assert_eq!(encoding.media_type, media(JSON_API_MEDIA_TYPE));

        assert!(matcher
            .match_encoder(&accept("text/*;q=0, application/*;q=0"))
            .is_none());
    }

    #[test]
    fn test_no_acceptable_encoder() {
        let matcher = matcher();
        assert!(matcher.match_encoder(&accept("text/html")).is_none());
        assert!(matcher
            .match_encoder(&accept("application/vnd.api+json; ext=bulk"))
            .is_none());
        assert!(matcher.match_encoder(&[]).is_none());
    }

    #[test]
    fn test_match_decoder() {
        let matcher = matcher();
        assert!(matcher.match_decoder(&media(JSON_API_MEDIA_TYPE)).is_some());
        assert!(matcher.match_decoder(&media("application/json")).is_none());
        assert!(matcher
            .match_decoder(&media("application/vnd.api+json; ext=bulk"))
            .is_none());
        assert_eq!(matcher.url_prefix(), Some("/api/v1"));
    }
}
