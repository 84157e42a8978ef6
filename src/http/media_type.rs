//! # Media Types
//!
//! Parsed `Content-Type` and `Accept` values, and the [`HttpFactory`] seam that
//! produces them. The HTTP framework in front of this crate owns the real
//! request; all we need from it is header parsing.

use crate::error::ApiError;
use std::collections::BTreeMap;
use std::fmt;

/// The JSON:API media type.
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

const WILDCARD: &str = "*";
const QUALITY: &str = "q";

/// A media type such as `application/vnd.api+json; ext=bulk`.
///
/// Type, subtype and parameter names are compared case-insensitively and are
/// stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    main_type: String,
    sub_type: String,
    parameters: BTreeMap<String, String>,
}

impl MediaType {
    pub fn new(main_type: &str, sub_type: &str) -> Self {
        Self {
            main_type: main_type.to_ascii_lowercase(),
            sub_type: sub_type.to_ascii_lowercase(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn with_parameter(mut self, name: &str, value: impl Into<String>) -> Self {
        self.parameters.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn main_type(&self) -> &str {
        &self.main_type
    }

    pub fn sub_type(&self) -> &str {
        &self.sub_type
    }

    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    /// True when `self`, read as a media range, accepts `other`.
    ///
    /// `*` matches any type or subtype. Every parameter on the range must be
    /// present with the same value on `other`.
    pub fn matches(&self, other: &MediaType) -> bool {
        let type_ok = self.main_type == WILDCARD || self.main_type == other.main_type;
        let sub_ok = self.sub_type == WILDCARD || self.sub_type == other.sub_type;
        type_ok
            && sub_ok
            && self
                .parameters
                .iter()
                .all(|(name, value)| other.parameter(name) == Some(value.as_str()))
    }

    /// Ranks a media range: `*/*` < `type/*` < `type/subtype`, then by
    /// parameter count.
    pub fn precedence(&self) -> (u8, usize) {
        let level = if self.main_type == WILDCARD {
            0
        } else if self.sub_type == WILDCARD {
            1
        } else {
            2
        };
        (level, self.parameters.len())
    }

    pub fn is_wildcard(&self) -> bool {
        self.main_type == WILDCARD || self.sub_type == WILDCARD
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.main_type, self.sub_type)?;
        for (name, value) in &self.parameters {
            write!(f, "; {}={}", name, value)?;
        }
        Ok(())
    }
}

/// One entry of an `Accept` header.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptMediaType {
    pub media_type: MediaType,
    /// The `q` weight, between 0 and 1.
    pub quality: f32,
    /// Position in the header, used to break ties between equal weights.
    pub position: usize,
}

/// Factory for the HTTP values this crate needs to inspect.
pub trait HttpFactory: Send + Sync {
    /// Parses a single media type, e.g. a `Content-Type` header.
    fn parse_media_type(&self, value: &str) -> Result<MediaType, ApiError>;

    /// Parses an `Accept` header, ordered by descending quality.
    fn parse_accept_header(&self, header: &str) -> Result<Vec<AcceptMediaType>, ApiError> {
        let mut accepts = Vec::new();
        for (position, entry) in header.split(',').map(str::trim).enumerate() {
            if entry.is_empty() {
                continue;
            }
            let mut media_type = self.parse_media_type(entry)?;
            let quality = match media_type.parameters.remove(QUALITY) {
                Some(q) => q
                    .parse::<f32>()
                    .ok()
                    .filter(|q| (0.0..=1.0).contains(q))
                    .ok_or_else(|| ApiError::InvalidMediaType(entry.to_string()))?,
                None => 1.0,
            };
            accepts.push(AcceptMediaType { media_type, quality, position });
        }
        accepts.sort_by(|a, b| {
            b.quality
                .total_cmp(&a.quality)
                .then(a.position.cmp(&b.position))
        });
        Ok(accepts)
    }
}

/// Parses `type/subtype; name=value` strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHttpFactory;

impl HttpFactory for DefaultHttpFactory {
    fn parse_media_type(&self, value: &str) -> Result<MediaType, ApiError> {
        let invalid = || ApiError::InvalidMediaType(value.to_string());
        let mut parts = value.split(';').map(str::trim);

        let (main_type, sub_type) = parts
            .next()
            .and_then(|essence| essence.split_once('/'))
            .ok_or_else(invalid)?;
        let (main_type, sub_type) = (main_type.trim(), sub_type.trim());
        if main_type.is_empty() || sub_type.is_empty() {
            return Err(invalid());
        }

        let mut media_type = MediaType::new(main_type, sub_type);
        for parameter in parts.filter(|p| !p.is_empty()) {
            let (name, param_value) = parameter.split_once('=').ok_or_else(invalid)?;
            let param_value = param_value.trim().trim_matches('"');
            media_type = media_type.with_parameter(name.trim(), param_value);
        }
        Ok(media_type)
    }
}
