//! # Schemas Repository
//!
//! Named sets of schema mappings. The `defaults` set is the base every other
//! set is merged onto, so a version only lists the schemas it changes.

use crate::config::SchemaMap;
use crate::error::ApiError;
use std::collections::BTreeMap;
use tracing::debug;

/// Name of the base schema set.
pub const DEFAULTS: &str = "defaults";

#[derive(Debug, Clone, Default)]
pub struct SchemasRepository {
    sets: BTreeMap<String, SchemaMap>,
}

impl SchemasRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers schema sets. Entries are merged into any existing set of the same name.
    pub fn configure(&mut self, config: BTreeMap<String, SchemaMap>) {
        for (name, schemas) in config {
            debug!(set = %name, schemas = schemas.len(), "Configuring schemas");
            self.sets.entry(name).or_default().extend(schemas);
        }
    }

    pub fn has_schemas(&self, name: &str) -> bool {
        name == DEFAULTS || self.sets.contains_key(name)
    }

    pub fn defaults(&self) -> SchemaMap {
        self.sets.get(DEFAULTS).cloned().unwrap_or_default()
    }

    /// The defaults merged with the named set; named entries win.
    ///
    /// # Errors
    /// [`ApiError::SchemasNotFound`] if no set with that name was configured.
    pub fn get_schemas(&self, name: &str) -> Result<SchemaMap, ApiError> {
        if name == DEFAULTS {
            return Ok(self.defaults());
        }
        let named = self
            .sets
            .get(name)
            .ok_or_else(|| ApiError::SchemasNotFound(name.to_string()))?;
        Ok(self.merge_defaults(named))
    }

    /// The defaults with `overrides` applied on top.
    pub fn merge_defaults(&self, overrides: &SchemaMap) -> SchemaMap {
        let mut schemas = self.defaults();
        schemas.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        schemas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> SchemaMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn repository() -> SchemasRepository {
        let mut repository = SchemasRepository::new();
        repository.configure(BTreeMap::from([
            (
                DEFAULTS.to_string(),
                map(&[
                    ("Person", "Api\\People\\Schema"),
                    ("Post", "Api\\Posts\\Schema"),
                ]),
            ),
            ("v1".to_string(), SchemaMap::new()),
            ("v2".to_string(), map(&[("Person", "Api\\People\\V2\\Schema")])),
        ]));
        repository
    }

    #[test]
    fn test_defaults() {
        let schemas = repository().get_schemas(DEFAULTS).unwrap();
        assert_eq!(schemas.len(), 2);
        assert_eq!(schemas["Person"], "Api\\People\\Schema");
    }

    #[test]
    fn test_named_set_overrides_defaults() {
        let repository = repository();
        assert_eq!(repository.get_schemas("v1").unwrap(), repository.defaults());

        let v2 = repository.get_schemas("v2").unwrap();
        assert_eq!(v2["Person"], "Api\\People\\V2\\Schema");
        assert_eq!(v2["Post"], "Api\\Posts\\Schema");
    }

    #[test]
    fn test_unknown_set() {
        let err = repository().get_schemas("v3").unwrap_err();
        assert!(matches!(err, ApiError::SchemasNotFound(name) if name == "v3"));
    }

    #[test]
    fn test_configure_merges() {
        let mut repository = repository();
        repository.configure(BTreeMap::from([(
            "v2".to_string(),
            map(&[("Comment", "Api\\Comments\\V2\\Schema")]),
        )]));

        let v2 = repository.get_schemas("v2").unwrap();
        assert_eq!(v2["Person"], "Api\\People\\V2\\Schema");
        assert_eq!(v2["Comment"], "Api\\Comments\\V2\\Schema");
        assert!(repository.has_schemas("v2"));
        assert!(!repository.has_schemas("v9"));
    }
}
