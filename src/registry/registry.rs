//! In-memory schema registry
//!
//! Holds named schema definitions and hands out empty-record templates.
//! Registration enforces name uniqueness; a failed registration leaves the
//! existing entry intact.

use std::collections::HashMap;
use std::fmt;

use super::errors::{RegistryError, RegistryResult};
use super::types::{Record, Schema};

/// Registry of named schema definitions.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, Schema>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from a set of schemas.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateSchema` if two schemas share a name.
    pub fn with_schemas(schemas: impl IntoIterator<Item = Schema>) -> RegistryResult<Self> {
        let mut registry = Self::new();
        for schema in schemas {
            registry.register(schema)?;
        }
        Ok(registry)
    }

    /// Registers a schema under its name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateSchema` if the name is already
    /// registered. The first registration is left untouched.
    pub fn register(&mut self, schema: Schema) -> RegistryResult<()> {
        if self.schemas.contains_key(&schema.name) {
            return Err(RegistryError::DuplicateSchema(schema.name));
        }
        self.schemas.insert(schema.name.clone(), schema);
        Ok(())
    }

    /// Gets a schema by name. Does not mutate registry state.
    pub fn lookup(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// Checks whether a schema name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Returns a record template for `name` with every declared field set to
    /// the null marker, or `None` if the name is unregistered.
    pub fn empty_record(&self, name: &str) -> Option<Record> {
        self.lookup(name).map(Schema::empty_record)
    }

    /// Returns all registered schemas.
    pub fn all_schemas(&self) -> impl Iterator<Item = &Schema> {
        self.schemas.values()
    }

    /// Returns the number of registered schemas.
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl fmt::Display for SchemaRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sorted so the listing is deterministic
        let mut names: Vec<&String> = self.schemas.keys().collect();
        names.sort();
        for name in names {
            write!(f, "{}", self.schemas[name])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::FieldType;
    use serde_json::Value;

    fn sample_schema() -> Schema {
        Schema::from_tags("users", [("name", "str"), ("age", "int")]).unwrap()
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = SchemaRegistry::new();
        registry.register(sample_schema()).unwrap();

        let schema = registry.lookup("users").unwrap();
        assert_eq!(schema.name, "users");
        assert_eq!(schema.field("age"), Some(FieldType::Int));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = SchemaRegistry::new();
        registry.register(sample_schema()).unwrap();

        let second = Schema::from_tags("users", [("other", "bool")]).unwrap();
        let result = registry.register(second);
        assert_eq!(result, Err(RegistryError::DuplicateSchema("users".into())));

        // First registration intact
        assert_eq!(
            registry.lookup("users").unwrap().field("name"),
            Some(FieldType::Str)
        );
        assert_eq!(registry.schema_count(), 1);
    }

    #[test]
    fn test_with_schemas_rejects_duplicates() {
        let result = SchemaRegistry::with_schemas([sample_schema(), sample_schema()]);
        assert!(matches!(result, Err(RegistryError::DuplicateSchema(_))));
    }

    #[test]
    fn test_lookup_unknown_is_none() {
        let registry = SchemaRegistry::new();
        assert!(registry.lookup("ghost").is_none());
        assert!(!registry.contains("ghost"));
        assert!(registry.empty_record("ghost").is_none());
    }

    #[test]
    fn test_empty_record_template() {
        let mut registry = SchemaRegistry::new();
        registry.register(sample_schema()).unwrap();

        let record = registry.empty_record("users").unwrap();
        assert_eq!(record["name"], Value::Null);
        assert_eq!(record["age"], Value::Null);
    }

    #[test]
    fn test_display_lists_all_definitions() {
        let mut registry = SchemaRegistry::new();
        registry.register(sample_schema()).unwrap();
        registry
            .register(Schema::from_tags("events", [("at", "timestamp")]).unwrap())
            .unwrap();

        let rendered = registry.to_string();
        assert!(rendered.contains("users"));
        assert!(rendered.contains("events"));
        assert!(rendered.contains("at\ttimestamp"));
    }
}
