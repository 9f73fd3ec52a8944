//! Schema and record type definitions
//!
//! Supported field types:
//! - int: 64-bit signed integer
//! - str: UTF-8 string
//! - bool: Boolean
//! - list: sequence of opaque primitive values
//! - float: 64-bit floating point
//! - map: mapping of opaque primitive values
//! - timestamp: datetime, second precision, no timezone

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{RegistryError, RegistryResult};

/// Supported field types, a closed primitive universe.
///
/// Values are checked against declared types by tag equality. There is no
/// coercion between tags: an `Int` value never satisfies a `Float` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// 64-bit signed integer
    Int,
    /// UTF-8 string
    Str,
    /// Boolean
    Bool,
    /// Sequence of opaque primitive values
    List,
    /// 64-bit floating point
    Float,
    /// Mapping of opaque primitive values
    Map,
    /// Datetime value, lowered to its canonical string form on encode
    Timestamp,
}

impl FieldType {
    /// Returns the type tag for error messages and textual declarations
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Int => "int",
            FieldType::Str => "str",
            FieldType::Bool => "bool",
            FieldType::List => "list",
            FieldType::Float => "float",
            FieldType::Map => "map",
            FieldType::Timestamp => "timestamp",
        }
    }

    /// Parses a textual type tag.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidType` for tags outside the primitive
    /// universe.
    pub fn from_tag(tag: &str) -> RegistryResult<Self> {
        match tag {
            "int" => Ok(FieldType::Int),
            "str" => Ok(FieldType::Str),
            "bool" => Ok(FieldType::Bool),
            "list" => Ok(FieldType::List),
            "float" => Ok(FieldType::Float),
            "map" => Ok(FieldType::Map),
            "timestamp" => Ok(FieldType::Timestamp),
            other => Err(RegistryError::InvalidType(other.to_string())),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// A typed field value as accepted by a push.
///
/// Nested values inside `List` and `Map` are opaque: they are carried through
/// the codec unchanged and not themselves schema-checked.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Str(String),
    Bool(bool),
    List(Vec<Value>),
    Float(f64),
    Map(serde_json::Map<String, Value>),
    Timestamp(NaiveDateTime),
}

impl FieldValue {
    /// Returns the type tag this value carries
    pub fn kind(&self) -> FieldType {
        match self {
            FieldValue::Int(_) => FieldType::Int,
            FieldValue::Str(_) => FieldType::Str,
            FieldValue::Bool(_) => FieldType::Bool,
            FieldValue::List(_) => FieldType::List,
            FieldValue::Float(_) => FieldType::Float,
            FieldValue::Map(_) => FieldType::Map,
            FieldValue::Timestamp(_) => FieldType::Timestamp,
        }
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Str(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Str(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(v: NaiveDateTime) -> Self {
        FieldValue::Timestamp(v)
    }
}

/// One stored row: field name to encoded value.
///
/// Unset fields hold an explicit null marker, never absence, so every record
/// carries the full declared field set of its schema.
pub type Record = serde_json::Map<String, Value>;

/// The full ordered sequence of records stored under one schema name.
pub type RowSet = Vec<Record>;

/// A named cache definition: unique name plus declared field types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Unique schema name, doubles as the blob-store key
    pub name: String,
    /// Declared fields; BTreeMap keeps field iteration deterministic
    pub fields: BTreeMap<String, FieldType>,
}

impl Schema {
    /// Create a new schema from typed field declarations
    pub fn new(name: impl Into<String>, fields: BTreeMap<String, FieldType>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Create a schema from textual type tags.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidType` if any tag is outside the
    /// primitive universe.
    pub fn from_tags<I, K, T>(name: impl Into<String>, tags: I) -> RegistryResult<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: AsRef<str>,
    {
        let mut fields = BTreeMap::new();
        for (field, tag) in tags {
            fields.insert(field.into(), FieldType::from_tag(tag.as_ref())?);
        }
        Ok(Self::new(name, fields))
    }

    /// Returns the declared type for a field, if declared
    pub fn field(&self, name: &str) -> Option<FieldType> {
        self.fields.get(name).copied()
    }

    /// Returns a record template with every declared field set to the null
    /// marker. Pushed values are merged onto this base.
    pub fn empty_record(&self) -> Record {
        self.fields
            .keys()
            .map(|k| (k.clone(), Value::Null))
            .collect()
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        for (field, field_type) in &self.fields {
            writeln!(f, "  {}\t{}", field, field_type)?;
        }
        Ok(())
    }
}
