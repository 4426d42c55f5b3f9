use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

/// Numeric scalar with the integer/float split preserved.
///
/// Keeping integers separate means a count of 5 is displayed as `5`,
/// never `5.0`, regardless of how the provider serialized it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            Number::Float(n) => write!(f, "{}", n),
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Number::Integer(n) => serializer.serialize_i64(*n),
            Number::Float(n) => serializer.serialize_f64(*n),
        }
    }
}

/// Structured interpretation of a model response.
///
/// A tagged tree rather than raw `serde_json::Value` so that every
/// consumer branches exhaustively on the value kind. Mapping entries keep
/// document order; there is no identity beyond structural equality, and a
/// value is never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredValue {
    /// JSON null: the field exists but carries nothing
    Absent,
    Bool(bool),
    Number(Number),
    Text(String),
    /// Ordered list of values
    Sequence(Vec<StructuredValue>),
    /// Key/value entries in document order
    Mapping(Vec<(String, StructuredValue)>),
}

impl StructuredValue {
    /// Short noun for the value kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            StructuredValue::Absent => "null",
            StructuredValue::Bool(_) => "boolean",
            StructuredValue::Number(_) => "number",
            StructuredValue::Text(_) => "text",
            StructuredValue::Sequence(_) => "sequence",
            StructuredValue::Mapping(_) => "mapping",
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, StructuredValue::Mapping(_))
    }

    /// Plain-text form for display: raw text for strings, compact JSON
    /// for everything else (used when a value is too deep to expand)
    pub fn to_text(&self) -> String {
        match self {
            StructuredValue::Text(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for StructuredValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl Serialize for StructuredValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StructuredValue::Absent => serializer.serialize_unit(),
            StructuredValue::Bool(b) => serializer.serialize_bool(*b),
            StructuredValue::Number(n) => n.serialize(serializer),
            StructuredValue::Text(s) => serializer.serialize_str(s),
            StructuredValue::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            StructuredValue::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl From<serde_json::Value> for StructuredValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => StructuredValue::Absent,
            serde_json::Value::Bool(b) => StructuredValue::Bool(b),
            serde_json::Value::Number(n) => {
                // u64 values beyond i64 range fall back to float
                if let Some(i) = n.as_i64() {
                    StructuredValue::Number(Number::Integer(i))
                } else {
                    StructuredValue::Number(Number::Float(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            serde_json::Value::String(s) => StructuredValue::Text(s),
            serde_json::Value::Array(items) => {
                StructuredValue::Sequence(items.into_iter().map(StructuredValue::from).collect())
            }
            serde_json::Value::Object(entries) => StructuredValue::Mapping(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, StructuredValue::from(v)))
                    .collect(),
            ),
        }
    }
}
