//! Core type definitions for field kinds and coerced values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared primitive kind of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Whole numbers, parsed as base-10 signed integers.
    Integer,
    /// Floating-point numbers.
    Float,
    /// Text, taken verbatim.
    String,
    /// `yes` / `no` flags.
    Boolean,
    /// A field whose type the coercer does not understand. Carries the type
    /// name for error messages.
    Unsupported(&'static str),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Integer => f.write_str("integer"),
            FieldKind::Float => f.write_str("float"),
            FieldKind::String => f.write_str("string"),
            FieldKind::Boolean => f.write_str("boolean"),
            FieldKind::Unsupported(name) => write!(f, "unsupported ({name})"),
        }
    }
}

/// A raw value after coercion to its field's kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// The empty string, given for an optional field.
    Absent,
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => f.write_str("<absent>"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Boolean(b) => write!(f, "{b}"),
        }
    }
}
