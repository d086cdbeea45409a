//! Coercion of raw CSV text into typed values.

use crate::error::{CsvShapeError, Result};
use crate::schema::{FieldDescriptor, FieldKind, Value};

/// Coerce one raw value according to its field's declared kind.
///
/// The empty string means "no value": it becomes [`Value::Absent`] for an
/// optional field and fails with `EmptyForRequiredField` otherwise. Strings are
/// taken verbatim; numbers and booleans tolerate surrounding whitespace.
pub fn coerce(field: &FieldDescriptor, raw: &str) -> Result<Value> {
    if raw.is_empty() {
        return if field.optional {
            Ok(Value::Absent)
        } else {
            Err(CsvShapeError::EmptyForRequiredField {
                field: field.name.to_string(),
            })
        };
    }

    match field.kind {
        FieldKind::Integer => parse_integer(raw)
            .map(Value::Integer)
            .ok_or_else(|| CsvShapeError::NotInteger {
                field: field.name.to_string(),
                value: raw.to_string(),
            }),
        FieldKind::Float => parse_float(raw)
            .map(Value::Float)
            .ok_or_else(|| CsvShapeError::NotFloat {
                field: field.name.to_string(),
                value: raw.to_string(),
            }),
        FieldKind::String => Ok(Value::String(raw.to_string())),
        FieldKind::Boolean => parse_boolean(raw)
            .map(Value::Boolean)
            .ok_or_else(|| CsvShapeError::InvalidBoolean {
                field: field.name.to_string(),
                value: raw.to_string(),
            }),
        FieldKind::Unsupported(type_name) => Err(CsvShapeError::UnsupportedFieldType {
            field: field.name.to_string(),
            type_name: type_name.to_string(),
        }),
    }
}

/// Parse a base-10 signed integer.
pub fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Parse a decimal number. `inf` and `NaN` spellings are rejected.
pub fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|x| x.is_finite())
}

/// Parse a `yes` / `no` flag, ignoring case and surrounding whitespace.
pub fn parse_boolean(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}
