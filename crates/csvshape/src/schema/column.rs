//! Field descriptor definition.

use serde::Serialize;

use super::types::FieldKind;

/// Describes one field of a record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FieldDescriptor {
    /// Canonical field name, as header tokens normalize to it.
    pub name: &'static str,
    /// Declared primitive kind.
    pub kind: FieldKind,
    /// Whether the field accepts an empty value.
    pub optional: bool,
}

impl FieldDescriptor {
    /// Create a field descriptor.
    pub const fn new(name: &'static str, kind: FieldKind, optional: bool) -> Self {
        Self { name, kind, optional }
    }

    /// A field that must have a value in every row.
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self::new(name, kind, false)
    }

    /// A field that may be left empty.
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self::new(name, kind, true)
    }
}
