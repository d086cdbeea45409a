//! Per-shape schema: the validated field table of a record shape, and the
//! process-wide registry that caches it.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{CsvShapeError, Result};
use crate::record::Record;

use super::column::FieldDescriptor;
use super::normalize::normalize;

static REGISTRY: Lazy<RwLock<HashMap<TypeId, Arc<Schema>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Validated field table for one record shape.
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    /// Name of the shape, for diagnostics.
    shape: &'static str,
    /// Fields keyed by canonical name, in declaration order.
    fields: IndexMap<&'static str, FieldDescriptor>,
}

impl Schema {
    /// Build a schema from a list of field descriptors.
    ///
    /// Fails with `DuplicateField` if two descriptors share a name.
    pub fn from_fields(shape: &'static str, descriptors: &[FieldDescriptor]) -> Result<Self> {
        let mut fields = IndexMap::with_capacity(descriptors.len());

        for descriptor in descriptors {
            if fields.insert(descriptor.name, *descriptor).is_some() {
                return Err(CsvShapeError::DuplicateField {
                    shape: shape.to_string(),
                    field: descriptor.name.to_string(),
                });
            }

            // A name that does not survive normalization can never be bound.
            match normalize(descriptor.name) {
                Ok(canonical) if canonical == descriptor.name => {}
                _ => warn!(
                    shape,
                    field = descriptor.name,
                    "field name is not canonical; no header column can bind to it"
                ),
            }
        }

        Ok(Self { shape, fields })
    }

    /// The schema for record shape `T`, derived on first use and cached for
    /// the lifetime of the process.
    pub fn of<T: Record>() -> Result<Arc<Schema>> {
        let key = TypeId::of::<T>();

        if let Some(schema) = REGISTRY
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Ok(Arc::clone(schema));
        }

        // Derivation is pure, so racing writers store equal schemas.
        let schema = Arc::new(Schema::from_fields(std::any::type_name::<T>(), T::FIELDS)?);
        debug!(shape = schema.shape, fields = schema.len(), "derived record schema");
        REGISTRY
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, Arc::clone(&schema));

        Ok(schema)
    }

    /// Name of the record shape.
    pub fn shape(&self) -> &'static str {
        self.shape
    }

    /// Look up a field and its position in declaration order.
    pub fn get_full(&self, name: &str) -> Option<(usize, &FieldDescriptor)> {
        self.fields
            .get_full(name)
            .map(|(index, _, field)| (index, field))
    }

    /// Position of a field in declaration order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.get_index_of(name)
    }

    /// All fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values()
    }

    /// Fields that must be given a value.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values().filter(|f| !f.optional)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;

    #[test]
    fn test_from_fields_preserves_order() {
        let schema = Schema::from_fields(
            "Support",
            &[
                FieldDescriptor::required("name", FieldKind::String),
                FieldDescriptor::optional("description", FieldKind::String),
            ],
        )
        .unwrap();

        let names: Vec<_> = schema.fields().map(|f| f.name).collect();
        assert_eq!(names, vec!["name", "description"]);
        assert_eq!(schema.index_of("description"), Some(1));
        assert_eq!(schema.required_fields().count(), 1);
    }

    #[test]
    fn test_from_fields_rejects_duplicates() {
        let err = Schema::from_fields(
            "Broken",
            &[
                FieldDescriptor::required("power", FieldKind::Integer),
                FieldDescriptor::required("power", FieldKind::Float),
            ],
        )
        .unwrap_err();

        assert!(matches!(err, CsvShapeError::DuplicateField { ref field, .. } if field == "power"));
    }

    #[test]
    fn test_non_canonical_field_is_kept_but_unreachable() {
        let schema = Schema::from_fields(
            "Legacy",
            &[
                FieldDescriptor::required("Lv50HP", FieldKind::Integer),
                FieldDescriptor::required("hp!", FieldKind::Integer),
            ],
        )
        .unwrap();

        assert_eq!(schema.len(), 2);
        let canonical = normalize("Lv50HP").unwrap();
        assert_eq!(canonical, "lv_50_hp");
        assert!(schema.get_full(&canonical).is_none());
        assert_eq!(schema.get_full("Lv50HP").map(|(i, _)| i), Some(0));
    }
}
