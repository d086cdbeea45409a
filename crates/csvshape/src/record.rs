//! Record shapes: the field table and assignment capability a type exposes
//! so rows can be mapped onto it without runtime reflection.

use crate::error::Result;
use crate::schema::{FieldDescriptor, FieldKind, Value};

/// A type that rows can be mapped onto.
///
/// `FIELDS` lists every settable field by canonical name. `assign` stores an
/// already coerced value into the named field. Most shapes are declared with
/// the [`record!`](crate::record!) macro, which generates both.
pub trait Record: Default + 'static {
    /// Fields of the shape in declaration order.
    const FIELDS: &'static [FieldDescriptor];

    /// Store `value` into the field called `field`.
    ///
    /// Fails with `UnknownColumn` if the shape has no such field and with
    /// `ValueOutOfRange` if the value does not fit the field's type.
    fn assign(&mut self, field: &str, value: Value) -> Result<()>;
}

/// A Rust type that can be the type of a record field.
pub trait FieldType: Sized {
    /// The kind values of this type are coerced as.
    const KIND: FieldKind;
    /// Whether an empty value is accepted.
    const OPTIONAL: bool = false;

    /// Convert a coerced value, handing it back if it does not fit.
    fn from_value(value: Value) -> std::result::Result<Self, Value>;
}

macro_rules! integer_field_type {
    ($($ty:ty),*) => {
        $(
            impl FieldType for $ty {
                const KIND: FieldKind = FieldKind::Integer;

                fn from_value(value: Value) -> std::result::Result<Self, Value> {
                    match value {
                        Value::Integer(n) => <$ty>::try_from(n).map_err(|_| value),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

integer_field_type!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

impl FieldType for f64 {
    const KIND: FieldKind = FieldKind::Float;

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Float(x) => Ok(x),
            other => Err(other),
        }
    }
}

impl FieldType for f32 {
    const KIND: FieldKind = FieldKind::Float;

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Float(x) if x.is_finite() && x.abs() > f32::MAX as f64 => Err(value),
            Value::Float(x) => Ok(x as f32),
            other => Err(other),
        }
    }
}

impl FieldType for String {
    const KIND: FieldKind = FieldKind::String;

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl FieldType for bool {
    const KIND: FieldKind = FieldKind::Boolean;

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Boolean(b) => Ok(b),
            other => Err(other),
        }
    }
}

impl<T: FieldType> FieldType for Option<T> {
    const KIND: FieldKind = T::KIND;
    const OPTIONAL: bool = true;

    fn from_value(value: Value) -> std::result::Result<Self, Value> {
        match value {
            Value::Absent => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

/// Declare a struct and implement [`Record`] for it.
///
/// Every field type must implement [`FieldType`]. The struct gets a derived
/// `Default`, so do not derive it yourself. A field binds to header columns
/// that normalize to its name; use `name as "column"` when the canonical name
/// is not a valid Rust identifier.
///
/// # Example
///
/// ```
/// csvshape::record! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct Move {
///         pub name as "move": String,
///         pub sp_cost: i32,
///         pub power: Option<i32>,
///         pub inheritable: bool,
///     }
/// }
///
/// use csvshape::Record;
/// assert_eq!(Move::FIELDS[0].name, "move");
/// assert!(Move::FIELDS[2].optional);
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident $(as $column:literal)? : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Record for $name {
            const FIELDS: &'static [$crate::FieldDescriptor] = &[
                $(
                    $crate::FieldDescriptor::new(
                        $crate::__field_name!($field $(, $column)?),
                        <$ty as $crate::FieldType>::KIND,
                        <$ty as $crate::FieldType>::OPTIONAL,
                    ),
                )*
            ];

            fn assign(&mut self, field: &str, value: $crate::Value) -> $crate::Result<()> {
                $(
                    if field == $crate::__field_name!($field $(, $column)?) {
                        self.$field = <$ty as $crate::FieldType>::from_value(value).map_err(|value| {
                            $crate::CsvShapeError::ValueOutOfRange {
                                field: field.to_string(),
                                value: value.to_string(),
                            }
                        })?;
                        return Ok(());
                    }
                )*
                Err($crate::CsvShapeError::UnknownColumn {
                    column: field.to_string(),
                    normalized: field.to_string(),
                })
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_name {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $column:literal) => {
        $column
    };
}
