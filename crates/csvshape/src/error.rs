//! Error types for the csvshape library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for csvshape operations.
#[derive(Debug, Error)]
pub enum CsvShapeError {
    /// Error opening or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error reading a line from an already open source.
    #[error("Read error: {0}")]
    Read(#[from] std::io::Error),

    /// The source has no lines at all, not even a header.
    #[error("Empty file: {0}")]
    EmptyFile(String),

    /// A header token contains a character that cannot appear in a field name.
    #[error("Invalid header token '{token}': unexpected character {character:?}")]
    InvalidHeaderToken { token: String, character: char },

    /// A data row does not have one value per header column.
    #[error("Row has {found} values but the header has {expected} columns")]
    RowShapeMismatch { expected: usize, found: usize },

    /// A header column does not correspond to any field of the record shape.
    #[error("Column '{column}' (normalized '{normalized}') does not match any field")]
    UnknownColumn { column: String, normalized: String },

    /// Two header columns normalize to the same field.
    #[error("Column '{column}' maps to field '{field}', which an earlier column already sets")]
    DuplicateColumn { column: String, field: String },

    /// A required field of the record shape has no column in the header.
    #[error("Required field '{field}' has no column in the header")]
    MissingField { field: String },

    /// A record shape declares the same field name twice.
    #[error("Field '{field}' is declared more than once in shape {shape}")]
    DuplicateField { shape: String, field: String },

    /// An empty value was given for a field that is not optional.
    #[error("Empty value for required field '{field}'")]
    EmptyForRequiredField { field: String },

    /// The value of an integer field is not a base-10 integer.
    #[error("Field '{field}': '{value}' is not an integer")]
    NotInteger { field: String, value: String },

    /// The value of a float field is not a decimal number.
    #[error("Field '{field}': '{value}' is not a number")]
    NotFloat { field: String, value: String },

    /// The value of a boolean field is neither "yes" nor "no".
    #[error("Field '{field}': '{value}' is not a boolean (expected yes or no)")]
    InvalidBoolean { field: String, value: String },

    /// The field's declared type is not one the coercer understands.
    #[error("Field '{field}' has unsupported type {type_name}")]
    UnsupportedFieldType { field: String, type_name: String },

    /// The coerced value does not fit the field's storage type.
    #[error("Field '{field}': value {value} is out of range")]
    ValueOutOfRange { field: String, value: String },

    /// A mapping error raised while reading a specific line of a file.
    #[error("Line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<CsvShapeError>,
    },
}

impl CsvShapeError {
    /// Attach a 1-based line number to this error.
    pub fn at_line(self, line: usize) -> Self {
        CsvShapeError::AtLine {
            line,
            source: Box::new(self),
        }
    }

    /// The innermost error, with any line context stripped.
    pub fn root(&self) -> &CsvShapeError {
        match self {
            CsvShapeError::AtLine { source, .. } => source.root(),
            other => other,
        }
    }

    /// The line number this error was raised on, if known.
    pub fn line(&self) -> Option<usize> {
        match self {
            CsvShapeError::AtLine { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type alias for csvshape operations.
pub type Result<T> = std::result::Result<T, CsvShapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_strips_line_context() {
        let err = CsvShapeError::NotInteger {
            field: "memory".to_string(),
            value: "x".to_string(),
        }
        .at_line(4);

        assert_eq!(err.line(), Some(4));
        assert!(matches!(err.root(), CsvShapeError::NotInteger { .. }));
        assert_eq!(err.to_string(), "Line 4: Field 'memory': 'x' is not an integer");
    }
}
