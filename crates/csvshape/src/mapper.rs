//! Mapping split CSV rows onto record shapes.

use std::io::BufRead;
use std::marker::PhantomData;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::coerce::coerce;
use crate::error::{CsvShapeError, Result};
use crate::input::{CsvReader, Parsed};
use crate::record::Record;
use crate::schema::{normalize, FieldDescriptor, Schema};

/// What to do when the header has no column for a field of the shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingFieldPolicy {
    /// Fail with `MissingField` when a required field has no column.
    /// Optional fields without a column are left as `None`.
    #[default]
    Reject,
    /// Leave every field without a column at its `Default` value.
    Default,
}

/// Mapper configuration.
#[derive(Debug, Clone, Default)]
pub struct MapperConfig {
    /// Handling of shape fields that no header column binds to.
    pub missing_fields: MissingFieldPolicy,
}

/// A header resolved against a record shape: one field per column.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderBinding {
    columns: Vec<FieldDescriptor>,
}

impl HeaderBinding {
    /// Number of columns in the header.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The field each column binds to, in column order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.columns
    }
}

/// Maps rows onto records of shape `T`.
///
/// # Example
///
/// ```
/// use csvshape::RecordMapper;
///
/// csvshape::record! {
///     #[derive(Debug, PartialEq)]
///     pub struct Digimon {
///         pub number: i32,
///         pub digimon: String,
///         pub memory: i32,
///     }
/// }
///
/// let mapper = RecordMapper::<Digimon>::new().unwrap();
/// let digimon = mapper
///     .map_row(&["Number", "Digimon", "Memory"], &["1", "Agumon", "2"])
///     .unwrap();
/// assert_eq!(digimon.digimon, "Agumon");
/// ```
pub struct RecordMapper<T> {
    schema: Arc<Schema>,
    config: MapperConfig,
    _shape: PhantomData<fn() -> T>,
}

impl<T: Record> RecordMapper<T> {
    /// Create a mapper with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(MapperConfig::default())
    }

    /// Create a mapper with custom configuration.
    pub fn with_config(config: MapperConfig) -> Result<Self> {
        Ok(Self {
            schema: Schema::of::<T>()?,
            config,
            _shape: PhantomData,
        })
    }

    /// The schema of the record shape.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Map one data row, resolving the header as it goes.
    ///
    /// Columns are processed left to right and the first failure is
    /// returned: `RowShapeMismatch` before anything else, then per column
    /// `InvalidHeaderToken`, `UnknownColumn`, `DuplicateColumn` or a coercion
    /// error. `MissingField` is checked once every column has been assigned.
    pub fn map_row<H, D>(&self, header: &[H], data: &[D]) -> Result<T>
    where
        H: AsRef<str>,
        D: AsRef<str>,
    {
        check_row_shape(header.len(), data.len())?;

        let mut record = T::default();
        let mut seen = vec![false; self.schema.len()];

        for (column, raw) in header.iter().zip(data) {
            let field = self.resolve_column(column.as_ref(), &mut seen)?;
            self.assign(&mut record, field, raw.as_ref())?;
        }
        self.check_missing(&seen)?;

        Ok(record)
    }

    /// Resolve a header once so rows can be mapped with [`map_bound`].
    ///
    /// [`map_bound`]: RecordMapper::map_bound
    pub fn bind_header<H: AsRef<str>>(&self, header: &[H]) -> Result<HeaderBinding> {
        let mut seen = vec![false; self.schema.len()];
        let columns = header
            .iter()
            .map(|column| self.resolve_column(column.as_ref(), &mut seen).copied())
            .collect::<Result<Vec<_>>>()?;
        self.check_missing(&seen)?;

        debug!(shape = self.schema.shape(), columns = columns.len(), "bound header");
        Ok(HeaderBinding { columns })
    }

    /// Map one data row against a bound header.
    pub fn map_bound<D: AsRef<str>>(&self, binding: &HeaderBinding, data: &[D]) -> Result<T> {
        check_row_shape(binding.len(), data.len())?;

        let mut record = T::default();
        for (field, raw) in binding.columns.iter().zip(data) {
            self.assign(&mut record, field, raw.as_ref())?;
        }

        Ok(record)
    }

    /// Parse a CSV file into records of shape `T`.
    ///
    /// Fails with `EmptyFile` if the file has no header line. Any error in the
    /// header or a row aborts the whole parse and carries the line number.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Parsed<T>> {
        self.parse_lines(CsvReader::open(path)?)
    }

    /// Parse CSV text from any buffered reader.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Parsed<T>> {
        self.parse_lines(CsvReader::new(reader))
    }

    fn parse_lines<R: BufRead>(&self, mut reader: CsvReader<R>) -> Result<Parsed<T>> {
        let header = reader.read_header()?;
        let binding = self
            .bind_header(&header.fields())
            .map_err(|e| e.at_line(header.number))?;

        let mut records = Vec::new();
        for line in reader.by_ref() {
            let line = line?;
            let record = self
                .map_bound(&binding, &line.fields())
                .map_err(|e| e.at_line(line.number))?;
            trace!(line = line.number, "mapped row");
            records.push(record);
        }

        debug!(
            shape = self.schema.shape(),
            source = reader.source(),
            rows = records.len(),
            "parsed records"
        );
        Ok(Parsed::new(header.text, records))
    }

    fn resolve_column(&self, column: &str, seen: &mut [bool]) -> Result<&FieldDescriptor> {
        let normalized = normalize(column)?;
        let Some((index, field)) = self.schema.get_full(&normalized) else {
            return Err(CsvShapeError::UnknownColumn {
                column: column.to_string(),
                normalized,
            });
        };

        if std::mem::replace(&mut seen[index], true) {
            return Err(CsvShapeError::DuplicateColumn {
                column: column.to_string(),
                field: field.name.to_string(),
            });
        }

        Ok(field)
    }

    fn check_missing(&self, seen: &[bool]) -> Result<()> {
        if self.config.missing_fields == MissingFieldPolicy::Default {
            return Ok(());
        }

        match self
            .schema
            .fields()
            .zip(seen)
            .find(|(field, seen)| !field.optional && !**seen)
        {
            Some((field, _)) => Err(CsvShapeError::MissingField {
                field: field.name.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn assign(&self, record: &mut T, field: &FieldDescriptor, raw: &str) -> Result<()> {
        let value = coerce(field, raw)?;
        record.assign(field.name, value)
    }
}

fn check_row_shape(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(CsvShapeError::RowShapeMismatch { expected, found });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Value;

    crate::record! {
        #[derive(Debug, Clone, PartialEq)]
        struct Digimon {
            number: i32,
            digimon: String,
            memory: i32,
            equip_slots: Option<i32>,
        }
    }

    #[test]
    fn test_map_row() {
        let mapper = RecordMapper::<Digimon>::new().unwrap();
        let digimon = mapper
            .map_row(
                &["number", "digimon", "memory", "equip_slots"],
                &["1", "Agumon", "2", ""],
            )
            .unwrap();

        assert_eq!(
            digimon,
            Digimon {
                number: 1,
                digimon: "Agumon".to_string(),
                memory: 2,
                equip_slots: None,
            }
        );
    }

    #[test]
    fn test_map_row_shape_mismatch() {
        let mapper = RecordMapper::<Digimon>::new().unwrap();
        let err = mapper.map_row(&["number", "digimon"], &["1"]).unwrap_err();
        assert!(matches!(
            err,
            CsvShapeError::RowShapeMismatch { expected: 2, found: 1 }
        ));
    }

    #[test]
    fn test_map_row_duplicate_column() {
        let mapper = RecordMapper::<Digimon>::new().unwrap();
        let err = mapper
            .map_row(&["Number", "number", "digimon", "memory"], &["1", "2", "Agumon", "3"])
            .unwrap_err();
        assert!(matches!(err, CsvShapeError::DuplicateColumn { ref field, .. } if field == "number"));
    }

    #[test]
    fn test_missing_required_field_rejected_by_default() {
        let mapper = RecordMapper::<Digimon>::new().unwrap();
        let err = mapper.map_row(&["number", "digimon"], &["1", "Agumon"]).unwrap_err();
        assert!(matches!(err, CsvShapeError::MissingField { ref field } if field == "memory"));
    }

    #[test]
    fn test_missing_optional_field_allowed() {
        let mapper = RecordMapper::<Digimon>::new().unwrap();
        let digimon = mapper
            .map_row(&["number", "digimon", "memory"], &["1", "Agumon", "2"])
            .unwrap();
        assert_eq!(digimon.equip_slots, None);
    }

    #[test]
    fn test_missing_field_default_policy() {
        let mapper = RecordMapper::<Digimon>::with_config(MapperConfig {
            missing_fields: MissingFieldPolicy::Default,
        })
        .unwrap();
        let digimon = mapper.map_row(&["digimon"], &["Gabumon"]).unwrap();

        assert_eq!(digimon.digimon, "Gabumon");
        assert_eq!(digimon.number, 0);
        assert_eq!(digimon.memory, 0);
    }

    #[test]
    fn test_bind_header_once_map_many() {
        let mapper = RecordMapper::<Digimon>::new().unwrap();
        let binding = mapper.bind_header(&["Number", "Digimon", "Memory"]).unwrap();
        assert_eq!(binding.len(), 3);
        assert_eq!(binding.fields()[1].name, "digimon");

        let a = mapper.map_bound(&binding, &["1", "Agumon", "2"]).unwrap();
        let b = mapper.map_bound(&binding, &["2", "Gabumon", "3"]).unwrap();
        assert_eq!(a.number, 1);
        assert_eq!(b.digimon, "Gabumon");
    }

    #[test]
    fn test_bind_header_unknown_column() {
        let mapper = RecordMapper::<Digimon>::new().unwrap();
        let err = mapper
            .bind_header(&["number", "digimon", "memory", "Lv. 50 HP"])
            .unwrap_err();
        assert!(matches!(
            err,
            CsvShapeError::UnknownColumn { ref normalized, .. } if normalized == "lv_50_hp"
        ));
    }

    #[test]
    fn test_map_bound_checks_row_shape() {
        let mapper = RecordMapper::<Digimon>::new().unwrap();
        let binding = mapper.bind_header(&["number", "digimon", "memory"]).unwrap();
        let err = mapper.map_bound(&binding, &["1", "Agumon", "2", "extra"]).unwrap_err();
        assert!(matches!(err, CsvShapeError::RowShapeMismatch { expected: 3, found: 4 }));
    }

    #[test]
    fn test_parse_reader_reports_line() {
        let mapper = RecordMapper::<Digimon>::new().unwrap();
        let data = "number,digimon,memory\n1,Agumon,2\n2,Gabumon,lots\n";
        let err = mapper.parse_reader(data.as_bytes()).unwrap_err();

        assert_eq!(err.line(), Some(3));
        assert!(matches!(err.root(), CsvShapeError::NotInteger { .. }));
    }

    #[test]
    fn test_parse_reader_header_error_on_line_one() {
        let mapper = RecordMapper::<Digimon>::new().unwrap();
        let err = mapper.parse_reader("number,digimon,memory,rank!".as_bytes()).unwrap_err();

        assert_eq!(err.line(), Some(1));
        assert!(matches!(err.root(), CsvShapeError::InvalidHeaderToken { character: '!', .. }));
    }

    #[test]
    fn test_value_passes_through_assign() {
        let mut digimon = Digimon::default();
        digimon.assign("memory", Value::Integer(9)).unwrap();
        assert_eq!(digimon.memory, 9);
    }
}
