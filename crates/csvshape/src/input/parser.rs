//! The parse loop: header line first, then one row per line.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{CsvShapeError, Result};
use super::source::Parsed;
use super::split::split_line;

const BOM: char = '\u{feff}';

/// One line read from a CSV source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number; the header is line 1.
    pub number: usize,
    /// Line content without the line terminator.
    pub text: String,
}

impl Line {
    /// Split this line into fields.
    pub fn fields(&self) -> Vec<String> {
        split_line(&self.text)
    }
}

/// Reads a CSV source one line at a time.
///
/// Both `\n` and `\r\n` terminators are accepted, and the last line does not
/// need a terminator.
pub struct CsvReader<R> {
    lines: Lines<R>,
    line_number: usize,
    source: String,
}

impl CsvReader<BufReader<File>> {
    /// Open a file for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| CsvShapeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), "opened csv file");

        Ok(Self::with_source(BufReader::new(file), path.display().to_string()))
    }
}

impl<R: BufRead> CsvReader<R> {
    /// Wrap an already open reader.
    pub fn new(reader: R) -> Self {
        Self::with_source(reader, "<reader>".to_string())
    }

    fn with_source(reader: R, source: String) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            source,
        }
    }

    /// Read the header line, dropping a leading UTF-8 byte order mark.
    /// Fails with `EmptyFile` if the source has no lines.
    pub fn read_header(&mut self) -> Result<Line> {
        let mut header = match self.next() {
            Some(line) => line?,
            None => return Err(CsvShapeError::EmptyFile(self.source.clone())),
        };
        if let Some(text) = header.text.strip_prefix(BOM) {
            header.text = text.to_string();
        }
        Ok(header)
    }

    /// Name of the source, for diagnostics.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl<R: BufRead> Iterator for CsvReader<R> {
    type Item = Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = match self.lines.next()? {
            Ok(text) => text,
            Err(e) => return Some(Err(e.into())),
        };
        self.line_number += 1;
        trace!(line = self.line_number, "read line");

        Some(Ok(Line {
            number: self.line_number,
            text,
        }))
    }
}

/// Parse a file, building each record with `row_constructor`.
///
/// The constructor receives the split header and the split data row. Any error
/// it returns aborts the parse and is reported with the line number of the row.
///
/// # Example
///
/// ```no_run
/// use csvshape::parse_file_with;
///
/// let parsed = parse_file_with("moves.csv", |_header, row| Ok(row.join("|"))).unwrap();
/// println!("{}: {} rows", parsed.header, parsed.len());
/// ```
pub fn parse_file_with<T, F>(path: impl AsRef<Path>, row_constructor: F) -> Result<Parsed<T>>
where
    F: FnMut(&[String], &[String]) -> Result<T>,
{
    let reader = CsvReader::open(path)?;
    parse_lines(reader, row_constructor)
}

/// Parse from any buffered reader, building each record with `row_constructor`.
pub fn parse_reader_with<R, T, F>(reader: R, row_constructor: F) -> Result<Parsed<T>>
where
    R: BufRead,
    F: FnMut(&[String], &[String]) -> Result<T>,
{
    parse_lines(CsvReader::new(reader), row_constructor)
}

fn parse_lines<R, T, F>(mut reader: CsvReader<R>, mut row_constructor: F) -> Result<Parsed<T>>
where
    R: BufRead,
    F: FnMut(&[String], &[String]) -> Result<T>,
{
    let header = reader.read_header()?;
    let header_fields = header.fields();

    let mut records = Vec::new();
    for line in reader.by_ref() {
        let line = line?;
        let record = row_constructor(&header_fields, &line.fields())
            .map_err(|e| e.at_line(line.number))?;
        records.push(record);
    }

    debug!(source = reader.source(), rows = records.len(), "parsed csv source");
    Ok(Parsed::new(header.text, records))
}
