//! The result of parsing a CSV source.

use super::split::split_line;

/// A parsed CSV source: its header line plus one record per data row.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    /// The header line exactly as read, before splitting.
    pub header: String,
    /// Records in input order.
    pub records: Vec<T>,
}

impl<T> Parsed<T> {
    /// Create a parse result.
    pub fn new(header: String, records: Vec<T>) -> Self {
        Self { header, records }
    }

    /// The header split into column names.
    pub fn columns(&self) -> Vec<String> {
        split_line(&self.header)
    }

    /// Number of records (excluding the header).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }
}

impl<T> IntoIterator for Parsed<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Parsed<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
