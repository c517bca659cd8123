//! Defines [`Record`], one row's ordered sequence of field strings.

use std::iter::FromIterator;
use std::ops::Index;

/// One row of a CSV stream: an ordered sequence of field strings.
///
/// Fields are identified by position only; names live in an optional header
/// record and in the mapper's field tables, never here. Order is preserved
/// exactly as read or pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Appends a field at the end of the record.
    pub fn push<S: Into<String>>(&mut self, field: S) {
        self.fields.push(field.into());
    }

    /// Returns the field at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Removes all fields, keeping the allocation for reuse.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.fields.iter()
    }

    /// Consumes the record, returning its fields.
    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }

    pub fn as_slice(&self) -> &[String] {
        &self.fields
    }
}

impl Index<usize> for Record {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.fields[index]
    }
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Self { fields }
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|s| s.into()).collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Builds a [`Record`] from a list of displayable values.
///
/// ```
/// use delimited::record;
///
/// let row = record!["a", 1, 2.5];
/// assert_eq!(row.get(1), Some("1"));
/// ```
#[macro_export]
macro_rules! record {
    ($($field:expr),* $(,)?) => {{
        let mut record = $crate::Record::new();
        $(record.push(format!("{}", $field));)*
        record
    }};
}
