//! A rows × named-columns container and its boundary with the engine:
//! "read all records into a grid" and "write a grid as records" are pure
//! transformations over the record interface, nothing more.

use std::io::{Read, Write};

use crate::error::Result;
use crate::read::Reader;
use crate::record::Record;
use crate::write::Writer;

/// A tabular container keyed by column name and row index.
///
/// Rows are stored exactly as parsed: ragged rows keep their own width and
/// [`Grid::get`] returns `None` past the end of a short row. Column lookup
/// is by exact name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl Grid {
    pub fn new<S: Into<String>, I: IntoIterator<Item = S>>(columns: I) -> Self {
        Self {
            columns: columns.into_iter().map(|c| c.into()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn push_row(&mut self, row: Record) {
        self.rows.push(row);
    }

    /// Index of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// The cell at (`row`, `column` name), if both exist.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let column = self.column_index(column)?;
        self.rows.get(row)?.get(column)
    }
}

/// Reads all remaining records of `reader` into a [`Grid`].
///
/// Column names come from the consumed header when the dialect expects one,
/// otherwise `column_1..column_n` are synthesized from the width of the
/// first row.
pub fn read_grid<R: Read>(reader: &mut Reader<R>) -> Result<Grid> {
    let mut rows = Vec::new();
    let mut record = Record::new();
    while reader.read_record(&mut record)? {
        rows.push(record.clone());
    }

    let columns: Vec<String> = match reader.headers() {
        Some(header) => header.iter().cloned().collect(),
        None => {
            let width = rows.first().map(|r| r.len()).unwrap_or(0);
            (1..=width).map(|i| format!("column_{}", i)).collect()
        }
    };

    Ok(Grid { columns, rows })
}

/// Writes a [`Grid`] through `writer`: the column names first when the
/// dialect expects a header, then every row.
pub fn write_grid<W: Write>(writer: &mut Writer<W>, grid: &Grid) -> Result<()> {
    if writer.dialect().has_header() {
        writer.write_header(grid.column_names())?;
    }
    writer.write_all(grid.rows())
}
