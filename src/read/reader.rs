//! [`Reader`]: ties a source (file path, stream, or in-memory string) to the
//! tokenizer and exposes record iteration and typed deserialization.

use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use crate::dialect::Dialect;
use crate::error::Result;
use crate::mapper::{Mapped, Mode, RowError};
use crate::record::Record;

use super::deserialize::deserialize_records;
use super::tokenizer::{Records, Tokenizer};

/// Reads records from any character source.
///
/// When the dialect expects a header row it is consumed at construction and
/// available through [`Reader::headers`]; it is never yielded as data.
#[derive(Debug)]
pub struct Reader<R: Read> {
    tokenizer: Tokenizer<BufReader<R>>,
    header: Option<Record>,
}

impl Reader<File> {
    /// Opens a named file as a record source.
    pub fn from_path<P: AsRef<Path>>(path: P, dialect: Dialect) -> Result<Self> {
        Self::from_reader(File::open(path)?, dialect)
    }
}

impl Reader<Cursor<String>> {
    /// Treats an in-memory string as a record source.
    pub fn from_string<S: Into<String>>(data: S, dialect: Dialect) -> Result<Self> {
        Self::from_reader(Cursor::new(data.into()), dialect)
    }
}

impl<R: Read> Reader<R> {
    /// Wraps an open stream as a record source. The stream is buffered
    /// internally.
    pub fn from_reader(reader: R, dialect: Dialect) -> Result<Self> {
        let mut tokenizer = Tokenizer::new(BufReader::new(reader), dialect);
        let header = if tokenizer.dialect().has_header() {
            let mut record = Record::new();
            if tokenizer.read_record(&mut record)? {
                Some(record)
            } else {
                None
            }
        } else {
            None
        };
        Ok(Self { tokenizer, header })
    }

    pub fn dialect(&self) -> &Dialect {
        self.tokenizer.dialect()
    }

    /// The consumed header row, when the dialect expects one and the input
    /// was not empty.
    pub fn headers(&self) -> Option<&Record> {
        self.header.as_ref()
    }

    /// Reads the next data record into `record`; `Ok(false)` at end of
    /// stream.
    pub fn read_record(&mut self, record: &mut Record) -> Result<bool> {
        self.tokenizer.read_record(record)
    }

    /// Iterates over the remaining data records.
    pub fn records(&mut self) -> Records<'_, BufReader<R>> {
        self.tokenizer.records()
    }

    /// Deserializes the remaining records into typed values.
    ///
    /// Fields are bound to `T`'s descriptors by header name
    /// (case-insensitive) when a header was consumed, by declared order
    /// otherwise. Behavior on a failing field conversion is selected by
    /// `mode`; see [`Mode`].
    pub fn deserialize<T: Mapped>(&mut self, mode: Mode) -> Result<(Vec<T>, Vec<RowError>)> {
        let header = self.header.clone();
        deserialize_records(self.records(), header.as_ref(), mode)
    }
}

/// Reads up to `rows.len()` records into `rows`, skipping `skip` records
/// first. Returns the number of records read; shorter than `rows.len()`
/// only at end of stream.
///
/// This is the cheapest way to page through a CSV without deserializing.
pub fn read_rows<R: Read>(
    reader: &mut Reader<R>,
    skip: usize,
    rows: &mut [Record],
) -> Result<usize> {
    let mut skipped = Record::new();
    for _ in 0..skip {
        if !reader.read_record(&mut skipped)? {
            return Ok(0);
        }
    }

    let mut row_number = 0;
    for row in rows.iter_mut() {
        if !reader.read_record(row)? {
            break;
        }
        row_number += 1;
    }
    Ok(row_number)
}
