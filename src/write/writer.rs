//! [`Writer`]: ties a sink (file path or stream) to the escaping engine and
//! exposes record and typed-value writing.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::dialect::Dialect;
use crate::error::Result;
use crate::mapper::Mapped;
use crate::record::Record;

use super::escape::escape_record;
use super::serialize::{header_record, serialize_into};

/// Writes records to any byte sink.
///
/// Output is deterministic: the same records and dialect always produce the
/// same bytes. Bytes already written are never retracted; a failed write
/// surfaces immediately and leaves the sink with whatever was flushed.
#[derive(Debug)]
pub struct Writer<W: Write> {
    writer: W,
    dialect: Dialect,
    line: String,
    wrote_header: bool,
}

impl Writer<File> {
    /// Creates (or truncates) a named file as the sink.
    pub fn from_path<P: AsRef<Path>>(path: P, dialect: Dialect) -> Result<Self> {
        Ok(Self::from_writer(File::create(path)?, dialect))
    }
}

impl<W: Write> Writer<W> {
    /// Wraps an open stream as the sink.
    pub fn from_writer(writer: W, dialect: Dialect) -> Self {
        Self {
            writer,
            dialect,
            line: String::new(),
            wrote_header: false,
        }
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Writes one record, escaped and terminated per the dialect.
    pub fn write(&mut self, record: &Record) -> Result<()> {
        self.line.clear();
        escape_record(record, &self.dialect, &mut self.line);
        self.writer.write_all(self.line.as_bytes())?;
        Ok(())
    }

    /// Writes a sequence of records.
    pub fn write_all<'a, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        for record in records {
            self.write(record)?;
        }
        Ok(())
    }

    /// Writes a header of column names. At most one header is written per
    /// `Writer`, whether through this or through [`Writer::serialize`].
    pub fn write_header<T: AsRef<str>>(&mut self, names: &[T]) -> Result<()> {
        if self.wrote_header {
            return Ok(());
        }
        let record: Record = names.iter().map(|n| n.as_ref()).collect();
        self.write(&record)?;
        self.wrote_header = true;
        Ok(())
    }

    /// Serializes typed values, one record each, fields in declared order.
    /// When the dialect expects a header row, the descriptor names are
    /// written first (once per `Writer`).
    pub fn serialize<'a, T, I>(&mut self, items: I) -> Result<()>
    where
        T: Mapped + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let table = T::fields();
        if self.dialect.has_header() && !self.wrote_header {
            let header = header_record::<T>();
            self.write(&header)?;
            self.wrote_header = true;
        }
        let mut record = Record::with_capacity(table.len());
        for item in items {
            serialize_into(item, &table, &mut record);
            self.write(&record)?;
        }
        Ok(())
    }

    /// Flushes the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and returns the underlying sink.
    pub fn into_inner(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
