//! Deserializes record sequences into typed values through a
//! [`FieldTable`].

use crate::error::{Error, Result};
use crate::mapper::{FieldTable, Mapped, Mode, RowError};
use crate::record::Record;

/// Source column index for each descriptor: header names when a header was
/// consumed (case-insensitive), declared order otherwise.
fn bind<T>(table: &FieldTable<T>, header: Option<&Record>) -> Vec<Option<usize>> {
    match header {
        Some(header) => table
            .iter()
            .map(|descriptor| {
                header
                    .iter()
                    .position(|name| name.eq_ignore_ascii_case(descriptor.name()))
            })
            .collect(),
        None => (0..table.len()).map(Some).collect(),
    }
}

/// Converts each record into one `T`.
///
/// Source fields matching no descriptor are ignored; descriptors matching
/// no source field keep `T::default()`'s value. A failing field conversion
/// is handled per `mode`: tolerant mode records a [`RowError`], drops that
/// row and continues; strict mode aborts with
/// [`Error::FieldConversion`]. I/O errors from the underlying
/// iterator always abort.
pub fn deserialize_records<T, I>(
    records: I,
    header: Option<&Record>,
    mode: Mode,
) -> Result<(Vec<T>, Vec<RowError>)>
where
    T: Mapped,
    I: IntoIterator<Item = Result<Record>>,
{
    let table = T::fields();
    let binding = bind(&table, header);

    let mut rows = Vec::new();
    let mut errors = Vec::new();
    for (index, record) in records.into_iter().enumerate() {
        let record = record?;
        let mut item = T::default();
        let mut failed = false;
        for (position, source) in binding.iter().enumerate() {
            let column = match source {
                Some(column) => *column,
                None => continue,
            };
            let text = match record.get(column) {
                Some(text) => text,
                // ragged row shorter than the binding: keep the default
                None => continue,
            };
            let descriptor = match table.get(position) {
                Some(descriptor) => descriptor,
                None => continue,
            };
            if let Err(message) = descriptor.parse_into(&mut item, text) {
                let error = RowError {
                    row: index + 1,
                    field: descriptor.name().to_string(),
                    message,
                };
                match mode {
                    Mode::Strict => return Err(Error::FieldConversion(error.to_string())),
                    Mode::Tolerant => {
                        errors.push(error);
                        failed = true;
                    }
                }
            }
        }
        if !failed {
            rows.push(item);
        }
    }
    Ok((rows, errors))
}
