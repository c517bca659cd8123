//! The escaping engine: decides when a field needs quoting and produces the
//! exact character sequence for one record.

use std::io::Write;

use crate::dialect::Dialect;
use crate::error::Result;
use crate::record::Record;

/// Whether `field` must be quoted under `dialect`.
///
/// Quoting is required when the dialect forces it, when the field contains
/// the delimiter, the quote character or a newline character, or when the
/// field is empty and the dialect distinguishes empty from absent
/// ([`Dialect::with_quote_empty`]). The decision is a pure function of the
/// field and the dialect, so re-encoding the same record is byte-identical.
pub fn needs_quoting(field: &str, dialect: &Dialect) -> bool {
    if dialect.always_quote() {
        return true;
    }
    if field.is_empty() {
        return dialect.quote_empty();
    }
    field
        .chars()
        .any(|ch| ch == dialect.delimiter() || ch == dialect.quote() || ch == '\r' || ch == '\n')
}

/// Appends `field`, quoted and escaped as needed, to `out`. Inside a quoted
/// field every occurrence of the quote character is doubled; no other
/// character is altered.
pub fn escape_field(field: &str, dialect: &Dialect, out: &mut String) {
    if !needs_quoting(field, dialect) {
        out.push_str(field);
        return;
    }
    let quote = dialect.quote();
    out.push(quote);
    for ch in field.chars() {
        if ch == quote {
            out.push(quote);
        }
        out.push(ch);
    }
    out.push(quote);
}

/// Appends one full record, terminator included, to `out`.
pub fn escape_record(record: &Record, dialect: &Dialect, out: &mut String) {
    for (index, field) in record.iter().enumerate() {
        if index > 0 {
            out.push(dialect.delimiter());
        }
        escape_field(field, dialect, out);
    }
    out.push_str(dialect.terminator());
}

/// Writes one record to `writer`. Stateless between records; the writer in
/// [`crate::write::Writer`] reuses a scratch buffer instead.
pub fn write_record<W: Write>(writer: &mut W, record: &Record, dialect: &Dialect) -> Result<()> {
    let mut line = String::new();
    escape_record(record, dialect, &mut line);
    writer.write_all(line.as_bytes())?;
    Ok(())
}
