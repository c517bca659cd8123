//! Infers the value kind of fields, for callers choosing converters or
//! column types before deserializing. This is inference over field *values*;
//! dialect detection is out of scope.

use std::collections::HashSet;
use std::io::Read;

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

use crate::error::Result;
use crate::record::Record;

use super::reader::Reader;

lazy_static! {
    static ref DECIMAL_RE: Regex = Regex::new(r"^-?(\d+\.\d+)$").unwrap();
    static ref INTEGER_RE: Regex = Regex::new(r"^-?(\d+)$").unwrap();
    static ref BOOLEAN_RE: Regex = RegexBuilder::new(r"^(true)$|^(false)$")
        .case_insensitive(true)
        .build()
        .unwrap();
}

/// The value kind a field's text looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Boolean,
    Integer,
    Float,
    Date,
    DateTime,
    Text,
}

/// Infers the [`Kind`] of one field.
/// # Implementation
/// * case insensitive "true" or "false" are [`Kind::Boolean`]
/// * integer-shaped text is [`Kind::Integer`]
/// * decimal-shaped text is [`Kind::Float`]
/// * text chrono parses as a naive datetime is [`Kind::DateTime`]
/// * text chrono parses as a naive date is [`Kind::Date`]
/// * everything else is [`Kind::Text`]
pub fn infer(field: &str) -> Kind {
    if BOOLEAN_RE.is_match(field) {
        Kind::Boolean
    } else if INTEGER_RE.is_match(field) {
        Kind::Integer
    } else if DECIMAL_RE.is_match(field) {
        Kind::Float
    } else if field.parse::<chrono::NaiveDateTime>().is_ok() {
        Kind::DateTime
    } else if field.parse::<chrono::NaiveDate>().is_ok() {
        Kind::Date
    } else {
        Kind::Text
    }
}

/// Merges one column's candidate kinds into a single kind: a lone candidate
/// wins, integers and floats widen to float, anything else degrades to
/// text.
fn merge(candidates: &mut HashSet<Kind>) -> Kind {
    match candidates.len() {
        0 => Kind::Text,
        1 => candidates.drain().next().unwrap(),
        2 => {
            if candidates.contains(&Kind::Integer) && candidates.contains(&Kind::Float) {
                Kind::Float
            } else {
                Kind::Text
            }
        }
        _ => Kind::Text,
    }
}

/// Infers a kind per column by reading through up to `max_rows` records.
///
/// Column names come from the reader's header when one was consumed,
/// otherwise `column_1`, `column_2`, ... are synthesized. The records read
/// here are consumed: sources are forward-only, so callers wanting the data
/// afterwards re-acquire a fresh source.
pub fn infer_kinds<R: Read>(
    reader: &mut Reader<R>,
    max_rows: Option<usize>,
) -> Result<Vec<(String, Kind)>> {
    let mut candidates: Vec<HashSet<Kind>> = reader
        .headers()
        .map(|header| vec![HashSet::new(); header.len()])
        .unwrap_or_default();

    let max_rows = max_rows.unwrap_or(usize::MAX);
    let mut count = 0;
    let mut record = Record::new();
    while count < max_rows {
        if !reader.read_record(&mut record)? {
            break;
        }
        count += 1;
        if candidates.len() < record.len() {
            candidates.resize_with(record.len(), HashSet::new);
        }
        for (column, field) in record.iter().enumerate() {
            candidates[column].insert(infer(field));
        }
    }

    let names: Vec<String> = match reader.headers() {
        Some(header) => {
            let mut names: Vec<String> = header.iter().cloned().collect();
            // ragged data wider than the header still gets a name
            for i in names.len()..candidates.len() {
                names.push(format!("column_{}", i + 1));
            }
            names
        }
        None => (1..=candidates.len())
            .map(|i| format!("column_{}", i))
            .collect(),
    };

    Ok(names
        .into_iter()
        .zip(candidates.iter_mut())
        .map(|(name, candidates)| (name, merge(candidates)))
        .collect())
}
