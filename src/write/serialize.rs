//! Serializes typed values into records through a [`FieldTable`].

use crate::mapper::{FieldTable, Mapped};
use crate::record::Record;

/// The header record for `T`: its descriptor names in declared order.
pub fn header_record<T: Mapped>() -> Record {
    T::fields().names().collect()
}

/// Converts one instance into a record, reusing `record`'s allocation.
pub fn serialize_into<T>(item: &T, table: &FieldTable<T>, record: &mut Record) {
    record.clear();
    let mut buffer = String::new();
    for descriptor in table.iter() {
        buffer.clear();
        descriptor.format_into(item, &mut buffer);
        record.push(buffer.as_str());
    }
}

/// Converts a sequence of instances into records, one per instance, fields
/// in declared order. Does not include a header; see [`header_record`] or
/// [`crate::write::Writer::serialize`].
pub fn serialize_records<'a, T, I>(items: I) -> Vec<Record>
where
    T: Mapped + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let table = T::fields();
    items
        .into_iter()
        .map(|item| {
            let mut record = Record::with_capacity(table.len());
            serialize_into(item, &table, &mut record);
            record
        })
        .collect()
}
