//! APIs to write CSV: the escaping engine, sinks, and typed serialization.

mod escape;
mod serialize;
mod writer;

pub use escape::{escape_field, escape_record, needs_quoting, write_record};
pub use serialize::{header_record, serialize_into, serialize_records};
pub use writer::Writer;
