//! APIs to read CSV: the tokenizing state machine, sources, and typed
//! deserialization.

mod deserialize;
mod infer;
mod reader;
mod tokenizer;

pub use deserialize::deserialize_records;
pub use infer::{infer, infer_kinds, Kind};
pub use reader::{read_rows, Reader};
pub use tokenizer::{Records, Tokenizer};
