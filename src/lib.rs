//! Tolerant, configurable reading and writing of CSV.
//!
//! The crate converts between a serialized character stream and structured
//! in-memory records: raw field arrays ([`Record`]), typed objects (through
//! [`mapper::Mapped`]), or a named-column table ([`grid::Grid`]). It targets
//! applications that need tolerant, configurable CSV interchange rather
//! than a rigid single-dialect parser: the reading state machine is total,
//! so no input is a parse error: malformed quoting degrades to an
//! unexpected field split, and mixed `\n` / `\r\n` / `\r` line endings are
//! accepted in a single stream.
//!
//! # Reading
//! ```
//! use delimited::{read::Reader, Dialect};
//!
//! # fn main() -> delimited::Result<()> {
//! let dialect = Dialect::new().with_header(false);
//! let mut reader = Reader::from_string("a,b,\"c,d\"\n1,2,3", dialect)?;
//! for record in reader.records() {
//!     let record = record?;
//!     assert_eq!(record.len(), 3);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Writing
//! ```
//! use delimited::{record, write::Writer, Dialect};
//!
//! # fn main() -> delimited::Result<()> {
//! let mut writer = Writer::from_writer(Vec::new(), Dialect::new());
//! writer.write(&record!["x", "y,z"])?;
//! assert_eq!(writer.into_inner()?, b"x,\"y,z\"\n");
//! # Ok(())
//! # }
//! ```

pub mod dialect;
pub mod error;
pub mod grid;
pub mod mapper;
pub mod read;
pub mod record;
pub mod write;

pub use dialect::Dialect;
pub use error::{Error, Result};
pub use record::Record;
