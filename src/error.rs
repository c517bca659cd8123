//! Defines [`Error`] for representing failures in reading, writing and
//! mapping delimited text.
use std::fmt::{Display, Formatter};

use std::error::Error as StdError;

/// Fallible operations in this crate return this error type.
///
/// Note that malformed quoting is deliberately absent: the tokenizer is
/// total, so no input ever fails to parse (see [`crate::read::Tokenizer`]).
#[derive(Debug)]
pub enum Error {
    /// A source could not be opened/read or a sink could not be
    /// opened/written. Always fatal for the whole operation.
    Io(std::io::Error),
    /// The read path encountered bytes that are not valid UTF-8.
    Utf8(String),
    /// A [`crate::Dialect`] was constructed with inconsistent settings,
    /// e.g. equal delimiter and quote characters.
    InvalidDialect(String),
    /// A field's text could not be converted to the target type while
    /// deserializing in strict mode.
    FieldConversion(String),
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io(error)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(source) => write!(f, "Io error: {}", source),
            Error::Utf8(desc) => write!(f, "Utf8 error: {}", desc),
            Error::InvalidDialect(desc) => write!(f, "Invalid dialect: {}", desc),
            Error::FieldConversion(desc) => write!(f, "Field conversion error: {}", desc),
        }
    }
}

impl StdError for Error {}

pub type Result<T> = std::result::Result<T, Error>;
