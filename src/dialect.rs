//! Defines [`Dialect`], the immutable configuration shared by one read or
//! write operation.

use crate::error::{Error, Result};

/// The delimiter/quote/terminator conventions governing one CSV operation.
///
/// A `Dialect` is immutable once constructed and is never mutated by the
/// engine; a single instance may be shared (`&Dialect` or by clone) across
/// any number of independent operations.
///
/// Invariant: the field delimiter and the quote character are distinct.
/// The `with_*` constructors that could violate it return an error instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dialect {
    delimiter: char,
    quote: char,
    terminator: String,
    always_quote: bool,
    has_header: bool,
    quote_empty: bool,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
            terminator: "\n".to_string(),
            always_quote: false,
            has_header: true,
            quote_empty: false,
        }
    }
}

impl Dialect {
    /// Returns the default dialect: comma-delimited, double-quoted,
    /// `\n`-terminated, header row expected, minimal quoting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the character separating fields within a record.
    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self> {
        if delimiter == self.quote {
            return Err(Error::InvalidDialect(format!(
                "delimiter and quote must differ, both are {:?}",
                delimiter
            )));
        }
        self.delimiter = delimiter;
        Ok(self)
    }

    /// Sets the character wrapping fields that contain special characters.
    pub fn with_quote(mut self, quote: char) -> Result<Self> {
        if quote == self.delimiter {
            return Err(Error::InvalidDialect(format!(
                "delimiter and quote must differ, both are {:?}",
                quote
            )));
        }
        self.quote = quote;
        Ok(self)
    }

    /// Sets the record terminator used when writing.
    ///
    /// Only `"\n"`, `"\r\n"` and `"\r"` are accepted: the read path splits
    /// records on exactly this set regardless of configuration, so any
    /// other terminator could never be read back.
    pub fn with_terminator(mut self, terminator: &str) -> Result<Self> {
        match terminator {
            "\n" | "\r\n" | "\r" => {
                self.terminator = terminator.to_string();
                Ok(self)
            }
            other => Err(Error::InvalidDialect(format!(
                "record terminator must be one of \\n, \\r\\n, \\r, got {:?}",
                other
            ))),
        }
    }

    /// When set, every written field is quoted, needed or not.
    pub fn with_always_quote(mut self, always_quote: bool) -> Self {
        self.always_quote = always_quote;
        self
    }

    /// Whether the first record is a header of column names. A header is
    /// consumed by the reader (not yielded as data) and emitted first by
    /// the typed writer.
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// When set, empty fields are written quoted (`""`) so that an empty
    /// field is distinguishable from an absent one in consumers that care.
    /// Off by default; round-tripping is unaffected either way.
    pub fn with_quote_empty(mut self, quote_empty: bool) -> Self {
        self.quote_empty = quote_empty;
        self
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn quote(&self) -> char {
        self.quote
    }

    pub fn terminator(&self) -> &str {
        &self.terminator
    }

    pub fn always_quote(&self) -> bool {
        self.always_quote
    }

    pub fn has_header(&self) -> bool {
        self.has_header
    }

    pub fn quote_empty(&self) -> bool {
        self.quote_empty
    }
}
