//! The tokenizing state machine: splits a character stream into records and
//! fields according to a [`Dialect`].

use std::io::Read;

use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::record::Record;

/// Scanner position within one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// At the first character of a (possibly empty) field.
    FieldStart,
    /// Inside a field that did not open with a quote.
    Unquoted,
    /// Inside a quoted field; delimiters and newlines are literal here.
    Quoted,
    /// A quote was seen inside a quoted field; the next character decides
    /// between an escaped literal quote and the end of the field.
    QuoteInQuoted,
}

/// Consumes a character stream and produces records one at a time.
///
/// The machine is total: every character sequence has a defined next state,
/// so no input is a parse error. "Malformed" quoting degrades to an
/// unexpected field split instead of failing:
/// * an unterminated quoted field at end of stream yields the accumulated
///   content;
/// * characters between a closing quote and the next delimiter are appended
///   to the field verbatim.
///
/// Record boundaries are `\n`, `\r\n` and bare `\r`, all accepted
/// regardless of the dialect's configured terminator (which only governs
/// output). Ragged rows pass through unchanged.
///
/// The stream is consumed forward only; restarting requires re-acquiring a
/// fresh source. Callers should hand in a buffered reader, characters are
/// pulled one at a time.
#[derive(Debug)]
pub struct Tokenizer<R: Read> {
    input: R,
    dialect: Dialect,
    peeked: Option<char>,
}

impl<R: Read> Tokenizer<R> {
    pub fn new(input: R, dialect: Dialect) -> Self {
        Self {
            input,
            dialect,
            peeked: None,
        }
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Reads the next record into `record`, clearing it first.
    ///
    /// Returns `Ok(false)` once the stream is exhausted; `record` is left
    /// empty in that case.
    pub fn read_record(&mut self, record: &mut Record) -> Result<bool> {
        record.clear();
        let mut field = String::new();
        let mut state = State::FieldStart;
        loop {
            let ch = match self.next_char()? {
                Some(ch) => ch,
                None => {
                    // End of stream terminates a record only when one is in
                    // progress; a clean end after a separator yields none.
                    if state == State::FieldStart && record.is_empty() {
                        return Ok(false);
                    }
                    record.push(field);
                    return Ok(true);
                }
            };
            match state {
                State::FieldStart => {
                    if ch == self.dialect.quote() {
                        state = State::Quoted;
                    } else if ch == self.dialect.delimiter() {
                        record.push(std::mem::take(&mut field));
                    } else if ch == '\n' || ch == '\r' {
                        self.consume_lf_after_cr(ch)?;
                        record.push(field);
                        return Ok(true);
                    } else {
                        field.push(ch);
                        state = State::Unquoted;
                    }
                }
                State::Unquoted => {
                    if ch == self.dialect.delimiter() {
                        record.push(std::mem::take(&mut field));
                        state = State::FieldStart;
                    } else if ch == '\n' || ch == '\r' {
                        self.consume_lf_after_cr(ch)?;
                        record.push(field);
                        return Ok(true);
                    } else {
                        field.push(ch);
                    }
                }
                State::Quoted => {
                    if ch == self.dialect.quote() {
                        state = State::QuoteInQuoted;
                    } else {
                        field.push(ch);
                    }
                }
                State::QuoteInQuoted => {
                    if ch == self.dialect.quote() {
                        // doubled quote: one literal quote character
                        field.push(ch);
                        state = State::Quoted;
                    } else if ch == self.dialect.delimiter() {
                        record.push(std::mem::take(&mut field));
                        state = State::FieldStart;
                    } else if ch == '\n' || ch == '\r' {
                        self.consume_lf_after_cr(ch)?;
                        record.push(field);
                        return Ok(true);
                    } else {
                        // content after a closing quote: kept verbatim
                        field.push(ch);
                        state = State::Unquoted;
                    }
                }
            }
        }
    }

    /// Returns a by-record iterator over the remaining input.
    pub fn records(&mut self) -> Records<'_, R> {
        Records { tokenizer: self }
    }

    /// A `\r\n` pair is a single record boundary.
    fn consume_lf_after_cr(&mut self, ch: char) -> Result<()> {
        if ch == '\r' && self.peek_char()? == Some('\n') {
            self.peeked = None;
        }
        Ok(())
    }

    fn peek_char(&mut self) -> Result<Option<char>> {
        if self.peeked.is_none() {
            self.peeked = self.next_char()?;
        }
        Ok(self.peeked)
    }

    /// Decodes the next character, reading 1-4 bytes of UTF-8.
    fn next_char(&mut self) -> Result<Option<char>> {
        if let Some(ch) = self.peeked.take() {
            return Ok(Some(ch));
        }
        let mut buf = [0u8; 4];
        loop {
            match self.input.read(&mut buf[..1]) {
                Ok(0) => return Ok(None),
                Ok(_) => break,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Io(e)),
            }
        }
        let len = match buf[0] {
            0x00..=0x7f => return Ok(Some(buf[0] as char)),
            0xc0..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf7 => 4,
            other => {
                return Err(Error::Utf8(format!(
                    "invalid UTF-8 leading byte 0x{:02x}",
                    other
                )))
            }
        };
        self.input.read_exact(&mut buf[1..len]).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                Error::Utf8("truncated UTF-8 sequence at end of stream".to_string())
            } else {
                Error::Io(e)
            }
        })?;
        match std::str::from_utf8(&buf[..len]) {
            Ok(decoded) => Ok(decoded.chars().next()),
            Err(_) => Err(Error::Utf8(format!(
                "invalid UTF-8 sequence {:?}",
                &buf[..len]
            ))),
        }
    }
}

/// Iterator over a tokenizer's remaining records.
#[derive(Debug)]
pub struct Records<'a, R: Read> {
    tokenizer: &'a mut Tokenizer<R>,
}

impl<'a, R: Read> Iterator for Records<'a, R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = Record::new();
        match self.tokenizer.read_record(&mut record) {
            Ok(true) => Some(Ok(record)),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
