//! The descriptor table mapping between field text and typed values.
//!
//! A [`FieldTable`] is built once per target type (via [`Mapped::fields`])
//! before any record is processed: each [`FieldDescriptor`] pairs a stable
//! field name with an explicit bidirectional converter. Conversion itself
//! is the [`FieldValue`] trait, implemented for booleans, integers, floats,
//! strings, chrono dates, and `Option` of any of those.

use std::fmt::{Display, Formatter};

/// What to do when a field's text cannot convert to its target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Record a [`RowError`], skip the offending row, continue.
    Tolerant,
    /// Abort the whole operation with
    /// [`crate::Error::FieldConversion`] on the first failure.
    Strict,
}

/// A single row-level conversion failure. `row` is the 1-based position of
/// the record within the data sequence (the header, if any, is excluded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub row: usize,
    pub field: String,
    pub message: String,
}

impl Display for RowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "row {}, field {:?}: {}",
            self.row, self.field, self.message
        )
    }
}

/// Bidirectional conversion between a field's text and an in-memory value.
///
/// Numeric implementations use `lexical-core` in both directions so that
/// written text parses back to the identical value; dates use chrono's
/// canonical `%F` / `%FT%H:%M:%S%.f` forms. No custom numeric formats.
pub trait FieldValue: Sized {
    /// Parses the field's text. The error is a human-readable message; the
    /// mapper attaches row/field context.
    fn parse_field(text: &str) -> std::result::Result<Self, String>;

    /// Appends this value's canonical text to `out`.
    fn format_field(&self, out: &mut String);
}

impl FieldValue for String {
    fn parse_field(text: &str) -> std::result::Result<Self, String> {
        Ok(text.to_string())
    }

    fn format_field(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl FieldValue for bool {
    fn parse_field(text: &str) -> std::result::Result<Self, String> {
        if text.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if text.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(format!("{:?} is not a boolean", text))
        }
    }

    fn format_field(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

/// Writes `n` with the fast lexical serializer.
fn lexical_to_string<N: lexical_core::ToLexical>(n: N) -> String {
    let mut buf = vec![0u8; N::FORMATTED_SIZE_DECIMAL];
    let written = lexical_core::write(n, &mut buf).len();
    buf.truncate(written);
    // lexical_core writes digits, sign and exponent markers only
    unsafe { String::from_utf8_unchecked(buf) }
}

macro_rules! lexical_field_value {
    ($($t:ty),+) => {
        $(impl FieldValue for $t {
            fn parse_field(text: &str) -> std::result::Result<Self, String> {
                lexical_core::parse(text.as_bytes())
                    .map_err(|_| format!("{:?} is not a valid {}", text, stringify!($t)))
            }

            fn format_field(&self, out: &mut String) {
                out.push_str(&lexical_to_string(*self));
            }
        })+
    };
}

lexical_field_value!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl FieldValue for chrono::NaiveDate {
    fn parse_field(text: &str) -> std::result::Result<Self, String> {
        text.parse::<chrono::NaiveDate>().map_err(|e| e.to_string())
    }

    fn format_field(&self, out: &mut String) {
        out.push_str(&self.format("%F").to_string());
    }
}

impl FieldValue for chrono::NaiveDateTime {
    fn parse_field(text: &str) -> std::result::Result<Self, String> {
        text.parse::<chrono::NaiveDateTime>()
            .map_err(|e| e.to_string())
    }

    fn format_field(&self, out: &mut String) {
        out.push_str(&self.format("%FT%H:%M:%S%.f").to_string());
    }
}

/// An empty field is `None`; anything else converts as the inner type.
impl<V: FieldValue> FieldValue for Option<V> {
    fn parse_field(text: &str) -> std::result::Result<Self, String> {
        if text.is_empty() {
            Ok(None)
        } else {
            V::parse_field(text).map(Some)
        }
    }

    fn format_field(&self, out: &mut String) {
        if let Some(value) = self {
            value.format_field(out);
        }
    }
}

/// One field of a target type: a name, an implicit declared position (its
/// index in the table), and the two conversion directions.
pub struct FieldDescriptor<T> {
    name: String,
    parse: Box<dyn Fn(&mut T, &str) -> std::result::Result<(), String> + Send + Sync>,
    format: Box<dyn Fn(&T, &mut String) + Send + Sync>,
}

impl<T> FieldDescriptor<T> {
    /// Builds a descriptor from a pair of accessors. `get` returns the
    /// field's value (by clone for non-`Copy` types), `set` stores a parsed
    /// one.
    pub fn new<V, G, S>(name: &str, get: G, set: S) -> Self
    where
        V: FieldValue,
        G: Fn(&T) -> V + Send + Sync + 'static,
        S: Fn(&mut T, V) + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            parse: Box::new(move |target, text| V::parse_field(text).map(|v| set(target, v))),
            format: Box::new(move |target, out| get(target).format_field(out)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Converts `text` and stores it into `target`.
    pub fn parse_into(&self, target: &mut T, text: &str) -> std::result::Result<(), String> {
        (self.parse)(target, text)
    }

    /// Appends the field's canonical text for `target` to `out`.
    pub fn format_into(&self, target: &T, out: &mut String) {
        (self.format)(target, out)
    }
}

impl<T> std::fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .finish()
    }
}

/// The ordered descriptor table for one target type. Built once per
/// operation, read-only thereafter.
#[derive(Debug, Default)]
pub struct FieldTable<T> {
    fields: Vec<FieldDescriptor<T>>,
}

impl<T> FieldTable<T> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Appends a field; declaration order is the positional fallback order
    /// and the serialization order.
    pub fn field<V, G, S>(mut self, name: &str, get: G, set: S) -> Self
    where
        V: FieldValue,
        G: Fn(&T) -> V + Send + Sync + 'static,
        S: Fn(&mut T, V) + Send + Sync + 'static,
    {
        self.fields.push(FieldDescriptor::new(name, get, set));
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FieldDescriptor<T>> {
        self.fields.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldDescriptor<T>> {
        self.fields.iter()
    }

    /// Declared field names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|d| d.name())
    }
}

/// Types that can be mapped to and from records through a [`FieldTable`].
pub trait Mapped: Default {
    /// The descriptor table for this type. Called once per operation.
    fn fields() -> FieldTable<Self>;
}
