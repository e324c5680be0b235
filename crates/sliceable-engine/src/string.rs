use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CodePoints, Encoding, SliceError, SliceKey, Span, access};

/// Owned text with an encoding tag and Python-style index and slice access.
///
/// Every accessor returns a new value; the source is never modified.
///
/// ```
/// use sliceable_engine::SliceableString;
///
/// let s = SliceableString::new("Fòô Bàř");
/// assert_eq!(s.index(-2).unwrap(), 'à');
/// assert_eq!(s.slice("-1::-2").unwrap(), "řBôF");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SliceableString {
    text: String,
    encoding: Encoding,
}

impl SliceableString {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_encoding(text, Encoding::UTF_8)
    }

    pub fn with_encoding(text: impl Into<String>, encoding: Encoding) -> Self {
        Self {
            text: text.into(),
            encoding,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn encoding(&self) -> &Encoding {
        &self.encoding
    }

    /// Length in code points.
    pub fn len(&self) -> usize {
        self.text.len_code_points()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The code point at `index`; negative indices count from the end.
    pub fn index(&self, index: i64) -> Result<char, SliceError> {
        access::get_by_index(self, index)
    }

    pub fn has_index(&self, index: i64) -> bool {
        access::has_index(self, index)
    }

    /// The slice denoted by `expr`, e.g. `"4:"` or `"::-1"`.
    pub fn slice(&self, expr: &str) -> Result<Self, SliceError> {
        access::get_by_slice(self, expr)
    }

    pub fn slice_with(
        &self,
        start: Option<i64>,
        stop: Option<i64>,
        step: Option<i64>,
    ) -> Result<Self, SliceError> {
        access::slice(self, start, stop, step)
    }

    pub fn get(&self, key: &str) -> Result<SliceKey<Self>, SliceError> {
        access::get(self, key)
    }
}

impl CodePoints for SliceableString {
    type Owned = SliceableString;

    fn len_code_points(&self) -> usize {
        self.text.len_code_points()
    }

    fn code_point_at(&self, index: usize) -> Option<char> {
        self.text.code_point_at(index)
    }

    fn encoding(&self) -> Encoding {
        self.encoding.clone()
    }

    fn from_code_points<I>(code_points: I, encoding: &Encoding) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self::with_encoding(code_points.into_iter().collect::<String>(), encoding.clone())
    }

    fn to_code_points(&self) -> Vec<char> {
        self.text.to_code_points()
    }

    fn contiguous(&self, span: Span) -> Self {
        Self::with_encoding(self.text.contiguous(span), self.encoding.clone())
    }
}

impl fmt::Display for SliceableString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for SliceableString {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<&str> for SliceableString {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SliceableString {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<SliceableString> for String {
    fn from(s: SliceableString) -> Self {
        s.text
    }
}

impl PartialEq<str> for SliceableString {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for SliceableString {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}
