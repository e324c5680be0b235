//! The capability a text type needs to gain index and slice access.

use std::ops::Range;

use crate::{Encoding, Span};

/// A text that can be read as a sequence of Unicode code points.
///
/// Implement this for any text type to get [`get_by_index`],
/// [`get_by_slice`] and [`get`] for free. Only the first four methods are
/// required; the others have defaults built on them that implementations can
/// override with something cheaper.
///
/// [`get_by_index`]: crate::get_by_index
/// [`get_by_slice`]: crate::get_by_slice
/// [`get`]: crate::get
pub trait CodePoints {
    /// The value produced by slicing.
    type Owned;

    /// Length in code points, not bytes.
    fn len_code_points(&self) -> usize;

    /// The code point at a 0-based index, or `None` past the end.
    fn code_point_at(&self, index: usize) -> Option<char>;

    /// Encoding tag carried over to sliced values.
    fn encoding(&self) -> Encoding;

    /// Build a new value from code points and an encoding tag.
    fn from_code_points<I>(code_points: I, encoding: &Encoding) -> Self::Owned
    where
        I: IntoIterator<Item = char>;

    /// All code points in order.
    fn to_code_points(&self) -> Vec<char> {
        (0..self.len_code_points())
            .map_while(|i| self.code_point_at(i))
            .collect()
    }

    /// Copy the contiguous code points covered by `span`.
    fn contiguous(&self, span: Span) -> Self::Owned {
        Self::from_code_points(
            span.range().map_while(|i| self.code_point_at(i)),
            &self.encoding(),
        )
    }
}

impl CodePoints for str {
    type Owned = String;

    fn len_code_points(&self) -> usize {
        self.chars().count()
    }

    fn code_point_at(&self, index: usize) -> Option<char> {
        self.chars().nth(index)
    }

    fn encoding(&self) -> Encoding {
        Encoding::UTF_8
    }

    fn from_code_points<I>(code_points: I, _encoding: &Encoding) -> String
    where
        I: IntoIterator<Item = char>,
    {
        code_points.into_iter().collect()
    }

    fn to_code_points(&self) -> Vec<char> {
        self.chars().collect()
    }

    fn contiguous(&self, span: Span) -> String {
        self[byte_range(self, span)].to_string()
    }
}

impl CodePoints for String {
    type Owned = String;

    fn len_code_points(&self) -> usize {
        self.as_str().len_code_points()
    }

    fn code_point_at(&self, index: usize) -> Option<char> {
        self.as_str().code_point_at(index)
    }

    fn encoding(&self) -> Encoding {
        Encoding::UTF_8
    }

    fn from_code_points<I>(code_points: I, encoding: &Encoding) -> String
    where
        I: IntoIterator<Item = char>,
    {
        <str as CodePoints>::from_code_points(code_points, encoding)
    }

    fn to_code_points(&self) -> Vec<char> {
        self.as_str().to_code_points()
    }

    fn contiguous(&self, span: Span) -> String {
        self.as_str().contiguous(span)
    }
}

/// Byte offsets of a code-point span within `text`.
///
/// Offsets past the end of the text clamp to its byte length.
pub(crate) fn byte_range(text: &str, span: Span) -> Range<usize> {
    let mut offsets = text
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()));
    let start = offsets.nth(span.start).unwrap_or(text.len());
    let end = if span.end > span.start {
        offsets.nth(span.end - span.start - 1).unwrap_or(text.len())
    } else {
        start
    };
    start..end
}
