//! Slicing for [`xi_rope::Rope`].
//!
//! Ropes store their text in chunks, so everything here walks
//! `iter_chunks` rather than materializing the whole text first.

use std::ops::Range;

use xi_rope::Rope;

use crate::{CodePoints, Encoding, Span};

impl CodePoints for Rope {
    type Owned = Rope;

    fn len_code_points(&self) -> usize {
        self.iter_chunks(..).map(|chunk| chunk.chars().count()).sum()
    }

    fn code_point_at(&self, index: usize) -> Option<char> {
        self.iter_chunks(..).flat_map(str::chars).nth(index)
    }

    fn encoding(&self) -> Encoding {
        Encoding::UTF_8
    }

    fn from_code_points<I>(code_points: I, _encoding: &Encoding) -> Rope
    where
        I: IntoIterator<Item = char>,
    {
        Rope::from(code_points.into_iter().collect::<String>())
    }

    fn to_code_points(&self) -> Vec<char> {
        self.iter_chunks(..).flat_map(str::chars).collect()
    }

    fn contiguous(&self, span: Span) -> Rope {
        Rope::from(slice_to_string(self, span))
    }
}

/// Extracts the text for a code-point span from the rope as an owned String.
///
/// This allocates; prefer [`CodePoints::contiguous`] to stay in rope form.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    rope.slice_to_cow(byte_range(rope, sp)).into_owned()
}

/// Byte offsets of a code-point span, clamped to the rope's length.
fn byte_range(rope: &Rope, sp: Span) -> Range<usize> {
    let mut start = None;
    let mut end = None;
    let mut base = 0;
    let mut index = 0;

    'chunks: for chunk in rope.iter_chunks(..) {
        for (offset, _) in chunk.char_indices() {
            if index == sp.start {
                start = Some(base + offset);
            }
            if index == sp.end {
                end = Some(base + offset);
                break 'chunks;
            }
            index += 1;
        }
        base += chunk.len();
    }

    let start = start.unwrap_or(rope.len());
    let end = end.unwrap_or(rope.len()).max(start);
    start..end
}
