use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A code-point range `[start, end)` into a text.
///
/// Unlike byte spans these never split a character; converting to a byte
/// range is the job of each [`CodePoints`](crate::CodePoints) implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start code-point index.
    pub start: usize,
    /// Exclusive end code-point index.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in code points. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }
}
