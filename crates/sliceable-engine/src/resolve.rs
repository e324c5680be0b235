//! Normalizing slice bounds against a known length.
//!
//! This follows CPython's slice-index algorithm: each bound is made absolute
//! by adding the length when negative, then clamped in the direction of the
//! step. After that every index enumerated from the bounds is guaranteed to be
//! in `[0, length)`, so no further bounds checks are needed when extracting.

use serde::Serialize;

use crate::{SliceError, Span};

/// Absolute bounds of a stepped slice, only produced by [`resolve`].
///
/// `start` and `stop` lie in `[-1, length]`; `stop == -1` only occurs with a
/// negative step and means "one before index 0". `step` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedBounds {
    start: i64,
    stop: i64,
    step: i64,
}

impl ResolvedBounds {
    pub fn start(self) -> i64 {
        self.start
    }

    pub fn stop(self) -> i64 {
        self.stop
    }

    pub fn step(self) -> i64 {
        self.step
    }

    /// The code-point indices selected by these bounds, in extraction order.
    pub fn indices(self) -> Indices {
        Indices {
            next: Some(self.start),
            bounds: self,
        }
    }

    /// Number of indices [`indices`](Self::indices) yields.
    pub fn len(self) -> usize {
        let distance = if self.step > 0 {
            self.stop - self.start
        } else {
            self.start - self.stop
        };
        if distance <= 0 {
            return 0;
        }
        ((distance - 1) as u64 / self.step.unsigned_abs() + 1) as usize
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// Iterator over the indices of a [`ResolvedBounds`].
#[derive(Debug, Clone)]
pub struct Indices {
    bounds: ResolvedBounds,
    next: Option<i64>,
}

impl Iterator for Indices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let i = self.next?;
        let ResolvedBounds { stop, step, .. } = self.bounds;
        let in_range = if step > 0 { i < stop } else { i > stop };
        if !in_range {
            self.next = None;
            return None;
        }
        // An overflowing step has necessarily passed `stop`.
        self.next = i.checked_add(step);
        // In range implies `0 <= i < length`.
        Some(i as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(start) => ResolvedBounds {
                start,
                ..self.bounds
            }
            .len(),
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Indices {}

/// What a slice selects once its bounds are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// No index is selected.
    Empty,
    /// Step 1: a contiguous run of code points.
    Contiguous(Span),
    /// Any other step: enumerate [`ResolvedBounds::indices`].
    Stepped(ResolvedBounds),
}

/// Resolve optional `start`, `stop` and `step` against `length` code points.
///
/// ```
/// use sliceable_engine::{Resolution, Span, resolve};
///
/// assert_eq!(resolve(7, Some(-3), Some(6), None), Ok(Resolution::Contiguous(Span::new(4, 6))));
///
/// let Ok(Resolution::Stepped(bounds)) = resolve(7, None, None, Some(-2)) else {
///     panic!("expected a stepped slice");
/// };
/// assert_eq!((bounds.start(), bounds.stop(), bounds.step()), (6, -1, -2));
/// assert_eq!(bounds.indices().collect::<Vec<_>>(), vec![6, 4, 2, 0]);
/// ```
pub fn resolve(
    length: usize,
    start: Option<i64>,
    stop: Option<i64>,
    step: Option<i64>,
) -> Result<Resolution, SliceError> {
    let step = step.unwrap_or(1);
    if step == 0 {
        return Err(SliceError::ZeroStep);
    }

    let len = length_as_i64(length);
    let start = match start {
        Some(raw) => adjust_boundary(len, raw, step),
        None if step > 0 => 0,
        None => len - 1,
    };
    let stop = match stop {
        Some(raw) => adjust_boundary(len, raw, step),
        None if step > 0 => len,
        None => -1,
    };

    let bounds = ResolvedBounds { start, stop, step };
    log::trace!("resolved slice over {length} code points to {bounds:?}");

    if (step > 0 && start >= stop) || (step < 0 && start <= stop) {
        return Ok(Resolution::Empty);
    }

    if step == 1 {
        // Both bounds are within [0, length] for a positive step.
        return Ok(Resolution::Contiguous(Span::new(start as usize, stop as usize)));
    }

    Ok(Resolution::Stepped(bounds))
}

/// Make a single index absolute, counting negative values from the end.
pub fn resolve_index(length: usize, index: i64) -> Result<usize, SliceError> {
    let len = length_as_i64(length);
    let absolute = if index < 0 { index + len } else { index };
    if (0..len).contains(&absolute) {
        Ok(absolute as usize)
    } else {
        Err(SliceError::IndexOutOfBounds { index, length })
    }
}

fn adjust_boundary(length: i64, boundary: i64, step: i64) -> i64 {
    if boundary < 0 {
        let boundary = boundary + length;
        if boundary < 0 {
            if step < 0 { -1 } else { 0 }
        } else {
            boundary
        }
    } else if boundary >= length {
        if step < 0 { length - 1 } else { length }
    } else {
        boundary
    }
}

fn length_as_i64(length: usize) -> i64 {
    i64::try_from(length).unwrap_or(i64::MAX)
}
