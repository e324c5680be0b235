//! Index and slice access over any [`CodePoints`] text.

use std::fmt;

use sliceable_syntax::{SliceExpr, parse};

use crate::resolve::{Resolution, resolve, resolve_index};
use crate::{CodePoints, SliceError};

/// Result of [`get`]: a single code point for an index key, or a new value
/// for a slice key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliceKey<T> {
    Char(char),
    Text(T),
}

impl<T: fmt::Display> fmt::Display for SliceKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceKey::Char(c) => write!(f, "{c}"),
            SliceKey::Text(t) => write!(f, "{t}"),
        }
    }
}

/// The code point at `index`, counting from the end when negative.
///
/// ```
/// use sliceable_engine::get_by_index;
///
/// assert_eq!(get_by_index("Fòô Bàř", 2), Ok('ô'));
/// assert_eq!(get_by_index("Fòô Bàř", -2), Ok('à'));
/// assert!(get_by_index("Fòô Bàř", 10).is_err());
/// ```
pub fn get_by_index<S>(source: &S, index: i64) -> Result<char, SliceError>
where
    S: CodePoints + ?Sized,
{
    let length = source.len_code_points();
    let absolute = resolve_index(length, index)?;
    source
        .code_point_at(absolute)
        .ok_or(SliceError::IndexOutOfBounds { index, length })
}

/// Whether `index` addresses a code point of `source`.
pub fn has_index<S>(source: &S, index: i64) -> bool
where
    S: CodePoints + ?Sized,
{
    resolve_index(source.len_code_points(), index).is_ok()
}

/// Parse `expr` and return the slice it denotes as a new value.
///
/// A colon-free key such as `"2"` selects the one code point at that index,
/// returned as a value of length one.
///
/// ```
/// use sliceable_engine::get_by_slice;
///
/// assert_eq!(get_by_slice("Fòô Bàř", "4:").unwrap(), "Bàř");
/// assert_eq!(get_by_slice("Fòô Bàř", "::-1").unwrap(), "řàB ôòF");
/// ```
pub fn get_by_slice<S>(source: &S, expr: &str) -> Result<S::Owned, SliceError>
where
    S: CodePoints + ?Sized,
{
    match parse(expr)? {
        SliceExpr::Single(index) => {
            let c = get_by_index(source, index)?;
            Ok(S::from_code_points([c], &source.encoding()))
        }
        SliceExpr::Range { start, stop, step } => slice(source, start, stop, step),
    }
}

/// Slice `source` with already-parsed bounds.
pub fn slice<S>(
    source: &S,
    start: Option<i64>,
    stop: Option<i64>,
    step: Option<i64>,
) -> Result<S::Owned, SliceError>
where
    S: CodePoints + ?Sized,
{
    let encoding = source.encoding();
    let value = match resolve(source.len_code_points(), start, stop, step)? {
        Resolution::Empty => S::from_code_points(std::iter::empty(), &encoding),
        Resolution::Contiguous(span) => source.contiguous(span),
        Resolution::Stepped(bounds) => {
            let code_points = source.to_code_points();
            S::from_code_points(
                bounds.indices().filter_map(|i| code_points.get(i).copied()),
                &encoding,
            )
        }
    };
    Ok(value)
}

/// Dispatch a key on its parsed shape: index keys yield a code point, slice
/// keys yield a new value.
pub fn get<S>(source: &S, key: &str) -> Result<SliceKey<S::Owned>, SliceError>
where
    S: CodePoints + ?Sized,
{
    apply(source, parse(key)?)
}

/// [`get`] for an expression that has already been parsed.
pub fn apply<S>(source: &S, expr: SliceExpr) -> Result<SliceKey<S::Owned>, SliceError>
where
    S: CodePoints + ?Sized,
{
    match expr {
        SliceExpr::Single(index) => get_by_index(source, index).map(SliceKey::Char),
        SliceExpr::Range { start, stop, step } => {
            slice(source, start, stop, step).map(SliceKey::Text)
        }
    }
}
