//! Python-style index and slice access over Unicode code points.
//!
//! ```
//! use sliceable_engine::{SliceError, get_by_index, get_by_slice};
//!
//! let s = "Fòô Bàř";
//! assert_eq!(get_by_index(s, -2), Ok('à'));
//! assert_eq!(get_by_slice(s, "1:5:3").unwrap(), "òB");
//! assert_eq!(get_by_slice(s, "1:2:0"), Err(SliceError::ZeroStep));
//! ```
//!
//! Any text type implementing [`CodePoints`] gets the same access; `str`,
//! `String`, [`SliceableString`] and [`xi_rope::Rope`] are provided.

pub mod access;
pub mod encoding;
pub mod error;
pub mod resolve;
pub mod rope;
pub mod source;
pub mod span;
pub mod string;

// Re-export key types for easier usage
pub use access::{SliceKey, apply, get, get_by_index, get_by_slice, has_index, slice};
pub use encoding::Encoding;
pub use error::SliceError;
pub use resolve::{Indices, Resolution, ResolvedBounds, resolve, resolve_index};
pub use source::CodePoints;
pub use span::Span;
pub use string::SliceableString;

pub use sliceable_syntax::{ParseError, SliceExpr, parse};
