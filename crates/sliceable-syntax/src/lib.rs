//! # sliceable-syntax
//!
//! Parses the text of an index key into a [`SliceExpr`].
//!
//! Keys follow Python's subscript notation:
//!
//! ```text
//! "2"        → Single(2)
//! "-1:"      → Range { start: -1, stop: _, step: _ }
//! "-1::-2"   → Range { start: -1, stop: _, step: -2 }
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! Key Text → Lexer → Tokens → Parser → SliceExpr
//!            (Logos)
//! ```
//!
//! The [`lexer`] never fails; anything it does not recognise is kept as an
//! `ERROR` token so the [`parser`] can report the offending component
//! verbatim. Integers are parsed explicitly into `i64` - a component that is
//! not a base-10 integer (or does not fit) is an error, never a silent zero.
//!
//! ## Quick Start
//!
//! ```
//! use sliceable_syntax::{ParseError, SliceExpr, parse};
//!
//! assert_eq!(parse("4:6"), Ok(SliceExpr::range(Some(4), Some(6), None)));
//! assert_eq!(
//!     parse("1:2:3:4"),
//!     Err(ParseError::TooManySliceArguments { count: 4 })
//! );
//! ```

pub mod error;
pub mod expr;
pub mod lexer;
pub mod parser;
pub mod syntax_kind;

pub use error::ParseError;
pub use expr::SliceExpr;
pub use parser::parse;
pub use syntax_kind::SyntaxKind;

/// Maximum number of `:`-separated components: start, stop and step.
pub const MAX_COMPONENTS: usize = 3;
