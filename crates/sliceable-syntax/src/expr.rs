use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ParseError, parser};

/// The parsed form of an index key.
///
/// A key without a colon is a [`Single`](SliceExpr::Single) index; anything
/// with one or two colons is a [`Range`](SliceExpr::Range) whose components
/// may each be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliceExpr {
    Single(i64),
    Range {
        start: Option<i64>,
        stop: Option<i64>,
        step: Option<i64>,
    },
}

impl SliceExpr {
    /// The `:` expression, selecting every code point.
    pub const FULL: SliceExpr = SliceExpr::Range {
        start: None,
        stop: None,
        step: None,
    };

    pub fn range(start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Self {
        SliceExpr::Range { start, stop, step }
    }
}

impl FromStr for SliceExpr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

/// Writes the canonical text form, which parses back to the same value.
impl fmt::Display for SliceExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn component(f: &mut fmt::Formatter<'_>, value: Option<i64>) -> fmt::Result {
            match value {
                Some(v) => write!(f, "{v}"),
                None => Ok(()),
            }
        }

        match *self {
            SliceExpr::Single(i) => write!(f, "{i}"),
            SliceExpr::Range { start, stop, step } => {
                component(f, start)?;
                f.write_str(":")?;
                component(f, stop)?;
                if step.is_some() {
                    f.write_str(":")?;
                    component(f, step)?;
                }
                Ok(())
            }
        }
    }
}
