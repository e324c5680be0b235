use crate::MAX_COMPONENTS;

/// Reasons a key cannot be parsed into a [`SliceExpr`](crate::SliceExpr).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid index format: {component:?} is not a base-10 integer")]
    InvalidIndexFormat { component: String },

    #[error("Too many slice arguments: got {count}, at most {max} allowed", max = MAX_COMPONENTS)]
    TooManySliceArguments { count: usize },
}
