use sliceable_syntax::ParseError;

/// Failures of index and slice access.
///
/// An empty slice is not an error; it produces an empty value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SliceError {
    #[error("Slice step cannot be 0")]
    ZeroStep,

    #[error("Index {index} is out of bounds for length {length}")]
    IndexOutOfBounds { index: i64, length: usize },

    #[error(transparent)]
    Parse(#[from] ParseError),
}
