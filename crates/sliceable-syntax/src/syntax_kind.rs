//! SyntaxKind enum for the tokens of a slice expression.

/// All token kinds a slice expression can contain.
///
/// We use SCREAMING_CASE following the rust-analyzer convention for SyntaxKind.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    /// Base-10 integer literal with an optional leading `-`
    INTEGER,
    /// `:` separating start, stop and step
    COLON,
    /// Any run of bytes the lexer does not recognise
    ERROR,
    /// End of input marker, never produced by the lexer
    EOF,
}

impl SyntaxKind {
    /// Whether this kind terminates a slice component.
    pub fn is_separator(self) -> bool {
        matches!(self, SyntaxKind::COLON | SyntaxKind::EOF)
    }
}
