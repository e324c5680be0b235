//! # Lexer - Tokenizing Slice Expressions
//!
//! The first stage of parsing breaks the key text into tokens using the
//! [Logos] lexer generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! The grammar only has two meaningful tokens:
//!
//! ```text
//! "-1::-2" → [INTEGER("-1"), COLON, COLON, INTEGER("-2")]
//! ```
//!
//! Anything else (letters, whitespace, a `+` sign, a lone `-`) becomes an
//! `ERROR` token. Like the Markdown lexer this is lossless: every byte of the
//! input appears in exactly one token, so a component's text can always be
//! recovered for error messages.
//!
//! ```
//! use sliceable_syntax::lexer::lex;
//!
//! let input = "1:x:-3";
//! let reconstructed: String = lex(input).iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```

use std::ops::Range;

use logos::Logos;

use crate::syntax_kind::SyntaxKind;

/// Token kinds produced by the Logos lexer.
///
/// This enum exists separately from [`SyntaxKind`] because Logos needs to
/// derive on it. Unrecognised input surfaces as a lexer error and is mapped to
/// [`SyntaxKind::ERROR`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `:` between components
    #[token(":")]
    Colon,

    /// Signed base-10 integer
    #[regex(r"-?[0-9]+")]
    Integer,
}

impl TokenKind {
    /// Convert to SyntaxKind.
    pub fn to_syntax_kind(self) -> SyntaxKind {
        match self {
            TokenKind::Colon => SyntaxKind::COLON,
            TokenKind::Integer => SyntaxKind::INTEGER,
        }
    }
}

/// A lexed token with its kind, text slice and byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub span: Range<usize>,
}

/// Lex the input into a sequence of tokens.
///
/// Adjacent unrecognised bytes are merged into a single `ERROR` token.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    let mut tokens: Vec<Token<'_>> = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let kind = match result {
            Ok(token_kind) => token_kind.to_syntax_kind(),
            Err(()) => SyntaxKind::ERROR,
        };

        if kind == SyntaxKind::ERROR
            && let Some(last) = tokens.last_mut()
            && last.kind == SyntaxKind::ERROR
            && last.span.end == span.start
        {
            last.span.end = span.end;
            last.text = &input[last.span.clone()];
            continue;
        }

        tokens.push(Token {
            kind,
            text: lexer.slice(),
            span,
        });
    }

    tokens
}
