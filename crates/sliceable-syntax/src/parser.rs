//! # Parser - Tokens to [`SliceExpr`]
//!
//! The grammar is flat enough that a small cursor over the token stream is
//! all we need:
//!
//! ```text
//! expr      := index | range
//! index     := ["-"] digit+
//! range     := component ":" component [":" component]
//! component := "" | index
//! ```
//!
//! The colon count is checked before any component is inspected, so
//! `"a:b:c:d"` reports too many arguments rather than a bad component.

use crate::lexer::{Token, lex};
use crate::syntax_kind::SyntaxKind;
use crate::{MAX_COMPONENTS, ParseError, SliceExpr};

/// Parse a key such as `"-2"`, `"4:"` or `"-1::-2"`.
///
/// ```
/// use sliceable_syntax::{SliceExpr, parse};
///
/// assert_eq!(parse("-2"), Ok(SliceExpr::Single(-2)));
/// assert_eq!(parse("1::-1"), Ok(SliceExpr::range(Some(1), None, Some(-1))));
/// ```
pub fn parse(input: &str) -> Result<SliceExpr, ParseError> {
    let tokens = lex(input);
    let expr = Parser::new(input, &tokens).parse()?;
    log::trace!("parsed slice key {input:?} as {expr:?}");
    Ok(expr)
}

/// Cursor over the token stream of a single key.
pub struct Parser<'t, 'input> {
    input: &'input str,
    tokens: &'t [Token<'input>],
    pos: usize,
}

impl<'t, 'input> Parser<'t, 'input> {
    pub fn new(input: &'input str, tokens: &'t [Token<'input>]) -> Self {
        Self {
            input,
            tokens,
            pos: 0,
        }
    }

    pub fn parse(mut self) -> Result<SliceExpr, ParseError> {
        let colons = self.count(SyntaxKind::COLON);
        if colons == 0 {
            return self.component()?.map(SliceExpr::Single).ok_or_else(|| {
                ParseError::InvalidIndexFormat {
                    component: String::new(),
                }
            });
        }

        let count = colons + 1;
        if count > MAX_COMPONENTS {
            return Err(ParseError::TooManySliceArguments { count });
        }

        let start = self.component()?;
        self.eat(SyntaxKind::COLON);
        let stop = self.component()?;
        let step = if self.eat(SyntaxKind::COLON) {
            self.component()?
        } else {
            None
        };

        Ok(SliceExpr::Range { start, stop, step })
    }

    /// Current token kind, or EOF if past end.
    pub fn current(&self) -> SyntaxKind {
        self.tokens
            .get(self.pos)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::EOF)
    }

    pub fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    /// Consume the current token if it matches.
    pub fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn count(&self, kind: SyntaxKind) -> usize {
        self.tokens.iter().filter(|t| t.kind == kind).count()
    }

    /// Consume tokens up to the next separator and interpret them as one
    /// optional integer.
    fn component(&mut self) -> Result<Option<i64>, ParseError> {
        let first = self.pos;
        while !self.current().is_separator() {
            self.pos += 1;
        }
        let tokens = &self.tokens[first..self.pos];

        match tokens {
            [] => Ok(None),
            [token] if token.kind == SyntaxKind::INTEGER => token
                .text
                .parse::<i64>()
                .map(Some)
                .map_err(|_| self.invalid(tokens)),
            _ => Err(self.invalid(tokens)),
        }
    }

    fn invalid(&self, tokens: &[Token<'input>]) -> ParseError {
        let component = match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => &self.input[first.span.start..last.span.end],
            _ => "",
        };
        ParseError::InvalidIndexFormat {
            component: component.to_string(),
        }
    }
}
