//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.
//! A cursor can be bounded to a token range: everything at or past the end
//! of the range reads as `Eof`, which is how a deferred body is parsed
//! without seeing its siblings.

use kava_diagnostic::ErrorCode;
use kava_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList, TokenRange};
use tracing::trace;

use crate::ParseError;

/// Saved cursor state, restored with [`Cursor::reset`].
///
/// Opaque so callers cannot hand-edit positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorMark {
    pos: usize,
    spliced: Option<Token>,
    prev: Span,
}

/// Cursor for navigating tokens.
///
/// Tracks the current position in the token stream, an optional upper
/// bound, and at most one synthetic token spliced in front of the current
/// one by recovery.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
    /// Index of the first token that reads as `Eof`.
    end: usize,
    /// Stand-in returned once `pos` reaches `end`.
    eof: Token,
    /// Synthetic token consumed before `tokens[pos]`.
    spliced: Option<Token>,
    prev: Span,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        let end = tokens.len().saturating_sub(1);
        Cursor::bounded(tokens, interner, TokenRange::new(0, to_u32(end)))
    }

    /// Create a cursor over `range` only. Tokens from `range.end` on read
    /// as `Eof` positioned at the start of the first excluded token.
    pub fn bounded(tokens: &'a TokenList, interner: &'a StringInterner, range: TokenRange) -> Self {
        let last = tokens.len().saturating_sub(1);
        let end = (range.end as usize).min(last);
        let at = tokens.get(end).map_or(0, |t| t.span.start);
        Cursor {
            tokens,
            interner,
            pos: (range.start as usize).min(end),
            end,
            eof: Token::new(TokenKind::Eof, Span::point(at)),
            spliced: None,
            prev: Span::DUMMY,
        }
    }

    /// Get a reference to the string interner.
    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Get the token list this cursor reads from.
    pub fn tokens(&self) -> &'a TokenList {
        self.tokens
    }

    /// Get the current position in the token stream.
    ///
    /// Used for progress tracking: compare positions before and after
    /// parsing to determine if tokens were consumed.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Current position as a token index for [`TokenRange`]s.
    pub fn token_index(&self) -> u32 {
        to_u32(self.pos)
    }

    /// Save the complete cursor state.
    pub fn mark(&self) -> CursorMark {
        CursorMark {
            pos: self.pos,
            spliced: self.spliced,
            prev: self.prev,
        }
    }

    /// Return to a state saved by [`Cursor::mark`].
    pub fn reset(&mut self, mark: CursorMark) {
        debug_assert!(
            mark.pos <= self.end,
            "cursor mark {} out of bounds (end {})",
            mark.pos,
            self.end
        );
        self.pos = mark.pos;
        self.spliced = mark.spliced;
        self.prev = mark.prev;
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &Token {
        if let Some(token) = &self.spliced {
            return token;
        }
        if self.pos >= self.end {
            return &self.eof;
        }
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Interned text of the current token; empty for punctuation.
    #[inline]
    pub fn current_text(&self) -> Name {
        self.current().text
    }

    /// Span of the last consumed token, or `Span::DUMMY` at the start.
    #[inline]
    pub fn previous_span(&self) -> Span {
        self.prev
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn check_ident(&self) -> bool {
        self.check(TokenKind::Ident)
    }

    /// True if a line break precedes the current token.
    #[inline]
    pub fn has_newline_before(&self) -> bool {
        self.spliced.is_none() && self.current().flags.has_newline_before()
    }

    /// Peek at the token `n` places ahead. `peek_token_at(0)` is the current
    /// token. Returns the `Eof` stand-in past the end.
    pub fn peek_token_at(&self, n: usize) -> &Token {
        let n = match (&self.spliced, n) {
            (Some(token), 0) => return token,
            (Some(_), n) => n - 1,
            (None, n) => n,
        };
        let index = self.pos + n;
        if index >= self.end {
            &self.eof
        } else {
            &self.tokens[index]
        }
    }

    /// Peek at the token kind at offset `n` from current position.
    #[inline]
    pub fn peek_kind_at(&self, n: usize) -> TokenKind {
        self.peek_token_at(n).kind
    }

    #[inline]
    pub fn peek_next_kind(&self) -> TokenKind {
        self.peek_kind_at(1)
    }

    /// True if the token `n` places ahead touches the one before it.
    #[inline]
    pub fn is_adjacent_at(&self, n: usize) -> bool {
        self.peek_token_at(n).flags.is_adjacent()
    }

    /// Number of tokens forming a `>`-based operator at the current
    /// position, together with whether it ends in `=`.
    ///
    /// The scanner never combines `>`, so `>>`, `>>>`, `>=`, `>>=` and
    /// `>>>=` are recognised here from adjacency. Returns `(0, false)` when
    /// the current token is not `>`.
    pub fn greater_run(&self) -> (usize, bool) {
        if !self.check(TokenKind::Gt) {
            return (0, false);
        }
        let mut count = 1;
        while count < 3
            && self.peek_kind_at(count) == TokenKind::Gt
            && self.is_adjacent_at(count)
        {
            count += 1;
        }
        let assign = self.peek_kind_at(count) == TokenKind::Eq && self.is_adjacent_at(count);
        (count, assign)
    }

    /// Advance to the next token and return the consumed token.
    ///
    /// At the end of the stream (or of the bound) the cursor stays on `Eof`.
    pub fn advance(&mut self) -> Token {
        if let Some(token) = self.spliced.take() {
            trace!(kind = %token.kind, "advance over spliced token");
            self.prev = token.span;
            return token;
        }
        let token = *self.current();
        trace!(
            pos = self.pos,
            kind = %token.kind,
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if self.pos < self.end {
            self.pos += 1;
        }
        self.prev = token.span;
        token
    }

    /// Advance `n` tokens.
    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Insert a zero-width synthetic token before the current one.
    ///
    /// Recovery uses this to close a construct the source left open, e.g.
    /// a `)` for an unterminated parameter list, so the regular grammar
    /// path can consume it.
    pub fn splice(&mut self, kind: TokenKind) {
        debug_assert!(self.spliced.is_none(), "only one token can be spliced");
        let at = self.current_span().start;
        trace!(kind = %kind, at, "splice");
        self.spliced = Some(Token::new(kind, Span::point(at)));
    }

    /// Consume the current token if it is `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind`, or fail without consuming anything.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(&format!("`{kind}`")))
        }
    }

    /// Consume an identifier and return its interned text.
    pub fn expect_ident(&mut self) -> Result<Name, ParseError> {
        if self.check_ident() {
            Ok(self.advance().text)
        } else {
            Err(ParseError::new(
                ErrorCode::E1004,
                format!("expected identifier, found {}", self.describe_current()),
                self.current_span(),
            ))
        }
    }

    /// Build an "expected X, found Y" error at the current token.
    pub fn unexpected(&self, expected: &str) -> ParseError {
        let code = if self.check(TokenKind::Error) {
            ErrorCode::E1008
        } else {
            ErrorCode::E1001
        };
        ParseError::new(
            code,
            format!("expected {expected}, found {}", self.describe_current()),
            self.current_span(),
        )
    }

    /// Human-readable description of the current token.
    pub fn describe_current(&self) -> String {
        let token = self.current();
        if token.kind.has_text() {
            format!("`{}`", self.interner.lookup(token.text))
        } else if token.kind == TokenKind::Eof {
            "end of input".to_string()
        } else {
            format!("`{}`", token.kind)
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "token counts are bounded by source length, which the lexer caps at u32::MAX"
)]
fn to_u32(index: usize) -> u32 {
    index as u32
}

#[cfg(test)]
mod tests;
