//! Error recovery for the parser.
//!
//! Token sets naming where each scope may resume, the recovery state
//! machine, and the resynchronization loops.
//!
//! Recovery runs `Normal -> Recovering(scope) -> Resynced -> Normal`. The
//! scope is the innermost open construct that can absorb the failure:
//! a statement, a member, a type declaration, or the compilation unit.
//! After discarding tokens up to a safe token for that scope, the caller
//! either seals the half-built node or discards it.

use std::fmt;

use kava_ir::{Span, TokenKind};
use tracing::debug;

use crate::cursor::Cursor;

/// Token kinds as bits of a `u128`, one per discriminant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenSet(u128);

const fn bit(kind: TokenKind) -> u128 {
    1u128 << kind.discriminant_index()
}

impl TokenSet {
    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn single(kind: TokenKind) -> Self {
        Self(bit(kind))
    }

    /// Builder step for `const` sets.
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | bit(kind))
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        self.0 & bit(kind) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }
}

/// Modifier keywords that may open a declaration.
pub const MODIFIERS: TokenSet = TokenSet::new()
    .with(TokenKind::Public)
    .with(TokenKind::Private)
    .with(TokenKind::Protected)
    .with(TokenKind::Static)
    .with(TokenKind::Final)
    .with(TokenKind::Abstract)
    .with(TokenKind::Native)
    .with(TokenKind::Synchronized)
    .with(TokenKind::Transient)
    .with(TokenKind::Volatile)
    .with(TokenKind::Strictfp);

/// Keywords that open a type declaration.
pub const TYPE_DECL_START: TokenSet = TokenSet::new()
    .with(TokenKind::Class)
    .with(TokenKind::Interface)
    .with(TokenKind::Enum);

/// Tokens that can begin a type: primitive keywords, `void` and names.
pub const TYPE_START: TokenSet = TokenSet::new()
    .with(TokenKind::Boolean)
    .with(TokenKind::Byte)
    .with(TokenKind::Char)
    .with(TokenKind::Short)
    .with(TokenKind::Int)
    .with(TokenKind::Long)
    .with(TokenKind::Float)
    .with(TokenKind::Double)
    .with(TokenKind::Void)
    .with(TokenKind::Ident);

/// Keywords that open a statement.
pub const STMT_KEYWORDS: TokenSet = TokenSet::new()
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Do)
    .with(TokenKind::For)
    .with(TokenKind::Switch)
    .with(TokenKind::Try)
    .with(TokenKind::Return)
    .with(TokenKind::Break)
    .with(TokenKind::Continue)
    .with(TokenKind::Throw)
    .with(TokenKind::Assert);

/// Safe tokens at compilation-unit level.
pub const UNIT_RECOVERY: TokenSet = MODIFIERS
    .union(TYPE_DECL_START)
    .with(TokenKind::Package)
    .with(TokenKind::Import)
    .with(TokenKind::At)
    .with(TokenKind::Eof);

/// Safe tokens inside a type body.
pub const MEMBER_RECOVERY: TokenSet = MODIFIERS
    .union(TYPE_DECL_START)
    .with(TokenKind::At)
    .with(TokenKind::RBrace)
    .with(TokenKind::Eof);

/// Safe tokens inside a block. `;` is consumed by the resync.
pub const STMT_RECOVERY: TokenSet = TokenSet::new()
    .with(TokenKind::Semi)
    .with(TokenKind::RBrace)
    .with(TokenKind::Eof);

/// Where a broken type header stops being skipped.
pub const TYPE_HEADER_RECOVERY: TokenSet = MEMBER_RECOVERY
    .with(TokenKind::LBrace)
    .with(TokenKind::Implements)
    .with(TokenKind::Extends);

/// Where a sealed annotation's remaining arguments stop being skipped.
pub const ANNOTATION_ARGS_STOP: TokenSet = MODIFIERS
    .union(TYPE_DECL_START)
    .with(TokenKind::Semi)
    .with(TokenKind::Eof);

/// Advance the cursor until reaching a token in the recovery set or EOF.
///
/// Returns `true` if a recovery token was found, `false` if EOF was reached.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) -> bool {
    while !cursor.is_at_end() {
        if recovery.contains(cursor.current_kind()) {
            return true;
        }
        cursor.advance();
    }
    false
}

/// Like [`synchronize`], but skips `{ ... }` groups whole and also stops at
/// a token from `line_start` that begins a new line.
///
/// A `}` that would close the enclosing scope always stops the scan.
/// Returns the number of skipped tokens and whether a safe token was found.
pub fn synchronize_balanced(
    cursor: &mut Cursor<'_>,
    recovery: TokenSet,
    line_start: TokenSet,
) -> (usize, bool) {
    let mut depth = 0usize;
    let mut skipped = 0usize;
    while !cursor.is_at_end() {
        let kind = cursor.current_kind();
        if depth == 0 {
            if recovery.contains(kind)
                || kind == TokenKind::RBrace
                || (skipped > 0 && cursor.has_newline_before() && line_start.contains(kind))
            {
                return (skipped, true);
            }
        }
        match kind {
            TokenKind::LBrace => depth += 1,
            TokenKind::RBrace => depth -= 1,
            _ => {}
        }
        cursor.advance();
        skipped += 1;
    }
    (skipped, false)
}

/// Granularity at which recovery truncates and resynchronizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecoveryScope {
    Statement,
    Member,
    TypeDecl,
    Unit,
}

impl fmt::Display for RecoveryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RecoveryScope::Statement => "statement",
            RecoveryScope::Member => "member",
            RecoveryScope::TypeDecl => "type declaration",
            RecoveryScope::Unit => "compilation unit",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecoveryState {
    Normal,
    Recovering(RecoveryScope),
    Resynced(RecoveryScope),
}

/// The recovery state machine, with a log line per transition.
#[derive(Debug)]
pub struct Recovery {
    state: RecoveryState,
    attempts: usize,
}

impl Recovery {
    pub fn new() -> Self {
        Recovery {
            state: RecoveryState::Normal,
            attempts: 0,
        }
    }

    /// Number of recoveries started so far.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn begin(&mut self, scope: RecoveryScope, at: Span) {
        debug!(%scope, start = at.start, end = at.end, "recovering");
        self.attempts += 1;
        self.state = RecoveryState::Recovering(scope);
    }

    pub fn resynced(&mut self, skipped: usize, found: bool) {
        let RecoveryState::Recovering(scope) = self.state else {
            return;
        };
        debug!(%scope, skipped, found, "resynced");
        self.state = RecoveryState::Resynced(scope);
    }

    /// The half-built node was kept with the structure it had.
    pub fn seal(&mut self, node: &'static str) {
        if self.state != RecoveryState::Normal {
            debug!(node, "partial node sealed");
        }
        self.state = RecoveryState::Normal;
    }

    /// The half-built node was thrown away.
    pub fn discard(&mut self, node: &'static str) {
        if self.state != RecoveryState::Normal {
            debug!(node, "partial node discarded");
        }
        self.state = RecoveryState::Normal;
    }
}

impl Default for Recovery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
