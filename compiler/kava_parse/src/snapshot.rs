//! Parser snapshots for speculative parsing.
//!
//! Java needs more than one token of lookahead in a few places: telling a
//! cast from a parenthesised expression, a local variable declaration from
//! an expression statement, a lambda from a parenthesised expression. The
//! parser tries the production, looks at where it ended up, and rewinds.
//!
//! ## `look_ahead()`
//!
//! Run a predicate that may consume tokens, then always rewind:
//!
//! ```text
//! let is_decl = self.look_ahead(|p| p.parse_type().is_ok() && p.check_ident());
//! ```
//!
//! ## `try_parse()`
//!
//! Keep the result on success, rewind on failure:
//!
//! ```text
//! if let Some(ty) = self.try_parse(|p| p.parse_type()) { .. }
//! ```
//!
//! # What is captured
//!
//! - cursor state (position, spliced token, previous span)
//! - parse context flags
//! - the number of recorded errors
//! - whether the assist node had been created yet
//!
//! Arena state is not captured. Nodes allocated during speculation become
//! unreachable garbage. Deferred bodies are collected by walking the tree
//! from the unit, so a rewound anonymous class never shows up as pending.

use crate::context::ParseContext;
use crate::cursor::CursorMark;

/// A lightweight snapshot of parser state for speculative parsing.
#[derive(Clone, Copy, Debug)]
pub struct ParserSnapshot {
    pub(crate) cursor: CursorMark,
    pub(crate) context: ParseContext,
    pub(crate) error_count: usize,
    /// The assist node existed when the snapshot was taken.
    pub(crate) assist_found: bool,
}

impl ParserSnapshot {
    #[inline]
    pub(crate) fn new(
        cursor: CursorMark,
        context: ParseContext,
        error_count: usize,
        assist_found: bool,
    ) -> Self {
        Self {
            cursor,
            context,
            error_count,
            assist_found,
        }
    }
}
