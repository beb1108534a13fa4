//! Progress tracking for parser error recovery.
//!
//! Every scope loop (compilation unit, type body, block, argument list)
//! checks whether an iteration consumed tokens. An iteration that failed
//! without progress must skip a token itself, otherwise the loop would
//! spin on the same input forever.

/// Indicates whether parsing made progress (consumed tokens).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    /// Parser consumed one or more tokens.
    Made,
    /// Parser did not consume any tokens.
    None,
}

impl Progress {
    /// Compare two cursor positions.
    pub fn between(before: usize, after: usize) -> Progress {
        if after > before {
            Progress::Made
        } else {
            Progress::None
        }
    }

    pub fn made(self) -> bool {
        matches!(self, Progress::Made)
    }

    pub fn none(self) -> bool {
        matches!(self, Progress::None)
    }

    /// Made if either made progress.
    #[must_use]
    pub fn or(self, other: Progress) -> Progress {
        if self.made() || other.made() {
            Progress::Made
        } else {
            Progress::None
        }
    }
}
