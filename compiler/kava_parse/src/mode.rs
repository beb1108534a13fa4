//! Elaboration depth selection.
//!
//! A single [`ParseOptions`] value decides how far the parser elaborates a
//! unit. There are no global switches: every entry point takes its options
//! explicitly.

use std::fmt;

/// How much of a compilation unit gets elaborated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Depth {
    /// Declarations and member headers only; bodies are left `Unparsed`.
    #[default]
    StructureOnly,
    /// A structure-only pass, followed by every body in source order,
    /// reusing the skeleton built by the first pass.
    StructureWithBodies,
    /// Bodies are parsed eagerly during the single pass.
    Full,
    /// Structure-only elaboration, except the body under the caret at this
    /// byte offset, which is searched for the completion point.
    Assist(u32),
}

impl Depth {
    /// Bodies are elaborated while the skeleton is built.
    pub fn parses_bodies_eagerly(self) -> bool {
        matches!(self, Depth::Full)
    }

    pub fn caret(self) -> Option<u32> {
        match self {
            Depth::Assist(caret) => Some(caret),
            _ => None,
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Depth::StructureOnly => f.write_str("structure"),
            Depth::StructureWithBodies => f.write_str("structure+bodies"),
            Depth::Full => f.write_str("full"),
            Depth::Assist(caret) => write!(f, "assist@{caret}"),
        }
    }
}

/// Parser configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub depth: Depth,
}

impl ParseOptions {
    pub fn new(depth: Depth) -> Self {
        ParseOptions { depth }
    }

    pub fn structure() -> Self {
        Self::new(Depth::StructureOnly)
    }

    pub fn with_bodies() -> Self {
        Self::new(Depth::StructureWithBodies)
    }

    pub fn full() -> Self {
        Self::new(Depth::Full)
    }

    pub fn assist(caret: u32) -> Self {
        Self::new(Depth::Assist(caret))
    }

    #[inline]
    pub fn caret(self) -> Option<u32> {
        self.depth.caret()
    }
}
