//! Parse context flags for context-sensitive parsing.
//!
//! A handful of Java constructs parse differently depending on where they
//! appear: element values inside annotation arguments, and declarations
//! nested inside an executable body.

/// Context flags for parsing.
///
/// Multiple flags can be combined using bitwise OR.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseContext(u16);

impl ParseContext {
    /// No special context.
    pub const NONE: Self = Self(0);

    /// Inside the argument list of an annotation.
    /// Array initializers here hold element values, so the caret in one
    /// completes a name rather than an array element.
    pub const IN_ANNOTATION: Self = Self(1 << 0);

    /// Inside a method, constructor, initializer or lambda body.
    /// Nested type declarations parse their own bodies eagerly here,
    /// whatever the requested depth.
    pub const IN_BODY: Self = Self(1 << 1);

    /// Directly inside an array initializer's element list.
    pub const IN_ARRAY_INIT: Self = Self(1 << 2);

    #[inline]
    pub const fn new() -> Self {
        Self::NONE
    }

    /// Check if a flag is set.
    #[inline]
    pub const fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    /// Add a flag to the context.
    #[inline]
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    /// Remove a flag from the context.
    #[inline]
    #[must_use]
    pub const fn without(self, flag: Self) -> Self {
        Self(self.0 & !flag.0)
    }

    #[inline]
    pub const fn in_annotation(self) -> bool {
        self.has(Self::IN_ANNOTATION)
    }

    #[inline]
    pub const fn in_body(self) -> bool {
        self.has(Self::IN_BODY)
    }

    #[inline]
    pub const fn in_array_init(self) -> bool {
        self.has(Self::IN_ARRAY_INIT)
    }
}
