//! Error codes for parser diagnostics.
//!
//! Each code is a unique identifier (e.g., `E1001`) usable for lookups and
//! documentation. All codes are in the parser range `E1xxx`.

use std::fmt;

use crate::Severity;

/// How a recovered problem was handled.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Category {
    /// Unparseable tokens inside an otherwise valid scope; skipped by resynchronization.
    LexicalGap,
    /// Input ended before a construct closed; the construct was closed synthetically.
    StructuralTruncation,
    /// Malformed annotation member name or value; the annotation was sealed.
    AnnotationArgumentFailure,
    /// The caret had no unique completion target.
    AssistAmbiguity,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::LexicalGap => "lexical gap",
            Category::StructuralTruncation => "structural truncation",
            Category::AnnotationArgumentFailure => "annotation argument failure",
            Category::AssistAmbiguity => "assist ambiguity",
        };
        f.write_str(name)
    }
}

/// Parser error codes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Expected type
    E1005,
    /// Broken type declaration header (`class X extends {`)
    E1006,
    /// Method or initializer body does not close
    E1007,
    /// Invalid token from the scanner (unterminated literal, stray character)
    E1008,
    /// Modifiers or annotations with no declaration after them
    E1009,
    /// Annotation member value missing after `=`
    E1010,
    /// Malformed annotation argument list
    E1011,
    /// Caret is on an identifier that cannot be completed
    E1012,
    /// Expected statement
    E1013,
}

impl ErrorCode {
    /// All codes, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        ErrorCode::E1010,
        ErrorCode::E1011,
        ErrorCode::E1012,
        ErrorCode::E1013,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E1012 => "E1012",
            ErrorCode::E1013 => "E1013",
        }
    }

    /// Recovery category this code is reported under.
    pub fn category(&self) -> Category {
        match self {
            ErrorCode::E1001
            | ErrorCode::E1002
            | ErrorCode::E1004
            | ErrorCode::E1005
            | ErrorCode::E1006
            | ErrorCode::E1008
            | ErrorCode::E1013 => Category::LexicalGap,
            ErrorCode::E1003 | ErrorCode::E1007 | ErrorCode::E1009 => {
                Category::StructuralTruncation
            }
            ErrorCode::E1010 | ErrorCode::E1011 => Category::AnnotationArgumentFailure,
            ErrorCode::E1012 => Category::AssistAmbiguity,
        }
    }

    /// Assist ambiguities are informational; everything else is an error.
    pub fn severity(&self) -> Severity {
        match self.category() {
            Category::AssistAmbiguity => Severity::Note,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
