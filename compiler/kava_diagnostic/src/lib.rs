//! Diagnostics for the Java front end.
//!
//! The parser never fails on malformed input. Every problem it recovers from
//! is recorded with an [`ErrorCode`], and every code belongs to exactly one
//! recovery [`Category`]:
//! - `LexicalGap`: tokens that cannot extend the current construct
//! - `StructuralTruncation`: input ends before a construct closes
//! - `AnnotationArgumentFailure`: a malformed annotation argument list
//! - `AssistAmbiguity`: a caret position without a unique completion target

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::{Category, ErrorCode};
