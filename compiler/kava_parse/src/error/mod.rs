//! Parse error types.
//!
//! Every problem the parser recovers from becomes a [`ParseError`]. None of
//! them stop the parse; they are collected in `ParseOutput::errors` and can
//! be turned into [`Diagnostic`]s for display.

mod context;

pub use context::ErrorContext;

use kava_diagnostic::{Diagnostic, ErrorCode, Severity};
use kava_ir::Span;

/// A recovered parse problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    /// "while parsing X" description of the enclosing production.
    pub context: Option<String>,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Severity this error is reported with.
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Convert to a full Diagnostic for rich error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::from_code(self.code)
            .with_message(&self.message)
            .with_label(self.span, self.context.as_deref().unwrap_or("here"))
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {} at {}", self.code, self.message, self.span)?;
        if let Some(context) = &self.context {
            write!(f, " ({context})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
