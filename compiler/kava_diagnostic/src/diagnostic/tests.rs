use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("unexpected `#`")
        .with_label(Span::new(0, 1), "here")
        .with_secondary_label(Span::new(4, 9), "inside this class")
        .with_note("the token was skipped");

    assert_eq!(diag.code, ErrorCode::E1001);
    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 2);
    assert!(diag.labels[0].is_primary);
    assert!(!diag.labels[1].is_primary);
    assert_eq!(diag.primary_span(), Some(Span::new(0, 1)));
    assert_eq!(diag.category(), Category::LexicalGap);
}

#[test]
fn test_from_code_uses_default_severity() {
    assert!(Diagnostic::from_code(ErrorCode::E1007).is_error());
    assert_eq!(
        Diagnostic::from_code(ErrorCode::E1012).severity,
        Severity::Note
    );
}

#[test]
fn test_diagnostic_display() {
    let diag = Diagnostic::error(ErrorCode::E1010)
        .with_message("missing annotation value")
        .with_label(Span::new(7, 8), "expected a value after `=`");

    assert_eq!(
        diag.to_string(),
        "error[E1010]: missing annotation value\n  --> 7..8: expected a value after `=`"
    );
}
