//! Malformed input and the repaired tree it yields.

use kava_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

use super::{parse_source, render_body, render_structure};
use crate::ParseOptions;

fn codes(source: &str, options: ParseOptions) -> Vec<ErrorCode> {
    parse_source(source, options)
        .output
        .errors
        .iter()
        .map(|e| e.code)
        .collect()
}

#[test]
fn test_stray_character_before_field_keeps_annotation() {
    let source = "class X {\n  @AnAnnotation(name) #\n  int field;\n}";
    assert_eq!(
        render_structure(source),
        "class X {\n  @AnAnnotation(name) int field;\n  X() {\n  }\n}\n"
    );
    assert_eq!(codes(source, ParseOptions::structure()), vec![ErrorCode::E1008]);
}

#[test]
fn test_garbage_member_is_skipped() {
    let source = "class X {\n  int a;\n  +++ garbage;\n  int b;\n}";
    assert_eq!(
        render_structure(source),
        "class X {\n  int a;\n  int b;\n  X() {\n  }\n}\n"
    );
    assert_eq!(codes(source, ParseOptions::structure()), vec![ErrorCode::E1001]);
}

#[test]
fn test_missing_semicolon_before_next_member() {
    let source = "class X {\n  int a\n  int b;\n}";
    assert_eq!(
        render_structure(source),
        "class X {\n  int a;\n  int b;\n  X() {\n  }\n}\n"
    );
    assert_eq!(codes(source, ParseOptions::structure()), vec![ErrorCode::E1001]);
}

#[test]
fn test_unclosed_type_body() {
    let source = "class X {\n  int a;\n";
    assert_eq!(
        render_structure(source),
        "class X {\n  int a;\n  X() {\n  }\n}\n"
    );
    assert_eq!(codes(source, ParseOptions::structure()), vec![ErrorCode::E1003]);
}

#[test]
fn test_broken_extends_clause_is_dropped() {
    let source = "class X extends {\n}";
    assert_eq!(render_structure(source), "class X {\n  X() {\n  }\n}\n");
    assert_eq!(codes(source, ParseOptions::structure()), vec![ErrorCode::E1006]);
}

#[test]
fn test_broken_clause_keeps_the_next_one() {
    let source = "class X extends <> implements Runnable {}";
    assert_eq!(
        render_structure(source),
        "class X implements Runnable {\n  X() {\n  }\n}\n"
    );
}

#[test]
fn test_dangling_modifiers_in_type_body() {
    let source = "class X {\n  int a;\n  public static\n}";
    assert_eq!(
        render_structure(source),
        "class X {\n  int a;\n  X() {\n  }\n  public static\n}\n"
    );
    assert_eq!(codes(source, ParseOptions::structure()), vec![ErrorCode::E1009]);
}

#[test]
fn test_dangling_modifiers_at_end_of_unit() {
    let source = "class X {}\npublic @Deprecated";
    assert_eq!(
        render_structure(source),
        "class X {\n  X() {\n  }\n}\npublic @Deprecated\n"
    );
    assert_eq!(codes(source, ParseOptions::structure()), vec![ErrorCode::E1009]);
}

#[test]
fn test_method_without_return_type() {
    let source = "class X {\n  foo() {}\n}";
    assert_eq!(
        render_structure(source),
        "class X {\n  X() {\n  }\n  $missing$ foo() {\n  }\n}\n"
    );
    assert_eq!(codes(source, ParseOptions::structure()), vec![ErrorCode::E1005]);
}

#[test]
fn test_trailing_comma_in_parameters() {
    let source = "class X {\n  void m(int a, ) {}\n}";
    assert_eq!(
        render_structure(source),
        "class X {\n  X() {\n  }\n  void m(int a, $missing$) {\n  }\n}\n"
    );
}

#[test]
fn test_unclosed_parameter_list() {
    let source = "class X {\n  void m(int a {}\n  int b;\n}";
    assert_eq!(
        render_structure(source),
        "class X {\n  int b;\n  X() {\n  }\n  void m(int a) {\n  }\n}\n"
    );
    assert!(codes(source, ParseOptions::structure()).contains(&ErrorCode::E1003));
}

#[test]
fn test_garbage_before_first_type() {
    let source = "x y z\nclass A {}";
    assert_eq!(render_structure(source), "class A {\n  A() {\n  }\n}\n");
    assert_eq!(codes(source, ParseOptions::structure()), vec![ErrorCode::E1001]);
}

#[test]
fn test_unterminated_string_ends_field() {
    let source = "class X {\n  String s = \"abc\n  int b;\n}";
    assert_eq!(
        render_structure(source),
        "class X {\n  String s;\n  int b;\n  X() {\n  }\n}\n"
    );
    assert!(codes(source, ParseOptions::structure()).contains(&ErrorCode::E1008));
}

#[test]
fn test_broken_statement_is_skipped() {
    assert_eq!(render_body("int a = ; b();"), "b();");
}

#[test]
fn test_missing_semicolon_before_newline() {
    assert_eq!(render_body("int a = 1\n b();"), "int a = 1;\nb();");
}

#[test]
fn test_misplaced_else_is_skipped() {
    let source = "class T { void m() { else x(); y(); } }";
    let parsed = parse_source(source, ParseOptions::full());
    assert!(parsed
        .output
        .errors_with_code(ErrorCode::E1013)
        .next()
        .is_some());
    assert_eq!(render_body("else x(); y();"), "y();");
}

#[test]
fn test_errors_carry_context() {
    let parsed = parse_source("class X { void m(int a, ) {} }", ParseOptions::structure());
    let error = &parsed.output.errors[0];
    assert_eq!(error.context.as_deref(), Some("while parsing a parameter list"));
}

#[test]
fn test_recovery_never_loses_later_types() {
    let source = "class A { void m( }\nclass B {}";
    let output = parse_source(source, ParseOptions::structure()).output;
    assert_eq!(output.unit.types.len(), 2);
}
