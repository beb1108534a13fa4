//! Statement forms inside bodies.

use kava_ir::ast::{Body, Member, StmtKind};
use pretty_assertions::assert_eq;

use super::{parse_source, render_body};
use crate::ParseOptions;

#[test]
fn test_local_variables_split_per_declarator() {
    assert_eq!(
        render_body("int a = 1, b; final String s = \"x\";"),
        "int a = 1;\nint b;\nfinal String s = \"x\";"
    );
}

#[test]
fn test_local_array_dims_after_name() {
    assert_eq!(render_body("int a[] = {1, 2};"), "int[] a = {1, 2};");
}

#[test]
fn test_if_else() {
    assert_eq!(
        render_body("if (a) b(); else { c(); }"),
        "if (a)\n  b();\nelse {\n  c();\n}"
    );
    assert_eq!(
        render_body("if (a) { b(); } else c();"),
        "if (a) {\n  b();\n} else\n  c();"
    );
}

#[test]
fn test_loops() {
    assert_eq!(render_body("while (i < 10) i++;"), "while (i < 10)\n  i++;");
    assert_eq!(
        render_body("do { x(); } while (y);"),
        "do {\n  x();\n} while (y);"
    );
    assert_eq!(
        render_body("for (int i = 0, j = 1; i < j; i++, j--) {}"),
        "for (int i = 0, int j = 1; i < j; i++, j--) {\n}"
    );
    assert_eq!(
        render_body("for (String s : list) use(s);"),
        "for (String s : list)\n  use(s);"
    );
}

#[test]
fn test_for_with_expression_init() {
    assert_eq!(
        render_body("for (i = 0; i < n; i++) sum += i;"),
        "for (i = 0; i < n; i++)\n  sum += i;"
    );
}

#[test]
fn test_switch() {
    assert_eq!(
        render_body("switch (k) { case 1: case 2: a(); break; default: b(); }"),
        "switch (k) {\n  case 1:\n  case 2:\n    a();\n    break;\n  default:\n    b();\n}"
    );
}

#[test]
fn test_try_catch_finally() {
    assert_eq!(
        render_body(
            "try (Reader r = open()) { read(r); } catch (IOException | RuntimeException e) { log(e); } finally { close(); }"
        ),
        "try (Reader r = open()) {\n  read(r);\n} catch (IOException | RuntimeException e) {\n  log(e);\n} finally {\n  close();\n}"
    );
}

#[test]
fn test_try_without_handlers_is_reported() {
    let parsed = parse_source(
        "class T { void m() { try { a(); } } }",
        ParseOptions::full(),
    );
    assert!(parsed.output.has_errors());
}

#[test]
fn test_jumps_and_labels() {
    assert_eq!(
        render_body("outer: while (true) { if (done) break outer; continue; }"),
        "outer: while (true) {\n  if (done)\n    break outer;\n  continue;\n}"
    );
    assert_eq!(
        render_body("throw new IllegalStateException(\"bad\");"),
        "throw new IllegalStateException(\"bad\");"
    );
    assert_eq!(render_body("return;"), "return;");
}

#[test]
fn test_synchronized_and_assert() {
    assert_eq!(
        render_body("synchronized (lock) { return; } assert x > 0 : \"negative\";"),
        "synchronized (lock) {\n  return;\n}\nassert x > 0 : \"negative\";"
    );
}

#[test]
fn test_empty_statement() {
    assert_eq!(render_body("a();;"), "a();\n;");
}

#[test]
fn test_local_class() {
    assert_eq!(
        render_body("class Local { int f; } new Local();"),
        "class Local {\n  int f;\n  Local() {\n    super();\n  }\n}\nnew Local();"
    );
}

#[test]
fn test_local_class_is_a_statement() {
    let output = parse_source(
        "class T { void m() { final class L {} } }",
        ParseOptions::full(),
    )
    .output;
    let decl = output.arena.type_decl(output.unit.types[0]);
    let Some(Member::Method(method)) = decl
        .members
        .iter()
        .find(|member| matches!(member, Member::Method(m) if !m.is_default_constructor))
    else {
        panic!("method not found");
    };
    let Body::Parsed(block) = &method.body else {
        panic!("body not parsed: {:?}", method.body);
    };
    assert_eq!(block.stmts.len(), 1);
    assert!(matches!(
        output.arena.stmt(block.stmts[0]).kind,
        StmtKind::LocalType(_)
    ));
}
