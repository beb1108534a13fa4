//! Precedence, casts, lambdas and creation expressions.

use kava_ir::ast::{BinaryOp, Body, ExprId, ExprKind, Member, StmtKind};
use pretty_assertions::assert_eq;

use super::{parse_source, render_body, Parsed};
use crate::ParseOptions;

/// Parse `expr;` as the only statement of a method.
fn body_expr(expr: &str) -> (Parsed, ExprId) {
    let parsed = parse_source(
        &format!("class T {{ void m() {{ {expr}; }} }}"),
        ParseOptions::full(),
    );
    let output = &parsed.output;
    let decl = output.arena.type_decl(output.unit.types[0]);
    let stmt = decl
        .members
        .iter()
        .find_map(|member| match member {
            Member::Method(method) if !method.is_default_constructor => match &method.body {
                Body::Parsed(block) => block.stmts.first().copied(),
                _ => None,
            },
            _ => None,
        })
        .expect("no statement");
    let StmtKind::Expr(expr) = output.arena.stmt(stmt).kind else {
        panic!("not an expression statement");
    };
    (parsed, expr)
}

#[test]
fn test_multiplication_binds_tighter() {
    let (parsed, expr) = body_expr("x = a + b * c");
    let arena = &parsed.output.arena;
    let ExprKind::Assign { value, .. } = arena.expr(expr).kind else {
        panic!("expected an assignment");
    };
    let ExprKind::Binary { op, right, .. } = arena.expr(value).kind else {
        panic!("expected a binary expression");
    };
    assert_eq!(op, BinaryOp::Add);
    assert!(matches!(
        arena.expr(right).kind,
        ExprKind::Binary {
            op: BinaryOp::Mul,
            ..
        }
    ));
}

#[test]
fn test_binary_operators_are_left_associative() {
    let (parsed, expr) = body_expr("a - b - c");
    let arena = &parsed.output.arena;
    let ExprKind::Binary { op, left, .. } = arena.expr(expr).kind else {
        panic!("expected a binary expression");
    };
    assert_eq!(op, BinaryOp::Sub);
    assert!(matches!(
        arena.expr(left).kind,
        ExprKind::Binary {
            op: BinaryOp::Sub,
            ..
        }
    ));
}

#[test]
fn test_shift_operators_from_greater_runs() {
    assert_eq!(
        render_body("a = b >> 2; c = d >>> e; f >>= 1; g >>>= 2; h = i > j;"),
        "a = b >> 2;\nc = d >>> e;\nf >>= 1;\ng >>>= 2;\nh = i > j;"
    );
    assert_eq!(
        render_body("List<List<String>> xs = null;"),
        "List<List<String>> xs = null;"
    );
}

#[test]
fn test_casts() {
    assert_eq!(render_body("s = (String) x;"), "s = (String) x;");
    assert_eq!(render_body("i = (int) -y;"), "i = (int) -y;");
    assert_eq!(
        render_body("o = (List<String>) items.get(0);"),
        "o = (List<String>) items.get(0);"
    );
}

#[test]
fn test_parenthesized_name_is_not_a_cast() {
    assert_eq!(render_body("r = (a) + b;"), "r = (a) + b;");
    let (parsed, expr) = body_expr("(a) - b");
    assert!(matches!(
        parsed.output.arena.expr(expr).kind,
        ExprKind::Binary {
            op: BinaryOp::Sub,
            ..
        }
    ));
}

#[test]
fn test_lambdas() {
    assert_eq!(render_body("r = () -> {};"), "r = () -> {\n};");
    assert_eq!(render_body("f = s -> s.length();"), "f = (s) -> s.length();");
    assert_eq!(
        render_body("g = (A a, B b) -> a;"),
        "g = (A a, B b) -> a;"
    );
    assert_eq!(
        render_body("run(() -> { go(); });"),
        "run(() -> {\n  go();\n});"
    );
}

#[test]
fn test_conditional() {
    assert_eq!(
        render_body("x = a ? b : c ? d : e;"),
        "x = a ? b : c ? d : e;"
    );
}

#[test]
fn test_array_creation() {
    assert_eq!(render_body("a = new int[]{1, 2};"), "a = new int[]{1, 2};");
    assert_eq!(render_body("b = new int[3][];"), "b = new int[3][];");
    assert_eq!(render_body("c = new String[n + 1];"), "c = new String[n + 1];");
}

#[test]
fn test_anonymous_class() {
    assert_eq!(
        render_body("Runnable r = new Runnable() { public void run() { go(); } };"),
        "Runnable r = new Runnable() {\n  public void run() {\n    go();\n  }\n};"
    );
}

#[test]
fn test_qualified_creation() {
    assert_eq!(
        render_body("Inner i = outer.new Inner(1);"),
        "Inner i = outer.new Inner(1);"
    );
}

#[test]
fn test_method_references_and_class_literals() {
    assert_eq!(
        render_body("f = ArrayList::new; g = String::valueOf;"),
        "f = ArrayList::new;\ng = String::valueOf;"
    );
    assert_eq!(
        render_body("c = String[].class; d = int.class; e = void.class;"),
        "c = String[].class;\nd = int.class;\ne = void.class;"
    );
    assert_eq!(render_body("h = int[]::clone;"), "h = int[]::clone;");
}

#[test]
fn test_explicit_type_arguments_on_calls() {
    assert_eq!(
        render_body("xs = Collections.<String>emptyList();"),
        "xs = Collections.<String>emptyList();"
    );
}

#[test]
fn test_selectors() {
    assert_eq!(
        render_body("a.b().c[i]++; --x; y = !z; w = ~v;"),
        "a.b().c[i]++;\n--x;\ny = !z;\nw = ~v;"
    );
    assert_eq!(
        render_body("Outer.this.f = Outer.super.g();"),
        "Outer.this.f = Outer.super.g();"
    );
}

#[test]
fn test_instanceof() {
    assert_eq!(
        render_body("ok = o instanceof String && n > 0;"),
        "ok = o instanceof String && n > 0;"
    );
}

#[test]
fn test_missing_operand() {
    let (parsed, _) = body_expr("x = 1");
    assert!(!parsed.output.has_errors());

    let parsed = parse_source("class T { int x = ; }", ParseOptions::full());
    assert!(parsed.output.has_errors());
}
