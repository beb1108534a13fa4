use kava_diagnostic::ErrorCode;
use kava_ir::ast::{Body, Member};
use kava_ir::{StringInterner, TokenList};
use pretty_assertions::assert_eq;

use crate::{parse_bodies, parse_body, parse_full, parse_structure, BodyRef};

struct TestCtx {
    tokens: TokenList,
    interner: StringInterner,
}

impl TestCtx {
    fn new(source: &str) -> Self {
        let interner = StringInterner::new();
        let tokens = kava_lexer::lex(source, &interner);
        Self { tokens, interner }
    }
}

const MEMBERS: &str = "class X {
  X(int a) { this.a = a; }
  void m() { return; }
  static { init(); }
}";

#[test]
fn test_structure_leaves_bodies_unparsed() {
    let ctx = TestCtx::new(MEMBERS);
    let output = parse_structure(&ctx.tokens, &ctx.interner);

    assert_eq!(output.unparsed_bodies().len(), 3);
    assert_eq!(
        output.render(&ctx.interner),
        "class X {\n  static {\n  }\n  X(int a) {\n  }\n  void m() {\n  }\n}\n"
    );
}

#[test]
fn test_deferred_bodies_match_full_parse() {
    let ctx = TestCtx::new(MEMBERS);
    let full = parse_full(&ctx.tokens, &ctx.interner);
    let mut deferred = parse_structure(&ctx.tokens, &ctx.interner);
    parse_bodies(&mut deferred, &ctx.tokens, &ctx.interner);

    assert!(deferred.unparsed_bodies().is_empty());
    assert_eq!(
        full.render(&ctx.interner),
        "class X {\n  static {\n    init();\n  }\n  X(int a) {\n    super();\n    this.a = a;\n  }\n  void m() {\n    return;\n  }\n}\n"
    );
    assert_eq!(
        deferred.render(&ctx.interner),
        full.render(&ctx.interner)
    );
}

#[test]
fn test_unparsed_bodies_in_source_order() {
    let ctx = TestCtx::new(MEMBERS);
    let output = parse_structure(&ctx.tokens, &ctx.interner);
    let members: Vec<usize> = output
        .unparsed_bodies()
        .iter()
        .map(|body| body.member)
        .collect();

    assert_eq!(members, vec![0, 1, 2]);
    assert_eq!(output.next_unparsed_body(), output.unparsed_bodies().first().copied());
}

#[test]
fn test_parse_body_touches_one_member() {
    let ctx = TestCtx::new(MEMBERS);
    let mut output = parse_structure(&ctx.tokens, &ctx.interner);
    let id = output.unit.types[0];
    let method = BodyRef {
        type_decl: id,
        member: 1,
    };

    assert!(parse_body(&mut output, &ctx.tokens, &ctx.interner, method));
    assert_eq!(
        output.render(&ctx.interner),
        "class X {\n  static {\n  }\n  X(int a) {\n  }\n  void m() {\n    return;\n  }\n}\n"
    );
    assert_eq!(output.unparsed_bodies().len(), 2);

    // Already parsed.
    assert!(!parse_body(&mut output, &ctx.tokens, &ctx.interner, method));
    // No such member.
    let missing = BodyRef {
        type_decl: id,
        member: 10,
    };
    assert!(!parse_body(&mut output, &ctx.tokens, &ctx.interner, missing));
}

#[test]
fn test_unclosed_body_is_dropped_and_local_types_hoisted() {
    let source = "class X {
  void m() {
    class Local {
    }
  public int y;
}
";
    let ctx = TestCtx::new(source);
    let output = parse_full(&ctx.tokens, &ctx.interner);

    assert_eq!(output.errors_with_code(ErrorCode::E1007).count(), 1);
    let decl = output.arena.type_decl(output.unit.types[0]);
    let dropped = decl.members.iter().any(|member| {
        matches!(member, Member::Method(method) if matches!(method.body, Body::Dropped))
    });
    assert!(dropped);
    assert_eq!(
        output.render(&ctx.interner),
        "class X {\n  class Local {\n    Local() {\n      super();\n    }\n  }\n  public int y;\n  X() {\n    super();\n  }\n  void m() {\n  }\n}\n"
    );

    let mut deferred = parse_structure(&ctx.tokens, &ctx.interner);
    parse_bodies(&mut deferred, &ctx.tokens, &ctx.interner);
    assert_eq!(
        deferred.render(&ctx.interner),
        output.render(&ctx.interner)
    );
}

#[test]
fn test_enum_constructors_have_no_implicit_super() {
    let ctx = TestCtx::new("enum E { A, B; E() {} }");
    let output = parse_full(&ctx.tokens, &ctx.interner);

    assert_eq!(
        output.render(&ctx.interner),
        "enum E {\n  A,\n  B,\n  E() {\n  }\n}\n"
    );

    let ctx = TestCtx::new("enum E { A }");
    let output = parse_full(&ctx.tokens, &ctx.interner);
    assert_eq!(
        output.render(&ctx.interner),
        "enum E {\n  A,\n  private E() {\n  }\n}\n"
    );
}

#[test]
fn test_explicit_constructor_call_is_kept_first() {
    let ctx = TestCtx::new("class X { X() { this(1); run(); } X(int a) {} }");
    let output = parse_full(&ctx.tokens, &ctx.interner);

    assert_eq!(
        output.render(&ctx.interner),
        "class X {\n  X() {\n    this(1);\n    run();\n  }\n  X(int a) {\n    super();\n  }\n}\n"
    );
}

#[test]
fn test_unclosed_body_hoists_at_every_depth() {
    let source = "class X { void m() { class Local { } public int y; void n() { run(); } }";
    let ctx = TestCtx::new(source);
    let local_types = |output: &crate::ParseOutput| {
        let decl = output.arena.type_decl(output.unit.types[0]);
        decl.members
            .iter()
            .filter(|member| matches!(member, Member::Type(_)))
            .count()
    };

    let structure = parse_structure(&ctx.tokens, &ctx.interner);
    let mut deferred = parse_structure(&ctx.tokens, &ctx.interner);
    parse_bodies(&mut deferred, &ctx.tokens, &ctx.interner);
    let full = parse_full(&ctx.tokens, &ctx.interner);

    assert_eq!(local_types(&structure), 1);
    assert_eq!(local_types(&deferred), 1);
    assert_eq!(local_types(&full), 1);
    assert_eq!(structure.errors_with_code(ErrorCode::E1007).count(), 1);
    assert_eq!(
        deferred.render(&ctx.interner),
        full.render(&ctx.interner)
    );
}

#[test]
fn test_every_ref_from_one_snapshot_stays_valid() {
    let source = "class X {
  void a() { int i; }
  void m() {
    class Local {
    }
  public int y;
  void n() { run(); }
  static { init(); }
}
";
    let ctx = TestCtx::new(source);
    let mut output = parse_structure(&ctx.tokens, &ctx.interner);
    let refs = output.unparsed_bodies();
    assert!(refs.len() >= 3);

    for body in refs {
        assert!(
            parse_body(&mut output, &ctx.tokens, &ctx.interner, body),
            "{body:?}"
        );
    }
    assert!(output.unparsed_bodies().is_empty());
    let full = parse_full(&ctx.tokens, &ctx.interner);
    assert_eq!(output.render(&ctx.interner), full.render(&ctx.interner));
}

#[test]
fn test_member_header_ends_an_unclosed_body() {
    let source = "class X {\n  void m() {\n    int x;\n  void n() {\n  }\n  int f;\n}\n";
    let ctx = TestCtx::new(source);
    let structure = parse_structure(&ctx.tokens, &ctx.interner);

    assert_eq!(structure.errors_with_code(ErrorCode::E1007).count(), 1);
    assert_eq!(
        structure.render(&ctx.interner),
        "class X {\n  int f;\n  X() {\n  }\n  void m() {\n  }\n  void n() {\n  }\n}\n"
    );
    let full = parse_full(&ctx.tokens, &ctx.interner);
    assert_eq!(
        full.render(&ctx.interner),
        "class X {\n  int f;\n  X() {\n    super();\n  }\n  void m() {\n  }\n  void n() {\n  }\n}\n"
    );
}

#[test]
fn test_statements_that_look_like_headers_stay_in_the_body() {
    let ctx = TestCtx::new("class X {\n  void m() {\n    List<String> xs = make();\n    run(xs);\n  }\n}");
    let output = parse_full(&ctx.tokens, &ctx.interner);

    assert!(!output.has_errors(), "{:?}", output.errors);
    assert!(output.render(&ctx.interner).contains("run(xs);"));
}
