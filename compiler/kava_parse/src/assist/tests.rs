use kava_diagnostic::ErrorCode;
use kava_ir::ast::{AssistKind, AssistParent};
use kava_ir::{StringInterner, TokenList};
use pretty_assertions::assert_eq;

use crate::{parse_for_assist, parse_structure, ParseOutput};

struct TestCtx {
    source: &'static str,
    tokens: TokenList,
    interner: StringInterner,
}

impl TestCtx {
    fn new(source: &'static str) -> Self {
        let interner = StringInterner::new();
        let tokens = kava_lexer::lex(source, &interner);
        Self {
            source,
            tokens,
            interner,
        }
    }

    /// Parse with the caret right after the first occurrence of `needle`.
    fn assist_after(&self, needle: &str) -> ParseOutput {
        let at = self.source.find(needle).expect("needle not in source") + needle.len();
        parse_for_assist(&self.tokens, &self.interner, u32::try_from(at).unwrap())
    }

    fn identifier(&self, output: &ParseOutput) -> String {
        let node = output.assist().expect("no assist node");
        self.interner.lookup(node.identifier).to_string()
    }

    fn qualifier(&self, output: &ParseOutput) -> Vec<String> {
        let node = output.assist().expect("no assist node");
        node.qualifier
            .iter()
            .map(|&name| self.interner.lookup(name).to_string())
            .collect()
    }
}

#[test]
fn test_annotation_name_on_type_declaration() {
    let ctx = TestCtx::new("public @MyAnn class X {\n}");
    let output = ctx.assist_after("@MyAnn");

    let node = output.assist().unwrap();
    assert_eq!(node.kind, AssistKind::Type);
    assert!(matches!(node.parent, AssistParent::TypeDecl(_)));
    assert_eq!(ctx.identifier(&output), "MyAnn");
    assert_eq!(
        output.render(&ctx.interner),
        "public @<CompleteOnType:MyAnn> class X {\n  public X() {\n  }\n}\n"
    );
}

#[test]
fn test_identifier_is_cut_at_the_caret() {
    let ctx = TestCtx::new("public @MyAnn class X {\n}");
    let output = ctx.assist_after("@My");

    assert_eq!(ctx.identifier(&output), "My");
    assert_eq!(
        output.render(&ctx.interner),
        "public @<CompleteOnType:My> class X {\n  public X() {\n  }\n}\n"
    );
}

#[test]
fn test_attribute_name() {
    let ctx = TestCtx::new("@Annot(foo = 1, ba) class X {}");
    let output = ctx.assist_after("ba");

    let node = output.assist().unwrap();
    assert_eq!(node.kind, AssistKind::AttributeName);
    assert!(matches!(node.parent, AssistParent::Annotation(_)));
    assert_eq!(
        output.render(&ctx.interner),
        "@Annot(foo = 1, <CompleteOnAttributeName:ba>) class X {\n  X() {\n  }\n}\n"
    );
}

#[test]
fn test_attribute_name_in_unclosed_arguments() {
    let ctx = TestCtx::new("class X {\n  @A(x = 1, zz\n  int f;\n}");
    let output = ctx.assist_after("zz");

    let node = output.assist().unwrap();
    assert_eq!(node.kind, AssistKind::AttributeName);
    assert!(matches!(node.parent, AssistParent::Annotation(_)));
    assert_eq!(ctx.identifier(&output), "zz");
    let rendered = output.render(&ctx.interner);
    assert!(rendered.contains("@A(x = 1, <CompleteOnAttributeName:zz>)"));
    assert!(rendered.contains("int f;"));
}

#[test]
fn test_attribute_name_in_unclosed_arguments_before_a_type() {
    let ctx = TestCtx::new("@A(x = 1, zz\nclass X {}");
    let output = ctx.assist_after("zz");

    assert_eq!(output.assist().unwrap().kind, AssistKind::AttributeName);
    assert_eq!(ctx.identifier(&output), "zz");
    assert!(output
        .render(&ctx.interner)
        .contains("class X {"));
}

#[test]
fn test_first_attribute_name_in_unclosed_arguments() {
    let ctx = TestCtx::new("class X {\n  @A(zz\n  int f;\n}");
    let output = ctx.assist_after("zz");

    assert_eq!(output.assist().unwrap().kind, AssistKind::AttributeName);
    assert_eq!(ctx.identifier(&output), "zz");
    assert!(output
        .render(&ctx.interner)
        .contains("@A(<CompleteOnAttributeName:zz>)"));
}

#[test]
fn test_single_value_that_continues_is_a_name() {
    let ctx = TestCtx::new("@A(Foo.BAR) class X {}");
    let output = ctx.assist_after("Fo");

    assert_eq!(output.assist().unwrap().kind, AssistKind::Name);
}

#[test]
fn test_annotation_value_is_a_name() {
    let ctx = TestCtx::new("@Annot(value = Fo) class X {}");
    let output = ctx.assist_after("Fo");

    assert_eq!(output.assist().unwrap().kind, AssistKind::Name);
    assert_eq!(
        output.render(&ctx.interner),
        "@Annot(value = <CompleteOnName:Fo>) class X {\n  X() {\n  }\n}\n"
    );
}

#[test]
fn test_array_element_inside_annotation_is_a_name() {
    let ctx = TestCtx::new("@A({b, c}) class X {}");
    let output = ctx.assist_after(", c");

    assert_eq!(output.assist().unwrap().kind, AssistKind::Name);
    assert_eq!(
        output.render(&ctx.interner),
        "@A({b, <CompleteOnName:c>}) class X {\n  X() {\n  }\n}\n"
    );
}

#[test]
fn test_array_initializer_element_in_field() {
    let ctx = TestCtx::new("class X { int[] a = {b, c}; }");
    let output = ctx.assist_after(", c");

    let node = output.assist().unwrap();
    assert_eq!(node.kind, AssistKind::ArrayInitializerElement);
    assert!(matches!(node.parent, AssistParent::Member { index: 1, .. }));
    assert_eq!(
        output.render(&ctx.interner),
        "class X {\n  int[] a = {b, <CompleteOnArrayInitializerElement:c>};\n  X() {\n  }\n}\n"
    );
}

#[test]
fn test_member_access_on_call_result() {
    let ctx = TestCtx::new("class X {\n  void m() {\n    foo().ba\n  }\n}");
    let output = ctx.assist_after(".ba");

    let node = output.assist().unwrap();
    assert_eq!(node.kind, AssistKind::MemberAccess);
    assert!(matches!(node.parent, AssistParent::Statement(_)));
    assert_eq!(
        output.render(&ctx.interner),
        "class X {\n  X() {\n  }\n  void m() {\n    <CompleteOnMemberAccess:foo().ba>;\n  }\n}\n"
    );
}

#[test]
fn test_qualified_name_in_body() {
    let ctx = TestCtx::new("class X {\n  void m() {\n    foo.ba\n  }\n}");
    let output = ctx.assist_after("foo.ba");

    assert_eq!(output.assist().unwrap().kind, AssistKind::Name);
    assert_eq!(ctx.qualifier(&output), vec!["foo"]);
    assert_eq!(ctx.identifier(&output), "ba");
    assert_eq!(
        output.render(&ctx.interner),
        "class X {\n  X() {\n  }\n  void m() {\n    <CompleteOnName:foo.ba>;\n  }\n}\n"
    );
}

#[test]
fn test_import_path() {
    let ctx = TestCtx::new("import java.ut;\nclass X {}");
    let output = ctx.assist_after("java.ut");

    assert_eq!(output.assist().unwrap().kind, AssistKind::Import);
    assert_eq!(ctx.qualifier(&output), vec!["java"]);
    assert_eq!(
        output.render(&ctx.interner),
        "import <CompleteOnImport:java.ut>;\nclass X {\n  X() {\n  }\n}\n"
    );
}

#[test]
fn test_empty_identifier_after_dot() {
    let ctx = TestCtx::new("import java.;");
    let output = ctx.assist_after("java.");

    assert_eq!(ctx.identifier(&output), "");
    assert_eq!(ctx.qualifier(&output), vec!["java"]);
    assert_eq!(
        output.render(&ctx.interner),
        "import <CompleteOnImport:java.>;\n"
    );
}

#[test]
fn test_type_being_typed_in_field() {
    let ctx = TestCtx::new("class X { Li names; }");
    let output = ctx.assist_after("Li");

    let node = output.assist().unwrap();
    assert_eq!(node.kind, AssistKind::Type);
    assert!(matches!(node.parent, AssistParent::Member { index: 1, .. }));
    assert_eq!(
        output.render(&ctx.interner),
        "class X {\n  <CompleteOnType:Li> names;\n  X() {\n  }\n}\n"
    );
}

#[test]
fn test_declared_name_gets_a_note() {
    let ctx = TestCtx::new("class X { int fo; }");
    let output = ctx.assist_after("fo");

    assert!(output.assist().is_none());
    assert_eq!(output.errors_with_code(ErrorCode::E1012).count(), 1);
    assert!(!output.has_errors());
}

#[test]
fn test_caret_in_whitespace_changes_nothing() {
    let ctx = TestCtx::new("class X {\n\n}");
    let output = ctx.assist_after("{\n");

    assert!(output.assist().is_none());
    assert!(output.errors.is_empty());
    let structure = parse_structure(&ctx.tokens, &ctx.interner);
    assert_eq!(
        output.render(&ctx.interner),
        structure.render(&ctx.interner)
    );
}

#[test]
fn test_only_the_body_under_the_caret_is_parsed() {
    let ctx = TestCtx::new("class X {\n  void a() { int x; }\n  void b() { Str }\n}");
    let output = ctx.assist_after("Str");

    // The default constructor and `a` stay unparsed.
    assert_eq!(output.unparsed_bodies().len(), 2);
    assert_eq!(
        output.render(&ctx.interner),
        "class X {\n  X() {\n  }\n  void a() {\n  }\n  void b() {\n    <CompleteOnName:Str>;\n  }\n}\n"
    );
}

#[test]
fn test_caret_past_end_is_ignored() {
    let ctx = TestCtx::new("class X {}");
    let output = parse_for_assist(&ctx.tokens, &ctx.interner, 500);

    assert!(output.assist().is_none());
    assert!(output.errors.is_empty());
}
