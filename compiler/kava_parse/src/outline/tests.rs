use kava_ir::ast::TypeDeclKind;
use kava_ir::{Span, StringInterner, TokenList};
use pretty_assertions::assert_eq;

use super::*;
use crate::{parse_full, parse_structure};

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

    fn record(&self, output: &ParseOutput) -> Vec<SourceElement> {
        let mut requestor = RecordingRequestor::new();
        notify_source_elements(output, &self.interner, &mut requestor);
        requestor.events
    }

    /// Events printed without their positions.
    fn outline(&self, output: &ParseOutput) -> Vec<String> {
        self.record(output)
            .iter()
            .map(|event| {
                let text = event.to_string();
                text.split(" @ ").next().unwrap_or_default().to_string()
            })
            .collect()
    }
}

const SOURCE: &str = "package a.b;
import java.util.List;
import static java.lang.Math.*;
public class X<T> extends Base implements Runnable {
  private int count;
  X(String... args) {}
  public List<String> names(int n) throws Exception { return null; }
  static {}
  enum Color { RED, GREEN }
}
";

#[test]
fn test_events_in_declaration_order() {
    let ctx = TestCtx::new(SOURCE);
    let output = parse_structure(&ctx.tokens, &ctx.interner);

    assert_eq!(
        ctx.outline(&output),
        vec![
            "package a.b",
            "import java.util.List",
            "import static java.lang.Math.*",
            "enter public class X<T> extends Base implements Runnable",
            "enter private int count",
            "exit",
            "enter X(String... args)",
            "exit",
            "enter public List<String> names(int n) throws Exception",
            "exit",
            "enter static {}",
            "exit",
            "enter enum Color",
            "enter public static final RED",
            "exit",
            "enter public static final GREEN",
            "exit",
            "exit",
            "exit",
        ]
    );
}

#[test]
fn test_package_position() {
    let ctx = TestCtx::new(SOURCE);
    let output = parse_structure(&ctx.tokens, &ctx.interner);
    let events = ctx.record(&output);

    assert_eq!(
        events[0],
        SourceElement::Package {
            name: "a.b".to_string(),
            span: Span::new(0, 12),
        }
    );
}

#[test]
fn test_type_info_fields() {
    let ctx = TestCtx::new(SOURCE);
    let output = parse_structure(&ctx.tokens, &ctx.interner);
    let events = ctx.record(&output);

    let Some(SourceElement::EnterType(info)) = events.get(3) else {
        panic!("expected a type, got {:?}", events.get(3));
    };
    assert_eq!(info.kind, TypeDeclKind::Class);
    assert_eq!(info.name, "X");
    assert_eq!(info.superclass.as_deref(), Some("Base"));
    assert_eq!(info.superinterfaces, vec!["Runnable".to_string()]);
    assert_eq!(info.type_params, vec!["T".to_string()]);
    assert_eq!(info.span.start, SOURCE.find("public class").unwrap() as u32);
}

#[test]
fn test_exit_matches_enter_span() {
    let ctx = TestCtx::new("class A { int x; void m() {} }");
    let output = parse_structure(&ctx.tokens, &ctx.interner);
    let events = ctx.record(&output);

    let SourceElement::EnterMethod(method) = &events[3] else {
        panic!("expected a method, got {:?}", events[3]);
    };
    assert_eq!(events[4], SourceElement::ExitMethod(method.span.end));
    assert!(!method.is_constructor);
    assert_eq!(method.return_type.as_deref(), Some("void"));
}

#[test]
fn test_bodies_are_not_reported() {
    let source = "class A { void m() { class Local { int hidden; } } }";
    let ctx = TestCtx::new(source);
    let structure = parse_structure(&ctx.tokens, &ctx.interner);
    let full = parse_full(&ctx.tokens, &ctx.interner);

    let expected = vec!["enter class A", "enter void m()", "exit", "exit"];
    assert_eq!(ctx.outline(&structure), expected);
    assert_eq!(ctx.outline(&full), expected);
}

#[test]
fn test_default_requestor_ignores_everything() {
    struct TypeCounter(usize);

    impl SourceElementRequestor for TypeCounter {
        fn enter_type(&mut self, _info: &TypeInfo) {
            self.0 += 1;
        }
    }

    let ctx = TestCtx::new("class A { class B {} interface C {} }");
    let output = parse_structure(&ctx.tokens, &ctx.interner);
    let mut counter = TypeCounter(0);
    notify_source_elements(&output, &ctx.interner, &mut counter);

    assert_eq!(counter.0, 3);
}
