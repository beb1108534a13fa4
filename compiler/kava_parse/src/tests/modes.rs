//! Agreement between elaboration depths.

use kava_diagnostic::ErrorCode;
use kava_ir::StringInterner;
use pretty_assertions::assert_eq;

use super::parse_source;
use crate::{
    notify_source_elements, parse_bytes, Depth, ParseOptions, RecordingRequestor, SourceElement,
    SourceError,
};

const PROGRAM: &str = "package demo;
import java.util.*;

public class Shapes<T extends Shape> implements Iterable<T> {
  private final List<T> items = new ArrayList<>();
  static int created;

  static { created = 0; }

  public Shapes(T... initial) {
    for (T t : initial) items.add(t);
  }

  public Iterator<T> iterator() {
    return new Iterator<T>() {
      int i;
      public boolean hasNext() { return i < items.size(); }
      public T next() { return items.get(i++); }
    };
  }

  double total() {
    class Sum { double value; }
    Sum sum = new Sum();
    items.forEach(s -> sum.value += s.area());
    return sum.value;
  }

  enum Kind {
    ROUND { int corners() { return 0; } },
    SQUARE;
    int corners() { return 4; }
  }
}
";

#[test]
fn test_full_and_deferred_bodies_agree() {
    let full = parse_source(PROGRAM, ParseOptions::full());
    let deferred = parse_source(PROGRAM, ParseOptions::with_bodies());

    assert!(!full.output.has_errors(), "{:?}", full.output.errors);
    assert_eq!(deferred.render(), full.render());
    assert!(deferred.output.unparsed_bodies().is_empty());
    assert!(full.output.unparsed_bodies().is_empty());
}

#[test]
fn test_structure_leaves_every_body() {
    let structure = parse_source(PROGRAM, ParseOptions::structure());
    assert!(!structure.output.has_errors());
    // Static initializer, two constructors and methods, plus members of the
    // enum constant body and the enum itself.
    assert!(structure.output.unparsed_bodies().len() >= 5);
    assert!(!structure.render().contains("return"));
}

#[test]
fn test_outline_is_the_same_at_every_depth() {
    let outline = |options: ParseOptions| {
        let parsed = parse_source(PROGRAM, options);
        let mut requestor = RecordingRequestor::new();
        notify_source_elements(&parsed.output, &parsed.interner, &mut requestor);
        requestor.events
    };

    let structure = outline(ParseOptions::structure());
    assert_eq!(outline(ParseOptions::with_bodies()), structure);
    assert_eq!(outline(ParseOptions::full()), structure);
}

#[test]
fn test_outline_agrees_on_malformed_bodies() {
    let source = "class X {\n  void m() {\n    class Local { int g; }\n  public int y;\n  void n() { class Inner {} int = ; }\n  void k() {\n    int x;\n  void z() {}\n}\n";
    let outline = |options: ParseOptions| {
        let parsed = parse_source(source, options);
        let mut requestor = RecordingRequestor::new();
        notify_source_elements(&parsed.output, &parsed.interner, &mut requestor);
        requestor.events
    };

    let structure = outline(ParseOptions::structure());
    assert!(structure
        .iter()
        .any(|event| matches!(event, SourceElement::EnterType(info) if info.name == "Local")));
    assert_eq!(outline(ParseOptions::with_bodies()), structure);
    assert_eq!(outline(ParseOptions::full()), structure);
}

#[test]
fn test_body_errors_only_when_bodies_are_parsed() {
    let source = "class X {\n  void m() { int = ; }\n  int f;\n}";
    let structure = parse_source(source, ParseOptions::structure());
    let full = parse_source(source, ParseOptions::full());
    let deferred = parse_source(source, ParseOptions::with_bodies());

    assert!(!structure.output.has_errors());
    assert!(full.output.has_errors());

    let key = |parsed: &super::Parsed| -> Vec<(ErrorCode, u32, u32)> {
        let mut errors: Vec<_> = parsed
            .output
            .errors
            .iter()
            .map(|e| (e.code, e.span.start, e.span.end))
            .collect();
        errors.sort_by_key(|&(_, start, end)| (start, end));
        errors
    };
    assert_eq!(key(&deferred), key(&full));
}

#[test]
fn test_diagnostics_mirror_errors() {
    let parsed = parse_source("class X { int a = ; void m( }", ParseOptions::full());
    let diagnostics = parsed.output.diagnostics();
    assert_eq!(diagnostics.len(), parsed.output.errors.len());
    assert!(!diagnostics.is_empty());
}

#[test]
fn test_parse_bytes() {
    let interner = StringInterner::new();
    let (tokens, output) =
        parse_bytes(b"class A {}", &interner, ParseOptions::full()).expect("valid source");
    assert!(!tokens.is_empty());
    assert_eq!(output.unit.types.len(), 1);

    let invalid = parse_bytes(&[b'c', 0xff, 0xfe], &interner, ParseOptions::structure());
    assert!(matches!(invalid, Err(SourceError::InvalidUtf8(_))));
}

#[test]
fn test_empty_source() {
    for depth in [
        Depth::StructureOnly,
        Depth::StructureWithBodies,
        Depth::Full,
        Depth::Assist(0),
    ] {
        let parsed = parse_source("", ParseOptions::new(depth));
        assert!(parsed.output.unit.types.is_empty());
        assert!(!parsed.output.has_errors());
        assert_eq!(parsed.render(), "");
    }
}
