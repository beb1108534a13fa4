use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(span.contains(15));
    assert!(!span.contains(20));
}

#[test]
fn test_span_touches_includes_end() {
    let span = Span::new(4, 9);
    assert!(span.touches(4));
    assert!(span.touches(9));
    assert!(!span.touches(10));
    assert!(!span.touches(3));
}

#[test]
fn test_span_merge() {
    let merged = Span::new(10, 20).merge(Span::new(15, 30));
    assert_eq!(merged, Span::new(10, 30));
}

#[test]
fn test_span_contains_span() {
    let outer = Span::new(0, 100);
    assert!(outer.contains_span(Span::new(0, 100)));
    assert!(outer.contains_span(Span::new(10, 20)));
    assert!(!outer.contains_span(Span::new(90, 101)));
}

#[test]
fn test_span_try_from_range() {
    assert_eq!(Span::try_from_range(50..100), Ok(Span::new(50, 100)));
    let too_big = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(0..too_big),
        Err(SpanError::EndTooLarge(too_big))
    );
}

#[test]
fn test_span_debug_format() {
    assert_eq!(format!("{:?}", Span::new(3, 7)), "3..7");
}
