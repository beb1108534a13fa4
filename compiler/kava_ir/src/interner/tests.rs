use super::*;

#[test]
fn test_intern_dedups() {
    let interner = StringInterner::new();
    let a = interner.intern("java");
    let b = interner.intern("java");
    let c = interner.intern("util");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.lookup(a), "java");
    assert_eq!(interner.lookup(c), "util");
}

#[test]
fn test_empty_is_preinterned() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
    assert_eq!(interner.len(), 1);
}

#[test]
fn test_lookup_unknown_name_is_empty() {
    let interner = StringInterner::new();
    assert_eq!(interner.lookup(Name::from_raw(999)), "");
}
