use super::*;

/// Count nesting depth of `(` the way a recursive descent parser would.
fn nesting(input: &[u8]) -> usize {
    ensure_sufficient_stack(|| match input.split_first() {
        Some((b'(', rest)) => 1 + nesting(rest),
        _ => 0,
    })
}

#[test]
fn test_shallow_nesting() {
    assert_eq!(nesting(b"((()))"), 3);
    assert_eq!(nesting(b""), 0);
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let input = vec![b'('; 200_000];
    assert_eq!(nesting(&input), 200_000);
}

#[test]
fn test_passes_through_result() {
    let result: Result<u32, String> = ensure_sufficient_stack(|| Ok(7));
    assert_eq!(result, Ok(7));
}
