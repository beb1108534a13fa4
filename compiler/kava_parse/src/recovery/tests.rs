use kava_ir::{StringInterner, TokenList};
use pretty_assertions::assert_eq;

use super::*;

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

    fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.tokens, &self.interner)
    }
}

#[test]
fn test_token_set_membership() {
    let set = TokenSet::new().with(TokenKind::Semi).with(TokenKind::RBrace);
    assert!(set.contains(TokenKind::Semi));
    assert!(set.contains(TokenKind::RBrace));
    assert!(!set.contains(TokenKind::LBrace));
    assert_eq!(set.count(), 2);
    assert!(TokenSet::default().is_empty());
}

#[test]
fn test_token_set_union_and_intersection() {
    let a = TokenSet::single(TokenKind::Class).with(TokenKind::Enum);
    let b = TokenSet::single(TokenKind::Enum).with(TokenKind::Interface);
    assert_eq!(a.union(b).count(), 3);
    assert_eq!(a.intersection(b), TokenSet::single(TokenKind::Enum));
}

#[test]
fn test_eof_is_representable() {
    assert!(TokenSet::single(TokenKind::Eof).contains(TokenKind::Eof));
    assert!(UNIT_RECOVERY.contains(TokenKind::Eof));
}

#[test]
fn test_predefined_sets() {
    assert!(MODIFIERS.contains(TokenKind::Public));
    assert!(!MODIFIERS.contains(TokenKind::Default));
    assert!(MEMBER_RECOVERY.contains(TokenKind::At));
    assert!(MEMBER_RECOVERY.contains(TokenKind::RBrace));
    assert!(!STMT_RECOVERY.contains(TokenKind::Ident));
    assert!(TYPE_START.contains(TokenKind::Void));
    assert!(TYPE_HEADER_RECOVERY.contains(TokenKind::LBrace));
}

#[test]
fn test_synchronize_stops_at_recovery_token() {
    let ctx = TestCtx::new("a b ; c");
    let mut cursor = ctx.cursor();
    assert!(synchronize(&mut cursor, STMT_RECOVERY));
    assert!(cursor.check(TokenKind::Semi));
}

#[test]
fn test_synchronize_reaches_eof() {
    let ctx = TestCtx::new("a b c");
    let mut cursor = ctx.cursor();
    assert!(!synchronize(&mut cursor, TokenSet::single(TokenKind::Semi)));
    assert!(cursor.is_at_end());
}

#[test]
fn test_balanced_skips_nested_blocks() {
    let ctx = TestCtx::new("x { public int y; } public int z;");
    let mut cursor = ctx.cursor();
    let (skipped, found) = synchronize_balanced(&mut cursor, MEMBER_RECOVERY, TokenSet::new());
    assert!(found);
    assert_eq!(skipped, 7);
    assert!(cursor.check(TokenKind::Public));
}

#[test]
fn test_balanced_stops_at_closing_brace() {
    let ctx = TestCtx::new("a b } c");
    let mut cursor = ctx.cursor();
    let (skipped, found) = synchronize_balanced(&mut cursor, TokenSet::new(), TokenSet::new());
    assert!(found);
    assert_eq!(skipped, 2);
    assert!(cursor.check(TokenKind::RBrace));
}

#[test]
fn test_balanced_line_start_tokens() {
    let ctx = TestCtx::new("a b\nreturn c;");
    let mut cursor = ctx.cursor();
    let (skipped, found) = synchronize_balanced(&mut cursor, TokenSet::new(), STMT_KEYWORDS);
    assert!(found);
    assert_eq!(skipped, 2);
    assert!(cursor.check(TokenKind::Return));
}

#[test]
fn test_balanced_ignores_line_start_token_in_first_position() {
    // The offending token itself must be skipped, or recovery would stall.
    let ctx = TestCtx::new("\nreturn ;");
    let mut cursor = ctx.cursor();
    let (skipped, _) = synchronize_balanced(&mut cursor, STMT_RECOVERY, STMT_KEYWORDS);
    assert_eq!(skipped, 1);
    assert!(cursor.check(TokenKind::Semi));
}

#[test]
fn test_recovery_state_transitions() {
    let mut recovery = Recovery::new();
    assert_eq!(recovery.state, RecoveryState::Normal);

    recovery.begin(RecoveryScope::Member, Span::new(3, 4));
    assert_eq!(
        recovery.state,
        RecoveryState::Recovering(RecoveryScope::Member)
    );

    recovery.resynced(2, true);
    assert_eq!(recovery.state, RecoveryState::Resynced(RecoveryScope::Member));

    recovery.seal("method");
    assert_eq!(recovery.state, RecoveryState::Normal);
    assert_eq!(recovery.attempts(), 1);
}

#[test]
fn test_resynced_without_begin_is_ignored() {
    let mut recovery = Recovery::new();
    recovery.resynced(1, true);
    assert_eq!(recovery.state, RecoveryState::Normal);
}

#[test]
fn test_discard_returns_to_normal() {
    let mut recovery = Recovery::new();
    recovery.begin(RecoveryScope::TypeDecl, Span::new(0, 1));
    recovery.resynced(0, true);
    recovery.discard("superclass");
    assert_eq!(recovery.state, RecoveryState::Normal);
}

#[test]
fn test_scope_display() {
    assert_eq!(RecoveryScope::Statement.to_string(), "statement");
    assert_eq!(RecoveryScope::Unit.to_string(), "compilation unit");
}
