use pretty_assertions::assert_eq;

use super::*;

/// Owns the token list and interner so `Cursor` can borrow them.
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
fn test_cursor_navigation() {
    let ctx = TestCtx::new("int x = 42;");
    let mut cursor = ctx.cursor();

    assert!(cursor.check(TokenKind::Int));
    cursor.advance();
    assert!(cursor.check_ident());
    cursor.advance();
    assert!(cursor.check(TokenKind::Eq));
    cursor.advance();
    assert_eq!(cursor.current_kind(), TokenKind::IntLit);
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_at_end());
}

#[test]
fn test_advance_stays_on_eof() {
    let ctx = TestCtx::new("x");
    let mut cursor = ctx.cursor();
    cursor.advance();
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.position(), 1);
}

#[test]
fn test_expect_failure_does_not_consume() {
    let ctx = TestCtx::new("class X");
    let mut cursor = ctx.cursor();

    let err = cursor.expect(TokenKind::Interface);
    assert!(err.is_err());
    assert!(cursor.check(TokenKind::Class));
}

#[test]
fn test_expect_ident_reports_e1004() {
    let ctx = TestCtx::new("{");
    let mut cursor = ctx.cursor();
    let err = cursor.expect_ident().map(|_| ());
    assert_eq!(err.map_err(|e| e.code), Err(ErrorCode::E1004));
}

#[test]
fn test_mark_and_reset() {
    let ctx = TestCtx::new("a b c");
    let mut cursor = ctx.cursor();
    cursor.advance();
    let mark = cursor.mark();
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_at_end());

    cursor.reset(mark);
    assert_eq!(cursor.position(), 1);
    assert_eq!(cursor.previous_span(), Span::new(0, 1));
}

#[test]
fn test_bounded_cursor_hides_later_tokens() {
    let ctx = TestCtx::new("{ a } b");
    let mut cursor = Cursor::bounded(&ctx.tokens, &ctx.interner, TokenRange::new(0, 2));

    assert!(cursor.check(TokenKind::LBrace));
    cursor.advance();
    assert!(cursor.check_ident());
    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.current_span(), Span::point(4));
    assert_eq!(cursor.peek_kind_at(3), TokenKind::Eof);
}

#[test]
fn test_splice_is_consumed_first() {
    let ctx = TestCtx::new("a {");
    let mut cursor = ctx.cursor();
    cursor.advance();
    cursor.splice(TokenKind::RParen);

    assert!(cursor.check(TokenKind::RParen));
    assert_eq!(cursor.peek_next_kind(), TokenKind::LBrace);
    let spliced = cursor.advance();
    assert_eq!(spliced.span, Span::point(2));
    assert!(cursor.check(TokenKind::LBrace));
}

#[test]
fn test_reset_discards_splice() {
    let ctx = TestCtx::new("a b");
    let mut cursor = ctx.cursor();
    let mark = cursor.mark();
    cursor.splice(TokenKind::Semi);
    cursor.reset(mark);
    assert!(cursor.check_ident());
}

#[test]
fn test_greater_run_uses_adjacency() {
    let ctx = TestCtx::new("a >>>= b > > c >= d");
    let mut cursor = ctx.cursor();
    cursor.advance();
    assert_eq!(cursor.greater_run(), (3, true));
    cursor.advance_by(5);
    assert_eq!(cursor.greater_run(), (1, false));
    cursor.advance_by(3);
    assert_eq!(cursor.greater_run(), (1, true));
}

#[test]
fn test_describe_current() {
    let ctx = TestCtx::new("foo ; #");
    let mut cursor = ctx.cursor();
    assert_eq!(cursor.describe_current(), "`foo`");
    cursor.advance();
    assert_eq!(cursor.describe_current(), "`;`");
    cursor.advance();
    assert_eq!(cursor.describe_current(), "`#`");
    cursor.advance();
    assert_eq!(cursor.describe_current(), "end of input");
}
