use pretty_assertions::assert_eq;

use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    let interner = StringInterner::new();
    lex(source, &interner).iter().map(|t| t.kind).collect()
}

#[test]
fn test_lex_field_declaration() {
    assert_eq!(
        kinds("private int x = 42;"),
        vec![
            TokenKind::Private,
            TokenKind::Int,
            TokenKind::Ident,
            TokenKind::Eq,
            TokenKind::IntLit,
            TokenKind::Semi,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_identifier_and_literal_text_is_interned() {
    let interner = StringInterner::new();
    let tokens = lex(r#"$name "a\"b" 'c' 1.5f 0x1FL"#, &interner);
    let texts: Vec<&str> = tokens.iter().map(|t| interner.lookup(t.text)).collect();
    assert_eq!(texts, vec!["$name", r#""a\"b""#, "'c'", "1.5f", "0x1FL", ""]);
    assert_eq!(tokens[3].kind, TokenKind::FloatLit);
    assert_eq!(tokens[4].kind, TokenKind::IntLit);
}

#[test]
fn test_greater_than_is_never_combined() {
    assert_eq!(
        kinds("a >>>= b"),
        vec![
            TokenKind::Ident,
            TokenKind::Gt,
            TokenKind::Gt,
            TokenKind::Gt,
            TokenKind::Eq,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_adjacency_and_newline_flags() {
    let interner = StringInterner::new();
    let tokens = lex("a >>\n  b > c", &interner);
    assert!(!tokens[0].flags.is_adjacent());
    assert!(!tokens[1].flags.is_adjacent());
    assert!(tokens[2].flags.is_adjacent());
    assert!(tokens[3].flags.has_newline_before());
    assert!(!tokens[4].flags.is_adjacent());
    assert!(!tokens[4].flags.has_newline_before());
}

#[test]
fn test_comments_are_dropped_but_keep_newline_flag() {
    let interner = StringInterner::new();
    let tokens = lex("a /* one\n two */ b // tail\nc", &interner);
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Ident, TokenKind::Ident, TokenKind::Ident, TokenKind::Eof]
    );
    assert!(tokens[1].flags.has_newline_before());
    assert!(tokens[2].flags.has_newline_before());
}

#[test]
fn test_stray_hash_is_a_single_error_token() {
    assert_eq!(
        kinds("@A(name) #\nint x;"),
        vec![
            TokenKind::At,
            TokenKind::Ident,
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::RParen,
            TokenKind::Error,
            TokenKind::Int,
            TokenKind::Ident,
            TokenKind::Semi,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_unterminated_string_runs_to_end_of_line() {
    let interner = StringInterner::new();
    let source = "String s = \"abc;\nint y;";
    let tokens = lex(source, &interner);
    let error = tokens
        .iter()
        .find(|t| t.kind == TokenKind::Error)
        .map(|t| t.span);
    assert_eq!(error, Some(Span::new(11, 16)));
    assert_eq!(tokens[tokens.len() - 2].kind, TokenKind::Semi);
}

#[test]
fn test_unclosed_block_comment_runs_to_end_of_input() {
    let interner = StringInterner::new();
    let tokens = lex("class X { /* never closed }", &interner);
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Class,
            TokenKind::Ident,
            TokenKind::LBrace,
            TokenKind::Error,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[3].span, Span::new(10, 27));
}

#[test]
fn test_eof_span_is_source_length() {
    let interner = StringInterner::new();
    let tokens = lex("class X {}\n", &interner);
    let eof = tokens.last().map(|t| (t.kind, t.span));
    assert_eq!(eof, Some((TokenKind::Eof, Span::point(11))));
}

#[test]
fn test_empty_source_is_only_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
}
