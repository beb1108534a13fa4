//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived scanner output before interning
//! and conversion to [`kava_ir::TokenKind`].

use logos::{Lexer, Logos};

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    /// `true` when the comment is closed by `*/`.
    #[token("/*", block_comment)]
    BlockComment(bool),

    #[token("abstract")]
    Abstract,
    #[token("assert")]
    Assert,
    #[token("boolean")]
    Boolean,
    #[token("break")]
    Break,
    #[token("byte")]
    Byte,
    #[token("case")]
    Case,
    #[token("catch")]
    Catch,
    #[token("char")]
    Char,
    #[token("class")]
    Class,
    #[token("const")]
    Const,
    #[token("continue")]
    Continue,
    #[token("default")]
    Default,
    #[token("do")]
    Do,
    #[token("double")]
    Double,
    #[token("else")]
    Else,
    #[token("enum")]
    Enum,
    #[token("extends")]
    Extends,
    #[token("final")]
    Final,
    #[token("finally")]
    Finally,
    #[token("float")]
    Float,
    #[token("for")]
    For,
    #[token("goto")]
    Goto,
    #[token("if")]
    If,
    #[token("implements")]
    Implements,
    #[token("import")]
    Import,
    #[token("instanceof")]
    Instanceof,
    #[token("int")]
    Int,
    #[token("interface")]
    Interface,
    #[token("long")]
    Long,
    #[token("native")]
    Native,
    #[token("new")]
    New,
    #[token("package")]
    Package,
    #[token("private")]
    Private,
    #[token("protected")]
    Protected,
    #[token("public")]
    Public,
    #[token("return")]
    Return,
    #[token("short")]
    Short,
    #[token("static")]
    Static,
    #[token("strictfp")]
    Strictfp,
    #[token("super")]
    Super,
    #[token("switch")]
    Switch,
    #[token("synchronized")]
    Synchronized,
    #[token("this")]
    This,
    #[token("throw")]
    Throw,
    #[token("throws")]
    Throws,
    #[token("transient")]
    Transient,
    #[token("try")]
    Try,
    #[token("void")]
    Void,
    #[token("volatile")]
    Volatile,
    #[token("while")]
    While,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semi,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("...")]
    Ellipsis,
    #[token("@")]
    At,
    #[token("::")]
    ColonColon,

    #[token("=")]
    Eq,
    // `>>`, `>=`, `>>>` and their assignment forms are never lexed as one
    // token; the parser joins adjacent `>` tokens in expression context so
    // `List<List<String>>` closes two argument lists.
    #[token(">")]
    Gt,
    #[token("<")]
    Lt,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("->")]
    Arrow,
    #[token("==")]
    EqEq,
    #[token("<=")]
    LtEq,
    #[token("!=")]
    NotEq,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("%")]
    Percent,
    #[token("<<")]
    Shl,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("&=")]
    AmpEq,
    #[token("|=")]
    PipeEq,
    #[token("^=")]
    CaretEq,
    #[token("%=")]
    PercentEq,
    #[token("<<=")]
    ShlEq,

    #[regex(r"0[xX][0-9a-fA-F_]+[lL]?")]
    #[regex(r"0[bB][01_]+[lL]?")]
    #[regex(r"[0-9][0-9_]*[lL]?")]
    IntLit,

    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9]+)?[fFdD]?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?[fFdD]?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+[fFdD]?")]
    #[regex(r"[0-9][0-9_]*[fFdD]")]
    FloatLit,

    /// `true` when the closing quote was found on the same line.
    #[token("\"", |lex| quoted(lex, '"'))]
    StringLit(bool),

    /// `true` when the closing quote was found on the same line.
    #[token("'", |lex| quoted(lex, '\''))]
    CharLit(bool),

    #[regex(r"[\p{L}_$][\p{L}\p{N}_$]*")]
    Ident,
}

/// Consume a block comment body. An unclosed comment runs to end of input.
fn block_comment(lex: &mut Lexer<RawToken>) -> Option<bool> {
    let rest = lex.remainder();
    match rest.find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            Some(true)
        }
        None => {
            lex.bump(rest.len());
            Some(false)
        }
    }
}

/// Consume a quoted literal after its opening quote. Escapes are skipped
/// without being decoded. An unclosed literal runs to end of line.
fn quoted(lex: &mut Lexer<RawToken>, quote: char) -> Option<bool> {
    let rest = lex.remainder();
    let mut chars = rest.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                if let Some((_, '\n')) = chars.next() {
                    lex.bump(i + 1);
                    return Some(false);
                }
            }
            '\n' | '\r' => {
                lex.bump(i);
                return Some(false);
            }
            c if c == quote => {
                lex.bump(i + c.len_utf8());
                return Some(true);
            }
            _ => {}
        }
    }
    lex.bump(rest.len());
    Some(false)
}
