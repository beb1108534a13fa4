//! Token types consumed by the parser.
//!
//! `TokenKind` is fieldless so a kind fits in one byte and token sets can be
//! `u128` bitsets. Identifier and literal spellings live in `Token::text`.

use std::fmt;
use std::ops::Index;

use crate::{Name, Span};

/// Kind of a lexed token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    // Keywords
    Abstract,
    Assert,
    Boolean,
    Break,
    Byte,
    Case,
    Catch,
    Char,
    Class,
    Const,
    Continue,
    Default,
    Do,
    Double,
    Else,
    Enum,
    Extends,
    Final,
    Finally,
    Float,
    For,
    Goto,
    If,
    Implements,
    Import,
    Instanceof,
    Int,
    Interface,
    Long,
    Native,
    New,
    Package,
    Private,
    Protected,
    Public,
    Return,
    Short,
    Static,
    Strictfp,
    Super,
    Switch,
    Synchronized,
    This,
    Throw,
    Throws,
    Transient,
    Try,
    Void,
    Volatile,
    While,
    True,
    False,
    Null,

    // Identifiers and literals
    Ident,
    IntLit,
    FloatLit,
    CharLit,
    StringLit,

    // Separators
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semi,
    Comma,
    Dot,
    Ellipsis,
    At,
    ColonColon,

    // Operators. `>` is never combined by the lexer: `>>`, `>=` and friends
    // are reassembled by the parser from adjacent tokens.
    Eq,
    Gt,
    Lt,
    Bang,
    Tilde,
    Question,
    Colon,
    Arrow,
    EqEq,
    LtEq,
    NotEq,
    AndAnd,
    OrOr,
    PlusPlus,
    MinusMinus,
    Plus,
    Minus,
    Star,
    Slash,
    Amp,
    Pipe,
    Caret,
    Percent,
    Shl,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    AmpEq,
    PipeEq,
    CaretEq,
    PercentEq,
    ShlEq,

    /// Text the lexer could not classify (stray `#`, unterminated literals).
    Error,
    Eof,
}

impl TokenKind {
    /// Highest discriminant value; token sets rely on this staying below 128.
    pub const MAX_DISCRIMINANT: u8 = TokenKind::Eof as u8;

    /// Discriminant index used for bitset membership.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// True for primitive type keywords (`void` excluded).
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            TokenKind::Boolean
                | TokenKind::Byte
                | TokenKind::Char
                | TokenKind::Short
                | TokenKind::Int
                | TokenKind::Long
                | TokenKind::Float
                | TokenKind::Double
        )
    }

    /// True for keyword modifiers that may start a declaration.
    pub const fn is_modifier(self) -> bool {
        matches!(
            self,
            TokenKind::Public
                | TokenKind::Private
                | TokenKind::Protected
                | TokenKind::Static
                | TokenKind::Final
                | TokenKind::Abstract
                | TokenKind::Native
                | TokenKind::Synchronized
                | TokenKind::Transient
                | TokenKind::Volatile
                | TokenKind::Strictfp
        )
    }

    /// True for tokens that carry their spelling in `Token::text`.
    pub const fn has_text(self) -> bool {
        matches!(
            self,
            TokenKind::Ident
                | TokenKind::IntLit
                | TokenKind::FloatLit
                | TokenKind::CharLit
                | TokenKind::StringLit
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
                | TokenKind::Error
        )
    }

    /// Human-readable spelling for diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Abstract => "abstract",
            TokenKind::Assert => "assert",
            TokenKind::Boolean => "boolean",
            TokenKind::Break => "break",
            TokenKind::Byte => "byte",
            TokenKind::Case => "case",
            TokenKind::Catch => "catch",
            TokenKind::Char => "char",
            TokenKind::Class => "class",
            TokenKind::Const => "const",
            TokenKind::Continue => "continue",
            TokenKind::Default => "default",
            TokenKind::Do => "do",
            TokenKind::Double => "double",
            TokenKind::Else => "else",
            TokenKind::Enum => "enum",
            TokenKind::Extends => "extends",
            TokenKind::Final => "final",
            TokenKind::Finally => "finally",
            TokenKind::Float => "float",
            TokenKind::For => "for",
            TokenKind::Goto => "goto",
            TokenKind::If => "if",
            TokenKind::Implements => "implements",
            TokenKind::Import => "import",
            TokenKind::Instanceof => "instanceof",
            TokenKind::Int => "int",
            TokenKind::Interface => "interface",
            TokenKind::Long => "long",
            TokenKind::Native => "native",
            TokenKind::New => "new",
            TokenKind::Package => "package",
            TokenKind::Private => "private",
            TokenKind::Protected => "protected",
            TokenKind::Public => "public",
            TokenKind::Return => "return",
            TokenKind::Short => "short",
            TokenKind::Static => "static",
            TokenKind::Strictfp => "strictfp",
            TokenKind::Super => "super",
            TokenKind::Switch => "switch",
            TokenKind::Synchronized => "synchronized",
            TokenKind::This => "this",
            TokenKind::Throw => "throw",
            TokenKind::Throws => "throws",
            TokenKind::Transient => "transient",
            TokenKind::Try => "try",
            TokenKind::Void => "void",
            TokenKind::Volatile => "volatile",
            TokenKind::While => "while",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::Ident => "identifier",
            TokenKind::IntLit => "integer literal",
            TokenKind::FloatLit => "floating-point literal",
            TokenKind::CharLit => "character literal",
            TokenKind::StringLit => "string literal",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Semi => ";",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Ellipsis => "...",
            TokenKind::At => "@",
            TokenKind::ColonColon => "::",
            TokenKind::Eq => "=",
            TokenKind::Gt => ">",
            TokenKind::Lt => "<",
            TokenKind::Bang => "!",
            TokenKind::Tilde => "~",
            TokenKind::Question => "?",
            TokenKind::Colon => ":",
            TokenKind::Arrow => "->",
            TokenKind::EqEq => "==",
            TokenKind::LtEq => "<=",
            TokenKind::NotEq => "!=",
            TokenKind::AndAnd => "&&",
            TokenKind::OrOr => "||",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Amp => "&",
            TokenKind::Pipe => "|",
            TokenKind::Caret => "^",
            TokenKind::Percent => "%",
            TokenKind::Shl => "<<",
            TokenKind::PlusEq => "+=",
            TokenKind::MinusEq => "-=",
            TokenKind::StarEq => "*=",
            TokenKind::SlashEq => "/=",
            TokenKind::AmpEq => "&=",
            TokenKind::PipeEq => "|=",
            TokenKind::CaretEq => "^=",
            TokenKind::PercentEq => "%=",
            TokenKind::ShlEq => "<<=",
            TokenKind::Error => "invalid token",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

const _: () = assert!(TokenKind::MAX_DISCRIMINANT < 128);

/// Per-token trivia metadata computed by the lexer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct TokenFlags(u8);

impl TokenFlags {
    /// A newline preceded this token.
    pub const NEWLINE_BEFORE: u8 = 1 << 0;
    /// No whitespace or comment separates this token from the previous one.
    pub const ADJACENT: u8 = 1 << 1;

    pub const EMPTY: Self = TokenFlags(0);

    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        TokenFlags(bits)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn contains(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    #[inline]
    pub fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    #[inline]
    pub const fn has_newline_before(self) -> bool {
        self.contains(Self::NEWLINE_BEFORE)
    }

    #[inline]
    pub const fn is_adjacent(self) -> bool {
        self.contains(Self::ADJACENT)
    }
}

/// A single token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    /// Interned spelling for identifiers, literals and error text.
    pub text: Name,
    pub span: Span,
    pub flags: TokenFlags,
}

impl Token {
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            text: Name::EMPTY,
            span,
            flags: TokenFlags::EMPTY,
        }
    }

    #[must_use]
    pub const fn with_text(mut self, text: Name) -> Self {
        self.text = text;
        self
    }

    #[must_use]
    pub const fn with_flags(mut self, flags: TokenFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// Half-open range of token indices, used to remember unparsed bodies.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TokenRange {
    pub start: u32,
    pub end: u32,
}

impl TokenRange {
    pub const fn new(start: u32, end: u32) -> Self {
        TokenRange { start, end }
    }

    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// Ordered token stream. The last token is always `Eof`.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
