//! Java scanner using logos with string interning.
//!
//! The scanner never fails. Text it cannot classify, such as a stray `#`, an
//! unterminated string or char literal, or an unclosed block comment,
//! becomes a single [`TokenKind::Error`] token and scanning continues. The
//! parser decides how to recover from it.
//!
//! Comments and whitespace are dropped. What the parser still needs from them
//! is kept in [`TokenFlags`]: whether a line break precedes the token, and
//! whether the token touches the previous one.

mod raw_token;

use kava_ir::{Name, Span, StringInterner, Token, TokenFlags, TokenKind, TokenList};
use logos::Logos;
use tracing::debug;

use raw_token::RawToken;

/// Lex source code into a `TokenList` ending in exactly one `Eof` token.
///
/// # Panics
/// Panics if `source` is longer than `u32::MAX` bytes. Callers holding
/// untrusted input should check the length first.
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    let mut result = TokenList::with_capacity(source.len() / 4 + 1);
    let mut logos = RawToken::lexer(source);
    let mut prev_end: Option<usize> = None;
    let mut newline_pending = false;
    let mut errors = 0usize;

    while let Some(token_result) = logos.next() {
        let range = logos.span();
        let slice = logos.slice();
        let gap_start = prev_end.unwrap_or(0);
        if source[gap_start..range.start].contains('\n') {
            newline_pending = true;
        }

        let kind = match token_result {
            Ok(RawToken::LineComment | RawToken::BlockComment(true)) => {
                if slice.contains('\n') {
                    newline_pending = true;
                }
                prev_end = Some(range.end);
                continue;
            }
            Ok(raw) => convert_token(raw),
            Err(()) => TokenKind::Error,
        };
        if kind == TokenKind::Error {
            errors += 1;
        }

        let mut flags = TokenFlags::EMPTY;
        if newline_pending {
            flags.set(TokenFlags::NEWLINE_BEFORE);
        }
        if prev_end == Some(range.start) {
            flags.set(TokenFlags::ADJACENT);
        }
        let text = if kind.has_text() {
            interner.intern(slice)
        } else {
            Name::EMPTY
        };

        result.push(
            Token::new(kind, span_of(range.start, range.end))
                .with_text(text)
                .with_flags(flags),
        );
        prev_end = Some(range.end);
        newline_pending = false;
    }

    let eof_pos = offset(source.len());
    let mut eof_flags = TokenFlags::EMPTY;
    if newline_pending || source[prev_end.unwrap_or(0)..].contains('\n') {
        eof_flags.set(TokenFlags::NEWLINE_BEFORE);
    }
    result.push(Token::new(TokenKind::Eof, Span::point(eof_pos)).with_flags(eof_flags));

    debug!(tokens = result.len(), errors, "lexed");
    result
}

fn offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or_else(|_| panic!("source file exceeds {} bytes", u32::MAX))
}

fn span_of(start: usize, end: usize) -> Span {
    Span::new(offset(start), offset(end))
}

/// Convert a raw token to a `TokenKind`.
fn convert_token(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::LineComment | RawToken::BlockComment(_) => TokenKind::Error,

        RawToken::Abstract => TokenKind::Abstract,
        RawToken::Assert => TokenKind::Assert,
        RawToken::Boolean => TokenKind::Boolean,
        RawToken::Break => TokenKind::Break,
        RawToken::Byte => TokenKind::Byte,
        RawToken::Case => TokenKind::Case,
        RawToken::Catch => TokenKind::Catch,
        RawToken::Char => TokenKind::Char,
        RawToken::Class => TokenKind::Class,
        RawToken::Const => TokenKind::Const,
        RawToken::Continue => TokenKind::Continue,
        RawToken::Default => TokenKind::Default,
        RawToken::Do => TokenKind::Do,
        RawToken::Double => TokenKind::Double,
        RawToken::Else => TokenKind::Else,
        RawToken::Enum => TokenKind::Enum,
        RawToken::Extends => TokenKind::Extends,
        RawToken::Final => TokenKind::Final,
        RawToken::Finally => TokenKind::Finally,
        RawToken::Float => TokenKind::Float,
        RawToken::For => TokenKind::For,
        RawToken::Goto => TokenKind::Goto,
        RawToken::If => TokenKind::If,
        RawToken::Implements => TokenKind::Implements,
        RawToken::Import => TokenKind::Import,
        RawToken::Instanceof => TokenKind::Instanceof,
        RawToken::Int => TokenKind::Int,
        RawToken::Interface => TokenKind::Interface,
        RawToken::Long => TokenKind::Long,
        RawToken::Native => TokenKind::Native,
        RawToken::New => TokenKind::New,
        RawToken::Package => TokenKind::Package,
        RawToken::Private => TokenKind::Private,
        RawToken::Protected => TokenKind::Protected,
        RawToken::Public => TokenKind::Public,
        RawToken::Return => TokenKind::Return,
        RawToken::Short => TokenKind::Short,
        RawToken::Static => TokenKind::Static,
        RawToken::Strictfp => TokenKind::Strictfp,
        RawToken::Super => TokenKind::Super,
        RawToken::Switch => TokenKind::Switch,
        RawToken::Synchronized => TokenKind::Synchronized,
        RawToken::This => TokenKind::This,
        RawToken::Throw => TokenKind::Throw,
        RawToken::Throws => TokenKind::Throws,
        RawToken::Transient => TokenKind::Transient,
        RawToken::Try => TokenKind::Try,
        RawToken::Void => TokenKind::Void,
        RawToken::Volatile => TokenKind::Volatile,
        RawToken::While => TokenKind::While,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::Null => TokenKind::Null,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Semi => TokenKind::Semi,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Ellipsis => TokenKind::Ellipsis,
        RawToken::At => TokenKind::At,
        RawToken::ColonColon => TokenKind::ColonColon,

        RawToken::Eq => TokenKind::Eq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Tilde => TokenKind::Tilde,
        RawToken::Question => TokenKind::Question,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::AndAnd => TokenKind::AndAnd,
        RawToken::OrOr => TokenKind::OrOr,
        RawToken::PlusPlus => TokenKind::PlusPlus,
        RawToken::MinusMinus => TokenKind::MinusMinus,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Amp => TokenKind::Amp,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Shl => TokenKind::Shl,
        RawToken::PlusEq => TokenKind::PlusEq,
        RawToken::MinusEq => TokenKind::MinusEq,
        RawToken::StarEq => TokenKind::StarEq,
        RawToken::SlashEq => TokenKind::SlashEq,
        RawToken::AmpEq => TokenKind::AmpEq,
        RawToken::PipeEq => TokenKind::PipeEq,
        RawToken::CaretEq => TokenKind::CaretEq,
        RawToken::PercentEq => TokenKind::PercentEq,
        RawToken::ShlEq => TokenKind::ShlEq,

        RawToken::IntLit => TokenKind::IntLit,
        RawToken::FloatLit => TokenKind::FloatLit,
        RawToken::StringLit(true) => TokenKind::StringLit,
        RawToken::CharLit(true) => TokenKind::CharLit,
        RawToken::StringLit(false) | RawToken::CharLit(false) => TokenKind::Error,
        RawToken::Ident => TokenKind::Ident,
    }
}

#[cfg(test)]
mod tests;
