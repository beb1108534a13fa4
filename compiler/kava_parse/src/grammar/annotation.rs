//! Annotations and element values.
//!
//! Argument lists recover by sealing: the first pair that cannot be parsed
//! is kept (with a missing value if that is what went wrong), and the rest
//! of the list is skipped up to its closing `)`. Parsing never resumes in
//! the middle of a broken list.

use kava_diagnostic::ErrorCode;
use kava_ir::ast::{
    Annotation, AnnotationId, AnnotationKind, AssistKind, Expr, ExprId, ExprKind,
    MemberValuePair,
};
use kava_ir::{Name, Span, TokenKind};
use kava_stack::ensure_sufficient_stack;

use crate::context::ParseContext;
use crate::recovery::{ANNOTATION_ARGS_STOP, TYPE_START};
use crate::{ErrorContext, ParseError, Parser, RecoveryScope};

impl Parser<'_> {
    /// Parse `@Name` and its arguments, with the cursor on `@`.
    ///
    /// Returns `None` when no name follows the `@`; the `@` is consumed and
    /// an error recorded.
    pub(crate) fn parse_annotation(&mut self) -> Option<AnnotationId> {
        ensure_sufficient_stack(|| self.parse_annotation_inner())
    }

    fn parse_annotation_inner(&mut self) -> Option<AnnotationId> {
        let at = self.advance();
        let mut name = Vec::new();
        let mut is_assist = false;
        loop {
            if self.at_assist_ident() {
                self.claim_assist(AssistKind::Type, name.clone());
                is_assist = true;
                while self.check(TokenKind::Dot) && self.peek_next_kind() == TokenKind::Ident {
                    self.cursor.advance_by(2);
                }
                break;
            }
            if !self.check_ident() {
                let error = ParseError::new(
                    ErrorCode::E1004,
                    format!(
                        "expected annotation name, found {}",
                        self.cursor.describe_current()
                    ),
                    self.current_span(),
                )
                .with_context(ErrorContext::Annotation.label());
                self.push_error(error);
                if name.is_empty() {
                    return None;
                }
                break;
            }
            name.push(self.advance().text);
            if self.check(TokenKind::Dot) && self.peek_next_kind() == TokenKind::Ident {
                self.advance();
                continue;
            }
            break;
        }

        let kind = if self.check(TokenKind::LParen) {
            self.parse_annotation_args()
        } else {
            AnnotationKind::Marker
        };
        let span = at.span.merge(self.previous_span());
        Some(self.arena.alloc_annotation(Annotation {
            name,
            kind,
            is_assist,
            span,
        }))
    }

    /// Argument list, with the cursor on `(`.
    fn parse_annotation_args(&mut self) -> AnnotationKind {
        self.advance();
        if self.eat(TokenKind::RParen) {
            return AnnotationKind::Normal(Vec::new());
        }

        let named = self.check_ident() && self.peek_next_kind() == TokenKind::Eq;
        if !named && !self.at_leading_attribute_name_assist() {
            return self.parse_single_member();
        }

        let mut pairs = Vec::new();
        loop {
            if self.at_assist_ident() {
                let start = self.current_span();
                self.claim_assist(AssistKind::AttributeName, Vec::new());
                let value = self.alloc_missing(self.previous_span().end);
                pairs.push(MemberValuePair {
                    name: Name::EMPTY,
                    value,
                    is_assist: true,
                    span: start,
                });
                self.recovery.seal("annotation arguments");
                self.skip_annotation_args();
                break;
            }

            let start = self.current_span();
            if !(self.check_ident() && self.peek_next_kind() == TokenKind::Eq) {
                let error = ParseError::new(
                    ErrorCode::E1011,
                    format!(
                        "expected `name = value`, found {}",
                        self.cursor.describe_current()
                    ),
                    start,
                )
                .with_context(ErrorContext::AnnotationArgs.label());
                self.seal(RecoveryScope::Member, error, "annotation arguments");
                self.skip_annotation_args();
                break;
            }
            let name = self.advance().text;
            self.advance();

            let Some(value) = self.parse_pair_value() else {
                let value = self.alloc_missing(self.previous_span().end);
                pairs.push(MemberValuePair {
                    name,
                    value,
                    is_assist: false,
                    span: start.merge(self.previous_span()),
                });
                let error = ParseError::new(
                    ErrorCode::E1010,
                    format!(
                        "annotation member `{}` has no value",
                        self.interner().lookup(name)
                    ),
                    Span::new(start.start, self.previous_span().end),
                );
                self.seal(RecoveryScope::Member, error, "annotation arguments");
                self.skip_annotation_args();
                break;
            };
            pairs.push(MemberValuePair {
                name,
                value,
                is_assist: false,
                span: start.merge(self.previous_span()),
            });

            if self.eat(TokenKind::Comma) {
                continue;
            }
            if self.eat(TokenKind::RParen) {
                break;
            }
            let error = self
                .cursor
                .unexpected("`,` or `)`")
                .with_context(ErrorContext::AnnotationArgs.label());
            let error = ParseError { code: ErrorCode::E1011, ..error };
            self.seal(RecoveryScope::Member, error, "annotation arguments");
            self.skip_annotation_args();
            break;
        }
        AnnotationKind::Normal(pairs)
    }

    /// `@A(value)`.
    fn parse_single_member(&mut self) -> AnnotationKind {
        let value = match self.parse_element_value() {
            Ok(value) => value,
            Err(error) => {
                self.push_error(error);
                let missing = self.alloc_missing(self.previous_span().end);
                self.skip_annotation_args();
                return AnnotationKind::SingleMember(missing);
            }
        };
        if !self.eat(TokenKind::RParen) {
            let error = ParseError::new(
                ErrorCode::E1011,
                format!("expected `)`, found {}", self.cursor.describe_current()),
                self.current_span(),
            )
            .with_context(ErrorContext::AnnotationArgs.label());
            self.seal(RecoveryScope::Member, error, "annotation arguments");
            self.skip_annotation_args();
        }
        AnnotationKind::SingleMember(value)
    }

    /// The identifier under the caret opens the list as an attribute name
    /// rather than a single value: nothing after it continues an expression.
    fn at_leading_attribute_name_assist(&self) -> bool {
        self.at_assist_ident()
            && (matches!(
                self.peek_next_kind(),
                TokenKind::Eq | TokenKind::Comma | TokenKind::RParen | TokenKind::Eof
            ) || self.cursor.peek_token_at(1).flags.has_newline_before())
    }

    /// Value after `name =`. `None` when nothing usable is there.
    fn parse_pair_value(&mut self) -> Option<ExprId> {
        if matches!(
            self.current_kind(),
            TokenKind::Comma | TokenKind::RParen | TokenKind::Semi | TokenKind::Eof
        ) {
            return None;
        }
        self.try_parse(Self::parse_element_value)
    }

    /// Skip the rest of a sealed argument list, including its `)`.
    ///
    /// Stops early at a token that starts a declaration, or at a line that
    /// opens with `Type name`, so an unclosed list cannot swallow the
    /// declaration it decorates.
    fn skip_annotation_args(&mut self) {
        let mut parens = 1usize;
        let mut braces = 0usize;
        loop {
            let kind = self.current_kind();
            if ANNOTATION_ARGS_STOP.contains(kind) || (kind == TokenKind::RBrace && braces == 0) {
                return;
            }
            if braces == 0 && self.at_declaration_line() {
                return;
            }
            match kind {
                TokenKind::LParen => parens += 1,
                TokenKind::RParen => {
                    parens -= 1;
                    if parens == 0 {
                        self.advance();
                        return;
                    }
                }
                TokenKind::LBrace => braces += 1,
                TokenKind::RBrace => braces -= 1,
                _ => {}
            }
            self.advance();
        }
    }

    /// A line starting here reads `Type name`.
    fn at_declaration_line(&mut self) -> bool {
        self.cursor.has_newline_before()
            && TYPE_START.contains(self.current_kind())
            && self.look_ahead(|p| p.parse_type().is_ok() && p.check_ident())
    }

    /// An annotation member value: a nested annotation, an array of element
    /// values, or a conditional expression.
    pub(crate) fn parse_element_value(&mut self) -> Result<ExprId, ParseError> {
        self.with_context(ParseContext::IN_ANNOTATION, |p| match p.current_kind() {
            TokenKind::At => {
                let start = p.current_span();
                match p.parse_annotation() {
                    Some(id) => Ok(p.arena.alloc_expr(Expr {
                        kind: ExprKind::Annotation(id),
                        span: start.merge(p.previous_span()),
                    })),
                    None => Err(ParseError::new(
                        ErrorCode::E1002,
                        "expected an annotation value",
                        start,
                    )),
                }
            }
            TokenKind::LBrace => p.parse_element_array(),
            _ => p.parse_conditional_expr(),
        })
    }

    /// `{v1, v2, }` inside annotation arguments.
    fn parse_element_array(&mut self) -> Result<ExprId, ParseError> {
        self.in_error_context(ErrorContext::ArrayInitializer, |p| {
            let open = p.advance();
            let mut elements = Vec::new();
            while !p.check(TokenKind::RBrace) {
                elements.push(p.parse_element_value()?);
                if !p.eat(TokenKind::Comma) {
                    break;
                }
            }
            let close = p.expect(TokenKind::RBrace)?;
            Ok(p.arena.alloc_expr(Expr {
                kind: ExprKind::ArrayInit(elements),
                span: open.span.merge(close.span),
            }))
        })
    }

    /// Zero-width `$missing$` expression at `at`.
    pub(crate) fn alloc_missing(&mut self, at: u32) -> ExprId {
        self.arena.alloc_expr(Expr {
            kind: ExprKind::Missing,
            span: Span::point(at),
        })
    }
}
