//! Expressions.
//!
//! Binary operators are parsed by precedence climbing over
//! [`BinaryOp::precedence`]. Since `>` is never combined by the lexer,
//! shift and comparison operators built from it are recognised here with
//! [`Cursor::greater_run`](crate::Cursor::greater_run).

use kava_diagnostic::ErrorCode;
use kava_ir::ast::{
    AssignOp, AssistKind, BinaryOp, Expr, ExprId, ExprKind, LambdaBody, LambdaParam, LiteralKind,
    PostfixOp, TypeRef, TypeRefId, TypeRefKind, TypeSegment, UnaryOp,
};
use kava_ir::{Name, Span, TokenKind};
use kava_stack::ensure_sufficient_stack;

use crate::context::ParseContext;
use crate::grammar::PendingModifiers;
use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// A full expression: assignment, lambda or conditional.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| {
            self.in_error_context(ErrorContext::Expression, Self::parse_assignment)
        })
    }

    fn parse_assignment(&mut self) -> Result<ExprId, ParseError> {
        if self.at_lambda() {
            return self.parse_lambda();
        }
        let target = self.parse_conditional_expr()?;
        let Some((op, len)) = self.assign_op() else {
            return Ok(target);
        };
        self.cursor.advance_by(len);
        let value = self.parse_expr()?;
        let start = self.expr_start(target);
        Ok(self.finish_expr(ExprKind::Assign { op, target, value }, start))
    }

    fn assign_op(&self) -> Option<(AssignOp, usize)> {
        let op = match self.current_kind() {
            TokenKind::Eq => AssignOp::Assign,
            TokenKind::PlusEq => AssignOp::Add,
            TokenKind::MinusEq => AssignOp::Sub,
            TokenKind::StarEq => AssignOp::Mul,
            TokenKind::SlashEq => AssignOp::Div,
            TokenKind::PercentEq => AssignOp::Rem,
            TokenKind::AmpEq => AssignOp::And,
            TokenKind::PipeEq => AssignOp::Or,
            TokenKind::CaretEq => AssignOp::Xor,
            TokenKind::ShlEq => AssignOp::Shl,
            TokenKind::Gt => {
                return match self.cursor.greater_run() {
                    (2, true) => Some((AssignOp::Shr, 3)),
                    (3, true) => Some((AssignOp::UShr, 4)),
                    _ => None,
                };
            }
            _ => return None,
        };
        Some((op, 1))
    }

    /// `cond ? a : b` or anything tighter. Annotation element values start
    /// here, since they cannot be assignments.
    pub(crate) fn parse_conditional_expr(&mut self) -> Result<ExprId, ParseError> {
        let cond = self.parse_binary(1)?;
        if !self.eat(TokenKind::Question) {
            return Ok(cond);
        }
        let then_expr = self.parse_expr()?;
        self.expect(TokenKind::Colon)?;
        let else_expr = if self.at_lambda() {
            self.parse_lambda()?
        } else {
            self.parse_conditional_expr()?
        };
        let start = self.expr_start(cond);
        Ok(self.finish_expr(
            ExprKind::Conditional {
                cond,
                then_expr,
                else_expr,
            },
            start,
        ))
    }

    fn parse_binary(&mut self, min_prec: u8) -> Result<ExprId, ParseError> {
        let mut left = self.parse_unary()?;
        loop {
            let start = self.expr_start(left);
            if self.check(TokenKind::Instanceof) {
                if BinaryOp::Lt.precedence() < min_prec {
                    break;
                }
                self.advance();
                let ty = self.parse_type()?;
                left = self.finish_expr(ExprKind::InstanceOf { expr: left, ty }, start);
                continue;
            }
            let Some((op, len)) = self.binary_op() else {
                break;
            };
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }
            self.cursor.advance_by(len);
            let right = self.parse_binary(prec + 1)?;
            left = self.finish_expr(ExprKind::Binary { op, left, right }, start);
        }
        Ok(left)
    }

    fn binary_op(&self) -> Option<(BinaryOp, usize)> {
        let op = match self.current_kind() {
            TokenKind::OrOr => BinaryOp::Or,
            TokenKind::AndAnd => BinaryOp::And,
            TokenKind::Pipe => BinaryOp::BitOr,
            TokenKind::Caret => BinaryOp::BitXor,
            TokenKind::Amp => BinaryOp::BitAnd,
            TokenKind::EqEq => BinaryOp::Eq,
            TokenKind::NotEq => BinaryOp::NotEq,
            TokenKind::Lt => BinaryOp::Lt,
            TokenKind::LtEq => BinaryOp::LtEq,
            TokenKind::Shl => BinaryOp::Shl,
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            TokenKind::Percent => BinaryOp::Rem,
            TokenKind::Gt => {
                return match self.cursor.greater_run() {
                    (1, false) => Some((BinaryOp::Gt, 1)),
                    (1, true) => Some((BinaryOp::GtEq, 2)),
                    (2, false) => Some((BinaryOp::Shr, 2)),
                    (3, false) => Some((BinaryOp::UShr, 3)),
                    _ => None,
                };
            }
            _ => return None,
        };
        Some((op, 1))
    }

    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_unary_inner())
    }

    fn parse_unary_inner(&mut self) -> Result<ExprId, ParseError> {
        let start = self.current_span().start;
        let op = match self.current_kind() {
            TokenKind::Plus => Some(UnaryOp::Plus),
            TokenKind::Minus => Some(UnaryOp::Minus),
            TokenKind::Bang => Some(UnaryOp::Not),
            TokenKind::Tilde => Some(UnaryOp::BitNot),
            TokenKind::PlusPlus => Some(UnaryOp::PreInc),
            TokenKind::MinusMinus => Some(UnaryOp::PreDec),
            _ => None,
        };
        if let Some(op) = op {
            self.advance();
            let operand = self.parse_unary()?;
            return Ok(self.finish_expr(ExprKind::Unary { op, operand }, start));
        }
        if self.check(TokenKind::LParen) {
            if let Some(cast) = self.try_parse_cast()? {
                return Ok(cast);
            }
        }
        let primary = self.parse_primary()?;
        self.parse_selectors(primary)
    }

    /// `(T) operand`, if the parenthesised tokens read as a cast.
    ///
    /// A primitive type casts any unary expression. A reference type only
    /// casts operands that cannot be read as the right side of `+` or `-`,
    /// so `(a) - b` stays a subtraction.
    fn try_parse_cast(&mut self) -> Result<Option<ExprId>, ParseError> {
        let snapshot = self.snapshot();
        let errors = self.errors.len();
        let open = self.advance();
        let ty = match self.parse_type() {
            Ok(ty) if self.check(TokenKind::RParen) && self.errors.len() == errors => ty,
            _ => {
                self.restore(snapshot);
                return Ok(None);
            }
        };
        self.advance();
        let primitive = matches!(self.arena.type_ref(ty).kind, TypeRefKind::Primitive { .. });
        let next = self.current_kind();
        let is_cast = starts_operand(next)
            || (primitive
                && matches!(
                    next,
                    TokenKind::Plus | TokenKind::Minus | TokenKind::PlusPlus | TokenKind::MinusMinus
                ));
        if !is_cast {
            self.restore(snapshot);
            return Ok(None);
        }
        let expr = if self.at_lambda() {
            self.parse_lambda()?
        } else {
            self.parse_unary()?
        };
        Ok(Some(
            self.finish_expr(ExprKind::Cast { ty, expr }, open.span.start),
        ))
    }

    fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let start = self.current_span().start;
        let kind = self.current_kind();
        if let Some(literal) = literal_kind(kind) {
            let token = self.advance();
            return Ok(self.finish_expr(
                ExprKind::Literal {
                    kind: literal,
                    text: token.text,
                },
                start,
            ));
        }
        match kind {
            TokenKind::Ident if self.at_assist_ident() => {
                let assist = if self.context.in_array_init()
                    && !self.context.in_annotation()
                    && matches!(self.peek_next_kind(), TokenKind::Comma | TokenKind::RBrace)
                {
                    AssistKind::ArrayInitializerElement
                } else {
                    AssistKind::Name
                };
                self.claim_assist(assist, Vec::new());
                Ok(self.finish_assist(None, start))
            }
            TokenKind::Ident => {
                let name = self.advance().text;
                if self.check(TokenKind::LParen) {
                    let args = self.parse_arguments()?;
                    return Ok(self.finish_expr(
                        ExprKind::MethodCall {
                            receiver: None,
                            type_args: Vec::new(),
                            name,
                            args,
                        },
                        start,
                    ));
                }
                Ok(self.finish_expr(ExprKind::Name(vec![name]), start))
            }
            TokenKind::This => {
                self.advance();
                Ok(self.finish_expr(
                    ExprKind::This {
                        qualifier: Vec::new(),
                    },
                    start,
                ))
            }
            TokenKind::Super => {
                self.advance();
                Ok(self.finish_expr(
                    ExprKind::Super {
                        qualifier: Vec::new(),
                    },
                    start,
                ))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(self.finish_expr(ExprKind::Paren(inner), start))
            }
            TokenKind::New => {
                self.advance();
                self.parse_creation(None, start)
            }
            TokenKind::Void => {
                let ty = self.parse_type()?;
                self.expect_class_literal(ty, start)
            }
            _ if kind.is_primitive() => {
                let ty = self.parse_type()?;
                if self.check(TokenKind::ColonColon) {
                    return Ok(self.finish_expr(ExprKind::TypeExpr(ty), start));
                }
                self.expect_class_literal(ty, start)
            }
            TokenKind::Error => Err(self.cursor.unexpected("an expression")),
            _ => Err(ParseError::new(
                ErrorCode::E1002,
                format!("expected an expression, found {}", self.cursor.describe_current()),
                self.current_span(),
            )),
        }
    }

    /// `.class` after a type in expression position.
    fn expect_class_literal(&mut self, ty: TypeRefId, start: u32) -> Result<ExprId, ParseError> {
        self.expect(TokenKind::Dot)?;
        self.expect(TokenKind::Class)?;
        Ok(self.finish_expr(ExprKind::ClassLiteral(ty), start))
    }

    /// Field accesses, calls, indexing, method references and postfix
    /// operators after a primary.
    fn parse_selectors(&mut self, mut expr: ExprId) -> Result<ExprId, ParseError> {
        loop {
            let start = self.expr_start(expr);
            match self.current_kind() {
                TokenKind::Dot => {
                    self.advance();
                    if self.at_assist_ident() || self.assist_after_previous() {
                        return Ok(self.member_assist(expr, start));
                    }
                    expr = self.parse_dot_selector(expr, start)?;
                }
                TokenKind::ColonColon => {
                    self.advance();
                    if self.check(TokenKind::Lt) {
                        self.parse_type_args()?;
                    }
                    let name = if self.eat(TokenKind::New) {
                        self.interner().intern("new")
                    } else {
                        self.expect_ident()?
                    };
                    expr = self.finish_expr(ExprKind::MethodRef { target: expr, name }, start);
                }
                TokenKind::LBracket if self.peek_next_kind() == TokenKind::RBracket => {
                    let Some(path) = self.name_path(expr) else {
                        return Err(self.cursor.unexpected("an index"));
                    };
                    let base = self.path_type(path, self.arena.expr(expr).span);
                    let ty = self.parse_dims(base);
                    if self.check(TokenKind::ColonColon) {
                        expr = self.finish_expr(ExprKind::TypeExpr(ty), start);
                    } else {
                        return self.expect_class_literal(ty, start);
                    }
                }
                TokenKind::LBracket => {
                    self.advance();
                    let index = self.parse_expr()?;
                    self.expect(TokenKind::RBracket)?;
                    expr = self.finish_expr(ExprKind::ArrayAccess { array: expr, index }, start);
                }
                TokenKind::PlusPlus | TokenKind::MinusMinus => {
                    let op = if self.advance().kind == TokenKind::PlusPlus {
                        PostfixOp::Inc
                    } else {
                        PostfixOp::Dec
                    };
                    expr = self.finish_expr(ExprKind::Postfix { op, operand: expr }, start);
                }
                _ => return Ok(expr),
            }
        }
    }

    /// What follows a `.`, with the cursor past it.
    fn parse_dot_selector(&mut self, receiver: ExprId, start: u32) -> Result<ExprId, ParseError> {
        match self.current_kind() {
            TokenKind::Ident => {
                let name = self.advance().text;
                if self.check(TokenKind::LParen) {
                    let args = self.parse_arguments()?;
                    return Ok(self.finish_expr(
                        ExprKind::MethodCall {
                            receiver: Some(receiver),
                            type_args: Vec::new(),
                            name,
                            args,
                        },
                        start,
                    ));
                }
                let end = self.previous_span().end;
                let node = self.arena.expr_mut(receiver);
                if let ExprKind::Name(path) = &mut node.kind {
                    path.push(name);
                    node.span = node.span.extend_to(end);
                    return Ok(receiver);
                }
                Ok(self.finish_expr(ExprKind::FieldAccess { receiver, name }, start))
            }
            TokenKind::Lt => {
                let type_args = self.parse_type_args()?;
                let name = self.expect_ident()?;
                let args = self.parse_arguments()?;
                Ok(self.finish_expr(
                    ExprKind::MethodCall {
                        receiver: Some(receiver),
                        type_args,
                        name,
                        args,
                    },
                    start,
                ))
            }
            TokenKind::New => {
                self.advance();
                self.parse_creation(Some(receiver), start)
            }
            TokenKind::This | TokenKind::Super | TokenKind::Class => {
                let Some(path) = self.name_path(receiver) else {
                    return Err(self.cursor.unexpected("a member name"));
                };
                let keyword = self.advance().kind;
                let kind = match keyword {
                    TokenKind::This => ExprKind::This { qualifier: path },
                    TokenKind::Super => ExprKind::Super { qualifier: path },
                    _ => {
                        let ty = self.path_type(path, self.arena.expr(receiver).span);
                        ExprKind::ClassLiteral(ty)
                    }
                };
                Ok(self.finish_expr(kind, start))
            }
            _ => Err(self.cursor.unexpected("a member name")),
        }
    }

    /// The caret is on the name after `receiver.`, or right after the dot.
    ///
    /// A dotted name receiver becomes the qualifier of a name completion;
    /// any other receiver is kept and completed as a member access.
    fn member_assist(&mut self, receiver: ExprId, start: u32) -> ExprId {
        let claim = |p: &mut Self, kind: AssistKind, qualifier: Vec<Name>| {
            if p.at_assist_ident() {
                p.claim_assist(kind, qualifier);
            } else {
                p.claim_empty_assist(kind, qualifier);
            }
        };
        match self.name_path(receiver) {
            Some(path) => {
                claim(self, AssistKind::Name, path);
                self.finish_assist(None, start)
            }
            None => {
                claim(self, AssistKind::MemberAccess, Vec::new());
                self.finish_assist(Some(receiver), start)
            }
        }
    }

    /// Placeholder for a claimed assist node. Call arguments and further
    /// member accesses on it are skipped.
    fn finish_assist(&mut self, receiver: Option<ExprId>, start: u32) -> ExprId {
        let end = self.previous_span().end;
        self.skip_after_assist();
        self.arena.alloc_expr(Expr {
            kind: ExprKind::Assist { receiver },
            span: Span::new(start, end.max(start)),
        })
    }

    fn skip_after_assist(&mut self) {
        loop {
            if self.check(TokenKind::LParen) {
                self.skip_parens();
            } else if self.check(TokenKind::Dot) && self.peek_next_kind() == TokenKind::Ident {
                self.cursor.advance_by(2);
            } else {
                return;
            }
        }
    }

    /// Skip a balanced `( ... )`. Stops early at a statement boundary.
    fn skip_parens(&mut self) {
        let mut depth = 0usize;
        loop {
            match self.current_kind() {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => {
                    depth -= 1;
                    if depth == 0 {
                        self.advance();
                        return;
                    }
                }
                TokenKind::Semi | TokenKind::LBrace | TokenKind::RBrace | TokenKind::Eof => return,
                _ => {}
            }
            self.advance();
        }
    }

    /// `new T(args) body` or `new T[n][]` / `new T[] {..}`, with the cursor
    /// past `new`.
    fn parse_creation(&mut self, outer: Option<ExprId>, start: u32) -> Result<ExprId, ParseError> {
        if self.check(TokenKind::Lt) {
            self.parse_type_args()?;
        }
        let annotations = self.parse_type_annotations();
        let ty = self.parse_non_array_type(annotations)?;

        if self.check(TokenKind::LBracket) {
            let mut dims = Vec::new();
            while self.eat(TokenKind::LBracket) {
                if self.eat(TokenKind::RBracket) {
                    dims.push(None);
                } else {
                    dims.push(Some(self.parse_expr()?));
                    self.expect(TokenKind::RBracket)?;
                }
            }
            let init = if self.check(TokenKind::LBrace) {
                Some(self.parse_array_init()?)
            } else {
                None
            };
            return Ok(self.finish_expr(
                ExprKind::NewArray {
                    element: ty,
                    dims,
                    init,
                },
                start,
            ));
        }

        let args = if self.check(TokenKind::LParen) {
            self.parse_arguments()?
        } else if matches!(self.arena.type_ref(ty).kind, TypeRefKind::Assist) {
            Vec::new()
        } else {
            return Err(self.cursor.unexpected("`(` or `[`"));
        };
        let body = if self.check(TokenKind::LBrace) {
            Some(self.parse_anonymous_type())
        } else {
            None
        };
        Ok(self.finish_expr(
            ExprKind::New {
                outer,
                ty,
                args,
                body,
            },
            start,
        ))
    }

    /// `(a, b)`, with the cursor on `(`.
    pub(crate) fn parse_arguments(&mut self) -> Result<Vec<ExprId>, ParseError> {
        self.in_error_context(ErrorContext::ArgumentList, |p| {
            p.expect(TokenKind::LParen)?;
            let mut args = Vec::new();
            if p.eat(TokenKind::RParen) {
                return Ok(args);
            }
            p.without_context(ParseContext::IN_ARRAY_INIT, |p| {
                loop {
                    args.push(p.parse_expr()?);
                    if !p.eat(TokenKind::Comma) {
                        return Ok::<_, ParseError>(());
                    }
                }
            })?;
            p.expect(TokenKind::RParen)?;
            Ok(args)
        })
    }

    /// Initializer of a field or local variable.
    pub(crate) fn parse_variable_initializer(&mut self) -> Result<ExprId, ParseError> {
        if self.check(TokenKind::LBrace) {
            self.parse_array_init()
        } else {
            self.parse_expr()
        }
    }

    /// `{a, {b}, }`, with the cursor on `{`.
    pub(crate) fn parse_array_init(&mut self) -> Result<ExprId, ParseError> {
        self.in_error_context(ErrorContext::ArrayInitializer, |p| {
            let open = p.advance();
            let mut elements = Vec::new();
            while !p.check(TokenKind::RBrace) {
                let element = if p.check(TokenKind::LBrace) {
                    p.parse_array_init()?
                } else if p.check_ident()
                    && matches!(p.peek_next_kind(), TokenKind::Comma | TokenKind::RBrace)
                {
                    p.with_context(ParseContext::IN_ARRAY_INIT, Self::parse_expr)?
                } else {
                    p.without_context(ParseContext::IN_ARRAY_INIT, Self::parse_expr)?
                };
                elements.push(element);
                if !p.eat(TokenKind::Comma) {
                    break;
                }
            }
            p.expect(TokenKind::RBrace)?;
            Ok(p.finish_expr(ExprKind::ArrayInit(elements), open.span.start))
        })
    }

    /// `x -> ..` or `(..) -> ..` ahead.
    fn at_lambda(&self) -> bool {
        match self.current_kind() {
            TokenKind::Ident => self.peek_next_kind() == TokenKind::Arrow,
            TokenKind::LParen => {
                let mut depth = 0usize;
                let mut n = 0;
                loop {
                    match self.cursor.peek_kind_at(n) {
                        TokenKind::LParen => depth += 1,
                        TokenKind::RParen => {
                            depth -= 1;
                            if depth == 0 {
                                return self.cursor.peek_kind_at(n + 1) == TokenKind::Arrow;
                            }
                        }
                        TokenKind::Semi | TokenKind::LBrace | TokenKind::RBrace | TokenKind::Eof => {
                            return false;
                        }
                        _ => {}
                    }
                    n += 1;
                }
            }
            _ => false,
        }
    }

    fn parse_lambda(&mut self) -> Result<ExprId, ParseError> {
        self.in_error_context(ErrorContext::Lambda, |p| {
            let start = p.current_span().start;
            let params = if p.check_ident() {
                let token = p.advance();
                vec![LambdaParam {
                    ty: None,
                    name: token.text,
                    span: token.span,
                }]
            } else {
                p.parse_lambda_params()?
            };
            p.expect(TokenKind::Arrow)?;
            let body = if p.check(TokenKind::LBrace) {
                LambdaBody::Block(p.with_context(ParseContext::IN_BODY, Self::parse_block)?)
            } else {
                LambdaBody::Expr(p.parse_expr()?)
            };
            Ok(p.finish_expr(ExprKind::Lambda { params, body }, start))
        })
    }

    /// `(a, b)` or `(final int a, String... b)`, with the cursor on `(`.
    fn parse_lambda_params(&mut self) -> Result<Vec<LambdaParam>, ParseError> {
        self.advance();
        let mut params = Vec::new();
        while !self.check(TokenKind::RParen) {
            let mut pending = PendingModifiers::new();
            self.parse_modifiers(&mut pending, false);
            let start = pending.start_or(self.current_span());
            let ty = if self.check_ident()
                && matches!(self.peek_next_kind(), TokenKind::Comma | TokenKind::RParen)
            {
                None
            } else {
                let ty = self.parse_type()?;
                self.eat(TokenKind::Ellipsis);
                Some(ty)
            };
            self.check_declared_name();
            let name = self.expect_ident()?;
            let dims = self.parse_dimensions();
            let ty = ty.map(|ty| self.with_extra_dims(ty, dims));
            params.push(LambdaParam {
                ty,
                name,
                span: Span::new(start, self.previous_span().end),
            });
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(params)
    }

    /// The dotted path of a plain name expression.
    fn name_path(&self, expr: ExprId) -> Option<Vec<Name>> {
        match &self.arena.expr(expr).kind {
            ExprKind::Name(path) => Some(path.clone()),
            _ => None,
        }
    }

    /// A dotted name read as a class type, for `.class` and `[]` suffixes.
    fn path_type(&mut self, path: Vec<Name>, span: Span) -> TypeRefId {
        let segments = path
            .into_iter()
            .map(|name| TypeSegment {
                annotations: Vec::new(),
                name,
                type_args: None,
                span,
            })
            .collect();
        self.arena.alloc_type_ref(TypeRef {
            kind: TypeRefKind::Named(segments),
            span,
        })
    }

    fn expr_start(&self, id: ExprId) -> u32 {
        self.arena.expr(id).span.start
    }

    fn finish_expr(&mut self, kind: ExprKind, start: u32) -> ExprId {
        let end = self.previous_span().end.max(start);
        self.arena.alloc_expr(Expr {
            kind,
            span: Span::new(start, end),
        })
    }
}

fn literal_kind(kind: TokenKind) -> Option<LiteralKind> {
    Some(match kind {
        TokenKind::IntLit => LiteralKind::Int,
        TokenKind::FloatLit => LiteralKind::Float,
        TokenKind::CharLit => LiteralKind::Char,
        TokenKind::StringLit => LiteralKind::String,
        TokenKind::True => LiteralKind::True,
        TokenKind::False => LiteralKind::False,
        TokenKind::Null => LiteralKind::Null,
        _ => return None,
    })
}

/// Tokens that start an operand which cannot be mistaken for a binary
/// operator's right side.
fn starts_operand(kind: TokenKind) -> bool {
    literal_kind(kind).is_some()
        || kind.is_primitive()
        || matches!(
            kind,
            TokenKind::Ident
                | TokenKind::LParen
                | TokenKind::Bang
                | TokenKind::Tilde
                | TokenKind::This
                | TokenKind::Super
                | TokenKind::New
        )
}
