//! Blocks and statements.
//!
//! A statement that cannot be parsed is discarded: the block skips to the
//! next `;` (consumed), `}` or statement keyword at the start of a line and
//! carries on with the statements that follow.

use kava_diagnostic::ErrorCode;
use kava_ir::ast::{
    Block, CallKind, CatchClause, CatchParam, ConstructorCall, Expr, ExprId, ExprKind, LocalVar,
    Resource, Stmt, StmtId, StmtKind, SwitchCase, TypeRefId,
};
use kava_ir::{Span, TokenKind};
use kava_stack::ensure_sufficient_stack;

use crate::grammar::PendingModifiers;
use crate::recovery::{STMT_KEYWORDS, STMT_RECOVERY};
use crate::{ErrorContext, ParseError, Parser, RecoveryScope};

impl Parser<'_> {
    /// The outermost block of a method, constructor or initializer body.
    ///
    /// Returns the block and whether its closing `}` was found.
    pub(crate) fn parse_body_block(&mut self) -> (Block, bool) {
        let open = self.advance();
        let stmts = self.parse_block_stmts();
        let closed = self.eat(TokenKind::RBrace);
        let block = Block {
            stmts,
            span: open.span.merge(self.previous_span()),
        };
        (block, closed)
    }

    /// `{ stmts }`, with the cursor on `{`. A missing `}` is reported and
    /// the block closed where it ended.
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        let open = self.expect(TokenKind::LBrace)?;
        let stmts = self.parse_block_stmts();
        if !self.eat(TokenKind::RBrace) {
            let error = ParseError::new(
                ErrorCode::E1003,
                "block is not closed",
                self.current_span(),
            )
            .with_context(ErrorContext::Block.label());
            self.seal(RecoveryScope::Statement, error, "block");
        }
        Ok(Block {
            stmts,
            span: open.span.merge(self.previous_span()),
        })
    }

    fn parse_block_stmts(&mut self) -> Vec<StmtId> {
        let mut stmts = Vec::new();
        while !matches!(self.current_kind(), TokenKind::RBrace | TokenKind::Eof) {
            let before = self.position();
            self.parse_block_stmt_into(&mut stmts);
            self.force_progress(before);
        }
        stmts
    }

    /// Parse one block statement, recovering on failure. Local variable
    /// declarations with several declarators add one statement each.
    fn parse_block_stmt_into(&mut self, stmts: &mut Vec<StmtId>) {
        let result = ensure_sufficient_stack(|| self.parse_block_stmt(stmts));
        if let Err(error) = result {
            self.recover_stmt(error);
        }
    }

    fn recover_stmt(&mut self, error: ParseError) {
        let error = if error.context.is_some() {
            error
        } else {
            error.with_context(ErrorContext::Statement.label())
        };
        self.recover(RecoveryScope::Statement, error, STMT_RECOVERY, STMT_KEYWORDS);
        self.eat(TokenKind::Semi);
        self.recovery.discard("statement");
    }

    fn parse_block_stmt(&mut self, stmts: &mut Vec<StmtId>) -> Result<(), ParseError> {
        match self.current_kind() {
            TokenKind::Class | TokenKind::Interface | TokenKind::Enum => {
                let stmt = self.parse_local_type(PendingModifiers::new());
                stmts.push(stmt);
                Ok(())
            }
            TokenKind::Final | TokenKind::Abstract | TokenKind::Static | TokenKind::Strictfp => {
                self.parse_modified_local(stmts)
            }
            TokenKind::At => self.parse_modified_local(stmts),
            _ if self.at_local_var_decl() => {
                self.parse_local_vars(PendingModifiers::new(), stmts)
            }
            _ => {
                let stmt = self.parse_stmt()?;
                stmts.push(stmt);
                Ok(())
            }
        }
    }

    /// Modifiers or annotations, then a local class or variable.
    fn parse_modified_local(&mut self, stmts: &mut Vec<StmtId>) -> Result<(), ParseError> {
        let mut pending = PendingModifiers::new();
        self.parse_modifiers(&mut pending, false);
        if matches!(
            self.current_kind(),
            TokenKind::Class | TokenKind::Interface | TokenKind::Enum
        ) || (self.check(TokenKind::At) && self.peek_next_kind() == TokenKind::Interface)
        {
            let stmt = self.parse_local_type(pending);
            stmts.push(stmt);
            return Ok(());
        }
        self.parse_local_vars(pending, stmts)
    }

    fn parse_local_type(&mut self, pending: PendingModifiers) -> StmtId {
        let id = self.parse_type_decl(pending, true);
        let span = self.arena.type_decl(id).declaration_span;
        self.alloc_stmt(StmtKind::LocalType(id), span)
    }

    /// A type followed by a name starts a local variable declaration.
    fn at_local_var_decl(&mut self) -> bool {
        let kind = self.current_kind();
        if !(kind == TokenKind::Ident || kind.is_primitive()) {
            return false;
        }
        self.look_ahead(|p| p.parse_type().is_ok() && p.check_ident())
    }

    /// `T a = 1, b[];`
    fn parse_local_vars(
        &mut self,
        pending: PendingModifiers,
        stmts: &mut Vec<StmtId>,
    ) -> Result<(), ParseError> {
        self.in_error_context(ErrorContext::LocalVar, |p| {
            let start = pending.start_or(p.current_span());
            let ty = p.parse_type()?;
            let mut vars = Vec::new();
            loop {
                vars.push(p.parse_declarator(&pending, start, ty)?);
                if !p.eat(TokenKind::Comma) {
                    break;
                }
            }
            p.expect_semi()?;
            let span = Span::new(start, p.previous_span().end);
            for var in vars {
                let stmt = p.alloc_stmt(StmtKind::LocalVar(var), span);
                stmts.push(stmt);
            }
            Ok(())
        })
    }

    /// `name [] = init` after a local variable type.
    fn parse_declarator(
        &mut self,
        pending: &PendingModifiers,
        start: u32,
        ty: TypeRefId,
    ) -> Result<LocalVar, ParseError> {
        self.check_declared_name();
        let name = self.expect_ident()?;
        let dims = self.parse_dimensions();
        let ty = self.with_extra_dims(ty, dims);
        let init = if self.eat(TokenKind::Eq) {
            Some(self.parse_variable_initializer()?)
        } else {
            None
        };
        Ok(LocalVar {
            modifiers: pending.modifiers,
            annotations: pending.annotations.clone(),
            ty,
            name,
            init,
            span: Span::new(start, self.previous_span().end),
        })
    }

    /// A statement in a position where declarations are not allowed,
    /// such as the branch of an `if`.
    fn parse_stmt(&mut self) -> Result<StmtId, ParseError> {
        ensure_sufficient_stack(|| self.parse_stmt_inner())
    }

    fn parse_stmt_inner(&mut self) -> Result<StmtId, ParseError> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::LBrace => StmtKind::Block(self.parse_block()?),
            TokenKind::Semi => {
                self.advance();
                StmtKind::Empty
            }
            TokenKind::If => self.parse_if()?,
            TokenKind::While => {
                self.advance();
                let cond = self.parse_paren_expr()?;
                let body = self.parse_stmt()?;
                StmtKind::While { cond, body }
            }
            TokenKind::Do => {
                self.advance();
                let body = self.parse_stmt()?;
                self.expect(TokenKind::While)?;
                let cond = self.parse_paren_expr()?;
                self.expect_semi()?;
                StmtKind::DoWhile { body, cond }
            }
            TokenKind::For => self.parse_for()?,
            TokenKind::Switch => self.parse_switch()?,
            TokenKind::Try => self.parse_try()?,
            TokenKind::Return => {
                self.advance();
                let value = if self.check(TokenKind::Semi) {
                    None
                } else {
                    Some(self.parse_expr()?)
                };
                self.expect_semi()?;
                StmtKind::Return(value)
            }
            TokenKind::Break | TokenKind::Continue => {
                let is_break = self.advance().kind == TokenKind::Break;
                let label = if self.check_ident() {
                    Some(self.advance().text)
                } else {
                    None
                };
                self.expect_semi()?;
                if is_break {
                    StmtKind::Break(label)
                } else {
                    StmtKind::Continue(label)
                }
            }
            TokenKind::Throw => {
                self.advance();
                let value = self.parse_expr()?;
                self.expect_semi()?;
                StmtKind::Throw(value)
            }
            TokenKind::Synchronized => {
                self.advance();
                let lock = self.parse_paren_expr()?;
                let body = self.parse_block()?;
                StmtKind::Synchronized { lock, body }
            }
            TokenKind::Assert => {
                self.advance();
                let cond = self.parse_expr()?;
                let message = if self.eat(TokenKind::Colon) {
                    Some(self.parse_expr()?)
                } else {
                    None
                };
                self.expect_semi()?;
                StmtKind::Assert { cond, message }
            }
            TokenKind::Ident if self.peek_next_kind() == TokenKind::Colon => {
                let label = self.advance().text;
                self.advance();
                let body = self.parse_stmt()?;
                StmtKind::Labeled { label, body }
            }
            TokenKind::This | TokenKind::Super if self.peek_next_kind() == TokenKind::LParen => {
                let kind = if self.advance().kind == TokenKind::This {
                    CallKind::This
                } else {
                    CallKind::Super
                };
                let args = self.parse_arguments()?;
                self.expect_semi()?;
                StmtKind::ConstructorCall(ConstructorCall {
                    kind,
                    qualifier: None,
                    args,
                    implicit: false,
                })
            }
            TokenKind::Ident if self.at_qualified_super_call() => {
                let mut path = Vec::new();
                while !self.check(TokenKind::Super) {
                    path.push(self.advance().text);
                    self.advance();
                }
                let qualifier = self.arena.alloc_expr(Expr {
                    kind: ExprKind::Name(path),
                    span: Span::new(start.start, self.previous_span().start),
                });
                self.advance();
                let args = self.parse_arguments()?;
                self.expect_semi()?;
                StmtKind::ConstructorCall(ConstructorCall {
                    kind: CallKind::Super,
                    qualifier: Some(qualifier),
                    args,
                    implicit: false,
                })
            }
            TokenKind::Else | TokenKind::Case | TokenKind::Catch | TokenKind::Finally => {
                return Err(ParseError::new(
                    ErrorCode::E1013,
                    format!("expected a statement, found {}", self.cursor.describe_current()),
                    start,
                ));
            }
            _ => {
                let expr = self.parse_expr()?;
                self.expect_semi()?;
                StmtKind::Expr(expr)
            }
        };
        Ok(self.alloc_stmt(kind, start.merge(self.previous_span())))
    }

    /// `outer.super(args);`
    fn at_qualified_super_call(&self) -> bool {
        let mut n = 0;
        while self.cursor.peek_kind_at(n) == TokenKind::Ident
            && self.cursor.peek_kind_at(n + 1) == TokenKind::Dot
        {
            n += 2;
        }
        n > 0
            && self.cursor.peek_kind_at(n) == TokenKind::Super
            && self.cursor.peek_kind_at(n + 1) == TokenKind::LParen
    }

    fn alloc_stmt(&mut self, kind: StmtKind, span: Span) -> StmtId {
        self.arena.alloc_stmt(Stmt { kind, span })
    }

    /// `;` ending a statement. When it is missing before `}`, the end of
    /// input, or a line break, the statement is kept as it is.
    fn expect_semi(&mut self) -> Result<(), ParseError> {
        if self.eat(TokenKind::Semi) {
            return Ok(());
        }
        if matches!(self.current_kind(), TokenKind::RBrace | TokenKind::Eof)
            || self.cursor.has_newline_before()
        {
            let error = self.cursor.unexpected("`;`");
            let error = ParseError {
                span: Span::point(self.previous_span().end),
                ..error
            };
            self.seal(RecoveryScope::Statement, error, "statement");
            return Ok(());
        }
        Err(self.cursor.unexpected("`;`"))
    }

    /// `( expr )`
    fn parse_paren_expr(&mut self) -> Result<ExprId, ParseError> {
        self.expect(TokenKind::LParen)?;
        let expr = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        Ok(expr)
    }

    fn parse_if(&mut self) -> Result<StmtKind, ParseError> {
        self.advance();
        let cond = self.parse_paren_expr()?;
        let then_branch = self.parse_stmt()?;
        let else_branch = if self.eat(TokenKind::Else) {
            Some(self.parse_stmt()?)
        } else {
            None
        };
        Ok(StmtKind::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    /// Classic `for (init; cond; update)` or enhanced `for (T x : xs)`.
    fn parse_for(&mut self) -> Result<StmtKind, ParseError> {
        self.advance();
        self.expect(TokenKind::LParen)?;

        let mut pending = PendingModifiers::new();
        self.parse_modifiers(&mut pending, false);
        let mut init = Vec::new();
        if !pending.is_empty() || self.at_local_var_decl() {
            let start = pending.start_or(self.current_span());
            let ty = self.parse_type()?;
            let first = self.parse_declarator(&pending, start, ty)?;
            if first.init.is_none() && self.eat(TokenKind::Colon) {
                let iterable = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                let body = self.parse_stmt()?;
                return Ok(StmtKind::ForEach {
                    var: first,
                    iterable,
                    body,
                });
            }
            let mut vars = vec![first];
            while self.eat(TokenKind::Comma) {
                vars.push(self.parse_declarator(&pending, start, ty)?);
            }
            let span = Span::new(start, self.previous_span().end);
            for var in vars {
                init.push(self.alloc_stmt(StmtKind::LocalVar(var), span));
            }
        } else if !self.check(TokenKind::Semi) {
            for expr in self.parse_expr_list()? {
                let span = self.arena.expr(expr).span;
                init.push(self.alloc_stmt(StmtKind::Expr(expr), span));
            }
        }
        self.expect(TokenKind::Semi)?;

        let cond = if self.check(TokenKind::Semi) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(TokenKind::Semi)?;

        let update = if self.check(TokenKind::RParen) {
            Vec::new()
        } else {
            self.parse_expr_list()?
        };
        self.expect(TokenKind::RParen)?;
        let body = self.parse_stmt()?;
        Ok(StmtKind::For {
            init,
            cond,
            update,
            body,
        })
    }

    fn parse_expr_list(&mut self) -> Result<Vec<ExprId>, ParseError> {
        let mut exprs = vec![self.parse_expr()?];
        while self.eat(TokenKind::Comma) {
            exprs.push(self.parse_expr()?);
        }
        Ok(exprs)
    }

    fn parse_switch(&mut self) -> Result<StmtKind, ParseError> {
        self.advance();
        let selector = self.parse_paren_expr()?;
        self.expect(TokenKind::LBrace)?;
        let mut cases = Vec::new();
        while !matches!(self.current_kind(), TokenKind::RBrace | TokenKind::Eof) {
            let start = self.current_span();
            let mut labels = Vec::new();
            if self.eat(TokenKind::Case) {
                labels = self.parse_expr_list()?;
            } else {
                self.expect(TokenKind::Default)?;
            }
            self.expect(TokenKind::Colon)?;

            let mut body = Vec::new();
            while !matches!(
                self.current_kind(),
                TokenKind::Case | TokenKind::Default | TokenKind::RBrace | TokenKind::Eof
            ) {
                let before = self.position();
                self.parse_block_stmt_into(&mut body);
                self.force_progress(before);
            }
            cases.push(SwitchCase {
                labels,
                body,
                span: start.merge(self.previous_span()),
            });
        }
        self.expect(TokenKind::RBrace)?;
        Ok(StmtKind::Switch { selector, cases })
    }

    fn parse_try(&mut self) -> Result<StmtKind, ParseError> {
        self.advance();
        let mut resources = Vec::new();
        if self.eat(TokenKind::LParen) {
            while !self.check(TokenKind::RParen) {
                resources.push(self.parse_resource()?);
                if !self.eat(TokenKind::Semi) {
                    break;
                }
            }
            self.expect(TokenKind::RParen)?;
        }
        let body = self.parse_block()?;

        let mut catches = Vec::new();
        while self.check(TokenKind::Catch) {
            let start = self.advance().span;
            self.expect(TokenKind::LParen)?;
            let mut pending = PendingModifiers::new();
            self.parse_modifiers(&mut pending, false);
            let param_start = pending.start_or(self.current_span());
            let mut types = vec![self.parse_type()?];
            while self.eat(TokenKind::Pipe) {
                types.push(self.parse_type()?);
            }
            self.check_declared_name();
            let name = self.expect_ident()?;
            let param = CatchParam {
                modifiers: pending.modifiers,
                annotations: pending.annotations,
                types,
                name,
                span: Span::new(param_start, self.previous_span().end),
            };
            self.expect(TokenKind::RParen)?;
            let body = self.parse_block()?;
            catches.push(CatchClause {
                param,
                body,
                span: start.merge(self.previous_span()),
            });
        }

        let finally = if self.eat(TokenKind::Finally) {
            Some(self.parse_block()?)
        } else {
            None
        };
        if resources.is_empty() && catches.is_empty() && finally.is_none() {
            self.push_error(ParseError::new(
                ErrorCode::E1013,
                "`try` without `catch` or `finally`",
                body.span,
            ));
        }
        Ok(StmtKind::Try {
            resources,
            body,
            catches,
            finally,
        })
    }

    /// `final T x = e` or an expression naming an existing resource.
    fn parse_resource(&mut self) -> Result<Resource, ParseError> {
        let mut pending = PendingModifiers::new();
        self.parse_modifiers(&mut pending, false);
        if pending.is_empty() && !self.at_local_var_decl() {
            return Ok(Resource::Expr(self.parse_expr()?));
        }
        let start = pending.start_or(self.current_span());
        let ty = self.parse_type()?;
        Ok(Resource::Var(self.parse_declarator(&pending, start, ty)?))
    }
}
