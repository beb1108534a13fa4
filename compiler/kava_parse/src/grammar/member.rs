//! Type bodies: fields, methods, constructors, initializers, member types
//! and enum constants.
//!
//! The member loop is the main recovery scope of a structure parse. A
//! member that cannot be parsed is discarded and the loop resumes at the
//! next token that can start a member; members before and after it are not
//! affected.

use kava_diagnostic::ErrorCode;
use kava_ir::ast::{
    AnnotationId, Body, EnumConstant, ExprId, FieldDecl, Initializer, Member, MethodDecl,
    Modifiers, Param, TypeDeclId, TypeDeclKind, TypeParam, TypeRef, TypeRefId, TypeRefKind,
};
use kava_ir::{Name, Span, Token, TokenKind};

use crate::bodies::{BodyKind, ParsedBody};
use crate::grammar::decl::BodyOwner;
use crate::grammar::PendingModifiers;
use crate::recovery::{MEMBER_RECOVERY, TYPE_START};
use crate::{ErrorContext, ParseError, Parser, RecoveryScope};

/// What a member header has collected before its name.
struct MemberHead {
    modifiers: Modifiers,
    annotations: Vec<AnnotationId>,
    type_params: Vec<TypeParam>,
    start: u32,
}

impl MemberHead {
    fn new(pending: PendingModifiers, fallback: Span) -> Self {
        MemberHead {
            start: pending.start_or(fallback),
            modifiers: pending.modifiers,
            annotations: pending.annotations,
            type_params: Vec::new(),
        }
    }
}

impl Parser<'_> {
    /// Parse `{ members }` with the cursor on `{`. Returns the body span;
    /// a body that never closes ends where parsing stopped.
    pub(crate) fn parse_type_body(&mut self, owner: BodyOwner) -> Span {
        let open = self.advance();
        if owner.kind == TypeDeclKind::Enum {
            self.parse_enum_constants(owner);
        }

        let mut pending = PendingModifiers::new();
        loop {
            self.parse_modifiers(&mut pending, true);
            let before = self.position();
            match self.current_kind() {
                TokenKind::RBrace | TokenKind::Eof => break,
                TokenKind::Semi => {
                    self.advance();
                    continue;
                }
                TokenKind::Error => {
                    let error = self.cursor.unexpected("a member declaration");
                    self.push_error(error);
                    self.advance();
                    continue;
                }
                _ => self.parse_member(owner, &mut pending),
            }
            self.force_progress(before);
        }

        if !pending.is_empty() {
            self.report_dangling(&pending);
            self.push_member(owner.id, Member::Dangling(pending.into_dangling()));
        }

        if self.check(TokenKind::RBrace) {
            let close = self.advance();
            return open.span.merge(close.span);
        }
        let error = ParseError::new(
            ErrorCode::E1003,
            "type body is not closed",
            self.current_span(),
        )
        .with_context(ErrorContext::TypeBody.label());
        self.seal(RecoveryScope::TypeDecl, error, "type body");
        open.span.merge(self.previous_span())
    }

    fn push_member(&mut self, owner: TypeDeclId, member: Member) {
        self.arena.type_decl_mut(owner).members.push(member);
    }

    fn push_hoisted(&mut self, owner: TypeDeclId, hoisted: Vec<TypeDeclId>) {
        for id in hoisted {
            self.push_member(owner, Member::Type(id));
        }
    }

    fn parse_member(&mut self, owner: BodyOwner, pending: &mut PendingModifiers) {
        match self.current_kind() {
            TokenKind::LBrace => self.parse_initializer(owner, pending.take()),
            TokenKind::Class | TokenKind::Interface | TokenKind::Enum => {
                let id = self.parse_type_decl(pending.take(), false);
                self.push_member(owner.id, Member::Type(id));
            }
            TokenKind::At if self.peek_next_kind() == TokenKind::Interface => {
                let id = self.parse_type_decl(pending.take(), false);
                self.push_member(owner.id, Member::Type(id));
            }
            TokenKind::Lt => {
                let mut head = MemberHead::new(pending.take(), self.current_span());
                match self.parse_type_params() {
                    Ok(params) => head.type_params = params,
                    Err(error) => {
                        self.recover_member(error);
                        return;
                    }
                }
                if self.check_ident() && self.peek_next_kind() == TokenKind::LParen {
                    self.parse_constructor_like(owner, head);
                } else {
                    self.parse_typed_member(owner, head);
                }
            }
            TokenKind::Ident if self.peek_next_kind() == TokenKind::LParen => {
                let head = MemberHead::new(pending.take(), self.current_span());
                self.parse_constructor_like(owner, head);
            }
            kind if TYPE_START.contains(kind) => {
                let head = MemberHead::new(pending.take(), self.current_span());
                self.parse_typed_member(owner, head);
            }
            _ => {
                let error = self.cursor.unexpected("a member declaration");
                self.recover_member(error);
            }
        }
    }

    /// Discard the member being parsed and skip to the next one.
    fn recover_member(&mut self, error: ParseError) {
        self.recover(RecoveryScope::Member, error, MEMBER_RECOVERY, TYPE_START);
        self.recovery.discard("member");
    }

    /// `{ ... }` or `static { ... }`.
    fn parse_initializer(&mut self, owner: BodyOwner, pending: PendingModifiers) {
        let start = pending.start_or(self.current_span());
        let is_static = pending.modifiers.contains(Modifiers::STATIC);
        let parsed = self.parse_member_body(BodyKind::Initializer);
        let declaration_span = Span::new(start, self.previous_span().end);
        self.push_member(
            owner.id,
            Member::Initializer(Initializer {
                is_static,
                body: parsed.body,
                declaration_span,
            }),
        );
        self.push_hoisted(owner.id, parsed.hoisted);
    }

    /// `Name(` starts a constructor when `Name` is the enclosing type's
    /// name, otherwise a method whose return type is missing.
    fn parse_constructor_like(&mut self, owner: BodyOwner, head: MemberHead) {
        self.check_declared_name();
        let name = self.advance();
        if !owner.name.is_empty() && name.text == owner.name {
            self.parse_method_rest(owner, head, None, name, true);
            return;
        }
        let error = ParseError::new(
            ErrorCode::E1005,
            format!(
                "method `{}` has no return type",
                self.interner().lookup(name.text)
            ),
            name.span,
        )
        .with_context(ErrorContext::MethodHeader.label());
        self.push_error(error);
        let missing = self.arena.alloc_type_ref(TypeRef {
            kind: TypeRefKind::Missing,
            span: Span::point(name.span.start),
        });
        self.parse_method_rest(owner, head, Some(missing), name, false);
    }

    /// A member that starts with a type: method or field(s).
    fn parse_typed_member(&mut self, owner: BodyOwner, head: MemberHead) {
        let ty = match self.parse_type() {
            Ok(ty) => ty,
            Err(error) => {
                self.recover_member(error);
                return;
            }
        };

        if !self.check_ident() {
            if matches!(self.arena.type_ref(ty).kind, TypeRefKind::Assist) {
                // A type being typed on its own line still yields a member.
                let name = Token::new(TokenKind::Ident, Span::point(self.previous_span().end));
                self.finish_fields(owner, head, vec![(name, ty, None)]);
                return;
            }
            let error = ParseError::new(
                ErrorCode::E1004,
                format!(
                    "expected a member name, found {}",
                    self.cursor.describe_current()
                ),
                self.current_span(),
            );
            self.recover_member(error);
            return;
        }

        self.check_declared_name();
        let name = self.advance();
        if self.check(TokenKind::LParen) {
            self.parse_method_rest(owner, head, Some(ty), name, false);
        } else {
            self.parse_fields(owner, head, ty, name);
        }
    }

    /// Everything after a method or constructor name, with the cursor on `(`.
    fn parse_method_rest(
        &mut self,
        owner: BodyOwner,
        head: MemberHead,
        mut return_type: Option<TypeRefId>,
        name: Token,
        is_constructor: bool,
    ) {
        let params = self.parse_params();

        let dims = self.parse_dimensions();
        if let Some(ty) = return_type {
            return_type = Some(self.with_extra_dims(ty, dims));
        }

        let mut throws = Vec::new();
        if self.eat(TokenKind::Throws) {
            match self.parse_type_list() {
                Ok(types) => throws = types,
                Err(error) => self.push_error(error.with_context(ErrorContext::MethodHeader.label())),
            }
        }

        let mut default_value = None;
        if self.eat(TokenKind::Default) {
            default_value = Some(match self.parse_element_value() {
                Ok(value) => value,
                Err(error) => {
                    self.push_error(error);
                    self.alloc_missing(self.previous_span().end)
                }
            });
        }

        let parsed = match self.current_kind() {
            TokenKind::LBrace => {
                let kind = if is_constructor {
                    BodyKind::constructor(owner.kind)
                } else {
                    BodyKind::Method
                };
                self.parse_member_body(kind)
            }
            TokenKind::Semi => {
                self.advance();
                no_body()
            }
            _ => {
                let error = self
                    .cursor
                    .unexpected("`{` or `;`")
                    .with_context(ErrorContext::MethodBody.label());
                if self.at_member_line_start() {
                    self.seal(RecoveryScope::Member, error, "method without body");
                } else {
                    self.recover(RecoveryScope::Member, error, MEMBER_RECOVERY, TYPE_START);
                    self.recovery.seal("method without body");
                }
                no_body()
            }
        };

        let declaration_span = Span::new(head.start, self.previous_span().end);
        self.push_member(
            owner.id,
            Member::Method(MethodDecl {
                modifiers: head.modifiers,
                annotations: head.annotations,
                type_params: head.type_params,
                return_type,
                name: name.text,
                name_span: name.span,
                params,
                throws,
                default_value,
                body: parsed.body,
                constructor_call: parsed.call,
                is_constructor,
                is_default_constructor: false,
                declaration_span,
            }),
        );
        self.push_hoisted(owner.id, parsed.hoisted);
    }

    /// The current token begins a new line and can begin a member, so the
    /// previous member ends here even without its terminator.
    fn at_member_line_start(&self) -> bool {
        let kind = self.current_kind();
        matches!(kind, TokenKind::RBrace | TokenKind::Eof)
            || (self.cursor.has_newline_before()
                && (MEMBER_RECOVERY.contains(kind) || TYPE_START.contains(kind)))
    }

    /// `(params)`, with the cursor on `(`. An unterminated list is closed
    /// with the parameters seen so far.
    fn parse_params(&mut self) -> Vec<Param> {
        self.advance();
        let mut params = Vec::new();
        if self.eat(TokenKind::RParen) {
            return params;
        }
        loop {
            let mut pending = PendingModifiers::new();
            self.parse_modifiers(&mut pending, false);
            let start = pending.start_or(self.current_span());
            let ty = match self.parse_type() {
                Ok(ty) => ty,
                Err(error) => {
                    self.push_error(error.with_context(ErrorContext::ParameterList.label()));
                    break;
                }
            };

            let mut is_varargs = false;
            let mut varargs_annotations = Vec::new();
            let snapshot = self.snapshot();
            let annotations = self.parse_type_annotations();
            if self.eat(TokenKind::Ellipsis) {
                is_varargs = true;
                varargs_annotations = annotations;
            } else {
                self.restore(snapshot);
            }

            self.check_declared_name();
            let name = match self.expect_ident() {
                Ok(name) => name,
                Err(error) => {
                    self.push_error(error.with_context(ErrorContext::ParameterList.label()));
                    Name::EMPTY
                }
            };
            let dims = self.parse_dimensions();
            let ty = self.with_extra_dims(ty, dims);
            params.push(Param {
                modifiers: pending.modifiers,
                annotations: pending.annotations,
                ty,
                is_varargs,
                varargs_annotations,
                name,
                span: Span::new(start, self.previous_span().end),
            });

            if !self.eat(TokenKind::Comma) {
                break;
            }
            if matches!(
                self.current_kind(),
                TokenKind::RParen | TokenKind::LBrace | TokenKind::Semi | TokenKind::Eof
            ) {
                // `m(int a, ` : a parameter was clearly expected.
                let at = Span::point(self.previous_span().end);
                let error = self
                    .cursor
                    .unexpected("a parameter")
                    .with_context(ErrorContext::ParameterList.label());
                self.push_error(error);
                let ty = self.arena.alloc_type_ref(TypeRef {
                    kind: TypeRefKind::Missing,
                    span: at,
                });
                params.push(Param {
                    modifiers: Modifiers::empty(),
                    annotations: Vec::new(),
                    ty,
                    is_varargs: false,
                    varargs_annotations: Vec::new(),
                    name: Name::EMPTY,
                    span: at,
                });
                break;
            }
        }

        if !self.eat(TokenKind::RParen) {
            let error = ParseError::new(
                ErrorCode::E1003,
                "parameter list is not closed",
                self.current_span(),
            )
            .with_context(ErrorContext::ParameterList.label());
            self.seal(RecoveryScope::Member, error, "parameter list");
            self.cursor.splice(TokenKind::RParen);
            self.advance();
        }
        params
    }

    /// One or more field declarators after the first name.
    fn parse_fields(&mut self, owner: BodyOwner, head: MemberHead, ty: TypeRefId, first: Token) {
        let mut declarators = Vec::new();
        let mut name = first;
        let mut truncated = false;
        loop {
            let dims = self.parse_dimensions();
            let field_ty = self.with_extra_dims(ty, dims);
            let mut init = None;
            if self.eat(TokenKind::Eq) {
                if self.check(TokenKind::Error) {
                    truncated = true;
                } else {
                    init = Some(self.parse_field_init());
                }
            }
            declarators.push((name, field_ty, init));
            if truncated || !self.eat(TokenKind::Comma) {
                break;
            }
            self.check_declared_name();
            if !self.check_ident() {
                let error = ParseError::new(
                    ErrorCode::E1004,
                    format!(
                        "expected a field name, found {}",
                        self.cursor.describe_current()
                    ),
                    self.current_span(),
                )
                .with_context(ErrorContext::FieldDecl.label());
                self.push_error(error);
                break;
            }
            name = self.advance();
        }

        if truncated {
            // An unterminated literal ends the declaration here.
            self.finish_fields(owner, head, declarators);
            let error = self
                .cursor
                .unexpected("an initializer")
                .with_context(ErrorContext::FieldDecl.label());
            self.recover_member(error);
            return;
        }

        let terminated = self.eat(TokenKind::Semi);
        self.finish_fields(owner, head, declarators);
        if terminated {
            return;
        }
        let error = self
            .cursor
            .unexpected("`;`")
            .with_context(ErrorContext::FieldDecl.label());
        if self.at_member_line_start() {
            self.seal(RecoveryScope::Member, error, "field");
        } else {
            self.recover_member(error);
        }
    }

    fn parse_field_init(&mut self) -> ExprId {
        match self.parse_variable_initializer() {
            Ok(init) => init,
            Err(error) => {
                let error = ParseError {
                    code: if error.code == ErrorCode::E1008 {
                        ErrorCode::E1008
                    } else {
                        ErrorCode::E1002
                    },
                    ..error
                };
                self.push_error(error.with_context(ErrorContext::FieldDecl.label()));
                self.alloc_missing(self.previous_span().end)
            }
        }
    }

    /// Store one field per declarator, all sharing the declaration span.
    fn finish_fields(
        &mut self,
        owner: BodyOwner,
        head: MemberHead,
        declarators: Vec<(Token, TypeRefId, Option<ExprId>)>,
    ) {
        let declaration_span = Span::new(head.start, self.previous_span().end);
        for (name, ty, init) in declarators {
            self.push_member(
                owner.id,
                Member::Field(FieldDecl {
                    modifiers: head.modifiers,
                    annotations: head.annotations.clone(),
                    ty,
                    name: name.text,
                    name_span: name.span,
                    init,
                    declaration_span,
                }),
            );
        }
    }

    /// Constants at the start of an enum body, up to the `;` or `}`.
    fn parse_enum_constants(&mut self, owner: BodyOwner) {
        while self.at_enum_constant() {
            let mut pending = PendingModifiers::new();
            self.parse_modifiers(&mut pending, false);
            let start = pending.start_or(self.current_span());
            self.check_declared_name();
            let name = self.advance();

            let args = if self.check(TokenKind::LParen) {
                Some(match self.parse_arguments() {
                    Ok(args) => args,
                    Err(error) => {
                        self.push_error(error.with_context(ErrorContext::EnumConstant.label()));
                        self.skip_to_constant_end();
                        Vec::new()
                    }
                })
            } else {
                None
            };
            let body = if self.check(TokenKind::LBrace) {
                Some(self.parse_anonymous_type())
            } else {
                None
            };

            self.push_member(
                owner.id,
                Member::EnumConstant(EnumConstant {
                    annotations: pending.annotations,
                    name: name.text,
                    args,
                    body,
                    declaration_span: Span::new(start, self.previous_span().end),
                }),
            );
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.eat(TokenKind::Semi);
    }

    /// `@A NAME` followed by something only a constant can be followed by.
    fn at_enum_constant(&mut self) -> bool {
        if !(self.check_ident() || self.check(TokenKind::At)) {
            return false;
        }
        self.look_ahead(|p| {
            while p.check(TokenKind::At) {
                if p.parse_annotation().is_none() {
                    return false;
                }
            }
            p.check_ident()
                && matches!(
                    p.peek_next_kind(),
                    TokenKind::LParen
                        | TokenKind::Comma
                        | TokenKind::Semi
                        | TokenKind::LBrace
                        | TokenKind::RBrace
                )
        })
    }

    fn skip_to_constant_end(&mut self) {
        while !matches!(
            self.current_kind(),
            TokenKind::Comma | TokenKind::Semi | TokenKind::RBrace | TokenKind::LBrace | TokenKind::Eof
        ) {
            self.advance();
        }
    }
}

fn no_body() -> ParsedBody {
    ParsedBody {
        body: Body::None,
        call: None,
        hoisted: Vec::new(),
    }
}
