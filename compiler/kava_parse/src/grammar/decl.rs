//! Class, interface, enum and annotation type declarations.

use kava_diagnostic::ErrorCode;
use kava_ir::ast::{
    MethodDecl, Member, Modifiers, TypeDecl, TypeDeclId, TypeDeclKind, TypeParam, TypeRefId,
};
use kava_ir::{Name, Span, TokenKind};
use tracing::debug;

use crate::bodies::BodyKind;
use crate::grammar::PendingModifiers;
use crate::recovery::{TokenSet, TYPE_HEADER_RECOVERY};
use crate::{ErrorContext, ParseError, Parser, RecoveryScope};

/// The type declaration whose body is being parsed.
#[derive(Copy, Clone, Debug)]
pub(crate) struct BodyOwner {
    pub(crate) id: TypeDeclId,
    pub(crate) kind: TypeDeclKind,
    /// Empty for anonymous classes.
    pub(crate) name: Name,
}

/// `extends` / `implements` clauses and type parameters.
#[derive(Default)]
struct TypeHeader {
    type_params: Vec<TypeParam>,
    superclass: Option<TypeRefId>,
    superinterfaces: Vec<TypeRefId>,
}

impl Parser<'_> {
    /// Parse a type declaration with the cursor on its keyword (or on the
    /// `@` of `@interface`). `pending` holds the modifiers and annotations
    /// read before it.
    pub(crate) fn parse_type_decl(&mut self, pending: PendingModifiers, is_local: bool) -> TypeDeclId {
        let keyword_span = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Class => TypeDeclKind::Class,
            TokenKind::Interface => TypeDeclKind::Interface,
            TokenKind::Enum => TypeDeclKind::Enum,
            _ => {
                self.advance();
                TypeDeclKind::Annotation
            }
        };
        self.advance();
        let start = pending.start_or(keyword_span);

        self.check_declared_name();
        let (name, name_span) = if self.check_ident() {
            let token = self.advance();
            (token.text, token.span)
        } else {
            let error = ParseError::new(
                ErrorCode::E1004,
                format!("expected a type name, found {}", self.cursor.describe_current()),
                self.current_span(),
            );
            self.push_error(error.with_context(ErrorContext::TypeHeader.label()));
            (Name::EMPTY, Span::point(self.previous_span().end))
        };

        let id = self.arena.alloc_type_decl(TypeDecl {
            kind,
            modifiers: pending.modifiers,
            annotations: pending.annotations,
            name,
            name_span,
            type_params: Vec::new(),
            superclass: None,
            superinterfaces: Vec::new(),
            members: Vec::new(),
            is_local,
            is_anonymous: false,
            declaration_span: Span::new(start, name_span.end),
            body_span: Span::point(name_span.end),
        });
        debug!(
            name = self.interner().lookup(name),
            ?kind,
            is_local,
            "type declaration"
        );

        let header = self.parse_type_header(kind);
        {
            let decl = self.arena.type_decl_mut(id);
            decl.type_params = header.type_params;
            decl.superclass = header.superclass;
            decl.superinterfaces = header.superinterfaces;
        }

        let owner = BodyOwner { id, kind, name };
        let (body_span, open_index) = self.parse_type_body_or_recover(owner);
        if matches!(kind, TypeDeclKind::Class | TypeDeclKind::Enum) {
            self.add_default_constructor(owner, open_index);
        }

        let end = self.previous_span().end.max(name_span.end);
        let decl = self.arena.type_decl_mut(id);
        decl.body_span = body_span;
        decl.declaration_span = Span::new(start, end);
        id
    }

    /// Type parameters, `extends` and `implements`.
    ///
    /// A clause that cannot be parsed is dropped and the header skipped to
    /// the next clause or the body, so `class X extends {` becomes `class X`.
    fn parse_type_header(&mut self, kind: TypeDeclKind) -> TypeHeader {
        let mut header = TypeHeader::default();
        loop {
            let result = self.in_error_context(ErrorContext::TypeHeader, |p| {
                if p.check(TokenKind::Lt) {
                    header.type_params = p.parse_type_params()?;
                }
                if p.eat(TokenKind::Extends) {
                    if kind == TypeDeclKind::Interface {
                        header.superinterfaces = p.parse_type_list()?;
                    } else {
                        header.superclass = Some(p.parse_type()?);
                    }
                }
                if p.eat(TokenKind::Implements) {
                    header.superinterfaces = p.parse_type_list()?;
                }
                Ok(())
            });
            let Err(error) = result else {
                return header;
            };
            let error = ParseError {
                code: ErrorCode::E1006,
                ..error
            };
            let found = self.recover(
                RecoveryScope::TypeDecl,
                error,
                TYPE_HEADER_RECOVERY,
                TokenSet::new(),
            );
            self.recovery.discard("type header clause");
            if !found || !matches!(self.current_kind(), TokenKind::Extends | TokenKind::Implements) {
                return header;
            }
        }
    }

    /// Parse the `{ ... }` body, skipping junk before it if needed. A type
    /// with no body at all is closed right after its header.
    ///
    /// Also returns the token index of the `{`, or of where it was expected.
    fn parse_type_body_or_recover(&mut self, owner: BodyOwner) -> (Span, u32) {
        if !self.check(TokenKind::LBrace) {
            let error = self
                .cursor
                .unexpected("`{`")
                .with_context(ErrorContext::TypeBody.label());
            let found = self.recover(
                RecoveryScope::TypeDecl,
                error,
                TYPE_HEADER_RECOVERY,
                TokenSet::new(),
            );
            if !found || !self.check(TokenKind::LBrace) {
                self.recovery.seal("type declaration without body");
                return (
                    Span::point(self.previous_span().end),
                    self.cursor.token_index(),
                );
            }
            self.recovery.seal("type header");
        }
        let open_index = self.cursor.token_index();
        (self.parse_type_body(owner), open_index)
    }

    /// Anonymous class body after `new T(...)` or an enum constant, with
    /// the cursor on `{`.
    pub(crate) fn parse_anonymous_type(&mut self) -> TypeDeclId {
        let open = self.current_span();
        let id = self.arena.alloc_type_decl(TypeDecl {
            kind: TypeDeclKind::Class,
            modifiers: Modifiers::empty(),
            annotations: Vec::new(),
            name: Name::EMPTY,
            name_span: Span::point(open.start),
            type_params: Vec::new(),
            superclass: None,
            superinterfaces: Vec::new(),
            members: Vec::new(),
            is_local: false,
            is_anonymous: true,
            declaration_span: open,
            body_span: open,
        });
        let body_span = self.parse_type_body(BodyOwner {
            id,
            kind: TypeDeclKind::Class,
            name: Name::EMPTY,
        });
        let decl = self.arena.type_decl_mut(id);
        decl.body_span = body_span;
        decl.declaration_span = body_span;
        id
    }

    /// Synthesize the constructor of a class or enum that declares none.
    ///
    /// It takes the class's access modifier (enums get `private`), sits
    /// first in the member list, and points at the type name.
    fn add_default_constructor(&mut self, owner: BodyOwner, open_index: u32) {
        let decl = self.arena.type_decl(owner.id);
        if decl.is_anonymous || decl.has_explicit_constructor() {
            return;
        }
        let modifiers = if owner.kind == TypeDeclKind::Enum {
            Modifiers::PRIVATE
        } else {
            decl.modifiers.access()
        };
        let name_span = decl.name_span;
        let parsed = self.default_constructor_body(open_index, BodyKind::constructor(owner.kind));
        let constructor = MethodDecl {
            modifiers,
            annotations: Vec::new(),
            type_params: Vec::new(),
            return_type: None,
            name: owner.name,
            name_span,
            params: Vec::new(),
            throws: Vec::new(),
            default_value: None,
            body: parsed.body,
            constructor_call: parsed.call,
            is_constructor: true,
            is_default_constructor: true,
            declaration_span: name_span,
        };
        self.arena
            .type_decl_mut(owner.id)
            .members
            .insert(0, Member::Method(constructor));
    }
}
