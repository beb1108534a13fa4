//! Types, type arguments and type parameters.
//!
//! Type-use annotations are attached where they are written: before a
//! primitive, on a segment of a dotted class type, on a wildcard, or on an
//! array dimension. Their locations are computed from that structure later.

use kava_diagnostic::ErrorCode;
use kava_ir::ast::{
    AnnotationId, AssistKind, BoundKind, Dimension, PrimitiveType, TypeParam, TypeRef, TypeRefId,
    TypeRefKind, TypeSegment, WildcardBound,
};
use kava_ir::{Span, TokenKind};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse a complete type, array dimensions included.
    pub(crate) fn parse_type(&mut self) -> Result<TypeRefId, ParseError> {
        self.in_error_context(ErrorContext::TypeRef, |p| {
            let annotations = p.parse_type_annotations();
            let base = p.parse_non_array_type(annotations)?;
            Ok(p.parse_dims(base))
        })
    }

    /// Annotations written in a type-use position. An annotation whose name
    /// is the assist point is left out of the tree.
    pub(crate) fn parse_type_annotations(&mut self) -> Vec<AnnotationId> {
        let mut annotations = Vec::new();
        while self.check(TokenKind::At) && self.peek_next_kind() != TokenKind::Interface {
            if let Some(id) = self.parse_annotation() {
                if !self.arena.annotation(id).is_assist {
                    annotations.push(id);
                }
            }
        }
        annotations
    }

    /// A primitive or class type without trailing dimensions.
    pub(crate) fn parse_non_array_type(
        &mut self,
        annotations: Vec<AnnotationId>,
    ) -> Result<TypeRefId, ParseError> {
        let start = self.annotations_start(&annotations, self.current_span());
        if let Some(keyword) = PrimitiveType::from_token(self.current_kind()) {
            let token = self.advance();
            return Ok(self.arena.alloc_type_ref(TypeRef {
                kind: TypeRefKind::Primitive {
                    keyword,
                    annotations,
                },
                span: Span::new(start, token.span.end),
            }));
        }
        if self.check_ident() {
            return Ok(self.parse_class_type(annotations, start));
        }
        Err(self.expected_type())
    }

    fn expected_type(&self) -> ParseError {
        if self.check(TokenKind::Error) {
            return self.cursor.unexpected("a type");
        }
        ParseError::new(
            ErrorCode::E1005,
            format!("expected a type, found {}", self.cursor.describe_current()),
            self.current_span(),
        )
    }

    /// `a.b.@A C<D>.E`, with the cursor on the first identifier.
    fn parse_class_type(&mut self, first: Vec<AnnotationId>, start: u32) -> TypeRefId {
        let mut segments: Vec<TypeSegment> = Vec::new();
        let mut annotations = first;
        loop {
            if self.at_assist_ident() {
                let qualifier = segments.iter().map(|segment| segment.name).collect();
                self.claim_assist(AssistKind::Type, qualifier);
                if self.check(TokenKind::Lt) {
                    self.skip_type_args();
                }
                return self.alloc_assist_type(start);
            }
            let segment_start = self.annotations_start(&annotations, self.current_span());
            let name = self.advance().text;
            let type_args = if self.check(TokenKind::Lt) {
                match self.parse_type_args() {
                    Ok(args) => Some(args),
                    Err(error) => {
                        self.push_error(error);
                        Some(Vec::new())
                    }
                }
            } else {
                None
            };
            segments.push(TypeSegment {
                annotations,
                name,
                type_args,
                span: Span::new(segment_start, self.previous_span().end),
            });

            if !self.check(TokenKind::Dot) {
                break;
            }
            match self.peek_next_kind() {
                TokenKind::Ident => {
                    self.advance();
                    annotations = Vec::new();
                }
                TokenKind::At => {
                    self.advance();
                    annotations = self.parse_type_annotations();
                    if !self.check_ident() {
                        let error = ParseError::new(
                            ErrorCode::E1004,
                            "expected a type name after its annotations",
                            self.current_span(),
                        );
                        self.push_error(error);
                        break;
                    }
                }
                _ if self.assist.is_at(self.current_span().end) => {
                    self.advance();
                    let qualifier = segments.iter().map(|segment| segment.name).collect();
                    self.claim_empty_assist(AssistKind::Type, qualifier);
                    return self.alloc_assist_type(start);
                }
                _ => break,
            }
        }
        self.arena.alloc_type_ref(TypeRef {
            kind: TypeRefKind::Named(segments),
            span: Span::new(start, self.previous_span().end),
        })
    }

    fn alloc_assist_type(&mut self, start: u32) -> TypeRefId {
        self.arena.alloc_type_ref(TypeRef {
            kind: TypeRefKind::Assist,
            span: Span::new(start, self.previous_span().end),
        })
    }

    /// `<A, ? extends B>` or the diamond `<>`, with the cursor on `<`.
    /// Each closing `>` is its own token, so nested lists close one at a time.
    pub(crate) fn parse_type_args(&mut self) -> Result<Vec<TypeRefId>, ParseError> {
        self.in_error_context(ErrorContext::TypeArgs, |p| {
            p.advance();
            let mut args = Vec::new();
            if p.eat(TokenKind::Gt) {
                return Ok(args);
            }
            loop {
                args.push(p.parse_type_arg()?);
                if !p.eat(TokenKind::Comma) {
                    break;
                }
            }
            p.expect(TokenKind::Gt)?;
            Ok(args)
        })
    }

    fn parse_type_arg(&mut self) -> Result<TypeRefId, ParseError> {
        let annotations = self.parse_type_annotations();
        if !self.check(TokenKind::Question) {
            let base = self.parse_non_array_type(annotations)?;
            return Ok(self.parse_dims(base));
        }
        let start = self.annotations_start(&annotations, self.current_span());
        self.advance();
        let bound = match self.current_kind() {
            TokenKind::Extends | TokenKind::Super => {
                let kind = if self.advance().kind == TokenKind::Extends {
                    BoundKind::Extends
                } else {
                    BoundKind::Super
                };
                Some(WildcardBound {
                    kind,
                    ty: self.parse_type()?,
                })
            }
            _ => None,
        };
        Ok(self.arena.alloc_type_ref(TypeRef {
            kind: TypeRefKind::Wildcard { annotations, bound },
            span: Span::new(start, self.previous_span().end),
        }))
    }

    /// Skip a type argument list that follows an assist point.
    fn skip_type_args(&mut self) {
        let mut depth = 0usize;
        loop {
            match self.current_kind() {
                TokenKind::Lt => depth += 1,
                TokenKind::Gt => {
                    depth -= 1;
                    if depth == 0 {
                        self.advance();
                        return;
                    }
                }
                TokenKind::Ident
                | TokenKind::Comma
                | TokenKind::Dot
                | TokenKind::Question
                | TokenKind::Extends
                | TokenKind::Super
                | TokenKind::LBracket
                | TokenKind::RBracket
                | TokenKind::Amp => {}
                k if k.is_primitive() => {}
                _ => return,
            }
            self.advance();
        }
    }

    /// Wrap `element` in the `[]` pairs that follow, if any.
    pub(crate) fn parse_dims(&mut self, element: TypeRefId) -> TypeRefId {
        let dims = self.parse_dimensions();
        self.with_extra_dims(element, dims)
    }

    /// `@A [] []`: dimensions, each with the annotations written before it.
    /// Annotations not followed by `[]` are left unconsumed.
    pub(crate) fn parse_dimensions(&mut self) -> Vec<Dimension> {
        let mut dims = Vec::new();
        loop {
            let snapshot = self.snapshot();
            let annotations = self.parse_type_annotations();
            if !(self.check(TokenKind::LBracket) && self.peek_next_kind() == TokenKind::RBracket) {
                self.restore(snapshot);
                return dims;
            }
            let open = self.advance();
            let close = self.advance();
            let start = self.annotations_start(&annotations, open.span);
            dims.push(Dimension {
                annotations,
                span: Span::new(start, close.span.end),
            });
        }
    }

    /// Add dimensions in front of those `ty` already has.
    ///
    /// Dimensions written after a declarator name (`String[] s[]`) are the
    /// outer ones, so they go first.
    pub(crate) fn with_extra_dims(&mut self, ty: TypeRefId, extra: Vec<Dimension>) -> TypeRefId {
        let Some(last) = extra.last() else {
            return ty;
        };
        let end = last.span.end;
        let current = self.arena.type_ref(ty);
        let span = current.span.extend_to(end.max(current.span.end));
        let (element, dims) = match &current.kind {
            TypeRefKind::Array { element, dims } => {
                let mut all = extra;
                all.extend(dims.iter().cloned());
                (*element, all)
            }
            _ => (ty, extra),
        };
        self.arena.alloc_type_ref(TypeRef {
            kind: TypeRefKind::Array { element, dims },
            span,
        })
    }

    /// `<T extends A & B, U>`, with the cursor on `<`.
    pub(crate) fn parse_type_params(&mut self) -> Result<Vec<TypeParam>, ParseError> {
        self.in_error_context(ErrorContext::TypeParams, |p| {
            p.advance();
            let mut params = Vec::new();
            loop {
                let annotations = p.parse_type_annotations();
                let start = p.annotations_start(&annotations, p.current_span());
                p.check_declared_name();
                let name = p.expect_ident()?;
                let mut bounds = Vec::new();
                if p.eat(TokenKind::Extends) {
                    bounds.push(p.parse_type()?);
                    while p.eat(TokenKind::Amp) {
                        bounds.push(p.parse_type()?);
                    }
                }
                params.push(TypeParam {
                    annotations,
                    name,
                    bounds,
                    span: Span::new(start, p.previous_span().end),
                });
                if !p.eat(TokenKind::Comma) {
                    break;
                }
            }
            p.expect(TokenKind::Gt)?;
            Ok(params)
        })
    }

    /// Comma-separated types after `extends`, `implements` or `throws`.
    pub(crate) fn parse_type_list(&mut self) -> Result<Vec<TypeRefId>, ParseError> {
        let mut types = vec![self.parse_type()?];
        while self.eat(TokenKind::Comma) {
            types.push(self.parse_type()?);
        }
        Ok(types)
    }

    /// Start offset of the first annotation, or of `fallback`.
    pub(crate) fn annotations_start(&self, annotations: &[AnnotationId], fallback: Span) -> u32 {
        annotations
            .first()
            .map_or(fallback.start, |&id| self.arena.annotation(id).span.start)
    }
}
