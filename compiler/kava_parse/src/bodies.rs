//! Deferred body parsing.
//!
//! A structure-only parse skips every method, constructor and initializer
//! body by brace matching and remembers its token range. The same range is
//! parsed later, either right away (full depth, the body under the caret,
//! or anything nested inside another body) or on request through
//! [`crate::parse_body`]. Both routes go through [`Parser::parse_body_range`],
//! so an eager and a deferred parse of the same body build the same tree.
//!
//! A body whose braces never close is parsed as soon as it is skipped, at
//! every depth, and dropped. Local type declarations found at its top level
//! are kept as member types of the enclosing type, so structure-only and
//! deferred parses see the same members.

use kava_diagnostic::ErrorCode;
use kava_ir::ast::{
    AstArena, Block, Body, CallKind, CompilationUnit, ConstructorCall, Member, Stmt, StmtId,
    StmtKind, TypeDeclId, TypeDeclKind,
};
use kava_ir::visitor::{walk_member, Visitor};
use kava_ir::{Span, TokenKind, TokenRange};
use tracing::debug;

use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::recovery::TYPE_START;
use crate::{ParseError, Parser};

/// Handle to one member body of one type declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BodyRef {
    pub type_decl: TypeDeclId,
    /// Index into the type's member list.
    pub member: usize,
}

/// What kind of member a body belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum BodyKind {
    Method,
    /// Enum constructors get no implicit `super()`.
    Constructor { implicit_super: bool },
    Initializer,
}

impl BodyKind {
    pub(crate) fn constructor(owner: TypeDeclKind) -> Self {
        BodyKind::Constructor {
            implicit_super: owner != TypeDeclKind::Enum,
        }
    }
}

/// Tokens of a body skipped by brace matching.
#[derive(Copy, Clone, Debug)]
pub(crate) struct SkippedBody {
    pub(crate) range: TokenRange,
    /// From `{` to the last skipped token.
    pub(crate) span: Span,
    pub(crate) closed: bool,
}

/// A body ready to be stored in its member.
#[derive(Debug)]
pub(crate) struct ParsedBody {
    pub(crate) body: Body,
    pub(crate) call: Option<StmtId>,
    /// Local types rescued from a dropped body.
    pub(crate) hoisted: Vec<TypeDeclId>,
}

impl ParsedBody {
    fn unparsed(range: TokenRange) -> Self {
        ParsedBody {
            body: Body::Unparsed(range),
            call: None,
            hoisted: Vec::new(),
        }
    }
}

impl Parser<'_> {
    /// Skip a `{ ... }` body by counting braces.
    ///
    /// A line inside the body that can only be a member header ends the
    /// body there, unclosed. So does the end of input.
    pub(crate) fn skip_body(&mut self) -> SkippedBody {
        let start = self.cursor.token_index();
        let open = self.current_span();
        let mut depth = 0usize;
        let mut closed = false;
        loop {
            match self.current_kind() {
                TokenKind::Eof => break,
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        self.advance();
                        closed = true;
                        break;
                    }
                }
                _ if depth == 1 && self.at_member_header() => break,
                _ => {}
            }
            self.advance();
        }
        let end = self.cursor.token_index();
        SkippedBody {
            range: TokenRange::new(start, end),
            span: open.merge(self.previous_span()),
            closed,
        }
    }

    /// The current token starts a line that no statement can start:
    /// an access modifier, `void`, or `Type name (`.
    fn at_member_header(&mut self) -> bool {
        match self.current_kind() {
            TokenKind::Public | TokenKind::Private | TokenKind::Protected => true,
            _ if !self.cursor.has_newline_before() => false,
            TokenKind::Void => true,
            kind if TYPE_START.contains(kind) => self.look_ahead(|p| {
                p.parse_type().is_ok()
                    && p.check_ident()
                    && p.peek_next_kind() == TokenKind::LParen
            }),
            _ => false,
        }
    }

    /// Skip the body at `{`, then parse it now if this parse wants it.
    ///
    /// A body that never closes is always parsed right away, so the local
    /// types it gives up land in the skeleton at every depth.
    pub(crate) fn parse_member_body(&mut self, kind: BodyKind) -> ParsedBody {
        let skipped = self.skip_body();
        if !skipped.closed {
            self.parse_body_tokens(skipped.range, kind, true)
        } else if self.parses_bodies_eagerly() || self.caret_inside(&skipped) {
            self.parse_body_range(skipped.range, kind)
        } else {
            ParsedBody::unparsed(skipped.range)
        }
    }

    /// Body of a synthesized default constructor.
    pub(crate) fn default_constructor_body(&mut self, at: u32, kind: BodyKind) -> ParsedBody {
        let range = TokenRange::new(at, at);
        if self.parses_bodies_eagerly() {
            self.parse_body_range(range, kind)
        } else {
            ParsedBody::unparsed(range)
        }
    }

    fn caret_inside(&self, skipped: &SkippedBody) -> bool {
        if self.assist.is_resolved() {
            return false;
        }
        self.assist.caret().is_some_and(|caret| {
            caret > skipped.span.start
                && (caret < skipped.span.end || (!skipped.closed && caret == skipped.span.end))
        })
    }

    /// Parse the tokens of a body that brace matching closed. An empty range
    /// is the body of a synthesized default constructor.
    pub(crate) fn parse_body_range(&mut self, range: TokenRange, kind: BodyKind) -> ParsedBody {
        self.parse_body_tokens(range, kind, false)
    }

    /// With `salvage`, local types at the top level of a dropped body are
    /// handed back for hoisting.
    fn parse_body_tokens(
        &mut self,
        range: TokenRange,
        kind: BodyKind,
        salvage: bool,
    ) -> ParsedBody {
        if range.is_empty() {
            let at = self
                .cursor
                .tokens()
                .get(range.start as usize)
                .map_or(0, |t| t.span.end);
            return ParsedBody {
                body: Body::Parsed(Block {
                    stmts: Vec::new(),
                    span: Span::point(at),
                }),
                call: self.implicit_call(kind, at),
                hoisted: Vec::new(),
            };
        }

        let cursor = Cursor::bounded(self.cursor.tokens(), self.interner(), range);
        let (mut block, closed) = self.with_cursor(cursor, |p| {
            p.with_context(ParseContext::IN_BODY, |p| p.parse_body_block())
        });

        if !closed {
            self.push_error(ParseError::new(
                ErrorCode::E1007,
                "body is not closed; its statements are dropped",
                block.span,
            ));
            let hoisted = if salvage {
                self.hoist_local_types(&block)
            } else {
                Vec::new()
            };
            debug!(hoisted = hoisted.len(), "body dropped");
            return ParsedBody {
                body: Body::Dropped,
                call: None,
                hoisted,
            };
        }

        let mut call = None;
        if let BodyKind::Constructor { .. } = kind {
            let explicit = block.stmts.first().copied().filter(|&first| {
                matches!(self.arena.stmt(first).kind, StmtKind::ConstructorCall(_))
            });
            call = match explicit {
                Some(first) => {
                    block.stmts.remove(0);
                    Some(first)
                }
                None => self.implicit_call(kind, block.span.start + 1),
            };
        }
        ParsedBody {
            body: Body::Parsed(block),
            call,
            hoisted: Vec::new(),
        }
    }

    fn implicit_call(&mut self, kind: BodyKind, at: u32) -> Option<StmtId> {
        let BodyKind::Constructor {
            implicit_super: true,
        } = kind
        else {
            return None;
        };
        Some(self.arena.alloc_stmt(Stmt {
            kind: StmtKind::ConstructorCall(ConstructorCall {
                kind: CallKind::Super,
                qualifier: None,
                args: Vec::new(),
                implicit: true,
            }),
            span: Span::point(at),
        }))
    }

    fn hoist_local_types(&mut self, block: &Block) -> Vec<TypeDeclId> {
        let mut hoisted = Vec::new();
        for &stmt in &block.stmts {
            if let StmtKind::LocalType(id) = self.arena.stmt(stmt).kind {
                self.arena.type_decl_mut(id).is_local = false;
                hoisted.push(id);
            }
        }
        hoisted
    }
}

/// Locate an unparsed body and the kind of member it belongs to.
pub(crate) fn pending_body(arena: &AstArena, body: BodyRef) -> Option<(TokenRange, BodyKind)> {
    if body.type_decl.index() >= arena.type_decl_count() {
        return None;
    }
    let decl = arena.type_decl(body.type_decl);
    match decl.members.get(body.member)? {
        Member::Method(method) => match method.body {
            Body::Unparsed(range) if method.is_constructor => {
                Some((range, BodyKind::constructor(decl.kind)))
            }
            Body::Unparsed(range) => Some((range, BodyKind::Method)),
            _ => None,
        },
        Member::Initializer(init) => match init.body {
            Body::Unparsed(range) => Some((range, BodyKind::Initializer)),
            _ => None,
        },
        _ => None,
    }
}

/// Store a parsed body into the member named by `body`.
///
/// Hoisted types go to the end of the member list, so every other
/// outstanding [`BodyRef`] of the type keeps naming the same member.
pub(crate) fn install(arena: &mut AstArena, body: BodyRef, parsed: ParsedBody) {
    let decl = arena.type_decl_mut(body.type_decl);
    match decl.members.get_mut(body.member) {
        Some(Member::Method(method)) => {
            method.body = parsed.body;
            method.constructor_call = parsed.call;
        }
        Some(Member::Initializer(init)) => init.body = parsed.body,
        _ => return,
    }
    decl.members.extend(parsed.hoisted.into_iter().map(Member::Type));
}

/// Every unparsed body reachable from `unit`, ordered by source position.
pub(crate) fn collect_unparsed(unit: &CompilationUnit, arena: &AstArena) -> Vec<BodyRef> {
    let mut collector = UnparsedBodies { found: Vec::new() };
    collector.visit_unit(unit, arena);
    collector.found.sort_by_key(|(start, _)| *start);
    collector.found.into_iter().map(|(_, body)| body).collect()
}

struct UnparsedBodies {
    found: Vec<(u32, BodyRef)>,
}

impl<'ast> Visitor<'ast> for UnparsedBodies {
    fn visit_member(
        &mut self,
        owner: TypeDeclId,
        index: usize,
        member: &'ast Member,
        arena: &'ast AstArena,
    ) {
        if let Some(Body::Unparsed(range)) = member.body() {
            self.found.push((
                range.start,
                BodyRef {
                    type_decl: owner,
                    member: index,
                },
            ));
        }
        walk_member(self, member, arena);
    }
}

#[cfg(test)]
mod tests;
