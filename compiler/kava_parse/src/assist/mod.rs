//! Completion placeholders.
//!
//! In assist mode the parser watches for the identifier token whose span
//! touches the caret. The first production that would consume it builds an
//! [`AssistNode`] instead, leaves a placeholder in the tree, and stops
//! elaborating that identifier. At most one node is created per parse.
//!
//! Once parsing is done, [`resolve_parent`] looks for the smallest complete
//! node around the caret and records it as the node's parent.

use kava_diagnostic::ErrorCode;
use kava_ir::ast::{
    Annotation, AnnotationId, AssistKind, AssistNode, AssistParent, AstArena, CompilationUnit,
    Member, Stmt, StmtId, StmtKind, TypeDecl, TypeDeclId,
};
use kava_ir::visitor::{walk_annotation, walk_member, walk_stmt, walk_type_decl, Visitor};
use kava_ir::{Name, Span};
use tracing::debug;

use crate::{ParseError, Parser};

/// Caret bookkeeping for one parse.
#[derive(Debug)]
pub(crate) struct AssistState {
    caret: Option<u32>,
    node: Option<AssistNode>,
    /// Set once the caret has been dealt with, by a node or by a note.
    resolved: bool,
}

impl AssistState {
    pub(crate) fn new(caret: Option<u32>) -> Self {
        AssistState {
            caret,
            node: None,
            resolved: false,
        }
    }

    pub(crate) fn caret(&self) -> Option<u32> {
        self.caret
    }

    pub(crate) fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// The caret is still unclaimed and touches `span`.
    pub(crate) fn covers(&self, span: Span) -> bool {
        !self.resolved && self.caret.is_some_and(|caret| span.touches(caret))
    }

    /// The caret is still unclaimed and sits exactly at `offset`.
    pub(crate) fn is_at(&self, offset: u32) -> bool {
        !self.resolved && self.caret == Some(offset)
    }

    /// Drop whatever a speculative parse claimed.
    pub(crate) fn forget(&mut self) {
        self.node = None;
        self.resolved = false;
    }

    pub(crate) fn take_node(&mut self) -> Option<AssistNode> {
        self.node.take()
    }
}

impl Parser<'_> {
    /// The current token is an identifier under the caret.
    pub(crate) fn at_assist_ident(&self) -> bool {
        self.check_ident() && self.assist.covers(self.current_span())
    }

    /// The caret sits right after the last consumed token, e.g. after `.`.
    pub(crate) fn assist_after_previous(&self) -> bool {
        self.assist.is_at(self.previous_span().end) && !self.at_assist_ident()
    }

    /// Consume the identifier under the caret and record the assist node.
    ///
    /// Returns the span of the consumed identifier.
    pub(crate) fn claim_assist(&mut self, kind: AssistKind, qualifier: Vec<Name>) -> Span {
        let token = self.advance();
        let text = self.interner().lookup(token.text);
        let caret = self.assist.caret().unwrap_or(token.span.end);
        let typed = usize::try_from(caret.saturating_sub(token.span.start)).unwrap_or(usize::MAX);
        let identifier = self.interner().intern(text.get(..typed).unwrap_or(text));
        self.record_assist(kind, identifier, qualifier, token.span);
        token.span
    }

    /// Record an assist node with an empty identifier at the caret.
    pub(crate) fn claim_empty_assist(&mut self, kind: AssistKind, qualifier: Vec<Name>) -> Span {
        let at = Span::point(self.assist.caret().unwrap_or(self.previous_span().end));
        self.record_assist(kind, Name::EMPTY, qualifier, at);
        at
    }

    fn record_assist(&mut self, kind: AssistKind, identifier: Name, qualifier: Vec<Name>, span: Span) {
        let caret = self.assist.caret().unwrap_or(span.end);
        debug!(
            ?kind,
            identifier = self.interner().lookup(identifier),
            caret,
            "assist node created"
        );
        self.assist.node = Some(AssistNode {
            kind,
            identifier,
            qualifier,
            span,
            caret,
            parent: AssistParent::Unit,
            parent_span: Span::DUMMY,
        });
        self.assist.resolved = true;
    }

    /// The identifier about to be consumed declares a name. Completing it
    /// is meaningless, so the caret is claimed with a note and no node.
    pub(crate) fn check_declared_name(&mut self) {
        if !self.at_assist_ident() {
            return;
        }
        let span = self.current_span();
        debug!(start = span.start, "caret on a declared name");
        self.assist.resolved = true;
        self.push_error(ParseError::new(
            ErrorCode::E1012,
            "nothing to complete on a declared name",
            span,
        ));
    }
}

/// Fill in `node.parent` with the smallest complete node touching the caret.
pub(crate) fn resolve_parent(unit: &CompilationUnit, arena: &AstArena, node: &mut AssistNode) {
    let mut finder = ParentFinder {
        caret: node.caret,
        best: (AssistParent::Unit, unit.span),
    };
    finder.visit_unit(unit, arena);
    node.parent = finder.best.0;
    node.parent_span = finder.best.1;
}

struct ParentFinder {
    caret: u32,
    best: (AssistParent, Span),
}

impl ParentFinder {
    fn offer(&mut self, parent: AssistParent, span: Span) {
        // Ties go to the node visited later, which is the inner one.
        if span.touches(self.caret) && span.len() <= self.best.1.len() {
            self.best = (parent, span);
        }
    }
}

impl<'ast> Visitor<'ast> for ParentFinder {
    fn visit_type_decl(&mut self, id: TypeDeclId, decl: &'ast TypeDecl, arena: &'ast AstArena) {
        self.offer(AssistParent::TypeDecl(id), decl.declaration_span);
        walk_type_decl(self, id, decl, arena);
    }

    fn visit_member(
        &mut self,
        owner: TypeDeclId,
        index: usize,
        member: &'ast Member,
        arena: &'ast AstArena,
    ) {
        match member {
            Member::Type(_) | Member::Dangling(_) => {}
            Member::Method(method) if method.is_default_constructor => {}
            _ => self.offer(
                AssistParent::Member {
                    type_decl: owner,
                    index,
                },
                member.declaration_span(arena),
            ),
        }
        walk_member(self, member, arena);
    }

    fn visit_stmt(&mut self, id: StmtId, stmt: &'ast Stmt, arena: &'ast AstArena) {
        if !matches!(&stmt.kind, StmtKind::ConstructorCall(call) if call.implicit) {
            self.offer(AssistParent::Statement(id), stmt.span);
        }
        walk_stmt(self, id, stmt, arena);
    }

    fn visit_annotation(
        &mut self,
        id: AnnotationId,
        annotation: &'ast Annotation,
        arena: &'ast AstArena,
    ) {
        if !annotation.is_assist {
            self.offer(AssistParent::Annotation(id), annotation.span);
        }
        walk_annotation(self, id, annotation, arena);
    }
}

#[cfg(test)]
mod tests;
