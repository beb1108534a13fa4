//! Compilation unit, package and import declarations.

use kava_diagnostic::ErrorCode;
use kava_ir::ast::{AssistKind, CompilationUnit, ImportDecl, PackageDecl};
use kava_ir::{Name, Span, TokenKind};
use tracing::trace;

use crate::grammar::PendingModifiers;
use crate::recovery::{TokenSet, UNIT_RECOVERY};
use crate::{ErrorContext, ParseError, Parser, RecoveryScope};

/// A dotted name after `package` or `import`.
struct DeclaredPath {
    names: Vec<Name>,
    is_assist: bool,
    on_demand: bool,
}

impl Parser<'_> {
    /// Parse the whole input. Never fails: garbage between declarations is
    /// skipped, and leftover modifiers become the unit's trailing placeholder.
    pub(crate) fn parse_compilation_unit(&mut self) -> CompilationUnit {
        let mut unit = CompilationUnit {
            span: Span::new(0, self.source_len()),
            ..CompilationUnit::default()
        };
        let mut pending = PendingModifiers::new();

        loop {
            self.parse_modifiers(&mut pending, false);
            let before = self.position();
            match self.current_kind() {
                TokenKind::Eof => break,
                TokenKind::Semi => {
                    self.advance();
                }
                TokenKind::Package => {
                    let taken = pending.take();
                    let package = self.parse_package(taken);
                    if unit.package.is_some() || !unit.imports.is_empty() || !unit.types.is_empty() {
                        self.push_error(ParseError::new(
                            ErrorCode::E1001,
                            "package declaration must come first",
                            package.span,
                        ));
                    }
                    if unit.package.is_none() {
                        unit.package = Some(package);
                    }
                }
                TokenKind::Import => {
                    if !pending.is_empty() {
                        self.report_dangling(&pending);
                        pending.take();
                    }
                    let import = self.parse_import();
                    unit.imports.push(import);
                }
                TokenKind::Class | TokenKind::Interface | TokenKind::Enum => {
                    let id = self.parse_type_decl(pending.take(), false);
                    unit.types.push(id);
                }
                TokenKind::At if self.peek_next_kind() == TokenKind::Interface => {
                    let id = self.parse_type_decl(pending.take(), false);
                    unit.types.push(id);
                }
                _ => {
                    let error = self.cursor.unexpected("a type declaration");
                    self.recover(RecoveryScope::Unit, error, UNIT_RECOVERY, TokenSet::new());
                    self.recovery.discard("unit-level tokens");
                    self.force_progress(before);
                }
            }
        }

        if !pending.is_empty() {
            self.report_dangling(&pending);
            unit.trailing = Some(pending.into_dangling());
        }
        trace!(types = unit.types.len(), imports = unit.imports.len(), "unit parsed");
        unit
    }

    fn parse_package(&mut self, taken: PendingModifiers) -> PackageDecl {
        let keyword = self.advance();
        if !taken.modifiers.is_empty() {
            self.push_error(ParseError::new(
                ErrorCode::E1001,
                "modifiers are not allowed on a package declaration",
                Span::new(taken.start_or(keyword.span), keyword.span.start),
            ));
        }
        let start = taken
            .annotations
            .first()
            .map_or(keyword.span.start, |&id| self.arena.annotation(id).span.start);
        let path = self.parse_declared_path(AssistKind::Package, false);
        self.expect_declaration_semi(ErrorContext::PackageDecl);
        PackageDecl {
            annotations: taken.annotations,
            name: path.names,
            is_assist: path.is_assist,
            span: Span::new(start, self.previous_span().end),
        }
    }

    fn parse_import(&mut self) -> ImportDecl {
        let keyword = self.advance();
        let is_static = self.eat(TokenKind::Static);
        let path = self.parse_declared_path(AssistKind::Import, true);
        self.expect_declaration_semi(ErrorContext::ImportDecl);
        ImportDecl {
            name: path.names,
            is_static,
            on_demand: path.on_demand,
            is_assist: path.is_assist,
            span: keyword.span.merge(self.previous_span()),
        }
    }

    /// `a.b.c`, optionally ending in `.*`. The identifier under the caret
    /// ends the path with an assist node; the names before it are its
    /// qualifier.
    fn parse_declared_path(&mut self, kind: AssistKind, allow_star: bool) -> DeclaredPath {
        let mut path = DeclaredPath {
            names: Vec::new(),
            is_assist: false,
            on_demand: false,
        };
        loop {
            if self.at_assist_ident() {
                self.claim_assist(kind, path.names.clone());
                path.is_assist = true;
                self.skip_path_rest();
                return path;
            }
            match self.expect_ident() {
                Ok(name) => path.names.push(name),
                Err(error) => {
                    self.push_error(error);
                    return path;
                }
            }
            if !self.check(TokenKind::Dot) {
                return path;
            }
            self.advance();
            if allow_star && self.eat(TokenKind::Star) {
                path.on_demand = true;
                return path;
            }
            if self.assist_after_previous() {
                self.claim_empty_assist(kind, path.names.clone());
                path.is_assist = true;
                return path;
            }
        }
    }

    /// Skip `.name` pairs left after the assist point.
    fn skip_path_rest(&mut self) {
        while self.check(TokenKind::Dot)
            && matches!(self.peek_next_kind(), TokenKind::Ident | TokenKind::Star)
        {
            self.cursor.advance_by(2);
        }
    }

    /// A missing `;` after a package or import is reported but not skipped
    /// over; the unit loop deals with whatever follows.
    fn expect_declaration_semi(&mut self, context: ErrorContext) {
        if self.eat(TokenKind::Semi) {
            return;
        }
        let error = self.cursor.unexpected("`;`").with_context(context.label());
        self.seal(RecoveryScope::Unit, error, context.description());
    }
}

