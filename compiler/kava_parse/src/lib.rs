//! Fault-tolerant recursive descent parser for Java sources.
//!
//! Produces a flat AST in an [`AstArena`]. The parser never gives up on
//! malformed input: every problem is recorded as a [`ParseError`] and the
//! tree built so far is kept, closed synthetically where the source left
//! it open.
//!
//! # Depths
//!
//! One [`ParseOptions`] value selects how far a unit is elaborated:
//!
//! - `StructureOnly`: declarations and member headers; bodies stay `Unparsed`
//! - `StructureWithBodies`: the same skeleton, then every body in source order
//! - `Full`: bodies parsed while the skeleton is built
//! - `Assist(offset)`: structure, plus the body under the caret, with the
//!   construct under the caret replaced by a completion placeholder

mod assist;
mod bodies;
mod context;
mod cursor;
mod error;
mod grammar;
mod mode;
mod outline;
mod progress;
mod recovery;
mod snapshot;

#[cfg(test)]
mod tests;

pub use bodies::BodyRef;
pub use context::ParseContext;
pub use cursor::{Cursor, CursorMark};
pub use error::{ErrorContext, ParseError};
pub use mode::{Depth, ParseOptions};
pub use outline::{
    notify_source_elements, FieldInfo, MethodInfo, RecordingRequestor, SourceElement,
    SourceElementRequestor, TypeInfo,
};
pub use progress::Progress;
pub use recovery::{synchronize, RecoveryScope, RecoveryState, TokenSet};
pub use snapshot::ParserSnapshot;

use kava_diagnostic::{Diagnostic, ErrorCode, Severity};
use kava_ir::ast::{AssistNode, AstArena, CompilationUnit, Member};
use kava_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList};
use tracing::debug;

use crate::assist::AssistState;
use crate::recovery::Recovery;

/// Everything a parse produces.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub unit: CompilationUnit,
    pub arena: AstArena,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    /// True if recovery had to repair anything. Notes do not count.
    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(|e| e.severity() == Severity::Error)
    }

    /// The completion placeholder, when parsed for assist.
    pub fn assist(&self) -> Option<&AssistNode> {
        self.unit.assist.as_ref()
    }

    /// Canonical text of the whole unit.
    pub fn render(&self, interner: &StringInterner) -> String {
        kava_ir::render::render_unit(&self.unit, &self.arena, interner)
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(ParseError::to_diagnostic).collect()
    }

    /// Bodies still waiting to be parsed, in source order.
    pub fn unparsed_bodies(&self) -> Vec<BodyRef> {
        bodies::collect_unparsed(&self.unit, &self.arena)
    }

    pub fn next_unparsed_body(&self) -> Option<BodyRef> {
        self.unparsed_bodies().into_iter().next()
    }

    /// Errors of one code, mostly for tests and tooling.
    pub fn errors_with_code(&self, code: ErrorCode) -> impl Iterator<Item = &ParseError> {
        self.errors.iter().filter(move |e| e.code == code)
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: AstArena,
    errors: Vec<ParseError>,
    context: ParseContext,
    options: ParseOptions,
    assist: AssistState,
    recovery: Recovery,
}

impl<'a> Parser<'a> {
    /// Create a new parser over a whole token list.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner, options: ParseOptions) -> Self {
        Self::with_arena(tokens, interner, options, AstArena::new())
    }

    /// Create a parser that keeps allocating into an existing arena.
    ///
    /// Deferred body parsing uses this to extend a skeleton in place.
    fn with_arena(
        tokens: &'a TokenList,
        interner: &'a StringInterner,
        options: ParseOptions,
        arena: AstArena,
    ) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena,
            errors: Vec::new(),
            context: ParseContext::new(),
            options,
            assist: AssistState::new(options.caret()),
            recovery: Recovery::new(),
        }
    }

    /// Parse the whole token list as one compilation unit.
    pub fn parse(mut self) -> ParseOutput {
        let mut unit = self.parse_compilation_unit();
        if let Some(mut node) = self.assist.take_node() {
            assist::resolve_parent(&unit, &self.arena, &mut node);
            debug!(
                kind = ?node.kind,
                parent = ?node.parent,
                caret = node.caret,
                "assist node resolved"
            );
            unit.assist = Some(node);
        }
        debug!(
            errors = self.errors.len(),
            recoveries = self.recovery.attempts(),
            "parse finished"
        );
        ParseOutput {
            unit,
            arena: self.arena,
            errors: self.errors,
        }
    }

    // Cursor delegation methods

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn check_ident(&self) -> bool {
        self.cursor.check_ident()
    }

    #[inline]
    fn peek_next_kind(&self) -> TokenKind {
        self.cursor.peek_next_kind()
    }

    #[inline]
    fn advance(&mut self) -> Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    #[inline]
    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        self.cursor.expect(kind)
    }

    #[inline]
    fn expect_ident(&mut self) -> Result<Name, ParseError> {
        self.cursor.expect_ident()
    }

    #[inline]
    fn interner(&self) -> &'a StringInterner {
        self.cursor.interner()
    }

    #[inline]
    fn position(&self) -> usize {
        self.cursor.position()
    }

    // Speculation

    pub(crate) fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot::new(
            self.cursor.mark(),
            self.context,
            self.errors.len(),
            self.assist.is_resolved(),
        )
    }

    pub(crate) fn restore(&mut self, snapshot: ParserSnapshot) {
        self.cursor.reset(snapshot.cursor);
        self.context = snapshot.context;
        self.errors.truncate(snapshot.error_count);
        if !snapshot.assist_found {
            self.assist.forget();
        }
    }

    /// Run `f`, then rewind whatever it consumed.
    pub(crate) fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let snapshot = self.snapshot();
        let result = f(self);
        self.restore(snapshot);
        result
    }

    /// Keep the result of `f` on success, rewind on failure.
    pub(crate) fn try_parse<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Option<T> {
        let snapshot = self.snapshot();
        match f(self) {
            Ok(value) => Some(value),
            Err(_) => {
                self.restore(snapshot);
                None
            }
        }
    }

    // Context

    /// Run `f` with `flag` added to the parse context.
    pub(crate) fn with_context<T>(
        &mut self,
        flag: ParseContext,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let saved = self.context;
        self.context = saved.with(flag);
        let result = f(self);
        self.context = saved;
        result
    }

    /// Run `f` with `flag` removed from the parse context.
    pub(crate) fn without_context<T>(
        &mut self,
        flag: ParseContext,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let saved = self.context;
        self.context = saved.without(flag);
        let result = f(self);
        self.context = saved;
        result
    }

    /// Attach "while parsing X" to any error `f` returns without one.
    pub(crate) fn in_error_context<T>(
        &mut self,
        context: ErrorContext,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        f(self).map_err(|e| {
            if e.context.is_some() {
                e
            } else {
                e.with_context(context.label())
            }
        })
    }

    /// Parse with a different cursor, then put the original back.
    pub(crate) fn with_cursor<T>(&mut self, cursor: Cursor<'a>, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = std::mem::replace(&mut self.cursor, cursor);
        let result = f(self);
        self.cursor = saved;
        result
    }

    // Errors and recovery

    pub(crate) fn push_error(&mut self, error: ParseError) {
        debug!(code = %error.code, span = %error.span, "{}", error.message);
        self.errors.push(error);
    }

    /// Record `error`, then skip to a safe token for `scope`.
    ///
    /// Returns false if the end of input was reached first.
    pub(crate) fn recover(
        &mut self,
        scope: RecoveryScope,
        error: ParseError,
        safe: TokenSet,
        line_start: TokenSet,
    ) -> bool {
        self.recovery.begin(scope, error.span);
        self.push_error(error);
        let (skipped, found) = recovery::synchronize_balanced(&mut self.cursor, safe, line_start);
        self.recovery.resynced(skipped, found);
        found
    }

    /// Record `error` and keep the half-built node with what it has.
    pub(crate) fn seal(&mut self, scope: RecoveryScope, error: ParseError, node: &'static str) {
        self.recovery.begin(scope, error.span);
        self.push_error(error);
        self.recovery.seal(node);
    }

    /// Skip one token if a loop iteration starting at `before` consumed none.
    pub(crate) fn force_progress(&mut self, before: usize) {
        if Progress::between(before, self.position()).none() && !self.is_at_end() {
            self.advance();
        }
    }

    /// Bodies met from here on are parsed right away.
    fn parses_bodies_eagerly(&self) -> bool {
        self.options.depth.parses_bodies_eagerly() || self.context.in_body()
    }

    /// End offset of the source, taken from the `Eof` token.
    fn source_len(&self) -> u32 {
        self.cursor.tokens().last().map_or(0, |t| t.span.end)
    }
}

/// Parse declarations and member headers only.
pub fn parse_structure(tokens: &TokenList, interner: &StringInterner) -> ParseOutput {
    parse_with(tokens, interner, ParseOptions::structure())
}

/// Parse everything, bodies included, in one pass.
pub fn parse_full(tokens: &TokenList, interner: &StringInterner) -> ParseOutput {
    parse_with(tokens, interner, ParseOptions::full())
}

/// Parse for code completion at byte offset `caret`.
pub fn parse_for_assist(tokens: &TokenList, interner: &StringInterner, caret: u32) -> ParseOutput {
    parse_with(tokens, interner, ParseOptions::assist(caret))
}

/// Parse with explicit options.
pub fn parse_with(
    tokens: &TokenList,
    interner: &StringInterner,
    options: ParseOptions,
) -> ParseOutput {
    debug!(depth = %options.depth, tokens = tokens.len(), "parsing unit");
    let mut output = Parser::new(tokens, interner, options).parse();
    if options.depth == Depth::StructureWithBodies {
        parse_bodies(&mut output, tokens, interner);
    }
    output
}

/// Parse every body a structure-only parse left behind, in source order.
///
/// Bodies of anonymous and local types found along the way are parsed too.
pub fn parse_bodies(output: &mut ParseOutput, tokens: &TokenList, interner: &StringInterner) {
    let mut parsed = 0usize;
    while let Some(body) = output.next_unparsed_body() {
        if !parse_body(output, tokens, interner, body) {
            break;
        }
        parsed += 1;
    }
    debug!(parsed, "bodies parsed");
}

/// Parse one deferred body in place. Only the member named by `body` changes.
///
/// Returns false if `body` does not name an unparsed body.
pub fn parse_body(
    output: &mut ParseOutput,
    tokens: &TokenList,
    interner: &StringInterner,
    body: BodyRef,
) -> bool {
    let Some((range, kind)) = bodies::pending_body(&output.arena, body) else {
        return false;
    };
    let arena = std::mem::take(&mut output.arena);
    let mut parser = Parser::with_arena(tokens, interner, ParseOptions::full(), arena);
    let parsed = parser.parse_body_range(range, kind);
    output.errors.append(&mut parser.errors);
    output.arena = parser.arena;
    bodies::install(&mut output.arena, body, parsed);
    true
}

/// The caller-visible failure: input that cannot be parsed at all.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("source is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("source is {0} bytes; at most 4 GiB can be parsed")]
    TooLarge(usize),
}

/// Decode, lex and parse raw source bytes.
pub fn parse_bytes(
    bytes: &[u8],
    interner: &StringInterner,
    options: ParseOptions,
) -> Result<(TokenList, ParseOutput), SourceError> {
    if u32::try_from(bytes.len()).is_err() {
        return Err(SourceError::TooLarge(bytes.len()));
    }
    let source = std::str::from_utf8(bytes)?;
    let tokens = kava_lexer::lex(source, interner);
    let output = parse_with(&tokens, interner, options);
    Ok((tokens, output))
}

/// Members of a type in source order, skipping synthesized ones.
pub(crate) fn source_members<'m>(members: &'m [Member], arena: &AstArena) -> Vec<&'m Member> {
    let mut found: Vec<&Member> = members
        .iter()
        .filter(|member| {
            !matches!(member, Member::Method(method) if method.is_default_constructor)
        })
        .collect();
    found.sort_by_key(|member| member.declaration_span(arena).start);
    found
}
