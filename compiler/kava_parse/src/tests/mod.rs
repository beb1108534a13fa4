//! Parser scenario tests.
//!
//! Tests are organized into modules by category:
//! - `structure`: declarations and member headers
//! - `recovery`: malformed input and the repaired tree it yields
//! - `annotations`: annotation forms, attachment and arguments
//! - `statements`: statement forms inside bodies
//! - `expressions`: precedence, casts, lambdas and creation expressions
//! - `modes`: agreement between elaboration depths
//! - `locations`: type annotation locations of parsed declarations

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod expressions;
mod locations;
mod modes;
mod recovery;
mod statements;

use kava_ir::StringInterner;

use crate::{parse_with, ParseOptions, ParseOutput};

/// A parse together with the names it refers to.
pub(crate) struct Parsed {
    pub(crate) interner: StringInterner,
    pub(crate) output: ParseOutput,
}

impl Parsed {
    pub(crate) fn render(&self) -> String {
        self.output.render(&self.interner)
    }
}

pub(crate) fn parse_source(source: &str, options: ParseOptions) -> Parsed {
    let interner = StringInterner::new();
    let tokens = kava_lexer::lex(source, &interner);
    let output = parse_with(&tokens, &interner, options);
    Parsed { interner, output }
}

pub(crate) fn render_structure(source: &str) -> String {
    parse_source(source, ParseOptions::structure()).render()
}

pub(crate) fn render_full(source: &str) -> String {
    parse_source(source, ParseOptions::full()).render()
}

/// Parse `stmts` as the body of a method and render just that body,
/// one statement per line, without the method's indentation.
pub(crate) fn render_body(stmts: &str) -> String {
    let source = format!("class T {{ void m() {{ {stmts} }} }}");
    let text = render_full(&source);
    let open = "void m() {";
    let start = text.find(open).expect("method not rendered") + open.len();
    let body = text[start..]
        .strip_suffix("\n  }\n}\n")
        .expect("method is not the last member");
    body.lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.strip_prefix("    ").unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}
