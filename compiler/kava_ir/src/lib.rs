//! Kava IR - shared data structures for the Java front end
//!
//! This crate holds everything the lexer and parser exchange:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Tokens and `TokenList` for lexer output
//! - The arena-backed syntax tree
//! - Canonical rendering and type-annotation locations
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers and literal spellings become `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`; nodes refer to each other by id
//! - **Keep Source Spellings**: literals are stored as written, never evaluated

pub mod ast;
mod interner;
mod name;
pub mod render;
mod span;
mod token;
pub mod type_annotation;
pub mod visitor;

pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Token, TokenFlags, TokenKind, TokenList, TokenRange};
