//! Grammar Modules
//!
//! Each module extends `Parser` with the productions for one area of the
//! language:
//!
//! - [`unit`]: compilation unit, package and import declarations
//! - [`modifiers`]: the pending modifier and annotation buffer
//! - [`annotation`]: annotations and their element values
//! - [`ty`]: types, type arguments and type parameters
//! - [`decl`]: class, interface, enum and annotation type declarations
//! - [`member`]: fields, methods, constructors, initializers, enum constants
//! - [`stmt`]: blocks and statements
//! - [`expr`]: expressions
//!
//! Productions return `Result<_, ParseError>` where a caller can still do
//! something sensible with a failure. Declaration-level productions recover
//! on their own and always return a node.

mod annotation;
mod decl;
mod expr;
mod member;
mod modifiers;
mod stmt;
mod ty;
mod unit;

pub(crate) use modifiers::PendingModifiers;
