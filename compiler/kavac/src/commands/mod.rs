//! Command handlers for the Kava CLI.
//!
//! Each submodule implements one command. Reading sources and reporting
//! diagnostics are shared and live here.

use kava_ir::{StringInterner, TokenList};
use kava_parse::{parse_bytes, ParseOptions, ParseOutput};

mod debug;
mod explain;
mod locations;
mod options;
mod outline;

pub use debug::{lex_file, parse_file};
pub use explain::explain_error;
pub use locations::print_locations;
pub use options::{parse_mode_options, ModeOptions};
pub use outline::outline_file;

/// A source file after lexing and parsing.
pub(crate) struct Loaded {
    pub(crate) source: String,
    pub(crate) interner: StringInterner,
    pub(crate) tokens: TokenList,
    pub(crate) output: ParseOutput,
}

/// Read a file or exit with a message.
pub(crate) fn read_file(path: &str) -> Vec<u8> {
    match std::fs::read(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Read and parse `path`, exiting if it is not parseable source text.
pub(crate) fn load(path: &str, options: ParseOptions) -> Loaded {
    let bytes = read_file(path);
    let interner = StringInterner::new();
    let (tokens, output) = match parse_bytes(&bytes, &interner, options) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("'{path}': {e}");
            std::process::exit(1);
        }
    };
    Loaded {
        source: String::from_utf8_lossy(&bytes).into_owned(),
        interner,
        tokens,
        output,
    }
}

/// 1-based line and column of a byte offset.
pub(crate) fn line_col(source: &str, offset: u32) -> (usize, usize) {
    let offset = (offset as usize).min(source.len());
    let before = source.get(..offset).unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let column = before
        .rfind('\n')
        .map_or(before.chars().count(), |nl| before[nl + 1..].chars().count())
        + 1;
    (line, column)
}

/// Print every diagnostic to stderr. Returns the number of errors.
pub(crate) fn report_diagnostics(path: &str, loaded: &Loaded) -> usize {
    let mut errors = 0;
    for diagnostic in loaded.output.diagnostics() {
        if diagnostic.is_error() {
            errors += 1;
        }
        let location = diagnostic.primary_span().map_or_else(String::new, |span| {
            let (line, column) = line_col(&loaded.source, span.start);
            format!("{path}:{line}:{column}: ")
        });
        eprintln!("{location}{diagnostic}");
    }
    errors
}

#[cfg(test)]
mod tests;
