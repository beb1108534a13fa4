//! Debug commands: `lex` and `parse` for inspecting the front end.

use kava_ir::TokenKind;
use kava_parse::{Depth, ParseOptions};

use super::{line_col, load, report_diagnostics, ModeOptions};

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let loaded = load(path, ParseOptions::structure());

    println!("Tokens for '{}' ({} tokens):", path, loaded.tokens.len());
    for token in loaded.tokens.iter() {
        let (line, column) = line_col(&loaded.source, token.span.start);
        let text = match token.kind {
            TokenKind::Ident
            | TokenKind::IntLit
            | TokenKind::FloatLit
            | TokenKind::CharLit
            | TokenKind::StringLit
            | TokenKind::Error => format!(" {:?}", loaded.interner.lookup(token.text)),
            _ => String::new(),
        };
        println!("  {line}:{column} {}{text} @ {}", token.kind, token.span);
    }
}

/// Parse a file and print its canonical rendering, then any diagnostics.
///
/// Exits with status 1 when recovery had to repair anything.
pub fn parse_file(mode: &ModeOptions) {
    let path = mode.path.as_str();
    let loaded = load(path, mode.options);
    let output = &loaded.output;

    print!("{}", output.render(&loaded.interner));

    if let Some(node) = output.assist() {
        println!();
        println!("Assist:");
        println!("  kind: {}", node.kind.label());
        println!("  identifier: {:?}", loaded.interner.lookup(node.identifier));
        let qualifier: Vec<&str> = node
            .qualifier
            .iter()
            .map(|&name| loaded.interner.lookup(name))
            .collect();
        if !qualifier.is_empty() {
            println!("  qualifier: {}", qualifier.join("."));
        }
        println!("  span: {}", node.span);
        println!("  parent: {:?} @ {}", node.parent, node.parent_span);
    } else if matches!(mode.options.depth, Depth::Assist(_)) {
        println!();
        println!("Assist: nothing to complete at the caret");
    }

    let pending = output.unparsed_bodies().len();
    if pending > 0 {
        println!();
        println!("Unparsed bodies: {pending}");
    }

    if report_diagnostics(path, &loaded) > 0 {
        std::process::exit(1);
    }
}
