//! The `explain` command: what an error code means and how it is recovered.

use kava_diagnostic::{Category, ErrorCode};

/// One-line summary of what raises `code`.
fn summary(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::E1001 => "a token that cannot continue the construct being parsed",
        ErrorCode::E1002 => "an expression was expected",
        ErrorCode::E1003 => "a delimiter was opened and never closed",
        ErrorCode::E1004 => "an identifier was expected",
        ErrorCode::E1005 => "a type was expected",
        ErrorCode::E1006 => "a type declaration header could not be parsed",
        ErrorCode::E1007 => "a method or initializer body is not closed",
        ErrorCode::E1008 => "a character or literal the lexer could not read",
        ErrorCode::E1009 => "modifiers or annotations with no declaration after them",
        ErrorCode::E1010 => "an annotation member has no value",
        ErrorCode::E1011 => "an annotation argument list is malformed",
        ErrorCode::E1012 => "the caret is on a name being declared",
        ErrorCode::E1013 => "a statement was expected",
    }
}

/// How the parser continues after a problem of this category.
fn recovery(category: Category) -> &'static str {
    match category {
        Category::LexicalGap => {
            "The offending tokens are skipped up to the next point where a member, \
             statement or declaration can start."
        }
        Category::StructuralTruncation => {
            "The open construct is closed where the input stops making sense, and \
             everything parsed so far is kept."
        }
        Category::AnnotationArgumentFailure => {
            "Pairs parsed before the failure are kept, a missing value becomes \
             `$missing$`, and the rest of the list is skipped."
        }
        Category::AssistAmbiguity => {
            "No completion placeholder is created. This is a note, not an error."
        }
    }
}

/// Display documentation for an error code string.
pub fn explain_error(code_str: &str) {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E1001, E1007, E1010");
        std::process::exit(1);
    };

    println!("{code}: {}", summary(code));
    println!();
    println!("Category: {} ({})", code.category(), code.severity());
    println!("{}", recovery(code.category()));
}
