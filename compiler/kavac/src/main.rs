//! Kava CLI
//!
//! Fault-tolerant Java parsing from the command line.

use kavac::commands::{
    explain_error, lex_file, outline_file, parse_file, parse_mode_options, print_locations,
};

fn main() {
    kavac::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "parse" => match parse_mode_options(&args[2..]) {
            Ok(mode) => parse_file(&mode),
            Err(msg) => {
                eprintln!("error: {msg}");
                eprintln!("Usage: kavac parse <File.java> [--mode=structure|bodies|full] [--assist=<offset>]");
                std::process::exit(1);
            }
        },
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: kavac lex <File.java>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "outline" => {
            let raw_events = args.iter().skip(2).any(|a| a == "--events");
            let Some(path) = args.iter().skip(2).find(|a| !a.starts_with('-')) else {
                eprintln!("Usage: kavac outline <File.java> [--events]");
                std::process::exit(1);
            };
            outline_file(path, raw_events);
        }
        "locations" => {
            if args.len() < 3 {
                eprintln!("Usage: kavac locations <File.java>");
                std::process::exit(1);
            }
            print_locations(&args[2]);
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: kavac --explain <ERROR_CODE>");
                eprintln!("Example: kavac --explain E1007");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Kava {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Kava - fault-tolerant Java parser");
    println!();
    println!("Usage: kavac <command> [options]");
    println!();
    println!("Commands:");
    println!("  parse <File.java>      Parse and print the canonical rendering");
    println!("  lex <File.java>        Tokenize and display tokens");
    println!("  outline <File.java>    Print declarations as an outline");
    println!("  locations <File.java>  Print type annotation locations");
    println!("  --explain <code>       Explain an error code (e.g., E1007)");
    println!("  help                   Show this help message");
    println!("  version                Show version information");
    println!();
    println!("Parse options:");
    println!("  --mode=<depth>         structure, bodies or full (default: full)");
    println!("  --assist=<offset>      Parse for completion at a byte offset");
    println!();
    println!("Outline options:");
    println!("  --events               Print raw events with byte positions");
    println!();
    println!("Examples:");
    println!("  kavac parse Main.java");
    println!("  kavac parse Main.java --mode=structure");
    println!("  kavac parse Main.java --assist=120");
    println!("  kavac outline Main.java");
    println!("  kavac --explain E1010");
    println!();
    println!("Set RUST_LOG=kava_parse=debug to trace recovery decisions.");
}
