#![allow(clippy::unwrap_used, clippy::expect_used)]

use kava_parse::{Depth, ParseOptions};
use pretty_assertions::assert_eq;

use super::{line_col, parse_mode_options, ModeOptions};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn test_default_mode_is_full() {
    assert_eq!(
        parse_mode_options(&args(&["A.java"])).unwrap(),
        ModeOptions {
            path: "A.java".to_string(),
            options: ParseOptions::full(),
        }
    );
}

#[test]
fn test_mode_flag() {
    let mode = parse_mode_options(&args(&["--mode=structure", "A.java"])).unwrap();
    assert_eq!(mode.options.depth, Depth::StructureOnly);
    let mode = parse_mode_options(&args(&["A.java", "--mode=bodies"])).unwrap();
    assert_eq!(mode.options.depth, Depth::StructureWithBodies);
}

#[test]
fn test_assist_wins_over_mode() {
    let mode = parse_mode_options(&args(&["A.java", "--assist=42", "--mode=full"])).unwrap();
    assert_eq!(mode.options.depth, Depth::Assist(42));
}

#[test]
fn test_bad_arguments() {
    assert!(parse_mode_options(&args(&[])).is_err());
    assert!(parse_mode_options(&args(&["A.java", "--mode=fast"])).is_err());
    assert!(parse_mode_options(&args(&["A.java", "--assist=x"])).is_err());
    assert!(parse_mode_options(&args(&["A.java", "B.java"])).is_err());
    assert!(parse_mode_options(&args(&["A.java", "--verbose"])).is_err());
}

#[test]
fn test_line_col() {
    let source = "class A {\n  int x;\n}";
    assert_eq!(line_col(source, 0), (1, 1));
    assert_eq!(line_col(source, 6), (1, 7));
    assert_eq!(line_col(source, 12), (2, 3));
    assert_eq!(line_col(source, 1000), (3, 2));
}
