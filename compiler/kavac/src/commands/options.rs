//! Flags shared by the commands that parse a file.

use kava_parse::{Depth, ParseOptions};

/// A file path plus the depth to parse it at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeOptions {
    pub path: String,
    pub options: ParseOptions,
}

/// Parse `<file> [--mode=<depth>] [--assist=<offset>]`.
///
/// `--assist` wins over `--mode`. The default depth is `full`.
pub fn parse_mode_options(args: &[String]) -> Result<ModeOptions, String> {
    let mut path = None;
    let mut depth = Depth::Full;
    let mut caret = None;

    for arg in args {
        if let Some(mode) = arg.strip_prefix("--mode=") {
            depth = match mode {
                "structure" => Depth::StructureOnly,
                "bodies" => Depth::StructureWithBodies,
                "full" => Depth::Full,
                _ => {
                    return Err(format!(
                        "unknown mode '{mode}' (expected structure, bodies or full)"
                    ))
                }
            };
        } else if let Some(offset) = arg.strip_prefix("--assist=") {
            let offset = offset
                .parse::<u32>()
                .map_err(|_| format!("invalid caret offset '{offset}'"))?;
            caret = Some(offset);
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    let path = path.ok_or_else(|| "missing file path".to_string())?;
    let depth = caret.map_or(depth, Depth::Assist);
    Ok(ModeOptions {
        path,
        options: ParseOptions::new(depth),
    })
}
