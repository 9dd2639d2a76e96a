use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Commands are applied in a fixed order: goto, search, replace,
/// replace-all, comment, undo.
#[derive(Debug, Parser)]
#[command(
    name = "linedit",
    about = "Apply line edits to a file from the command line",
    version
)]
pub(crate) struct Cli {
    #[arg(help = "File to edit, or - for stdin")]
    pub(crate) file: PathBuf,

    #[arg(long, help = "Read settings from this TOML file instead of the default")]
    pub(crate) config: Option<PathBuf>,

    #[arg(long, value_name = "LINE", help = "Move the cursor to a 1-based line")]
    pub(crate) goto: Option<usize>,

    #[arg(long, value_name = "TEXT", help = "Move the cursor to the next match")]
    pub(crate) search: Option<String>,

    #[arg(
        long,
        num_args = 2,
        value_names = ["FROM", "TO"],
        help = "Replace the next match at or after the cursor"
    )]
    pub(crate) replace: Option<Vec<String>>,

    #[arg(
        long = "replace-all",
        num_args = 2,
        value_names = ["FROM", "TO"],
        help = "Replace every match from the cursor to the end"
    )]
    pub(crate) replace_all: Option<Vec<String>>,

    #[arg(long, value_name = "MARKER", help = "Toggle a line comment on the cursor line")]
    pub(crate) comment: Option<String>,

    #[arg(
        long,
        action = ArgAction::Count,
        help = "Undo the last edit; repeat to undo more"
    )]
    pub(crate) undo: u8,

    #[arg(
        long,
        short = 'o',
        value_name = "PATH",
        help = "Write the result here (- for stdout); defaults to the input file"
    )]
    pub(crate) output: Option<PathBuf>,
}

/// Split a two-value option into its pair
pub(crate) fn pair(values: &[String]) -> Option<(&str, &str)> {
    match values {
        [from, to] => Some((from.as_str(), to.as_str())),
        _ => None,
    }
}
