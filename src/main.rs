mod cli_args;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use cli_args::{pair, Cli};
use linedit_config::Config;
use linedit_editor::{Editor, EditorConfig, SaveOutcome};
use linedit_logger::LogLevel;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_default(),
    };
    init_logging(&config);

    let mut editor = Editor::with_config(EditorConfig::from(&config));
    if !editor.open(None, &cli.file) {
        anyhow::bail!("Failed to open {}", cli.file.display());
    }

    apply_commands(&mut editor, &cli);

    let output = cli.output.as_deref().unwrap_or(&cli.file);
    let outcome = editor
        .save(output)
        .with_context(|| format!("Failed to save {}", output.display()))?;
    if outcome == SaveOutcome::Streamed {
        std::process::exit(0);
    }
    Ok(())
}

fn init_logging(config: &Config) {
    let level = config
        .logging
        .min_level
        .parse::<LogLevel>()
        .unwrap_or(LogLevel::Info);
    linedit_logger::init(config.logging.log_file(), config.logging.max_entries, level);
}

fn apply_commands(editor: &mut Editor, cli: &Cli) {
    if let Some(line) = cli.goto {
        editor.goto_line(line);
    }
    if let Some(what) = &cli.search {
        eprintln!("{}{}", editor.search(what, false, true), what);
    }
    if let Some((from, to)) = cli.replace.as_deref().and_then(pair) {
        eprintln!("{}{}", editor.replace_one(from, to, true), from);
    }
    if let Some((from, to)) = cli.replace_all.as_deref().and_then(pair) {
        let count = editor.replace_all(from, to);
        eprintln!("Replaced {count} occurrence(s) of {from}");
    }
    if let Some(marker) = &cli.comment {
        editor.toggle_comment(marker);
    }
    for _ in 0..cli.undo {
        if !editor.undo() {
            break;
        }
    }
    log::debug!(
        "Commands applied to {}, cursor at {:?}",
        display_name(&cli.file),
        editor.position()
    );
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
