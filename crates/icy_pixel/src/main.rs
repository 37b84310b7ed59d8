#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, Naming};
use icy_pixel_edit::{Document, EditorConfig, EditorSession};

mod script;
mod text_view;

const CONFIG_FILE: &str = "icy_pixel.toml";

#[derive(Parser, Debug)]
#[command(version, about = "Headless editor for half-pixel mosaic grids", long_about = None)]
pub struct Args {
    /// Editor configuration (defaults to icy_pixel.toml in the config directory)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a rotating log file to this directory instead of stderr
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a blank document
    New {
        #[arg(long)]
        rows: Option<i32>,

        #[arg(long)]
        cols: Option<i32>,

        /// Output document
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Print a document as text
    Show {
        #[arg(value_name = "DOC")]
        document: PathBuf,
    },

    /// Replay a TOML gesture script against a document
    Replay {
        #[arg(value_name = "DOC")]
        document: PathBuf,

        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Write the result here instead of back to DOC
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the effective configuration
    Config,
}

fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "GitHub", "icy_pixel").map(|p| p.config_dir().to_path_buf())
}

fn get_log_dir(args: &Args) -> Option<PathBuf> {
    let dir = args.log_dir.clone()?;
    if !dir.exists() {
        std::fs::create_dir_all(&dir).ok()?;
    }
    Some(dir)
}

fn load_config(args: &Args) -> anyhow::Result<EditorConfig> {
    if let Some(path) = &args.config {
        return EditorConfig::load(path).with_context(|| format!("loading config {}", path.display()));
    }
    if let Some(path) = config_dir().map(|d| d.join(CONFIG_FILE)) {
        if path.exists() {
            return EditorConfig::load(&path).with_context(|| format!("loading config {}", path.display()));
        }
    }
    Ok(EditorConfig::default())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let logger = Logger::try_with_env_or_str("warn, icy_pixel=info")?;
    let _logger = if let Some(log_dir) = get_log_dir(&args) {
        logger
            .log_to_file(FileSpec::default().directory(&log_dir).basename("icy_pixel").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
            .start()?
    } else {
        if args.log_dir.is_some() {
            eprintln!("Failed to create log directory, logging to stderr");
        }
        logger.log_to_stderr().start()?
    };

    let config = load_config(&args)?;
    match args.command {
        Command::New { rows, cols, output } => new_document(&config, rows, cols, &output),
        Command::Show { document } => {
            let document = Document::load(&document).with_context(|| format!("loading {}", document.display()))?;
            print!("{}", text_view::render(&document));
            Ok(())
        }
        Command::Replay { document, script, output } => replay(&config, &document, &script, output.as_deref()),
        Command::Config => {
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
    }
}

fn new_document(config: &EditorConfig, rows: Option<i32>, cols: Option<i32>, output: &Path) -> anyhow::Result<()> {
    let config = EditorConfig {
        rows: rows.unwrap_or(config.rows),
        cols: cols.unwrap_or(config.cols),
        ..config.clone()
    };
    config.validate()?;
    let session = EditorSession::from_config(&config);
    session.to_document().save(output)?;
    log::info!("created {}x{} document {}", config.rows, config.cols, output.display());
    Ok(())
}

fn replay(config: &EditorConfig, document_path: &Path, script_path: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let document = Document::load(document_path).with_context(|| format!("loading {}", document_path.display()))?;
    let script = script::Script::load(script_path)?;

    let mut session = EditorSession::from_document(&document, config);
    let report = script.run(&mut session)?;
    println!(
        "{} steps, {} changed the grid, {} cells reported, {} full redraws, undo depth {}",
        report.steps,
        report.changed,
        report.cells_reported,
        report.redraws,
        session.undo_stack_len()
    );

    let target = output.unwrap_or(document_path);
    if session.is_modified() || output.is_some() {
        session.to_document().save(target)?;
        session.mark_saved();
        log::info!("saved {}", target.display());
    }
    Ok(())
}
