//! CLI command definitions and handlers

use crate::config::{load_config, EngineConfig};
use crate::engine::Engine;
use crate::lexicon::LexiconStore;
use crate::models::AnalysisReport;
use crate::reporters::{self, OutputFormat};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

/// Candor - confidence analysis for written communication
///
/// 100% LOCAL - no text leaves your machine.
#[derive(Parser, Debug)]
#[command(name = "candor")]
#[command(
    version,
    about = "Lexicon-powered confidence analysis — flag hedging, over-apologizing, self-diminishing, and permission-seeking language",
    long_about = "Candor scans written communication for low-confidence language and scores \
each occurrence by severity, with intensifier and clustering adjustments.\n\n\
100% LOCAL — no text leaves your machine.\n\n\
Reads from a file argument, --text, or stdin:\n  \
candor draft.txt\n  \
echo \"maybe this works\" | candor",
    after_help = "\
Examples:
  candor draft.txt                     Analyze a file
  candor draft.txt --format json       JSON output for scripting
  candor --text \"sorry to bother you\"  Analyze a literal string
  candor quick draft.txt               Fast boolean gate (high-weight patterns only)
  candor confidence draft.txt          Check for assured language"
)]
pub struct Cli {
    /// Path to a text file (default: read stdin)
    #[arg(global = true)]
    pub path: Option<PathBuf>,

    /// Analyze this literal text instead of a file or stdin
    #[arg(long, global = true)]
    pub text: Option<String>,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    pub format: String,

    /// Path to a candor.toml config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full analysis pipeline (default)
    Analyze,
    /// Fast boolean gate: only patterns with base weight >= 4, no bonuses
    Quick,
    /// Check whether the text contains assured-language markers
    Confidence,
}

/// Execute the parsed CLI command
pub fn run(cli: Cli) -> Result<()> {
    let text = read_input(&cli)?;
    let config = match &cli.config {
        Some(path) => load_config(path),
        None => EngineConfig::default(),
    };
    let store = LexiconStore::builtin().context("built-in lexicon failed validation")?;
    let engine = Engine::new(store).with_config(config);

    match cli.command.as_ref().unwrap_or(&Commands::Analyze) {
        Commands::Analyze => {
            let format = OutputFormat::from_str(&cli.format)?;
            let result = engine.analyze(&text);
            let report = AnalysisReport::from_result(&result);
            println!("{}", reporters::render(&report, format)?);
        }
        Commands::Quick => {
            println!("{}", if engine.quick_scan(&text) { "flagged" } else { "clean" });
        }
        Commands::Confidence => {
            println!(
                "{}",
                if engine.detect_confidence(&text) {
                    "confident"
                } else {
                    "not confident"
                }
            );
        }
    }

    Ok(())
}

/// Resolve the input text: --text wins, then the file argument, then stdin.
fn read_input(cli: &Cli) -> Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cli.path {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read stdin")?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_analyze() {
        let cli = Cli::try_parse_from(["candor", "draft.txt"]).expect("parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.path, Some(PathBuf::from("draft.txt")));
        assert_eq!(cli.format, "text");
    }

    #[test]
    fn test_parses_subcommands() {
        let cli = Cli::try_parse_from(["candor", "quick", "draft.txt"]).expect("parse");
        assert!(matches!(cli.command, Some(Commands::Quick)));

        let cli = Cli::try_parse_from(["candor", "confidence", "--text", "I will"]).expect("parse");
        assert!(matches!(cli.command, Some(Commands::Confidence)));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        assert!(Cli::try_parse_from(["candor", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn test_text_flag_wins_over_path() {
        let cli = Cli::try_parse_from(["candor", "draft.txt", "--text", "maybe"]).expect("parse");
        let text = read_input(&cli).expect("read input");
        assert_eq!(text, "maybe");
    }

    #[test]
    fn test_reads_input_from_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("draft.txt");
        std::fs::write(&path, "sorry about the delay").expect("write file");

        let cli = Cli::try_parse_from(["candor", path.to_str().expect("utf8 path")])
            .expect("parse");
        assert_eq!(read_input(&cli).expect("read input"), "sorry about the delay");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let cli = Cli::try_parse_from(["candor", "/nonexistent/draft.txt"]).expect("parse");
        assert!(read_input(&cli).is_err());
    }
}
