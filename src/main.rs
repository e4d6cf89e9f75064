use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tagnorm::{NormalizeError, NormalizedTag, TagInput, TagNormalizer};
use tracing::Level;

/// tagnorm - normalize quantities and durations in planning tags
#[derive(Parser)]
#[command(name = "tagnorm")]
#[command(about = "Normalize approximate quantities, spelled-out numbers and durations in tags")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Language code used when a tag does not carry its own
    #[arg(short, long, default_value = "fr", global = true)]
    lang: String,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Normalize a single tag and print its record as JSON
    Normalize(NormalizeCommand),
    /// Normalize one tag per stdin line and print one JSON record per line
    Batch,
}

/// Normalize a single tag
#[derive(Parser)]
struct NormalizeCommand {
    /// The tag text
    #[arg(value_name = "TAG")]
    tag: String,

    /// Pretty-print the JSON record
    #[arg(short, long)]
    pretty: bool,
}

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let normalizer = TagNormalizer::default();
    let result = match &cli.command {
        Commands::Normalize(cmd) => handle_normalize(&normalizer, cmd, &cli.lang),
        Commands::Batch => handle_batch(&normalizer, &cli.lang),
    };

    if let Err(e) = result {
        let exit_code = if is_user_error(&e) { 1 } else { 2 };
        eprintln!("Error: {e:#}");
        std::process::exit(exit_code);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// Determines if an error is a user error (vs internal error).
fn is_user_error(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<NormalizeError>()
        .is_some_and(NormalizeError::is_user_error)
}

fn handle_normalize(normalizer: &TagNormalizer, cmd: &NormalizeCommand, lang: &str) -> Result<()> {
    let tag = normalizer.normalize_tag_code(&cmd.tag, lang)?;
    println!("{}", render_record(&tag, cmd.pretty)?);
    Ok(())
}

/// Reads `tag` or `lang<TAB>tag` lines; unsupported languages leave the tag unchanged.
fn handle_batch(normalizer: &TagNormalizer, default_lang: &str) -> Result<()> {
    let stdin = io::stdin();
    let mut inputs = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read tag from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        inputs.push(parse_batch_line(&line, default_lang));
    }

    for tag in normalizer.normalize_tags(&inputs) {
        println!("{}", render_record(&tag, false)?);
    }
    Ok(())
}

fn parse_batch_line(line: &str, default_lang: &str) -> TagInput {
    match line.split_once('\t') {
        Some((lang, text)) => TagInput::new(text.trim(), lang.trim()),
        None => TagInput::new(line.trim(), default_lang),
    }
}

fn render_record(tag: &NormalizedTag, pretty: bool) -> Result<String> {
    let record = tag.to_record();
    let json = if pretty {
        serde_json::to_string_pretty(&record)
    } else {
        serde_json::to_string(&record)
    };
    json.context("Failed to serialize record")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagnorm::NormalizerConfig;

    fn normalizer() -> TagNormalizer {
        TagNormalizer::builder()
            .config(NormalizerConfig::default())
            .build()
    }

    #[test]
    fn parse_batch_line_with_language() {
        let input = parse_batch_line("en\tabout 3 days", "fr");
        assert_eq!(input, TagInput::new("about 3 days", "en"));
    }

    #[test]
    fn parse_batch_line_uses_default_language() {
        let input = parse_batch_line("  vingt jours ", "fr");
        assert_eq!(input, TagInput::new("vingt jours", "fr"));
    }

    #[test]
    fn render_record_emits_metadata_keys() {
        let tag = normalizer()
            .normalize_tag_code("vingt jours", "fr")
            .expect("fr is supported");

        let json = render_record(&tag, false).expect("record should serialize");

        assert!(json.contains(r#""normalized_tag":"28800min""#));
        assert!(json.contains(r#""time_units""#));
        assert!(json.contains(r#""TotalInMinutes":28800.0"#));
    }

    #[test]
    fn unsupported_language_is_a_user_error() {
        let err = normalizer()
            .normalize_tag_code("zwanzig Tage", "de")
            .map_err(anyhow::Error::from)
            .unwrap_err();

        assert!(is_user_error(&err));
    }

    #[test]
    fn io_failure_is_not_a_user_error() {
        let err = anyhow::anyhow!("Failed to read tag from stdin");
        assert!(!is_user_error(&err));
    }
}
