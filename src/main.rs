mod ai;
mod model;
mod parser;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::warn;

#[derive(Parser)]
#[command(name = "resume_parser", about = "Plain-text resume → structured JSON parser")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse resume text from stdin and write structured JSON to stdout
    Parse,
    /// Parse every .txt resume in a directory, writing a .json beside each
    /// (rule-based engine only)
    Batch {
        dir: PathBuf,
        /// Max files to parse (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries only the JSON artifact; all logging goes to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Parse) {
        Commands::Parse => parse_stdin().await,
        Commands::Batch { dir, limit } => batch(&dir, limit),
    }
}

/// Default command: stdin → indented JSON on stdout.
async fn parse_stdin() -> anyhow::Result<()> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    let parsed = parse_text(&text).await?;
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}

/// Empty input is the only hard failure. The AI attempt runs first when
/// a key is configured; its failure silently falls through to the
/// rule-based engine.
async fn parse_text(text: &str) -> anyhow::Result<model::ParsedResume> {
    if text.trim().is_empty() {
        anyhow::bail!("no input text provided");
    }

    let ai_config = ai::AiConfig::from_env();
    let parsed = match &ai_config {
        Some(config) => ai::parse_resume(config, text).await,
        None => None,
    }
    .unwrap_or_else(|| parser::parse_resume(text));

    Ok(parsed)
}

fn batch(dir: &Path, limit: Option<usize>) -> anyhow::Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    files.sort();
    if let Some(n) = limit {
        files.truncate(n);
    }
    if files.is_empty() {
        println!("No .txt files found in {}", dir.display());
        return Ok(());
    }

    println!("Parsing {} resumes...", files.len());
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec})")?
            .progress_chars("=> "),
    );

    let outcomes: Vec<anyhow::Result<()>> = files
        .par_iter()
        .map(|path| {
            let result = parse_file(path);
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_and_clear();

    let mut errors = 0usize;
    for (path, outcome) in files.iter().zip(&outcomes) {
        if let Err(e) = outcome {
            errors += 1;
            warn!("{}: {e:#}", path.display());
        }
    }
    println!("Done: {} parsed, {} errors.", outcomes.len() - errors, errors);
    Ok(())
}

fn parse_file(path: &Path) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    if text.trim().is_empty() {
        anyhow::bail!("empty input");
    }
    let parsed = parser::parse_resume(&text);
    let out = path.with_extension("json");
    std::fs::write(&out, serde_json::to_string_pretty(&parsed)?)
        .with_context(|| format!("failed to write {}", out.display()))?;
    Ok(())
}

// ── Tests ──
