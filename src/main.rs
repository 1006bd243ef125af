use anyhow::Context;
use clap::Parser;
use most_changed::analyzer::{table, AnalyzerError};
use most_changed::config::Config;
use most_changed::{logger, render, ChurnAnalyzer};
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    version,
    about = "Reports the most frequently changed files in a Git repository",
    long_about = None
)]
struct Cli {
    /// Number of results to show; prompted for interactively when omitted
    results: Option<usize>,

    /// Path to the Git repository
    #[arg(short, long, default_value = ".")]
    repo: PathBuf,

    /// Output format (table, json or csv)
    #[arg(short, long, default_value = "table")]
    format: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();
    logger::init(&config).context("Failed to install logger")?;

    let limit = resolve_limit(cli.results)?;

    let analyzer = ChurnAnalyzer::new(&cli.repo).context("Failed to open repository")?;
    let ranked = analyzer
        .analyze(limit)
        .context("Failed to analyze repository")?;

    match cli.format.as_str() {
        "table" => {
            log::debug!("rendering table for {} entries", ranked.len());
            render::print_table(&table::render(&ranked), config.styled);
        }
        "json" => {
            println!(
                "{}",
                serde_json::to_string_pretty(&ranked).context("Failed to serialize to JSON")?
            );
        }
        "csv" => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for entry in ranked {
                wtr.serialize(entry).context("Failed to write CSV record")?;
            }
            wtr.flush().context("Failed to flush CSV writer")?;
        }
        _ => anyhow::bail!("Unsupported output format: {}", cli.format),
    }

    Ok(())
}

/// Validates the supplied results count, or prompts for one when stdin is a
/// terminal. A count of zero is rejected either way.
fn resolve_limit(supplied: Option<usize>) -> anyhow::Result<usize> {
    if let Some(n) = supplied {
        if n < 1 {
            return Err(AnalyzerError::InvalidLimit(n).into());
        }
        return Ok(n);
    }

    if !std::io::stdin().is_terminal() {
        anyhow::bail!("no results count supplied and no terminal to prompt on");
    }

    prompt_limit()
}

fn prompt_limit() -> anyhow::Result<usize> {
    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        print!("How many results? ");
        std::io::stdout().flush().context("Failed to flush stdout")?;

        line.clear();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read from terminal")?;
        if read == 0 {
            anyhow::bail!("cancelled: no results count entered");
        }

        match line.trim().parse::<usize>() {
            Ok(n) if n >= 1 => return Ok(n),
            _ => eprintln!("Please enter a positive integer."),
        }
    }
}
