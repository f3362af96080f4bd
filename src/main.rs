//! LinkRank CLI — PageRank for a directory of HTML pages

use anyhow::Context;
use clap::Parser;
use linkrank::{crawl, rank, render, OutputFormat, RankConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "linkrank", version, about = "PageRank by sampling and by iteration")]
struct Cli {
    /// Directory of *.html pages
    corpus: PathBuf,

    /// Probability of following a link rather than jumping to a random page
    #[arg(long, default_value_t = 0.85, env = "LINKRANK_DAMPING")]
    damping: f64,

    /// Rounds for the sampling estimator
    #[arg(long, default_value_t = 10_000, env = "LINKRANK_SAMPLES")]
    samples: usize,

    /// Seed for the sampling start page
    #[arg(long)]
    seed: Option<u64>,

    /// Sweep cap for the iterative solver
    #[arg(long, default_value_t = 10_000)]
    max_sweeps: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

fn main() {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = RankConfig {
        damping_factor: cli.damping,
        samples: cli.samples,
        max_sweeps: cli.max_sweeps,
        seed: cli.seed,
        ..RankConfig::default()
    };
    config.validate()?;

    let corpus = crawl(&cli.corpus)
        .with_context(|| format!("failed to crawl {}", cli.corpus.display()))?;
    let report = rank(&corpus, &config)?;

    print!("{}", render(&report, cli.format)?);
    Ok(())
}
