use anyhow::Result;
use clap::Parser;
use graph::{classify, export, GitSource, Walker};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "repograph")]
#[command(
    about = "Classify every commit reachable from HEAD by its structural role",
    long_about = None
)]
struct Cli {
    /// Path to the repository
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Destination file for the JSON commit records
    #[arg(short, long, default_value = "metadata.json")]
    output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "repograph={},graph={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let source = GitSource::open(Some(&cli.path))?;
    let mut dag = Walker::new(&source).walk()?;
    classify(&mut dag);

    let stats = dag.stats();
    info!(
        commits = stats.total_commits,
        edges = stats.total_edges,
        merges = stats.merge_commits,
        roots = stats.root_commits,
        forks = stats.fork_commits,
        tips = stats.tip_commits,
        "ancestry graph built"
    );

    export::write_json(&dag, &cli.output)?;
    println!(
        "Wrote {} commit records to {}",
        dag.node_count(),
        cli.output.display()
    );

    Ok(())
}
