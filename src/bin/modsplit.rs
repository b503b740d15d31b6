//! modsplit CLI: extract reference-closed modules from flow documents.
//!
//! Usage:
//!   modsplit <PATH> <LOWER> <UPPER> [IGNORED_FIELD ...] [--config FILE]

use clap::Parser;
use modsplit::{resolve_config_path, run, PlusConfig, RunOptions, RunSummary, SizeBounds};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "modsplit",
    version,
    about = "Extract size-bounded, reference-closed modules from node-link JSON flows"
)]
struct Cli {
    /// A .json flow file or a directory of them
    path: PathBuf,
    /// Smallest module size (nodes)
    lower: usize,
    /// Largest module size (nodes)
    upper: usize,
    /// Field names whose values never count as references
    ignored: Vec<String>,
    /// Config file (defaults to plusconfig.json beside the input, then in
    /// the working directory)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_summary(summary: &RunSummary) {
    for file in &summary.files {
        println!("[FILE] {}", file.path.display());
        println!(
            "  nodes: {}  references: {}  subgraphs: {}  written: {}",
            file.nodes,
            file.edges,
            file.subgraphs,
            file.written.len()
        );
    }
    if summary.files_failed > 0 {
        println!("{} file(s) could not be loaded", summary.files_failed);
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // help and version go to stdout and are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let bounds = match SizeBounds::new(cli.lower, cli.upper) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let config_path = cli.config.unwrap_or_else(|| resolve_config_path(&cli.path));
    let (config, config_error) = match PlusConfig::load(&config_path) {
        Ok(config) => (config, None),
        Err(e) => (PlusConfig::default(), Some(e)),
    };
    init_logging(config.verbose_debug);
    if let Some(e) = config_error {
        tracing::warn!("{}, using default config", e);
    }
    tracing::debug!(config = %config_path.display(), ?config, "configuration");

    let options = RunOptions {
        input: cli.path,
        bounds,
        ignored_labels: cli.ignored,
        config,
    };
    match run(&options) {
        Ok(summary) => {
            print_summary(&summary);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
