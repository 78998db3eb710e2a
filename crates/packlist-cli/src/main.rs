//! CLI binary entrypoint.

mod print;
mod sorting;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use packlist_targets::TargetName;

/// Preview which files a packaging ecosystem would ship.
#[derive(Debug, Parser)]
#[command(name = "packlist", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scan a directory and list the files the target would include.
    Scan(ScanArgs),
    /// List the supported targets.
    Targets,
}

#[derive(Debug, clap::Args)]
struct ScanArgs {
    /// Directory to scan. Defaults to the current directory.
    path: Option<PathBuf>,

    /// The ecosystem to emulate.
    #[arg(short, long, default_value = "git")]
    target: TargetName,

    /// Maximum listing depth; deeper files collapse into `...+N` markers.
    /// Depth 0 shows children of the scan root.
    #[arg(long)]
    depth: Option<usize>,

    /// List what the target ignores instead of what it ships.
    #[arg(long)]
    invert: bool,

    /// Faster scans beyond the depth limit: stop auditing a collapsed
    /// directory after its first included file (approximate totals).
    #[arg(long)]
    fast_depth: bool,

    /// Skip subtrees excluded by the target's built-in rules entirely.
    #[arg(long)]
    fast_internal: bool,

    /// Show which manifest decided each entry.
    #[arg(long)]
    show_sources: bool,

    /// Print bare paths only, no colors or summary.
    #[arg(short, long)]
    parsable: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match cli.command {
        Commands::Scan(args) => print::run_scan(args),
        Commands::Targets => {
            for name in TargetName::ALL {
                println!("{name}\t{}", name.target().hint);
            }
            Ok(())
        }
    }
}
