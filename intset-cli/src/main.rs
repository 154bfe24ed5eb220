use std::{io, path::PathBuf};

use clap::Parser;
use intset_cli::{run_file, run_repl};
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser)]
#[clap(
    name = "intset",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
struct Cli {
    /// Script to run. Starts a prompt when omitted.
    path: Option<PathBuf>,

    /// Log more (-v: debug, -vv: trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.path {
        Some(path) => run_file(&path)?,
        None => run_repl()?,
    }

    Ok(())
}
