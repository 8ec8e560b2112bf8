//! `dtmtile` binary entry point.

use clap::Parser;
use dtmtile_runner::{run, Args};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut stdout = std::io::stdout().lock();
    if let Err(err) = run(&args, &mut stdout) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}
