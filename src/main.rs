//! Berlinuhr CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use berlinuhr::cli::{Cli, Commands};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show { time, glyphs } => berlinuhr::cli::commands::show::execute(time, glyphs, cli.json),
    };

    if let Err(err) = result {
        berlinuhr::cli::handle_error(&err, cli.json);
    }
}
