// src/main.rs

use anyhow::Result;
use clap::Parser;
use fix_images::cli::Cli;
use fix_images::output::write_report;
use fix_images::{run, ConfigBuilder};
use std::io;

fn main() -> Result<()> {
    // Initialize logging on top of RUST_LOG: 'debug' for debug builds, 'info' for release.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "fix_images=debug".parse()?
                } else {
                    "fix_images=info".parse()?
                },
            ),
        )
        .init();

    log::debug!("Starting fix-images v{}...", env!("CARGO_PKG_VERSION"));

    // --- Setup ---
    let cli = Cli::parse();
    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully: {:?}", config);

    // --- Execution ---
    match run(&config) {
        Ok(report) => {
            write_report(&mut io::stdout().lock(), &report)?;
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
