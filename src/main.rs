//! csvtool
//!
//! Run with: cargo run -- [FILE] [COMMANDS...]
//!
//! Environment variables:
//! - CSVTOOL_DATA_DIR: Directory relative CSV paths are resolved against (default: .)
//! - CSVTOOL_LOG: Log filter used when RUST_LOG is unset (default: csvtool=warn)
//! - RUST_LOG: Log filter
//!
//! Logs go to stderr; table output goes to stdout.

mod cli;

use clap::Parser;
use cli::CliApp;
use csvtool::repl::Status;
use csvtool::{Repl, Table};
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = CliApp::parse();
    let config = app.config();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("csvtool configuration: {:?}", config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut repl = match &app.file {
        Some(file) => match Table::from_file(file, config.resolve(file)) {
            Ok(table) => {
                writeln!(out, "Table: {} loaded.", file)?;
                Repl::with_table(table, config)
            }
            Err(e) => {
                writeln!(out, "{}", e)?;
                out.flush()?;
                std::process::exit(1);
            }
        },
        None => Repl::new(config),
    };

    if app.commands.is_empty() {
        let stdin = std::io::stdin();
        repl.run_interactive(stdin.lock(), &mut out)?;
    } else if repl.run_batch(&app.commands, &mut out)? == Status::Failed {
        out.flush()?;
        std::process::exit(1);
    }

    Ok(())
}
