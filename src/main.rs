// Entry point: program main
// Handles --help, --version, the headless `trace` subcommand, and runs the TUI

use anyhow::{Context, Result};
use sortvis::array::random_values;
use sortvis::cli::{self, Command};
use sortvis::config::Config;
use std::env;
use std::path::Path;
use std::process;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

// The TUI owns the terminal, so logs only go somewhere when a file is given.
fn init_logging(config: &Config) -> Result<()> {
    let file = config.open_log_file().with_context(|| {
        format!(
            "failed to create log file {}",
            config.log_file.as_deref().unwrap_or(Path::new("")).display()
        )
    })?;
    let Some(file) = file else {
        return Ok(());
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    Ok(())
}

async fn run_command(command: Command) -> Result<()> {
    match command {
        Command::Help => println!("{}", cli::help_text()),
        Command::Version => println!("sortvis {}", env!("CARGO_PKG_VERSION")),
        Command::Trace {
            algorithm,
            direction,
            values,
            config,
        } => {
            init_logging(&config)?;
            let values = values.unwrap_or_else(|| {
                random_values(
                    &mut config.rng(),
                    config.count,
                    config.min_value,
                    config.max_value,
                )
            });
            let trace = sortvis::trace::trace(algorithm, direction, values)?;
            println!("{}", trace.to_json()?);
        }
        Command::Interactive(config) => {
            init_logging(&config)?;
            sortvis::ui::run(config)
                .await
                .context("interactive session failed")?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let command = match cli::parse_from(args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Try 'sortvis --help' for more information.");
            process::exit(2);
        }
    };
    if let Err(e) = run_command(command).await {
        eprintln!("{e:#}");
        process::exit(2);
    }
}
