//! linelog CLI: append leveled records to a shared log file.

mod cli;
mod error_fmt;

use std::path::{Path, PathBuf};

use clap::Parser;
use eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, DEFAULT_CONFIG, JSON_MODE};
use crate::error_fmt::{exit_code_for_error, format_error_json, humanize};
use linelog_core::{FileLogger, Level, Logger};

fn main() {
    let _ = color_eyre::install();
    let cli = Cli::parse();
    let _ = JSON_MODE.set(cli.json);
    init_diagnostics(&cli.log_level);

    if let Err(err) = run(&cli) {
        if JSON_MODE.get().copied().unwrap_or(false) {
            eprintln!("{}", format_error_json(&err));
        } else {
            eprintln!("{}", humanize(&err));
        }
        std::process::exit(exit_code_for_error(&err));
    }
}

/// Console diagnostics for the CLI itself, on stderr. RUST_LOG wins over
/// --log-level. This channel is separate from the destination log file.
fn init_diagnostics(level: &str) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level)
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(cli: &Cli) -> eyre::Result<()> {
    let logger = match destination_from_args(cli)? {
        Some(path) => FileLogger::with_destination(path)?,
        None => FileLogger::new()?,
    };

    match &cli.cmd {
        Commands::Write { level, message } => {
            let level = Level::from(*level);
            logger.log(level, message)?;
            tracing::debug!(level = %level, destination = %logger.destination().display(), "record appended");
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "destination": logger.destination().display().to_string(),
                        "level": level.as_str(),
                        "message": message,
                    })
                );
            } else {
                println!(
                    "appended [{level}] record to {}",
                    logger.destination().display()
                );
            }
        }
        Commands::SelfCheck => {
            logger.check_destination()?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "status": "ok",
                        "destination": logger.destination().display().to_string(),
                    })
                );
            } else {
                println!("ok: {} is writable", logger.destination().display());
            }
        }
    }
    Ok(())
}

/// Destination precedence: --dest flag > config logging.file > sink default.
/// The default config path may be absent; an explicitly passed one must
/// exist.
fn destination_from_args(cli: &Cli) -> eyre::Result<Option<PathBuf>> {
    if let Some(dest) = &cli.dest {
        return Ok(Some(dest.clone()));
    }
    if cli.config.exists() {
        let cfg = linelog_config::Config::load(&cli.config)
            .wrap_err_with(|| format!("failed to load config {}", cli.config.display()))?;
        return Ok(cfg.logging.file.map(PathBuf::from));
    }
    if cli.config != Path::new(DEFAULT_CONFIG) {
        eyre::bail!("config file not found: {}", cli.config.display());
    }
    Ok(None)
}
