//! Lectern core CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use lectern_app::logging::{LogConfig, LogFormat, init_logging};
use lectern_config::{AppPaths, Settings};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{AppContext, run_locale, run_resolve, run_session_command};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();

    let paths = AppPaths::discover();
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(&paths),
    };

    let log_config = log_config_from_cli(&cli, &settings);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let context = AppContext { paths, settings };
    let exit_code = match &cli.command {
        Command::Session(args) => match run_session_command(args, &context) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Resolve(args) => {
            if run_resolve(args, &context) {
                0
            } else {
                1
            }
        }
        Command::Locale(args) => match run_locale(args, &context) {
            Ok(resolution) => {
                println!("{} ({})", resolution.locale, resolution.source);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration with consistent precedence:
/// `--log-level`, then `-v`/`-q`, then settings, then `RUST_LOG`, then warn.
fn log_config_from_cli(cli: &Cli, settings: &Settings) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };

    let settings_level = settings
        .logging
        .level
        .as_deref()
        .and_then(|level| level.parse::<LevelFilter>().ok());
    if !cli.verbosity.is_present()
        && let Some(level) = settings_level
    {
        config.level_filter = level;
    }
    config.use_env_filter =
        !(cli.verbosity.is_present() || cli.log_level.is_some() || settings_level.is_some());

    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }

    config.format = match cli.log_format {
        Some(LogFormatArg::Pretty) => LogFormat::Pretty,
        Some(LogFormatArg::Compact) => LogFormat::Compact,
        Some(LogFormatArg::Json) => LogFormat::Json,
        None => settings
            .logging
            .format
            .as_deref()
            .and_then(LogFormat::from_name)
            .unwrap_or_default(),
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
