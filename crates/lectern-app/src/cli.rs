//! CLI argument definitions for the Lectern core.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lectern",
    version,
    about = "Lectern main-process core",
    long_about = "Window lifecycle, state synchronization and store:// resolution \
                  for the Lectern reading application.\n\n\
                  The session command drives the core headlessly from JSON-lines \
                  window events on stdin."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags and settings).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (defaults to the settings file, then pretty).
    #[arg(long = "log-format", value_enum, global = true)]
    pub log_format: Option<LogFormatArg>,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file (default: platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a headless session reading window events from stdin.
    Session(SessionArgs),

    /// Resolve a store:// URL to a file path.
    Resolve(ResolveArgs),

    /// Resolve the startup locale and print it.
    Locale(LocaleArgs),
}

#[derive(Parser)]
pub struct SessionArgs {
    /// Keep config documents in memory instead of the config directory.
    #[arg(long = "ephemeral")]
    pub ephemeral: bool,

    /// OS locale to report instead of reading the environment.
    #[arg(long = "os-locale", value_name = "LOCALE")]
    pub os_locale: Option<String>,
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// Request URL, such as store://books/1/chapter1.html.
    #[arg(value_name = "URL")]
    pub url: String,

    /// Storage root (default: settings, then the platform data directory).
    #[arg(long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Only succeed when the target is an existing file.
    #[arg(long = "existing")]
    pub existing: bool,
}

#[derive(Parser)]
pub struct LocaleArgs {
    /// OS locale to report instead of reading the environment.
    #[arg(long = "os-locale", value_name = "LOCALE")]
    pub os_locale: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
