use std::sync::Arc;

use anyhow::{Context, Result};
use lectern_app::platform::{Platform, SystemPlatform};
use lectern_app::session::run_session;
use lectern_config::{
    AppPaths, FileConfigRepository, LocaleResolution, MemoryConfigRepository, Settings,
    load_locale,
};
use lectern_storage::{ProtocolResponse, PublicationStorage, ResourceResolver};
use tokio::io::BufReader;
use tokio::runtime::Runtime;
use tracing::info;

use crate::cli::{LocaleArgs, ResolveArgs, SessionArgs};

/// Paths and settings shared by every command.
pub struct AppContext {
    pub paths: AppPaths,
    pub settings: Settings,
}

pub fn run_session_command(args: &SessionArgs, context: &AppContext) -> Result<()> {
    let platform = platform_for(args.os_locale.as_deref());
    let runtime = runtime()?;
    let input = BufReader::new(tokio::io::stdin());
    let output = tokio::io::stdout();

    let summary = if args.ephemeral {
        let repository = Arc::new(MemoryConfigRepository::new());
        runtime.block_on(run_session(repository, &platform, input, output))?
    } else {
        let repository = Arc::new(FileConfigRepository::new(
            context.paths.config_repository_dir(),
        ));
        runtime.block_on(run_session(repository, &platform, input, output))?
    };

    info!(
        open_windows = summary.open_windows,
        revision = summary.revision,
        "Session closed"
    );
    Ok(())
}

/// Resolve a URL, printing the path. Returns false when the request is
/// rejected.
pub fn run_resolve(args: &ResolveArgs, context: &AppContext) -> bool {
    let root = args
        .root
        .clone()
        .unwrap_or_else(|| context.settings.storage_root(&context.paths));
    let resolver = ResourceResolver::new(PublicationStorage::new(root));

    if args.existing {
        return match resolver.respond(&args.url) {
            ProtocolResponse::File(path) => {
                println!("{}", path.display());
                true
            }
            ProtocolResponse::NotFound => {
                eprintln!("not found: {}", args.url);
                false
            }
        };
    }

    match resolver.resolve(&args.url) {
        Ok(path) => {
            println!("{}", path.display());
            true
        }
        Err(error) => {
            eprintln!("error: {error}");
            false
        }
    }
}

pub fn run_locale(args: &LocaleArgs, context: &AppContext) -> Result<LocaleResolution> {
    let platform = platform_for(args.os_locale.as_deref());
    let repository = FileConfigRepository::new(context.paths.config_repository_dir());
    let os_locale = platform.os_locale();

    let runtime = runtime()?;
    Ok(runtime.block_on(load_locale(&repository, os_locale.as_deref())))
}

fn platform_for(os_locale: Option<&str>) -> SystemPlatform {
    match os_locale {
        Some(locale) => SystemPlatform::with_locale(locale),
        None => SystemPlatform::new(),
    }
}

/// Single-threaded runtime; the window manager lives on this thread.
fn runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("start async runtime")
}
