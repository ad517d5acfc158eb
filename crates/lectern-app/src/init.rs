//! Application startup and main-loop event handling.

use std::sync::Arc;

use lectern_config::{ConfigRepository, LocaleResolution, load_locale};
use lectern_model::{NetStatus, WindowIdentifier};
use lectern_store::Action;
use lectern_window::{AppWindow, RegistryError, WindowManager, hooks};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::platform::{APP_USER_MODEL_ID, Platform};

/// Something that happened outside the main loop and must be applied on it.
#[derive(Debug)]
pub enum AppEvent {
    WindowOpened(AppWindow),
    /// The windowing layer reports a closed window.
    WindowClosed(WindowIdentifier),
    LocaleResolved(LocaleResolution),
    NetStatusChanged(NetStatus),
    Dispatch(Action),
}

/// Bring the core up.
///
/// Dispatches `AppInit`, starts the locale load, registers the lifecycle
/// hooks and sets the application identity. The locale arrives later as
/// [`AppEvent::LocaleResolved`] on `events`.
///
/// Must be called from within a tokio runtime.
pub fn init_app<R>(
    manager: &mut WindowManager,
    repository: Arc<R>,
    platform: &dyn Platform,
    events: UnboundedSender<AppEvent>,
) -> JoinHandle<()>
where
    R: ConfigRepository + Send + Sync + 'static,
{
    manager.dispatch(Action::AppInit);

    let os_locale = platform.os_locale();
    let locale_task = tokio::spawn(async move {
        let resolution = load_locale(repository.as_ref(), os_locale.as_deref()).await;
        if events.send(AppEvent::LocaleResolved(resolution)).is_err() {
            tracing::debug!("Main loop gone before locale resolved");
        }
    });

    manager.on_open(hooks::sync_on_open);
    manager.on_close(hooks::lifecycle_on_close);
    manager.on_close(hooks::release_reader_on_close);

    platform.set_app_user_model_id(APP_USER_MODEL_ID);
    tracing::info!("Application initialized");
    locale_task
}

/// Apply one event to the manager.
///
/// Registry errors are logged; a close for a window that is no longer
/// registered is the normal echo of a cascade close. A duplicate open is a
/// caller bug and panics in debug builds.
pub fn handle_event(manager: &mut WindowManager, event: AppEvent) {
    match event {
        AppEvent::WindowOpened(window) => {
            if let Err(error) = manager.window_opened(window) {
                tracing::warn!(%error, "Ignoring window open");
                debug_assert!(
                    !matches!(error, RegistryError::DuplicateIdentifier(_)),
                    "{error}"
                );
            }
        }
        AppEvent::WindowClosed(id) => {
            if let Err(error) = manager.window_closed(id) {
                tracing::debug!(%error, "Ignoring close notification");
            }
        }
        AppEvent::LocaleResolved(resolution) => {
            tracing::info!(locale = %resolution.locale, source = %resolution.source, "Locale resolved");
            manager.dispatch(Action::I18nSet {
                locale: resolution.locale,
            });
        }
        AppEvent::NetStatusChanged(status) => {
            manager.dispatch(Action::for_net_status(status));
        }
        AppEvent::Dispatch(action) => {
            manager.dispatch(action);
        }
    }
}
