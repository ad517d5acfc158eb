//! Pure transition function for the main-process state tree.

use lectern_model::NetStatus;

use crate::action::Action;
use crate::state::RootState;

/// Apply `action` to `state`, returning the next state.
///
/// `state` is never modified; each slice not touched by the action is
/// carried over unchanged.
pub fn reduce(state: &RootState, action: &Action) -> RootState {
    let mut next = state.clone();
    match action {
        Action::AppInit => next.app.initialized = true,
        Action::NetOnline => next.net.status = NetStatus::Online,
        Action::NetOffline => next.net.status = NetStatus::Offline,
        Action::NetUnknown => next.net.status = NetStatus::Unknown,
        Action::ReaderOpenSuccess { reader } => {
            // An empty payload only carries meaning for renderers
            if let Some(reader) = reader {
                next.reader
                    .readers
                    .insert(reader.window_identifier, reader.clone());
            }
        }
        Action::ReaderCloseSuccess { window_identifier } => {
            next.reader.readers.remove(window_identifier);
        }
        Action::ReaderConfigSetSuccess { config } => next.reader.config = config.clone(),
        Action::ReaderModeSetSuccess { mode } => next.reader.mode = *mode,
        Action::I18nSet { locale } => next.i18n.locale.clone_from(locale),
        Action::UpdateLatestVersionSet {
            status,
            latest_version,
            latest_version_url,
        } => {
            next.update.status = *status;
            next.update.latest_version.clone_from(latest_version);
            next.update.latest_version_url.clone_from(latest_version_url);
        }
    }
    next
}
