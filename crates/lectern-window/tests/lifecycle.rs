//! Open/close lifecycle scenarios driven through the window manager.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use lectern_model::{NetStatus, ReaderMode, ReaderStateReader, WindowIdentifier};
use lectern_store::{Action, RootState, Store, reduce};
use lectern_sync::{Envelope, RendererMirror, SyncEvent, WinEvent};
use lectern_window::{
    AppWindow, HookContext, RecordingWindow, RegistryError, WindowManager, hooks,
};

fn manager_with(state: RootState) -> WindowManager {
    let mut manager = WindowManager::new(Store::new(state));
    manager.on_open(hooks::sync_on_open);
    manager.on_close(hooks::lifecycle_on_close);
    manager.on_close(hooks::release_reader_on_close);
    manager
}

fn detached_state() -> RootState {
    reduce(
        &RootState::default(),
        &Action::ReaderModeSetSuccess {
            mode: ReaderMode::Detached,
        },
    )
}

fn open(manager: &mut WindowManager, window: AppWindow) -> WindowIdentifier {
    let id = window.identifier();
    manager.window_opened(window).unwrap();
    id
}

fn actions(envelopes: &[Envelope]) -> Vec<Action> {
    envelopes
        .iter()
        .filter_map(|e| match e {
            Envelope::Sync(SyncEvent::MainAction { action }) => Some(action.clone()),
            Envelope::Win(_) => None,
        })
        .collect()
}

#[test]
fn closing_library_closes_every_other_window() {
    for others in 1..=3 {
        let mut manager = manager_with(RootState::default());
        let library = RecordingWindow::shared();
        let library_id = open(&mut manager, AppWindow::library(library.clone()));

        let readers: Vec<Arc<RecordingWindow>> =
            (0..others).map(|_| RecordingWindow::shared()).collect();
        for reader in &readers {
            open(&mut manager, AppWindow::reader(reader.clone()));
        }
        assert_eq!(manager.registry().len(), others + 1);

        manager.window_closed(library_id).unwrap();

        assert!(manager.registry().is_empty(), "{others} readers left open");
        for reader in &readers {
            assert_eq!(reader.close_requests(), 1);
        }
        assert_eq!(library.close_requests(), 0);
    }
}

#[test]
fn cascade_echo_from_windowing_layer_is_ignored() {
    let mut manager = manager_with(RootState::default());
    let library_id = open(&mut manager, AppWindow::library(RecordingWindow::shared()));
    let reader = RecordingWindow::shared();
    let reader_id = open(&mut manager, AppWindow::reader(reader.clone()));

    manager.window_closed(library_id).unwrap();
    // The native layer reports the cascaded close afterwards
    assert_eq!(
        manager.window_closed(reader_id),
        Err(RegistryError::NotFound(reader_id))
    );
    assert_eq!(reader.close_requests(), 1);
}

#[test]
fn hidden_library_closes_with_last_detached_reader() {
    let mut manager = manager_with(detached_state());
    let library = RecordingWindow::shared();
    open(&mut manager, AppWindow::library(library.clone()));
    let reader_id = open(&mut manager, AppWindow::reader(RecordingWindow::shared()));

    library.set_visible(false);
    manager.window_closed(reader_id).unwrap();

    assert!(manager.registry().is_empty());
    assert_eq!(library.close_requests(), 1);
    assert_eq!(manager.state().reader.mode, ReaderMode::Attached);
}

#[test]
fn visible_library_reattaches_reader_without_closing() {
    let mut manager = manager_with(detached_state());
    let library = RecordingWindow::shared();
    let library_id = open(&mut manager, AppWindow::library(library.clone()));
    let reader_id = open(&mut manager, AppWindow::reader(RecordingWindow::shared()));
    library.take_sent();

    manager.window_closed(reader_id).unwrap();

    assert_eq!(manager.state().reader.mode, ReaderMode::Attached);
    assert!(manager.registry().contains(&library_id));
    assert!(!library.is_closed());
    assert_eq!(
        actions(&library.sent()),
        vec![Action::ReaderModeSetSuccess {
            mode: ReaderMode::Attached
        }]
    );
}

#[test]
fn closing_one_of_several_readers_changes_nothing() {
    let mut manager = manager_with(detached_state());
    let library = RecordingWindow::shared();
    open(&mut manager, AppWindow::library(library.clone()));
    let first = open(&mut manager, AppWindow::reader(RecordingWindow::shared()));
    let second = RecordingWindow::shared();
    open(&mut manager, AppWindow::reader(second.clone()));

    manager.window_closed(first).unwrap();

    assert_eq!(manager.registry().len(), 2);
    assert_eq!(manager.state().reader.mode, ReaderMode::Detached);
    assert!(!library.is_closed());
    assert!(!second.is_closed());
}

#[test]
fn closing_last_library_is_terminal() {
    let mut manager = manager_with(RootState::default());
    let library_id = open(&mut manager, AppWindow::library(RecordingWindow::shared()));
    let revision = manager.store().revision();

    manager.window_closed(library_id).unwrap();

    assert!(manager.registry().is_empty());
    assert_eq!(manager.store().revision(), revision);
}

#[test]
fn opening_sends_seven_envelopes_identity_first() {
    let mut manager = manager_with(RootState::default());
    let handle = RecordingWindow::shared();
    let id = open(&mut manager, AppWindow::reader(handle.clone()));

    let sent = handle.sent();
    assert_eq!(sent.len(), 7);
    assert_eq!(sent[0], Envelope::Win(WinEvent::IdResponse { win_id: id }));
    assert_eq!(
        actions(&sent)
            .iter()
            .map(Action::type_name)
            .collect::<Vec<_>>(),
        [
            "NET_STATUS_UNKNOWN",
            "READER_OPEN_SUCCESS",
            "READER_CONFIG_SET_SUCCESS",
            "READER_MODE_SET_SUCCESS",
            "I18N_SET",
            "UPDATE_LATEST_VERSION_SET",
        ]
    );
}

#[test]
fn replayed_sequence_is_idempotent_for_the_renderer() {
    let mut state = detached_state();
    state = reduce(&state, &Action::NetOnline);
    let mut manager = manager_with(state);
    let handle = RecordingWindow::shared();
    open(&mut manager, AppWindow::reader(handle.clone()));

    let sent = handle.sent();
    let mut once = RendererMirror::new();
    once.apply_all(&sent);
    let mut twice = RendererMirror::new();
    twice.apply_all(&sent);
    twice.apply_all(&sent);

    assert_eq!(once.state(), twice.state());
    assert_eq!(once.state().net, NetStatus::Online);
    assert_eq!(once.state().mode, ReaderMode::Detached);
}

#[test]
fn open_reader_receives_its_own_reader_record() {
    let handle = RecordingWindow::shared();
    let window = AppWindow::reader(handle.clone());
    let reader = ReaderStateReader::new(
        "reader-1",
        "pub-1",
        "store://pub-1/manifest.json",
        window.identifier(),
    );
    let state = reduce(
        &RootState::default(),
        &Action::ReaderOpenSuccess {
            reader: Some(reader.clone()),
        },
    );
    let mut manager = manager_with(state);
    open(&mut manager, window);

    let mut mirror = RendererMirror::new();
    mirror.apply_all(&handle.sent());
    assert_eq!(mirror.state().reader, Some(reader));
}

#[test]
fn empty_reader_dispatch_keeps_renderer_in_step_with_store() {
    let handle = RecordingWindow::shared();
    let window = AppWindow::reader(handle.clone());
    let reader_window = window.identifier();
    let reader = ReaderStateReader::new("r", "p", "store://p/m.json", reader_window);
    let state = reduce(
        &RootState::default(),
        &Action::ReaderOpenSuccess {
            reader: Some(reader.clone()),
        },
    );
    let mut manager = manager_with(state);
    open(&mut manager, window);

    manager.dispatch(Action::ReaderOpenSuccess { reader: None });

    let mut mirror = RendererMirror::new();
    mirror.apply_all(&handle.sent());
    assert_eq!(
        manager.state().reader.reader_for(&reader_window),
        Some(&reader)
    );
    assert_eq!(mirror.state().reader, Some(reader));
}

#[test]
fn closed_reader_record_is_released() {
    let handle = RecordingWindow::shared();
    let window = AppWindow::reader(handle);
    let reader_window = window.identifier();
    let state = reduce(
        &detached_state(),
        &Action::ReaderOpenSuccess {
            reader: Some(ReaderStateReader::new("r", "p", "store://p/m.json", reader_window)),
        },
    );
    let mut manager = manager_with(state);
    open(&mut manager, AppWindow::library(RecordingWindow::shared()));
    open(&mut manager, window);

    manager.window_closed(reader_window).unwrap();

    assert!(manager.state().reader.readers.is_empty());
}

#[test]
fn failed_delivery_does_not_stop_the_replay() {
    let mut manager = manager_with(RootState::default());
    let library = RecordingWindow::shared();
    open(&mut manager, AppWindow::library(library.clone()));

    let gone = RecordingWindow::shared();
    gone.disconnect();
    let gone_id = open(&mut manager, AppWindow::reader(gone.clone()));

    assert!(manager.registry().contains(&gone_id));
    assert!(gone.sent().is_empty());

    library.take_sent();
    manager.dispatch(Action::NetOffline);
    assert_eq!(actions(&library.sent()), vec![Action::NetOffline]);
}

#[test]
fn dispatch_broadcasts_to_every_window() {
    let mut manager = manager_with(RootState::default());
    let first = RecordingWindow::shared();
    let second = RecordingWindow::shared();
    open(&mut manager, AppWindow::library(first.clone()));
    open(&mut manager, AppWindow::reader(second.clone()));
    first.take_sent();
    second.take_sent();

    manager.dispatch(Action::I18nSet {
        locale: "de".to_string(),
    });
    manager.dispatch(Action::AppInit);

    let expected = vec![Action::I18nSet {
        locale: "de".to_string(),
    }];
    assert_eq!(actions(&first.sent()), expected);
    assert_eq!(actions(&second.sent()), expected);
    assert!(manager.state().app.initialized);
}

#[test]
fn duplicate_open_is_rejected_without_sync() {
    let mut manager = manager_with(RootState::default());
    let handle = RecordingWindow::shared();
    let window = AppWindow::library(handle.clone());
    let id = window.identifier();
    manager.window_opened(window.clone()).unwrap();
    handle.take_sent();

    assert_eq!(
        manager.window_opened(window),
        Err(RegistryError::DuplicateIdentifier(id))
    );
    assert!(handle.sent().is_empty());
    assert_eq!(manager.registry().len(), 1);
}

#[test]
fn hooks_run_in_registration_order_and_see_updated_registry() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut manager = WindowManager::new(Store::default());

    let first = Rc::clone(&log);
    manager.on_open(move |ctx: &mut HookContext<'_>, window: &AppWindow| {
        assert!(ctx.registry().contains(&window.identifier()));
        first.borrow_mut().push("open-1");
    });
    let second = Rc::clone(&log);
    manager.on_open(move |_: &mut HookContext<'_>, _: &AppWindow| {
        second.borrow_mut().push("open-2");
    });
    let third = Rc::clone(&log);
    manager.on_close(move |ctx: &mut HookContext<'_>, window: &AppWindow| {
        assert!(!ctx.registry().contains(&window.identifier()));
        third.borrow_mut().push("close");
    });

    let id = open(&mut manager, AppWindow::library(RecordingWindow::shared()));
    manager.window_closed(id).unwrap();

    assert_eq!(*log.borrow(), ["open-1", "open-2", "close"]);
}

#[test]
fn explicit_close_runs_policy() {
    let mut manager = manager_with(RootState::default());
    let library = RecordingWindow::shared();
    let library_id = open(&mut manager, AppWindow::library(library.clone()));
    let reader = RecordingWindow::shared();
    open(&mut manager, AppWindow::reader(reader.clone()));

    manager.close_window(library_id).unwrap();

    assert_eq!(library.close_requests(), 1);
    assert_eq!(reader.close_requests(), 1);
    assert!(manager.registry().is_empty());
}
