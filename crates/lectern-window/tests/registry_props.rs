//! Property tests for registry bookkeeping.

use std::collections::BTreeSet;

use lectern_model::{AppWindowType, WindowIdentifier};
use lectern_store::Store;
use lectern_window::{AppWindow, RecordingWindow, WindowManager, hooks};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Open(AppWindowType),
    /// Close the n-th registered window (modulo the open count).
    Close(usize),
    /// Close an identifier that was never registered.
    CloseUnknown,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => prop_oneof![Just(AppWindowType::Library), Just(AppWindowType::Reader)]
            .prop_map(Op::Open),
        2 => any::<usize>().prop_map(Op::Close),
        1 => Just(Op::CloseUnknown),
    ]
}

proptest! {
    #[test]
    fn registry_tracks_opened_minus_closed(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut manager = WindowManager::new(Store::default());
        let mut expected = BTreeSet::new();

        for op in ops {
            match op {
                Op::Open(kind) => {
                    let window = AppWindow::new(WindowIdentifier::new(), kind, RecordingWindow::shared());
                    expected.insert(window.identifier());
                    prop_assert!(manager.window_opened(window).is_ok());
                }
                Op::Close(n) => {
                    if expected.is_empty() {
                        continue;
                    }
                    let id = *expected.iter().nth(n % expected.len()).unwrap();
                    expected.remove(&id);
                    prop_assert!(manager.window_closed(id).is_ok());
                }
                Op::CloseUnknown => {
                    prop_assert!(manager.window_closed(WindowIdentifier::new()).is_err());
                }
            }
            let actual: BTreeSet<_> = manager.registry().iter().map(AppWindow::identifier).collect();
            prop_assert_eq!(&actual, &expected);
        }
    }

    #[test]
    fn cascades_only_shrink_the_registry(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut manager = WindowManager::new(Store::default());
        manager.on_open(hooks::sync_on_open);
        manager.on_close(hooks::lifecycle_on_close);
        manager.on_close(hooks::release_reader_on_close);
        let mut opened = BTreeSet::new();

        for op in ops {
            match op {
                Op::Open(kind) => {
                    let window = AppWindow::new(WindowIdentifier::new(), kind, RecordingWindow::shared());
                    opened.insert(window.identifier());
                    prop_assert!(manager.window_opened(window).is_ok());
                }
                Op::Close(n) => {
                    let open: Vec<_> = manager.registry().iter().map(AppWindow::identifier).collect();
                    if open.is_empty() {
                        continue;
                    }
                    let id = open[n % open.len()];
                    let library_closed = manager.registry().get(&id).map(AppWindow::kind)
                        == Some(AppWindowType::Library);
                    prop_assert!(manager.window_closed(id).is_ok());
                    prop_assert!(!manager.registry().contains(&id));
                    if library_closed {
                        prop_assert!(manager.registry().is_empty());
                    }
                }
                Op::CloseUnknown => {
                    let before = manager.registry().len();
                    prop_assert!(manager.window_closed(WindowIdentifier::new()).is_err());
                    prop_assert_eq!(manager.registry().len(), before);
                }
            }
            for window in manager.registry().iter() {
                prop_assert!(opened.contains(&window.identifier()));
            }
        }
    }
}
