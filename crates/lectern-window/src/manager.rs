//! Window manager: registry, store and lifecycle hooks wired together.

use std::collections::VecDeque;
use std::sync::Arc;

use lectern_model::WindowIdentifier;
use lectern_store::{Action, RootState, Store};
use lectern_sync::Envelope;

use crate::error::RegistryError;
use crate::registry::WindowRegistry;
use crate::window::AppWindow;

/// Callback run when a window opens or closes.
pub type WindowHook = Box<dyn FnMut(&mut HookContext<'_>, &AppWindow)>;

/// What a hook may observe and request while it runs.
///
/// Dispatched actions are applied to the store immediately and broadcast to
/// open windows once the hook round finishes. Close requests are committed
/// by the manager after the round.
pub struct HookContext<'a> {
    registry: &'a WindowRegistry,
    store: &'a mut Store,
    dispatched: Vec<Action>,
    close_requests: Vec<WindowIdentifier>,
}

impl HookContext<'_> {
    /// Open windows; during a close hook this already excludes the closed one.
    pub fn registry(&self) -> &WindowRegistry {
        self.registry
    }

    /// Current store snapshot.
    pub fn state(&self) -> Arc<RootState> {
        self.store.state()
    }

    /// Apply an action to the store.
    pub fn dispatch(&mut self, action: Action) {
        self.store.dispatch(&action);
        self.dispatched.push(action);
    }

    /// Ask for `id` to be closed after this hook round.
    pub fn request_close(&mut self, id: WindowIdentifier) {
        if !self.close_requests.contains(&id) {
            self.close_requests.push(id);
        }
    }
}

/// Owns the window registry and the store, and runs lifecycle hooks.
///
/// Hooks are kept in registration order and all of them run for every
/// event; registering a hook never replaces an earlier one. Open hooks run
/// after the window is registered. Close hooks run after it is
/// unregistered.
pub struct WindowManager {
    registry: WindowRegistry,
    store: Store,
    open_hooks: Vec<WindowHook>,
    close_hooks: Vec<WindowHook>,
}

struct HookRound {
    dispatched: Vec<Action>,
    close_requests: Vec<WindowIdentifier>,
}

impl WindowManager {
    pub fn new(store: Store) -> Self {
        Self {
            registry: WindowRegistry::new(),
            store,
            open_hooks: Vec::new(),
            close_hooks: Vec::new(),
        }
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn state(&self) -> Arc<RootState> {
        self.store.state()
    }

    /// Add a hook run after every window registration.
    pub fn on_open<F>(&mut self, hook: F)
    where
        F: FnMut(&mut HookContext<'_>, &AppWindow) + 'static,
    {
        self.open_hooks.push(Box::new(hook));
    }

    /// Add a hook run after every window unregistration.
    pub fn on_close<F>(&mut self, hook: F)
    where
        F: FnMut(&mut HookContext<'_>, &AppWindow) + 'static,
    {
        self.close_hooks.push(Box::new(hook));
    }

    /// Dispatch an action and relay it to every open window.
    pub fn dispatch(&mut self, action: Action) -> Arc<RootState> {
        let state = self.store.dispatch(&action);
        self.broadcast(std::slice::from_ref(&action));
        state
    }

    /// The windowing layer reports a new window.
    pub fn window_opened(&mut self, window: AppWindow) -> Result<(), RegistryError> {
        self.registry.register(window.clone())?;
        tracing::info!(
            window = %window.identifier(),
            kind = %window.kind(),
            open = self.registry.len(),
            "Window opened"
        );

        let round = run_hooks(
            &mut self.open_hooks,
            &self.registry,
            &mut self.store,
            &window,
        );
        let pending = self.settle(round, VecDeque::new());
        self.process_closures(pending);
        Ok(())
    }

    /// The windowing layer reports that a window closed.
    ///
    /// Windows closed by a cascade are unregistered when the cascade
    /// commits, so the layer's later notification for them comes back as
    /// [`RegistryError::NotFound`] and changes nothing.
    pub fn window_closed(&mut self, id: WindowIdentifier) -> Result<(), RegistryError> {
        let window = self.registry.unregister(&id)?;
        tracing::info!(
            window = %id,
            kind = %window.kind(),
            open = self.registry.len(),
            "Window closed"
        );
        self.process_closures(VecDeque::from([window]));
        Ok(())
    }

    /// Close a window on the core's own initiative.
    pub fn close_window(&mut self, id: WindowIdentifier) -> Result<(), RegistryError> {
        let window = self.registry.unregister(&id)?;
        window.handle().close();
        self.process_closures(VecDeque::from([window]));
        Ok(())
    }

    /// Run close hooks for every closed window, committing any cascade.
    ///
    /// A window enters `pending` only after it was removed from the
    /// registry, so the loop runs at most once per registered window.
    fn process_closures(&mut self, mut pending: VecDeque<AppWindow>) {
        while let Some(closed) = pending.pop_front() {
            let round = run_hooks(
                &mut self.close_hooks,
                &self.registry,
                &mut self.store,
                &closed,
            );
            pending = self.settle(round, pending);
        }
    }

    /// Broadcast a round's actions and commit its close requests, queueing
    /// each newly closed window behind `pending`.
    fn settle(
        &mut self,
        round: HookRound,
        mut pending: VecDeque<AppWindow>,
    ) -> VecDeque<AppWindow> {
        self.broadcast(&round.dispatched);

        for id in round.close_requests {
            match self.registry.unregister(&id) {
                Ok(window) => {
                    tracing::info!(window = %id, kind = %window.kind(), "Cascade close");
                    window.handle().close();
                    pending.push_back(window);
                }
                Err(error) => tracing::debug!(%error, "Close request for window already gone"),
            }
        }

        pending
    }

    fn broadcast(&self, actions: &[Action]) {
        for action in actions.iter().filter(|a| a.is_broadcast()) {
            let envelope = Envelope::main_action(action.clone());
            for window in self.registry.iter() {
                window.deliver(&envelope);
            }
        }
    }
}

fn run_hooks(
    hooks: &mut [WindowHook],
    registry: &WindowRegistry,
    store: &mut Store,
    window: &AppWindow,
) -> HookRound {
    let mut ctx = HookContext {
        registry,
        store,
        dispatched: Vec::new(),
        close_requests: Vec::new(),
    };
    for hook in hooks.iter_mut() {
        hook(&mut ctx, window);
    }
    HookRound {
        dispatched: ctx.dispatched,
        close_requests: ctx.close_requests,
    }
}
