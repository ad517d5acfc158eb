//! Headless session driven by JSON-lines window events.
//!
//! Each input line is one [`SessionCommand`] standing in for the native
//! windowing layer. Every envelope delivered to a window, and every window
//! the core closes, is written to the output as one [`SessionOutput`] line.
//!
//! ```text
//! {"event":"open","kind":"library"}
//! {"event":"open","kind":"reader","id":"7d0f..."}
//! {"event":"hide","id":"..."}
//! {"event":"net","status":"online"}
//! {"event":"dispatch","action":{"type":"READER_MODE_SET_SUCCESS","payload":{"mode":"detached"}}}
//! {"event":"close","id":"..."}
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use lectern_config::ConfigRepository;
use lectern_model::{AppWindowType, NetStatus, WindowIdentifier};
use lectern_store::{Action, Store};
use lectern_sync::{Channel, Envelope};
use lectern_window::{AppWindow, DeliveryError, WindowHandle, WindowManager};
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::init::{AppEvent, handle_event, init_app};
use crate::platform::Platform;

/// One input line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum SessionCommand {
    /// A window was created; a fresh identifier is assigned when `id` is absent.
    Open {
        kind: AppWindowType,
        #[serde(default)]
        id: Option<WindowIdentifier>,
    },
    /// The user closed a window.
    Close { id: WindowIdentifier },
    Hide { id: WindowIdentifier },
    Show { id: WindowIdentifier },
    Net { status: NetStatus },
    Dispatch { action: Action },
}

/// One output line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum SessionOutput {
    Opened {
        window: WindowIdentifier,
        kind: AppWindowType,
    },
    /// An envelope delivered to a window.
    Message {
        window: WindowIdentifier,
        channel: Channel,
        envelope: Envelope,
    },
    Closed {
        window: WindowIdentifier,
    },
    /// An input line that could not be applied.
    Error {
        line: usize,
        message: String,
    },
}

/// State at the end of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: usize,
    pub open_windows: usize,
    pub locale: String,
    pub revision: u64,
}

/// Window handle that writes to the session output.
///
/// Closing it from the core echoes a close notification back into the
/// main loop, the way a native window reports its own destruction.
struct SessionWindow {
    identifier: WindowIdentifier,
    open: AtomicBool,
    visible: AtomicBool,
    output: UnboundedSender<SessionOutput>,
    events: UnboundedSender<AppEvent>,
}

impl SessionWindow {
    /// Mark the window destroyed. Returns false if it already was.
    fn destroy(&self) -> bool {
        if !self.open.swap(false, Ordering::SeqCst) {
            return false;
        }
        self.visible.store(false, Ordering::SeqCst);
        // The output receiver lives as long as the session
        let _ = self.output.send(SessionOutput::Closed {
            window: self.identifier,
        });
        true
    }

    fn set_visible(&self, visible: bool) {
        self.visible.store(visible, Ordering::SeqCst);
    }
}

impl WindowHandle for SessionWindow {
    fn close(&self) {
        if self.destroy() && self.events.send(AppEvent::WindowClosed(self.identifier)).is_err() {
            tracing::debug!(window = %self.identifier, "Main loop gone, close not echoed");
        }
    }

    fn is_visible(&self) -> bool {
        self.open.load(Ordering::SeqCst) && self.visible.load(Ordering::SeqCst)
    }

    fn send(&self, envelope: &Envelope) -> Result<(), DeliveryError> {
        if !self.open.load(Ordering::SeqCst) {
            return Err(DeliveryError::WindowGone);
        }
        self.output
            .send(SessionOutput::Message {
                window: self.identifier,
                channel: envelope.channel(),
                envelope: envelope.clone(),
            })
            .map_err(|_| DeliveryError::Channel("session output closed".to_string()))
    }
}

/// Main-loop state of a headless session.
struct Session {
    manager: WindowManager,
    windows: BTreeMap<WindowIdentifier, Arc<SessionWindow>>,
    events: UnboundedSender<AppEvent>,
    output: UnboundedSender<SessionOutput>,
    commands: usize,
}

impl Session {
    fn new(
        manager: WindowManager,
        events: UnboundedSender<AppEvent>,
        output: UnboundedSender<SessionOutput>,
    ) -> Self {
        Self {
            manager,
            windows: BTreeMap::new(),
            events,
            output,
            commands: 0,
        }
    }

    fn handle_line(&mut self, line_number: usize, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        let result = serde_json::from_str::<SessionCommand>(line)
            .map_err(|e| e.to_string())
            .and_then(|command| self.apply(command));
        if let Err(message) = result {
            tracing::warn!(line = line_number, %message, "Rejected session input");
            self.emit(SessionOutput::Error {
                line: line_number,
                message,
            });
        }
    }

    fn apply(&mut self, command: SessionCommand) -> Result<(), String> {
        self.commands += 1;
        match command {
            SessionCommand::Open { kind, id } => {
                let id = id.unwrap_or_default();
                if self.windows.contains_key(&id) {
                    return Err(format!("window {id} already exists"));
                }
                let window = Arc::new(SessionWindow {
                    identifier: id,
                    open: AtomicBool::new(true),
                    visible: AtomicBool::new(true),
                    output: self.output.clone(),
                    events: self.events.clone(),
                });
                self.windows.insert(id, Arc::clone(&window));
                self.emit(SessionOutput::Opened { window: id, kind });
                self.handle_event(AppEvent::WindowOpened(AppWindow::new(id, kind, window)));
            }
            SessionCommand::Close { id } => {
                if !self.window(id)?.destroy() {
                    return Err(format!("window {id} is already closed"));
                }
                self.handle_event(AppEvent::WindowClosed(id));
            }
            SessionCommand::Hide { id } => self.window(id)?.set_visible(false),
            SessionCommand::Show { id } => self.window(id)?.set_visible(true),
            SessionCommand::Net { status } => self.handle_event(AppEvent::NetStatusChanged(status)),
            SessionCommand::Dispatch { action } => self.handle_event(AppEvent::Dispatch(action)),
        }
        Ok(())
    }

    fn handle_event(&mut self, event: AppEvent) {
        if let AppEvent::WindowClosed(id) = &event {
            self.windows.remove(id);
        }
        handle_event(&mut self.manager, event);
    }

    fn window(&self, id: WindowIdentifier) -> Result<&SessionWindow, String> {
        self.windows
            .get(&id)
            .map(Arc::as_ref)
            .ok_or_else(|| format!("unknown window {id}"))
    }

    fn emit(&self, output: SessionOutput) {
        let _ = self.output.send(output);
    }

    fn summary(&self) -> SessionSummary {
        let state = self.manager.state();
        SessionSummary {
            commands: self.commands,
            open_windows: self.manager.registry().len(),
            locale: state.i18n.locale.clone(),
            revision: self.manager.store().revision(),
        }
    }
}

/// Run a session until `input` is exhausted.
///
/// The locale load started at init is awaited before returning, and every
/// event it or a cascade produced is applied.
pub async fn run_session<R, I, O>(
    repository: Arc<R>,
    platform: &dyn Platform,
    input: I,
    mut output: O,
) -> anyhow::Result<SessionSummary>
where
    R: ConfigRepository + Send + Sync + 'static,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let (output_tx, mut output_rx) = mpsc::unbounded_channel();

    let mut manager = WindowManager::new(Store::default());
    let locale_task = init_app(&mut manager, repository, platform, events_tx.clone());
    let mut session = Session::new(manager, events_tx, output_tx);

    let mut lines = input.lines();
    let mut line_number = 0usize;
    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => {
                    line_number += 1;
                    session.handle_line(line_number, &line);
                }
                None => break,
            },
            Some(event) = events_rx.recv() => session.handle_event(event),
        }
        write_pending(&mut output_rx, &mut output).await?;
    }

    locale_task.await?;
    while let Ok(event) = events_rx.try_recv() {
        session.handle_event(event);
    }
    write_pending(&mut output_rx, &mut output).await?;
    output.flush().await?;

    let summary = session.summary();
    tracing::info!(
        commands = summary.commands,
        open_windows = summary.open_windows,
        locale = %summary.locale,
        "Session finished"
    );
    Ok(summary)
}

async fn write_pending<O>(
    pending: &mut UnboundedReceiver<SessionOutput>,
    output: &mut O,
) -> anyhow::Result<()>
where
    O: AsyncWrite + Unpin,
{
    while let Ok(item) = pending.try_recv() {
        let mut line = serde_json::to_string(&item)?;
        line.push('\n');
        output.write_all(line.as_bytes()).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nil_window() -> WindowIdentifier {
        "00000000-0000-0000-0000-000000000000".parse().unwrap()
    }

    #[test]
    fn commands_parse_from_json_lines() {
        let open: SessionCommand =
            serde_json::from_str(r#"{"event":"open","kind":"reader"}"#).unwrap();
        assert_eq!(
            open,
            SessionCommand::Open {
                kind: AppWindowType::Reader,
                id: None
            }
        );

        let net: SessionCommand =
            serde_json::from_str(r#"{"event":"net","status":"offline"}"#).unwrap();
        assert_eq!(
            net,
            SessionCommand::Net {
                status: NetStatus::Offline
            }
        );

        let dispatch: SessionCommand = serde_json::from_str(
            r#"{"event":"dispatch","action":{"type":"I18N_SET","payload":{"locale":"ko"}}}"#,
        )
        .unwrap();
        assert_eq!(
            dispatch,
            SessionCommand::Dispatch {
                action: Action::I18nSet {
                    locale: "ko".to_string()
                }
            }
        );
    }

    #[test]
    fn output_wire_format() {
        let opened = SessionOutput::Opened {
            window: nil_window(),
            kind: AppWindowType::Library,
        };
        insta::assert_snapshot!(
            serde_json::to_string(&opened).unwrap(),
            @r#"{"event":"opened","window":"00000000-0000-0000-0000-000000000000","kind":"library"}"#
        );

        let message = SessionOutput::Message {
            window: nil_window(),
            channel: Channel::Sync,
            envelope: Envelope::main_action(Action::NetOnline),
        };
        insta::assert_snapshot!(
            serde_json::to_string(&message).unwrap(),
            @r#"{"event":"message","window":"00000000-0000-0000-0000-000000000000","channel":"sync","envelope":{"type":"MainAction","payload":{"action":{"type":"NET_STATUS_ONLINE"}}}}"#
        );
    }

    #[test]
    fn closed_windows_are_forgotten() {
        let (events_tx, mut events_rx) = mpsc::unbounded_channel();
        let (output_tx, _output_rx) = mpsc::unbounded_channel();
        let mut manager = WindowManager::new(Store::default());
        manager.on_close(lectern_window::hooks::lifecycle_on_close);
        let mut session = Session::new(manager, events_tx, output_tx);

        let library = WindowIdentifier::new();
        let reader = WindowIdentifier::new();
        for (kind, id) in [(AppWindowType::Library, library), (AppWindowType::Reader, reader)] {
            session
                .apply(SessionCommand::Open { kind, id: Some(id) })
                .unwrap();
        }
        session.apply(SessionCommand::Close { id: library }).unwrap();
        while let Ok(event) = events_rx.try_recv() {
            session.handle_event(event);
        }

        assert!(session.windows.is_empty());
        assert_eq!(session.summary().open_windows, 0);
        assert!(session.apply(SessionCommand::Close { id: reader }).is_err());
    }

    #[test]
    fn session_window_echoes_core_close_once() {
        let (output_tx, mut output_rx) = mpsc::unbounded_channel();
        let (events_tx, mut events_rx) = mpsc::unbounded_channel();
        let window = SessionWindow {
            identifier: nil_window(),
            open: AtomicBool::new(true),
            visible: AtomicBool::new(true),
            output: output_tx,
            events: events_tx,
        };

        window.close();
        window.close();

        assert!(!window.is_visible());
        assert!(matches!(
            window.send(&Envelope::identity(nil_window())),
            Err(DeliveryError::WindowGone)
        ));
        assert!(matches!(
            events_rx.try_recv(),
            Ok(AppEvent::WindowClosed(id)) if id == nil_window()
        ));
        assert!(events_rx.try_recv().is_err());
        assert!(matches!(
            output_rx.try_recv(),
            Ok(SessionOutput::Closed { .. })
        ));
        assert!(output_rx.try_recv().is_err());
    }
}
