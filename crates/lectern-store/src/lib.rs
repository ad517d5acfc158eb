//! Authoritative application state for the Lectern main process.
//!
//! The store holds a single [`RootState`] tree. It is mutated only by
//! dispatching an [`Action`]; every dispatch produces a new immutable
//! snapshot (`Arc<RootState>`) so readers such as the sync protocol never
//! observe a partially applied change.
//!
//! ```
//! use lectern_model::NetStatus;
//! use lectern_store::{Action, Store};
//!
//! let mut store = Store::default();
//! let before = store.state();
//! store.dispatch(&Action::NetOnline);
//!
//! assert_eq!(before.net.status, NetStatus::Unknown);
//! assert_eq!(store.state().net.status, NetStatus::Online);
//! ```

mod action;
mod reducer;
mod state;
mod store;

pub use action::Action;
pub use reducer::reduce;
pub use state::{AppState, I18nState, NetState, ReaderState, RootState};
pub use store::Store;
