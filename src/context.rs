//! Application Context
//!
//! The session (list state + localStorage repository) provided via the
//! Leptos Context API. Components read through `with_state` and change
//! state only through `apply`, which saves after every change.

use leptos::prelude::*;
use shopping_core::{AppState, Session};

use crate::storage::BrowserStorage;

#[derive(Clone, Copy)]
pub struct AppContext {
    session: RwSignal<Session<BrowserStorage>>,
}

impl AppContext {
    pub fn new(session: Session<BrowserStorage>) -> Self {
        Self {
            session: RwSignal::new(session),
        }
    }

    /// Read the state (tracked when called inside a reactive closure)
    pub fn with_state<T>(&self, f: impl FnOnce(&AppState) -> T) -> T {
        self.session.with(|session| f(session.state()))
    }

    /// Run a state operation and persist the result
    pub fn apply<T>(&self, op: impl FnOnce(&mut AppState) -> T) -> Option<T> {
        self.session.try_update(|session| session.apply(op))
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
