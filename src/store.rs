//! View State Store
//!
//! Transient UI state (new-list dialog, toast notice) with field-level
//! reactivity via reactive_stores. Nothing here is persisted.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

/// How long a notice stays visible
const NOTICE_MS: u32 = 2_500;

#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// New-list dialog is open
    pub show_new_list_modal: bool,
    /// Text typed into the new-list dialog
    pub new_list_name: String,
    /// Toast message, cleared after `NOTICE_MS`
    pub notice: Option<String>,
    /// Bumped per notice so an old timer does not hide a newer one
    pub notice_version: u32,
}

pub type ViewStore = Store<ViewState>;

/// Get the view store from context
pub fn use_view_store() -> ViewStore {
    expect_context::<ViewStore>()
}

pub fn open_new_list_modal(store: &ViewStore) {
    *store.show_new_list_modal().write() = true;
}

pub fn close_new_list_modal(store: &ViewStore) {
    *store.show_new_list_modal().write() = false;
    store.new_list_name().write().clear();
}

pub fn show_notice(store: &ViewStore, message: impl Into<String>) {
    let store = *store;
    let version = {
        let field = store.notice_version();
        let mut current = field.write();
        *current += 1;
        *current
    };
    *store.notice().write() = Some(message.into());

    spawn_local(async move {
        TimeoutFuture::new(NOTICE_MS).await;
        if store.notice_version().get_untracked() == version {
            *store.notice().write() = None;
        }
    });
}
