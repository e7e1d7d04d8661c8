//! Notice Component
//!
//! Transient toast for successful copy/import.

use leptos::prelude::*;

use crate::store::{use_view_store, ViewStateStoreFields};

#[component]
pub fn Notice() -> impl IntoView {
    let view_store = use_view_store();

    view! {
        {move || view_store.notice().get().map(|message| view! {
            <div class="notice">{message}</div>
        })}
    }
}
