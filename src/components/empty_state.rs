//! Empty State Component
//!
//! Shown in place of the list panel while no list is active.

use leptos::prelude::*;

use crate::store::{open_new_list_modal, use_view_store};

#[component]
pub fn EmptyState() -> impl IntoView {
    let view_store = use_view_store();

    view! {
        <div class="empty-state">
            <div class="empty-icon">"📝"</div>
            <p>"Создайте свой первый список продуктов"</p>
            <button class="primary-btn" on:click=move |_| open_new_list_modal(&view_store)>
                "Создать список"
            </button>
        </div>
    }
}
