//! New List Modal Component
//!
//! Dialog asking for the name of a new list. Blank names keep it open.

use chrono::Utc;
use leptos::prelude::*;
use web_sys::KeyboardEvent;

use crate::context::use_app_context;
use crate::store::{close_new_list_modal, use_view_store, ViewStateStoreFields};

#[component]
pub fn NewListModal() -> impl IntoView {
    let ctx = use_app_context();
    let view_store = use_view_store();

    let create = move || {
        let name = view_store.new_list_name().get_untracked();
        if ctx.apply(|s| s.create_list(&name, Utc::now())).flatten().is_some() {
            close_new_list_modal(&view_store);
        }
    };

    view! {
        <Show when=move || view_store.show_new_list_modal().get()>
            <div class="modal-backdrop">
                <div class="modal">
                    <h3>"Создать новый список"</h3>
                    <input
                        type="text"
                        placeholder="Название списка"
                        prop:value=move || view_store.new_list_name().get()
                        on:input=move |ev| *view_store.new_list_name().write() = event_target_value(&ev)
                        on:keydown=move |ev: KeyboardEvent| {
                            if ev.key() == "Enter" {
                                create();
                            }
                        }
                    />
                    <div class="modal-actions">
                        <button class="primary-btn" on:click=move |_| create()>"Создать"</button>
                        <button class="secondary-btn" on:click=move |_| close_new_list_modal(&view_store)>
                            "Отмена"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
