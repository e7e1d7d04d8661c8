//! List Sidebar Component
//!
//! Left column with every list: click to select, inline rename, delete.

use leptos::prelude::*;
use shopping_core::ListId;
use web_sys::{KeyboardEvent, SubmitEvent};

use crate::components::DeleteListButton;
use crate::context::use_app_context;

/// One list entry with its item count
#[component]
fn ListEntry(list_id: ListId) -> impl IntoView {
    let ctx = use_app_context();

    let name = move || {
        ctx.with_state(|s| s.find_list(list_id).map(|list| list.name.clone()).unwrap_or_default())
    };
    let item_count = move || ctx.with_state(|s| s.find_list(list_id).map_or(0, |list| list.items.len()));
    let is_active = move || ctx.with_state(|s| s.active_list_id() == Some(list_id));
    let is_editing = move || ctx.with_state(|s| s.editing().is_some_and(|draft| draft.list_id == list_id));
    let draft = move || ctx.with_state(|s| s.editing().map(|draft| draft.text.clone()).unwrap_or_default());

    let entry_class = move || if is_active() { "list-entry active" } else { "list-entry" };

    let commit = move |ev: SubmitEvent| {
        ev.prevent_default();
        ctx.apply(|s| s.commit_rename());
    };

    view! {
        <div class=entry_class on:click=move |_| { ctx.apply(|s| s.select_list(list_id)); }>
            <Show
                when=is_editing
                fallback=move || view! {
                    <div class="list-entry-header">
                        <span class="list-entry-name">{name}</span>
                        <button
                            class="rename-btn"
                            title="Переименовать"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                ctx.apply(|s| s.begin_rename(list_id));
                            }
                        >
                            "✎"
                        </button>
                        <DeleteListButton list_id=list_id />
                    </div>
                }
            >
                <form class="rename-form" on:submit=commit on:click=move |ev| ev.stop_propagation()>
                    <input
                        type="text"
                        prop:value=draft
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            ctx.apply(|s| s.set_rename_draft(&text));
                        }
                        on:keydown=move |ev: KeyboardEvent| {
                            if ev.key() == "Escape" {
                                ctx.apply(|s| s.cancel_rename());
                            }
                        }
                    />
                    <button type="submit" class="confirm-btn">"✓"</button>
                    <button type="button" class="cancel-btn" on:click=move |_| { ctx.apply(|s| s.cancel_rename()); }>
                        "✗"
                    </button>
                </form>
            </Show>
            <div class="list-entry-meta">{move || format!("{} товаров", item_count())}</div>
        </div>
    }
}

#[component]
pub fn ListSidebar() -> impl IntoView {
    let ctx = use_app_context();
    let list_ids = move || ctx.with_state(|s| s.lists().iter().map(|list| list.id).collect::<Vec<_>>());

    view! {
        <aside class="list-sidebar">
            <h3>"Мои списки"</h3>
            <For
                each=list_ids
                key=|id| *id
                children=move |id| view! { <ListEntry list_id=id /> }
            />
        </aside>
    }
}
