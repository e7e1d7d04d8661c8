//! Item Table Component
//!
//! Rows of the active list plus the add button.

use chrono::Utc;
use leptos::prelude::*;

use crate::components::ItemRow;
use crate::context::use_app_context;

#[component]
pub fn ItemTable() -> impl IntoView {
    let ctx = use_app_context();

    let item_ids = move || {
        ctx.with_state(|s| {
            s.active_list()
                .map(|list| list.items.iter().map(|item| item.id).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };
    let is_empty = move || ctx.with_state(|s| s.active_list().map_or(true, |list| list.items.is_empty()));

    view! {
        <section class="item-table">
            <div class="section-header">
                <h3>"Товары"</h3>
                <button class="primary-btn" on:click=move |_| { ctx.apply(|s| s.add_item(Utc::now())); }>
                    "+ Добавить товар"
                </button>
            </div>
            <For
                each=item_ids
                key=|id| *id
                children=move |id| view! { <ItemRow item_id=id /> }
            />
            <Show when=is_empty>
                <div class="empty-hint">"Список пуст. Добавьте первый товар!"</div>
            </Show>
        </section>
    }
}
