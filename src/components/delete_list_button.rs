//! Delete List Button Component

use leptos::prelude::*;
use shopping_core::ListId;

use crate::context::use_app_context;

/// Trash button for a sidebar entry. The first click asks again, naming the
/// list and how many items go with it; only the second click deletes.
#[component]
pub fn DeleteListButton(list_id: ListId) -> impl IntoView {
    let ctx = use_app_context();
    let (asking, set_asking) = signal(false);

    let question = move || {
        ctx.with_state(|s| match s.find_list(list_id) {
            Some(list) if list.items.is_empty() => format!("Удалить «{}»?", list.name),
            Some(list) => format!("Удалить «{}» ({} товаров)?", list.name, list.items.len()),
            None => String::new(),
        })
    };

    let delete = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        set_asking.set(false);
        ctx.apply(|s| s.delete_list(list_id));
    };

    view! {
        <Show
            when=move || asking.get()
            fallback=move || {
                view! {
                    <button
                        class="delete-btn"
                        title="Удалить список"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_asking.set(true);
                        }
                    >
                        "🗑️"
                    </button>
                }
            }
        >
            <span class="delete-confirm" on:click=move |ev| ev.stop_propagation()>
                <span class="delete-confirm-text">{question}</span>
                <button class="confirm-btn" on:click=delete>"Да"</button>
                <button class="cancel-btn" on:click=move |_| set_asking.set(false)>"Нет"</button>
            </span>
        </Show>
    }
}
