//! Item Row Component
//!
//! Editable line: name, unit price, quantity, unit, total and delete.
//! Every input goes through `ItemEdit::parse`, so the derived amount is
//! recomputed on each keystroke. Field values are memoized: an input is only
//! rewritten when its own value changed, which keeps a half-typed "1." intact.

use leptos::prelude::*;
use shopping_core::domain::find_by_id;
use shopping_core::{Item, ItemEdit, ItemField, ItemId, Unit};

use crate::context::{use_app_context, AppContext};

/// Read one field of the row's item from the active list
fn item_value(ctx: AppContext, item_id: ItemId, read: fn(&Item) -> String) -> String {
    ctx.with_state(|s| {
        s.active_list()
            .and_then(|list| find_by_id(&list.items, item_id))
            .map(read)
            .unwrap_or_default()
    })
}

#[component]
pub fn ItemRow(item_id: ItemId) -> impl IntoView {
    let ctx = use_app_context();

    let update = move |field: ItemField, raw: String| {
        ctx.apply(|s| s.update_item(item_id, ItemEdit::parse(field, &raw)));
    };

    let name = Memo::new(move |_| item_value(ctx, item_id, |item| item.name.clone()));
    let price = Memo::new(move |_| item_value(ctx, item_id, |item| item.price_per_unit.to_string()));
    let quantity = Memo::new(move |_| item_value(ctx, item_id, |item| item.quantity.to_string()));
    let unit = Memo::new(move |_| item_value(ctx, item_id, |item| item.unit.label().to_string()));
    let total = Memo::new(move |_| item_value(ctx, item_id, |item| item.total_price.to_string()));

    view! {
        <div class="item-row">
            <input
                type="text"
                class="item-name"
                placeholder="Название товара"
                prop:value=move || name.get()
                on:input=move |ev| update(ItemField::Name, event_target_value(&ev))
            />
            <input
                type="number"
                step="0.01"
                placeholder="Цена за ед."
                prop:value=move || price.get()
                on:input=move |ev| update(ItemField::Price, event_target_value(&ev))
            />
            <input
                type="number"
                step="0.01"
                placeholder="Кол-во"
                prop:value=move || quantity.get()
                on:input=move |ev| update(ItemField::Quantity, event_target_value(&ev))
            />
            <select
                prop:value=move || unit.get()
                on:change=move |ev| update(ItemField::Unit, event_target_value(&ev))
            >
                {move || {
                    let current = unit.get();
                    Unit::options_for(&Unit::from_label(&current))
                        .into_iter()
                        .map(|choice| {
                            let label = choice.label().to_string();
                            let selected = label == current;
                            let text = label.clone();
                            view! { <option value=label prop:selected=selected>{text}</option> }
                        })
                        .collect_view()
                }}
            </select>
            <input
                type="number"
                step="0.01"
                placeholder="Общая стоимость"
                prop:value=move || total.get()
                on:input=move |ev| update(ItemField::Total, event_target_value(&ev))
            />
            <button class="delete-btn" on:click=move |_| { ctx.apply(|s| s.delete_item(item_id)); }>
                "🗑️"
            </button>
        </div>
    }
}
