//! List Summary Component
//!
//! Active list header: name, copy/export actions, total, people count and
//! per-person share.

use chrono::{Local, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use shopping_core::config::CURRENCY;
use shopping_core::{export_file_name, export_structured, export_text, format_money};

use crate::commands;
use crate::context::use_app_context;
use crate::store::{show_notice, use_view_store};

#[component]
pub fn ListSummary() -> impl IntoView {
    let ctx = use_app_context();
    let view_store = use_view_store();

    let name = move || ctx.with_state(|s| s.active_list().map(|list| list.name.clone()).unwrap_or_default());
    let total = move || ctx.with_state(|s| format!("{} {}", format_money(s.total_cost()), CURRENCY));
    let per_person = move || ctx.with_state(|s| format!("{} {}", format_money(s.cost_per_person()), CURRENCY));
    let people = move || ctx.with_state(|s| s.people_count().to_string());

    let copy_text = move |_| {
        let today = Local::now().date_naive();
        let Some(text) = ctx.with_state(|s| s.active_list().map(|list| export_text(list, s.people_count(), today)))
        else {
            return;
        };
        spawn_local(async move {
            match commands::write_text(&text).await {
                Ok(()) => show_notice(&view_store, "Список скопирован в буфер обмена!"),
                Err(e) => {
                    log::error!("{}", e);
                    commands::alert("Не удалось скопировать список");
                }
            }
        });
    };

    let export_json = move |_| {
        let Some((file_name, export)) = ctx.with_state(|s| {
            s.active_list().map(|list| (export_file_name(list), export_structured(list, Utc::now())))
        }) else {
            return;
        };
        let result = export
            .to_json_pretty()
            .map_err(|e| e.to_string())
            .and_then(|json| commands::download_text(&file_name, &json, "application/json"));
        if let Err(e) = result {
            log::error!("failed to export {:?}: {}", file_name, e);
        }
    };

    view! {
        <section class="list-summary">
            <div class="section-header">
                <h2>{name}</h2>
                <div class="header-actions">
                    <button class="copy-btn" on:click=copy_text>"📋 Копировать"</button>
                    <button class="export-btn" on:click=export_json>"📤 Экспорт"</button>
                </div>
            </div>
            <div class="summary-grid">
                <div class="summary-card total">
                    <div class="summary-label">"Общая стоимость"</div>
                    <div class="summary-value">{total}</div>
                </div>
                <div class="summary-card people">
                    <div class="summary-label">"Количество человек"</div>
                    <input
                        type="number"
                        min="1"
                        class="summary-value"
                        prop:value=people
                        on:change=move |ev| {
                            let raw = event_target_value(&ev);
                            ctx.apply(|s| s.set_people_count(&raw));
                        }
                    />
                </div>
                <div class="summary-card per-person">
                    <div class="summary-label">"На человека"</div>
                    <div class="summary-value">{per_person}</div>
                </div>
            </div>
        </section>
    }
}
