//! App Header Component
//!
//! Title bar with the JSON import picker and the new-list button.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::commands;
use crate::context::use_app_context;
use crate::store::{open_new_list_modal, show_notice, use_view_store};

const IMPORT_FAILED: &str = "Ошибка при импорте файла";

#[component]
pub fn AppHeader() -> impl IntoView {
    let ctx = use_app_context();
    let view_store = use_view_store();

    let on_import = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|target| target.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        let file = input.files().and_then(|files| files.get(0));
        // Reset so picking the same file again still fires `change`
        input.set_value("");
        let Some(file) = file else {
            return;
        };

        spawn_local(async move {
            let bytes = match commands::read_file_bytes(file).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    log::error!("failed to read import file: {}", e);
                    commands::alert(IMPORT_FAILED);
                    return;
                }
            };
            match ctx.apply(|state| state.import_list(&bytes, Utc::now())) {
                Some(Ok(_)) => show_notice(&view_store, "Список успешно импортирован!"),
                Some(Err(e)) => {
                    log::warn!("import rejected: {}", e);
                    commands::alert(IMPORT_FAILED);
                }
                None => {}
            }
        });
    };

    view! {
        <header class="app-header">
            <h1>"🛒 Списки продуктов"</h1>
            <div class="header-actions">
                <label class="secondary-btn">
                    "📥 Импорт"
                    <input type="file" accept=".json" class="hidden" on:change=on_import />
                </label>
                <button class="primary-btn" on:click=move |_| open_new_list_modal(&view_store)>
                    "+ Новый список"
                </button>
            </div>
        </header>
    }
}
