//! Clipboard Commands

use wasm_bindgen::prelude::*;

use super::js_err;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["navigator", "clipboard"], js_name = writeText)]
    async fn clipboard_write_text(text: &str) -> Result<JsValue, JsValue>;
}

/// Put plain text on the system clipboard
pub async fn write_text(text: &str) -> Result<(), String> {
    clipboard_write_text(text)
        .await
        .map(|_| ())
        .map_err(|e| format!("Failed to write clipboard: {}", js_err(e)))
}
