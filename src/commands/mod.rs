//! Browser Command Wrappers
//!
//! Thin wrappers over the browser APIs the app needs: clipboard, file
//! download/read and blocking alerts.

mod clipboard;
mod dialog;
mod files;

use wasm_bindgen::JsValue;

pub use clipboard::*;
pub use dialog::*;
pub use files::*;

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}
