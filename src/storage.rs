//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`.

use shopping_core::{KeyValueStore, Result, ShoppingError};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn js_err(e: JsValue) -> ShoppingError {
    ShoppingError::Storage(format!("{:?}", e))
}

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| ShoppingError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_err)?
            .ok_or_else(|| ShoppingError::Storage("localStorage is unavailable".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::local_storage()?.get_item(key).map_err(js_err)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::local_storage()?.set_item(key, value).map_err(js_err)
    }

    fn remove(&self, key: &str) -> Result<()> {
        Self::local_storage()?.remove_item(key).map_err(js_err)
    }
}
