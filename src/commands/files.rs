//! File Commands
//!
//! Download generated files and read user-selected ones.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, HtmlAnchorElement, Url};

use super::js_err;

/// Keep the object URL alive long enough for the download to start
const REVOKE_DELAY_MS: u32 = 1_000;

/// Offer `contents` as a file download
pub fn download_text(file_name: &str, contents: &str, mime_type: &str) -> Result<(), String> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "no document".to_string())?;
    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "failed to create link".to_string())?;
    link.set_href(&url);
    link.set_download(file_name);
    link.click();

    spawn_local(async move {
        TimeoutFuture::new(REVOKE_DELAY_MS).await;
        let _ = Url::revoke_object_url(&url);
    });
    Ok(())
}

/// Read the whole file selected by the user
pub async fn read_file_bytes(file: File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer()).await.map_err(js_err)?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
