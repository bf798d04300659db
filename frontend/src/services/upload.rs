//! File upload service for campaign images.
//!
//! Hands the selected file to the web3.storage SDK on the JS side and
//! returns the resulting content-address URI. An empty reference is the
//! sole failure signal the form acts on; no error detail is propagated
//! beyond the log.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, HtmlInputElement};

use crate::types::{AppError, AppResult};

/// Upload the file selected in a file-input change event.
///
/// Returns `Ok(None)` when the storage SDK yields no reference.
pub async fn upload_file(ev: &Event) -> AppResult<Option<String>> {
    let input: HtmlInputElement = ev
        .target()
        .and_then(|t| t.dyn_into().ok())
        .ok_or_else(|| AppError::Upload("Event has no file input target".to_string()))?;

    let file = input
        .files()
        .and_then(|files| files.get(0))
        .ok_or_else(|| AppError::Upload("No file selected".to_string()))?;

    log::info!("📤 Uploading '{}' to web storage...", file.name());

    let promise = upload_to_web_storage(&file);
    let result = JsFuture::from(promise)
        .await
        .map_err(|e| AppError::Upload(format!("Storage SDK rejected: {:?}", e)))?;

    let reference = result.as_string().filter(|s| !s.is_empty());
    match &reference {
        Some(uri) => log::info!("✅ Uploaded to {}", uri),
        None => log::warn!("⚠️  Storage SDK returned no reference"),
    }

    Ok(reference)
}

/// Import of the JavaScript functions from storage.js
#[wasm_bindgen(module = "/src/js/storage.js")]
extern "C" {
    #[wasm_bindgen(js_name = "uploadToWebStorage")]
    fn upload_to_web_storage(file: &web_sys::File) -> js_sys::Promise;
}
