//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`. The handle is looked up on
//! every call, so the store itself carries no JS state.

use order_desk_core::{KeyValueStore, StoreError};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

fn local_storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window()
        .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
}

fn js_error(e: JsValue) -> StoreError {
    StoreError::Backend(format!("{:?}", e))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }
}
