//! Browser Storage
//!
//! `localStorage` behind the core key-value interface.

use gantt_core::{GanttError, KeyValueStore, Result};
use wasm_bindgen::JsValue;

/// Handle to `window.localStorage`, looked up on every call
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

fn js_err(e: JsValue) -> GanttError {
    GanttError::Storage(format!("{:?}", e))
}

fn local_storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| GanttError::Storage("no window".to_string()))?
        .local_storage()
        .map_err(js_err)?
        .ok_or_else(|| GanttError::Storage("localStorage unavailable".to_string()))
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        local_storage()?.get_item(key).map_err(js_err)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        local_storage()?.set_item(key, value).map_err(js_err)
    }
}
