//! localStorage Snapshot Store

use camera_list::{SnapshotError, SnapshotResult, SnapshotStore};
use wasm_bindgen::JsValue;

/// Snapshot store backed by `window.localStorage`.
///
/// Holds no handle; storage is looked up on each call so the store stays
/// `Send + Sync` and can live in reactive state.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSnapshotStore;

impl LocalSnapshotStore {
    fn storage() -> SnapshotResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| SnapshotError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| SnapshotError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl SnapshotStore for LocalSnapshotStore {
    fn get(&self, key: &str) -> SnapshotResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn put(&self, key: &str, value: &str) -> SnapshotResult<()> {
        // Fails with QuotaExceededError when the list outgrows the origin quota
        Self::storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> SnapshotResult<()> {
        Self::storage()?.remove_item(key).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> SnapshotError {
    SnapshotError::Unavailable(format!("{:?}", err))
}
