//! Frontend Configuration
//!
//! Read once at startup from `window.__CAMERA_TABLE_CONFIG__`, a plain JS
//! object the hosting page may define before the wasm bundle loads.

use std::str::FromStr;

use camera_list::{SourceConfig, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use serde::Deserialize;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__CAMERA_TABLE_CONFIG__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Endpoint, bearer token and snapshot key
    pub source: SourceConfig,
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Quiet period before a search keystroke is applied
    pub search_debounce_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            search_debounce_ms: 250,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Config from the page global; defaults when absent or malformed
    pub fn from_window() -> Self {
        let config = match read_global() {
            Ok(Some(config)) => config.normalized(),
            Ok(None) => {
                log::info!("[config] No {} found, using defaults", CONFIG_GLOBAL);
                Self::default()
            }
            Err(e) => {
                log::warn!("[config] Ignoring malformed {}: {}", CONFIG_GLOBAL, e);
                Self::default()
            }
        };
        if !config.source.has_auth_token() {
            log::warn!("[config] No auth token configured; remote loads will likely be rejected");
        }
        config
    }

    /// Make page-size settings usable: size ≥ 1 and always one of the options
    pub fn normalized(mut self) -> Self {
        self.default_page_size = self.default_page_size.max(1);
        self.page_size_options.retain(|&size| size > 0);
        if self.page_size_options.is_empty() {
            self.page_size_options = PAGE_SIZE_OPTIONS.to_vec();
        }
        if !self.page_size_options.contains(&self.default_page_size) {
            self.page_size_options.push(self.default_page_size);
        }
        self.page_size_options.sort_unstable();
        self.page_size_options.dedup();
        self
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(&self.log_level).unwrap_or(log::LevelFilter::Info)
    }
}

fn read_global() -> Result<Option<AppConfig>, String> {
    let value = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| format!("{:?}", e))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| e.to_string())
}
