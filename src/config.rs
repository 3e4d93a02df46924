//! Console Configuration
//!
//! Read once at start-up from the optional `window.__ADMIN_CONFIG__` object
//! that the hosting page may define before loading the WASM bundle.

use serde::Deserialize;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__ADMIN_CONFIG__";

fn default_page_size() -> usize {
    10
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Prefix for API requests; empty means same origin
    #[serde(default)]
    pub api_base: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            page_size: default_page_size(),
        }
    }
}

impl AppConfig {
    /// Load from the page, falling back to defaults
    pub fn load() -> Self {
        match Self::from_window() {
            Ok(Some(config)) => config.normalized(),
            Ok(None) => Self::default(),
            Err(e) => {
                web_sys::console::error_1(&format!("[CONFIG] Ignoring {}: {}", CONFIG_GLOBAL, e).into());
                Self::default()
            }
        }
    }

    fn from_window() -> Result<Option<Self>, String> {
        let window = web_sys::window().ok_or("no window")?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|e| format!("{:?}", e))?;
        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }
        serde_wasm_bindgen::from_value(value)
            .map(Some)
            .map_err(|e| e.to_string())
    }

    /// Trailing slashes are dropped from the base and the page size is kept positive
    pub fn normalized(mut self) -> Self {
        let trimmed = self.api_base.trim_end_matches('/').len();
        self.api_base.truncate(trimmed);
        if self.page_size == 0 {
            self.page_size = default_page_size();
        }
        self
    }
}
