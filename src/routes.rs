//! Console Routes
//!
//! Path builders for the item views and history-based navigation.

use wasm_bindgen::JsValue;

pub fn new_item_path(url_part: &str) -> String {
    format!("/new/{}", url_part)
}

pub fn edit_path(url_part: &str, id: &str) -> String {
    format!("/edit/{}/{}", url_part, id)
}

pub fn stats_path(url_part: &str, id: &str) -> String {
    format!("/stats/{}/{}", url_part, id)
}

/// Screens rendered by this console
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Posts,
    Pages,
    /// Stats, edit and create views live in other screens
    Elsewhere(String),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" | "/posts" => Route::Posts,
            "/pages" => Route::Pages,
            other => Route::Elsewhere(other.to_string()),
        }
    }
}

/// Current `location.pathname`
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Push `path` onto the history stack and notify listeners via `popstate`
pub fn navigate(path: &str) {
    let Some(window) = web_sys::window() else { return };
    let pushed = window
        .history()
        .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(path)));
    if let Err(e) = pushed {
        web_sys::console::error_1(&format!("[ROUTE] pushState failed for {}: {:?}", path, e).into());
        let _ = window.location().set_href(path);
        return;
    }
    if let Ok(ev) = web_sys::Event::new("popstate") {
        let _ = window.dispatch_event(&ev);
    }
}
