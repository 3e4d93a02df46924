//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::routes;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current location path - read
    pub path: ReadSignal<String>,
    /// Current location path - write
    set_path: WriteSignal<String>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(path: (ReadSignal<String>, WriteSignal<String>), config: AppConfig) -> Self {
        Self {
            path: path.0,
            set_path: path.1,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Re-read the path after history changes
    pub fn sync_path(&self) {
        self.set_path.set(routes::current_path());
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
