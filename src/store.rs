//! Items Page Store
//!
//! Pagination, loading and deletion state behind an items page.
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{self, LoadedPage};
use crate::config::AppConfig;
use crate::models::Item;
use crate::paging::page_after_delete;

/// State read by the items page
#[derive(Clone, Debug, Default, Store)]
pub struct ItemsState {
    /// A page request is in flight
    pub is_loading: bool,
    /// Items on the current page
    pub items: Vec<Item>,
    pub page_index: usize,
    pub total_pages: usize,
    /// Item the pending action applies to
    pub current_item: Option<Item>,
    /// Set while the delete confirmation is open
    pub delete_item_id: Option<String>,
    pub is_item_deleting: bool,
    /// Items come from a search rather than the full listing
    pub is_search_result: bool,
    pub search_query: Option<String>,
    /// Last failed request, shown above the list
    pub error: Option<String>,
    /// Sequence number of the newest page request
    pub request_seq: u64,
}

/// Handle to the state of one items page (posts, pages, ...)
#[derive(Clone, Copy)]
pub struct ItemsStore {
    state: Store<ItemsState>,
    url_part: &'static str,
    config: StoredValue<AppConfig>,
}

impl ItemsStore {
    pub fn new(url_part: &'static str, config: AppConfig) -> Self {
        Self {
            state: Store::new(ItemsState::default()),
            url_part,
            config: StoredValue::new(config),
        }
    }

    // ========================
    // Reactive reads
    // ========================

    pub fn is_loading(&self) -> bool {
        self.state.is_loading().get()
    }

    pub fn items(&self) -> Vec<Item> {
        self.state.items().get()
    }

    pub fn page_index(&self) -> usize {
        self.state.page_index().get()
    }

    pub fn total_pages(&self) -> usize {
        self.state.total_pages().get()
    }

    pub fn current_item(&self) -> Option<Item> {
        self.state.current_item().get()
    }

    pub fn delete_item_id(&self) -> Option<String> {
        self.state.delete_item_id().get()
    }

    pub fn is_item_deleting(&self) -> bool {
        self.state.is_item_deleting().get()
    }

    pub fn is_search_result(&self) -> bool {
        self.state.is_search_result().get()
    }

    pub fn error(&self) -> Option<String> {
        self.state.error().get()
    }

    /// The owning page was unmounted while a request was in flight
    fn is_disposed(&self) -> bool {
        self.state.try_with_untracked(|_| ()).is_none()
    }

    pub fn user_avatar_url(&self, email: &str) -> String {
        self.config.with_value(|c| api::user_avatar_url(&c.api_base, email))
    }

    // ========================
    // Mutations
    // ========================

    /// Fetch page `index` with the active search query
    ///
    /// `page_index` only moves once the page has arrived, so a failed request
    /// leaves the cursor on the items still shown.
    pub fn load_page(&self, index: usize) {
        let this = *self;
        let config = self.config.get_value();
        let query = self.state.search_query().get_untracked();
        let seq = self.begin_load();

        web_sys::console::log_1(&format!("[STORE] Loading {} page {}", self.url_part, index).into());
        spawn_local(async move {
            let result = api::list_items(
                &config.api_base,
                this.url_part,
                index,
                config.page_size,
                query.as_deref(),
            )
            .await;
            if this.is_disposed() {
                return;
            }
            match &result {
                Ok(page) => {
                    web_sys::console::log_1(&format!("[STORE] Loaded {} {}", page.items.len(), this.url_part).into());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[STORE] Failed to load {}: {}", this.url_part, e).into());
                }
            }
            if !this.finish_load(seq, index, result) {
                web_sys::console::log_1(&format!("[STORE] Dropped stale {} page {}", this.url_part, index).into());
            }
        });
    }

    /// Mark a page request as started and return its sequence number
    fn begin_load(&self) -> u64 {
        let seq = self.state.request_seq().get_untracked() + 1;
        self.state.request_seq().set(seq);
        self.state.is_loading().set(true);
        seq
    }

    /// Apply the outcome of request `seq` for page `index`
    ///
    /// Returns false, changing nothing, when a newer request has been issued since.
    fn finish_load(&self, seq: u64, index: usize, result: Result<LoadedPage, String>) -> bool {
        if self.state.request_seq().get_untracked() != seq {
            return false;
        }
        match result {
            Ok(page) => {
                self.state.items().set(page.items);
                self.state.total_pages().set(page.total_pages);
                self.state.page_index().set(index);
                self.state.error().set(None);
            }
            Err(e) => self.state.error().set(Some(e)),
        }
        self.state.is_loading().set(false);
        true
    }

    /// Switch to search results for `query`; an empty query returns to the full listing
    pub fn search(&self, query: &str) {
        let query = query.trim();
        let active = !query.is_empty();
        self.state.is_search_result().set(active);
        self.state.search_query().set(active.then(|| query.to_string()));
        self.load_page(0);
    }

    /// Open (`Some`) or dismiss (`None`) the delete confirmation
    pub fn set_delete_item_id(&self, id: Option<String>) {
        let current = id.as_ref().and_then(|id| {
            self.state
                .items()
                .with_untracked(|items| items.iter().find(|item| &item.id == id).cloned())
        });
        self.state.current_item().set(current);
        self.state.delete_item_id().set(id);
    }

    pub fn clear_error(&self) {
        self.state.error().set(None);
    }

    /// Delete the item awaiting confirmation, then reload
    pub fn delete_item(&self) {
        let Some(id) = self.state.delete_item_id().get_untracked() else { return };
        if self.state.is_item_deleting().get_untracked() {
            return;
        }
        let this = *self;
        let api_base = self.config.with_value(|c| c.api_base.clone());
        self.state.is_item_deleting().set(true);

        spawn_local(async move {
            let result = api::delete_item(&api_base, this.url_part, &id).await;
            if this.is_disposed() {
                return;
            }
            this.state.is_item_deleting().set(false);
            match result {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[STORE] Deleted {} {}", this.url_part, id).into());
                    this.set_delete_item_id(None);
                    let on_page = this.state.items().with_untracked(|items| items.len());
                    let index = this.state.page_index().get_untracked();
                    this.load_page(page_after_delete(index, on_page));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[STORE] Failed to delete {}: {}", id, e).into());
                    this.set_delete_item_id(None);
                    this.state.error().set(Some(e));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str) -> Item {
        serde_json::from_str(&format!(r#"{{ "id": "{}", "title": "Item {}", "type": "post" }}"#, id, id)).unwrap()
    }

    fn make_page(ids: &[&str], total_pages: usize) -> LoadedPage {
        LoadedPage {
            items: ids.iter().map(|id| make_item(id)).collect(),
            total_pages,
        }
    }

    fn item_ids(store: &ItemsStore) -> Vec<String> {
        store.items().into_iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_delete_confirmation_tracks_pending_item() {
        let store = ItemsStore::new("posts", AppConfig::default());
        let seq = store.begin_load();
        assert!(store.finish_load(seq, 0, Ok(make_page(&["a", "b", "c"], 1))));
        assert_eq!(store.delete_item_id(), None);
        assert_eq!(store.current_item(), None);

        store.set_delete_item_id(Some("b".to_string()));
        assert_eq!(store.delete_item_id().as_deref(), Some("b"));
        assert_eq!(store.current_item().map(|item| item.id), Some("b".to_string()));

        store.set_delete_item_id(None);
        assert_eq!(store.delete_item_id(), None);
        assert_eq!(store.current_item(), None);
    }

    #[test]
    fn test_delete_confirmation_for_item_not_on_page() {
        let store = ItemsStore::new("posts", AppConfig::default());
        store.set_delete_item_id(Some("zz".to_string()));
        assert_eq!(store.delete_item_id().as_deref(), Some("zz"));
        assert_eq!(store.current_item(), None);
    }

    #[test]
    fn test_failed_load_keeps_page_cursor() {
        let store = ItemsStore::new("posts", AppConfig::default());
        let seq = store.begin_load();
        store.finish_load(seq, 1, Ok(make_page(&["a", "b"], 3)));
        assert_eq!(store.page_index(), 1);

        let seq = store.begin_load();
        assert!(store.is_loading());
        assert!(store.finish_load(seq, 2, Err("HTTP 500".to_string())));

        assert_eq!(store.page_index(), 1);
        assert_eq!(store.total_pages(), 3);
        assert_eq!(item_ids(&store), vec!["a", "b"]);
        assert_eq!(store.error().as_deref(), Some("HTTP 500"));
        assert!(!store.is_loading());
    }

    #[test]
    fn test_successful_load_clears_error() {
        let store = ItemsStore::new("pages", AppConfig::default());
        let seq = store.begin_load();
        store.finish_load(seq, 0, Err("HTTP 502".to_string()));
        assert!(store.error().is_some());

        let seq = store.begin_load();
        store.finish_load(seq, 0, Ok(make_page(&["p1"], 1)));
        assert_eq!(store.error(), None);
        assert_eq!(item_ids(&store), vec!["p1"]);
    }

    #[test]
    fn test_overtaken_response_is_dropped() {
        let store = ItemsStore::new("posts", AppConfig::default());
        let older = store.begin_load();
        let newer = store.begin_load();

        assert!(store.finish_load(newer, 0, Ok(make_page(&["new"], 1))));
        assert!(!store.finish_load(older, 0, Ok(make_page(&["old1", "old2"], 4))));

        assert_eq!(item_ids(&store), vec!["new"]);
        assert_eq!(store.total_pages(), 1);
        assert!(!store.is_loading());
    }

    #[test]
    fn test_older_response_does_not_end_loading() {
        let store = ItemsStore::new("posts", AppConfig::default());
        let older = store.begin_load();
        let newer = store.begin_load();

        assert!(!store.finish_load(older, 0, Err("timeout".to_string())));
        assert!(store.is_loading());
        assert_eq!(store.error(), None);

        assert!(store.finish_load(newer, 0, Ok(make_page(&["a"], 1))));
        assert!(!store.is_loading());
    }
}
