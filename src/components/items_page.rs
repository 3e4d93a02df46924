//! Items Page Component
//!
//! Reusable list page for content items. Each entity kind supplies its
//! strings and, optionally, a toolbar nav and an extra per-item control.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::{DeleteItemModal, ItemList, Link, LoggedInLayout};
use crate::models::Item;
use crate::routes::new_item_path;
use crate::store::ItemsStore;

/// Localized labels for an items page
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemsPageStrings {
    pub title: &'static str,
    /// Path segment naming the entity kind, e.g. `posts`
    pub url_part: &'static str,
    pub no_items: &'static str,
    pub new_item: &'static str,
}

/// Renders additional controls next to an item's icon buttons
pub type LineItemExtra = Arc<dyn Fn(&Item) -> AnyView + Send + Sync>;

/// Per-kind customization points
#[derive(Clone, Default)]
pub struct ItemsPageHooks {
    /// Rendered in the toolbar after the "new item" link
    pub nav: Option<ViewFn>,
    pub line_item_extra: Option<LineItemExtra>,
}

#[component]
pub fn ItemsPage(
    strings: ItemsPageStrings,
    store: ItemsStore,
    #[prop(optional)] hooks: ItemsPageHooks,
) -> impl IntoView {
    let ItemsPageHooks { nav, line_item_extra } = hooks;

    let toolbar = move || {
        let nav = nav.clone();
        view! {
            <div class="items-toolbar">
                <Link to=new_item_path(strings.url_part)>
                    <span class="toolbar-icon">"+"</span>
                    {strings.new_item}
                </Link>
                {nav.map(|n| n.run())}
            </div>
        }
    };

    view! {
        <LoggedInLayout page_title=strings.title toolbar=toolbar>
            {move || store.error().map(|e| view! {
                <div class="items-error">
                    <span>{e}</span>
                    <button class="btn-close" on:click=move |_| store.clear_error()>"×"</button>
                </div>
            })}
            <div class="items-content">
                {move || if store.is_loading() {
                    "Loading...".into_any()
                } else {
                    view! {
                        <ItemList
                            store=store
                            url_part=strings.url_part
                            no_items=strings.no_items
                            line_item_extra=line_item_extra.clone()
                        />
                    }.into_any()
                }}
            </div>
            <DeleteItemModal store=store />
        </LoggedInLayout>
    }
}
