//! Pages Page
//!
//! Items page for static pages. Uses the default toolbar and line items.

use leptos::prelude::*;

use crate::components::{ItemsPage, ItemsPageStrings};
use crate::context::use_app_context;
use crate::store::ItemsStore;

pub const PAGES_STRINGS: ItemsPageStrings = ItemsPageStrings {
    title: "Pages",
    url_part: "pages",
    no_items: "You have not created any pages yet",
    new_item: "New Page",
};

#[component]
pub fn PagesPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = ItemsStore::new(PAGES_STRINGS.url_part, ctx.config());

    // Initial load
    Effect::new(move |_| store.load_page(0));

    view! {
        <ItemsPage strings=PAGES_STRINGS store=store />
    }
}
