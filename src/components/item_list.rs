//! Item List Component
//!
//! Current page of items followed by pagination, or the empty state.

use leptos::prelude::*;

use crate::components::{LineItem, LineItemExtra, Pagination};
use crate::store::ItemsStore;

pub const NO_SEARCH_MATCH: &str = "Nothing matched your search";

/// Message shown when there is nothing to list
pub fn empty_message(is_search_result: bool, no_items: &'static str) -> &'static str {
    if is_search_result {
        NO_SEARCH_MATCH
    } else {
        no_items
    }
}

#[component]
pub fn ItemList(
    store: ItemsStore,
    url_part: &'static str,
    no_items: &'static str,
    line_item_extra: Option<LineItemExtra>,
) -> impl IntoView {
    move || {
        if store.total_pages() == 0 {
            return view! {
                <div class="items-empty">{move || empty_message(store.is_search_result(), no_items)}</div>
            }.into_any();
        }

        let extra = line_item_extra.clone();
        view! {
            <div>
                <div class="items">
                    <For
                        each=move || store.items()
                        key=|item| item.id.clone()
                        children=move |item| {
                            view! {
                                <div class="item-row">
                                    <LineItem item=item url_part=url_part store=store extra=extra.clone() />
                                </div>
                            }
                        }
                    />
                </div>
                <Pagination store=store />
            </div>
        }.into_any()
    }
}
