//! Pagination Component
//!
//! Prev/Next controls over the store's page cursor.

use leptos::prelude::*;

use crate::paging::{next_disabled, page_label, prev_disabled, step};
use crate::store::ItemsStore;

#[component]
pub fn Pagination(store: ItemsStore) -> impl IntoView {
    let set_page = move |dir: isize| {
        if let Some(target) = step(store.page_index(), store.total_pages(), dir) {
            store.load_page(target);
        }
    };

    view! {
        <div class="pagination">
            <div class="btn-group">
                <button
                    class="btn"
                    disabled=move || prev_disabled(store.page_index())
                    on:click=move |_| set_page(-1)
                >
                    "Prev"
                </button>
                <button
                    class="btn"
                    disabled=move || next_disabled(store.page_index(), store.total_pages())
                    on:click=move |_| set_page(1)
                >
                    "Next"
                </button>
            </div>
            <div class="pagination-label">
                {move || page_label(store.page_index(), store.total_pages())}
            </div>
        </div>
    }
}
