//! Delete Item Modal Component
//!
//! Confirmation overlay shown while the store holds a pending delete id.

use leptos::ev;
use leptos::prelude::*;

use crate::store::ItemsStore;

/// The dialog is shown exactly while a delete id is pending
pub fn modal_open(delete_item_id: Option<&str>) -> bool {
    delete_item_id.is_some()
}

/// Delete confirmation dialog
///
/// Open whenever `store.delete_item_id()` is set. Confirming runs the store's
/// delete; Cancel, a click on the backdrop or Escape dismiss it. Nothing can be
/// dismissed while a delete is in flight.
#[component]
pub fn DeleteItemModal(store: ItemsStore) -> impl IntoView {
    let request_close = move || {
        if !store.is_item_deleting() {
            store.set_delete_item_id(None);
        }
    };

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && modal_open(store.delete_item_id().as_deref()) {
            request_close();
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <Show when=move || modal_open(store.delete_item_id().as_deref())>
            <div class="modal-overlay" on:click=move |_| request_close()>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <p>"Are you sure you want to delete selected item?"</p>
                    {move || store.current_item().map(|item| view! {
                        <p class="modal-item-title">{item.title}</p>
                    })}
                    <div class="modal-actions">
                        <button
                            class="btn btn-danger"
                            disabled=move || store.is_item_deleting()
                            on:click=move |_| store.delete_item()
                        >
                            {move || if store.is_item_deleting() { "Loading..." } else { "Delete" }}
                        </button>
                        <button
                            class="btn"
                            disabled=move || store.is_item_deleting()
                            on:click=move |_| request_close()
                        >
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
