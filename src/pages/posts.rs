//! Posts Page
//!
//! Items page for blog posts, with search in the toolbar.

use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ItemsPage, ItemsPageHooks, ItemsPageStrings, LineItemExtra};
use crate::context::use_app_context;
use crate::models::Item;
use crate::store::ItemsStore;

pub const POSTS_STRINGS: ItemsPageStrings = ItemsPageStrings {
    title: "Posts",
    url_part: "posts",
    no_items: "You have not written any posts yet",
    new_item: "New Post",
};

/// Wait after the last keystroke before searching
const SEARCH_DEBOUNCE_MS: u32 = 300;

#[component]
pub fn PostsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = ItemsStore::new(POSTS_STRINGS.url_part, ctx.config());

    // Initial load
    Effect::new(move |_| store.load_page(0));

    let hooks = ItemsPageHooks {
        nav: Some(ViewFn::from(move || view! { <PostSearch store=store /> })),
        line_item_extra: Some(Arc::new(private_badge) as LineItemExtra),
    };

    view! {
        <ItemsPage strings=POSTS_STRINGS store=store hooks=hooks />
    }
}

/// Lock shown on posts shared through a private viewing key
fn private_badge(item: &Item) -> AnyView {
    item.is_private()
        .then(|| view! {
            <div class="private-badge" title="Shared privately">"🔒"</div>
        })
        .into_any()
}

/// Debounced search box; clearing it returns to the full listing
#[component]
fn PostSearch(store: ItemsStore) -> impl IntoView {
    let (query, set_query) = signal(String::new());
    // Bumped on every keystroke so stale timers can tell they were superseded
    let (generation, set_generation) = signal(0u32);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_generation.update(|g| *g += 1);
        store.search(&query.get());
    };

    view! {
        <form class="post-search" on:submit=on_submit>
            <input
                type="search"
                placeholder="Search posts..."
                prop:value=move || query.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_query.set(value.clone());
                    let current = generation.get_untracked() + 1;
                    set_generation.set(current);
                    spawn_local(async move {
                        TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
                        if generation.try_get_untracked() == Some(current) {
                            store.search(&value);
                        }
                    });
                }
            />
        </form>
    }
}
