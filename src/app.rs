//! Blog Admin Frontend App
//!
//! Root component: configuration, routing and the items pages.

use leptos::ev;
use leptos::prelude::*;

use crate::components::Link;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{PagesPage, PostsPage};
use crate::routes::{self, Route};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    web_sys::console::log_1(&format!("[APP] api_base={:?}, page_size={}", config.api_base, config.page_size).into());

    let (path, set_path) = signal(routes::current_path());
    let ctx = AppContext::new((path, set_path), config);

    // Provide context to all children
    provide_context(ctx);

    // Back/forward buttons and in-app navigation both surface as popstate
    let popstate = window_event_listener(ev::popstate, move |_| ctx.sync_path());
    on_cleanup(move || popstate.remove());

    let route = Memo::new(move |_| Route::from_path(&path.get()));

    view! {
        <div class="app-layout">
            {move || match route.get() {
                Route::Posts => view! { <PostsPage /> }.into_any(),
                Route::Pages => view! { <PagesPage /> }.into_any(),
                Route::Elsewhere(path) => view! {
                    <div class="route-elsewhere">
                        <p>{format!("{} is not available in this console.", path)}</p>
                        <Link to="/posts">"Back to posts"</Link>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
