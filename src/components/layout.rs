//! Logged-In Layout
//!
//! Page chrome shared by every console screen: side navigation, page title and toolbar.

use leptos::prelude::*;

use crate::components::Link;
use crate::context::use_app_context;
use crate::routes::Route;

const NAV_LINKS: &[(&str, &str, Route)] = &[
    ("/posts", "Posts", Route::Posts),
    ("/pages", "Pages", Route::Pages),
];

#[component]
pub fn LoggedInLayout(
    page_title: &'static str,
    #[prop(into)] toolbar: ViewFn,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="logged-in-layout">
            <nav class="side-nav">
                <div class="side-nav-brand">"Blog Admin"</div>
                {NAV_LINKS.iter().map(|(path, label, route)| {
                    let is_active = move || Route::from_path(&ctx.path.get()) == *route;
                    view! {
                        <div class=move || if is_active() { "side-nav-item active" } else { "side-nav-item" }>
                            <Link to=*path>{*label}</Link>
                        </div>
                    }
                }).collect_view()}
            </nav>

            <div class="page">
                <div class="page-header">
                    <h1 class="page-title">{page_title}</h1>
                    <div class="page-toolbar">{toolbar.run()}</div>
                </div>
                {children()}
            </div>
        </div>
    }
}
