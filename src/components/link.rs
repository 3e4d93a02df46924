//! Link Component
//!
//! Anchor that navigates through the history API instead of reloading.

use leptos::prelude::*;

use crate::routes;

/// In-app link; modified clicks (new tab, new window) fall through to the browser
#[component]
pub fn Link(
    #[prop(into)] to: String,
    children: Children,
) -> impl IntoView {
    let href = to.clone();

    view! {
        <a
            href=href
            on:click=move |ev: web_sys::MouseEvent| {
                if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() {
                    return;
                }
                ev.prevent_default();
                routes::navigate(&to);
            }
        >
            {children()}
        </a>
    }
}
