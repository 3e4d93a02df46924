//! Line Item Component
//!
//! Card summarizing one item, with edit/open/delete icon buttons.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{Link, LineItemExtra};
use crate::models::Item;
use crate::routes::{self, edit_path, stats_path};
use crate::store::ItemsStore;

/// Marks controls that handle their own clicks inside a card
pub const ICON_BUTTON_CLASS: &str = "icon-button";

const EDIT_ICON: &str = "/public/img/edit.svg";
const NEW_WINDOW_ICON: &str = "/public/img/newindow.svg";
const DELETE_ICON: &str = "/public/img/delete.svg";

/// Whether the click started inside an icon button of the card
fn click_within_icon_button(ev: &web_sys::MouseEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(&format!(".{}", ICON_BUTTON_CLASS)).ok().flatten())
        .is_some()
}

/// Where a click on a card leads; clicks on icon buttons stay with the button
pub fn card_click_target(in_icon_button: bool, url_part: &str, id: &str) -> Option<String> {
    (!in_icon_button).then(|| stats_path(url_part, id))
}

/// A single item card; clicking it opens the item's stats
#[component]
pub fn LineItem(
    item: Item,
    url_part: &'static str,
    store: ItemsStore,
    extra: Option<LineItemExtra>,
) -> impl IntoView {
    let card_id = item.id.clone();
    let edit = edit_path(url_part, &item.id);
    let public_url = item.public_url();
    let summary = item.summary();
    let published = item.published_label();
    let avatar = store.user_avatar_url(&item.author.email);
    let author_name = item.author.name.clone();
    let delete_id = item.id.clone();

    let on_card_click = move |ev: web_sys::MouseEvent| {
        if let Some(path) = card_click_target(click_within_icon_button(&ev), url_part, &card_id) {
            routes::navigate(&path);
        }
    };

    let image = item.is_post().then(|| view! {
        <img class="item-header-image" src=item.image_src().to_string() alt="" />
    });
    let body_class = if image.is_some() { "item-body with-image" } else { "item-body" };

    let extra_view = extra.map(|render| render(&item));

    let series = item.series.clone().filter(|s| !s.is_empty()).map(|s| view! {
        <div class="item-series">{s}</div>
    });
    let tags = item.tags.iter().map(|t| view! {
        <div class="item-tag">{t.clone()}</div>
    }).collect_view();

    view! {
        <div class="item-card" on:click=on_card_click>
            {image}
            <div class=body_class>
                <div class="item-header">
                    <div class="item-title text-ellipsis">{item.title.clone()}</div>
                    <div class="item-actions">
                        {extra_view}
                        <div class=ICON_BUTTON_CLASS title="Edit">
                            <Link to=edit>
                                <img src=EDIT_ICON alt="Edit" />
                            </Link>
                        </div>
                        <div class=ICON_BUTTON_CLASS title="Open">
                            <a href=public_url target="_blank" rel="noopener">
                                <img src=NEW_WINDOW_ICON alt="Open" />
                            </a>
                        </div>
                        <div
                            class=ICON_BUTTON_CLASS
                            title="Delete"
                            on:click=move |_| store.set_delete_item_id(Some(delete_id.clone()))
                        >
                            <img src=DELETE_ICON alt="Delete" />
                        </div>
                    </div>
                </div>
                <div class="item-summary text-ellipsis">{summary}</div>
                <div class="item-labels">
                    {series}
                    {tags}
                </div>
                <div class="item-footer">
                    <div class="item-author">
                        <img class="avatar rounded-circle" src=avatar alt="User Avatar" />
                        {author_name}
                    </div>
                    <div class="item-date">{published}</div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_click_opens_stats() {
        assert_eq!(card_click_target(false, "posts", "Xy9").as_deref(), Some("/stats/posts/Xy9"));
        assert_eq!(card_click_target(false, "pages", "about").as_deref(), Some("/stats/pages/about"));
    }

    #[test]
    fn test_icon_button_click_does_not_navigate() {
        assert_eq!(card_click_target(true, "posts", "Xy9"), None);
    }
}
