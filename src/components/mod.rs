//! UI Components
//!
//! Reusable Leptos components.

mod link;
mod layout;
mod items_page;
mod item_list;
mod line_item;
mod pagination;
mod delete_item_modal;

pub use link::Link;
pub use layout::LoggedInLayout;
pub use items_page::{ItemsPage, ItemsPageHooks, ItemsPageStrings, LineItemExtra};
pub use item_list::ItemList;
pub use line_item::LineItem;
pub use pagination::Pagination;
pub use delete_item_modal::DeleteItemModal;
