//! Item Endpoints
//!
//! Listing and deletion for posts and pages.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::models::{Item, ItemsResponse};
use crate::paging::total_pages;
use super::{delete, get_json};

/// A fetched page together with the page count it implies
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadedPage {
    pub items: Vec<Item>,
    pub total_pages: usize,
}

// ========================
// URLs
// ========================

pub fn list_items_url(
    api_base: &str,
    url_part: &str,
    page_index: usize,
    page_size: usize,
    query: Option<&str>,
) -> String {
    let mut url = format!("{}/api/{}?page={}&size={}", api_base, url_part, page_index, page_size);
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        url.push_str("&query=");
        url.push_str(&utf8_percent_encode(q, NON_ALPHANUMERIC).to_string());
    }
    url
}

pub fn item_url(api_base: &str, url_part: &str, id: &str) -> String {
    format!("{}/api/{}/{}", api_base, url_part, utf8_percent_encode(id, NON_ALPHANUMERIC))
}

// ========================
// Commands
// ========================

pub async fn list_items(
    api_base: &str,
    url_part: &str,
    page_index: usize,
    page_size: usize,
    query: Option<&str>,
) -> Result<LoadedPage, String> {
    let url = list_items_url(api_base, url_part, page_index, page_size, query);
    let page: ItemsResponse = get_json(&url).await?;
    Ok(LoadedPage {
        total_pages: total_pages(page.total, page_size),
        items: page.items,
    })
}

pub async fn delete_item(api_base: &str, url_part: &str, id: &str) -> Result<(), String> {
    delete(&item_url(api_base, url_part, id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_items_url() {
        assert_eq!(list_items_url("", "posts", 0, 10, None), "/api/posts?page=0&size=10");
        assert_eq!(
            list_items_url("https://a.example.com", "pages", 2, 5, Some("")),
            "https://a.example.com/api/pages?page=2&size=5"
        );
        assert_eq!(
            list_items_url("", "posts", 0, 10, Some("rust & wasm")),
            "/api/posts?page=0&size=10&query=rust%20%26%20wasm"
        );
    }

    #[test]
    fn test_item_url_encodes_id() {
        assert_eq!(item_url("", "posts", "Xy9"), "/api/posts/Xy9");
        assert_eq!(item_url("", "posts", "a/b"), "/api/posts/a%2Fb");
    }

    #[test]
    fn test_decode_items_page() {
        let json = r#"{ "items": [{ "id": "1", "title": "First" }], "total": 21 }"#;
        let page: ItemsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(total_pages(page.total, 10), 3);
    }
}
