//! Frontend Models
//!
//! Data structures matching the admin API payloads.

use chrono::{DateTime, Local, TimeZone, Utc};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::markdown::plain_text;

/// Shown when a post has no header image of its own
pub const DEFAULT_ITEM_IMAGE: &str = "/public/img/default-post-image.svg";

/// Item type as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Post,
    Page,
    /// Missing or unrecognized type
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemMetadata {
    #[serde(default)]
    pub header_image_url: Option<String>,
}

/// Content item (post or page)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(rename = "type", default)]
    pub item_type: ItemType,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub private_viewing_key: Option<String>,
    #[serde(default)]
    pub author: Author,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub metadata: ItemMetadata,
}

impl Item {
    pub fn is_post(&self) -> bool {
        self.item_type == ItemType::Post
    }

    pub fn is_private(&self) -> bool {
        self.private_viewing_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// Public URL, carrying the viewing secret for privately shared items
    pub fn public_url(&self) -> String {
        match self.private_viewing_key.as_deref() {
            Some(key) if !key.is_empty() => {
                format!("{}?secret={}", self.url, utf8_percent_encode(key, NON_ALPHANUMERIC))
            }
            _ => self.url.clone(),
        }
    }

    pub fn image_src(&self) -> &str {
        self.metadata
            .header_image_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_ITEM_IMAGE)
    }

    /// One-line summary: the description, or the content flattened to text
    pub fn summary(&self) -> String {
        match self.description.as_deref() {
            Some(d) if !d.trim().is_empty() => d.to_string(),
            _ => self.content.as_deref().map(plain_text).unwrap_or_default(),
        }
    }

    pub fn published_label(&self) -> String {
        self.published_at
            .map(|at| format_published(&at, &Local))
            .unwrap_or_default()
    }
}

/// `March 04, 2024`, as the calendar date in `tz`
pub fn format_published<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(tz).format("%B %d, %Y").to_string()
}

/// One page of items as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ItemsResponse {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub total: usize,
}
