//! Console Pages
//!
//! Concrete items pages, one per content kind.

mod posts;
mod pages;

pub use posts::PostsPage;
pub use pages::PagesPage;

#[cfg(test)]
mod tests {
    use super::pages::PAGES_STRINGS;
    use super::posts::POSTS_STRINGS;

    #[test]
    fn test_url_parts_are_distinct_path_segments() {
        for strings in [POSTS_STRINGS, PAGES_STRINGS] {
            assert!(!strings.url_part.is_empty());
            assert!(!strings.url_part.contains('/'));
        }
        assert_ne!(POSTS_STRINGS.url_part, PAGES_STRINGS.url_part);
    }
}
