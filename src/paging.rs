//! Pagination Helpers
//!
//! Bounds checks shared by the pagination control and the store.

/// Number of pages needed for `total` items
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

pub fn prev_disabled(page_index: usize) -> bool {
    page_index == 0
}

pub fn next_disabled(page_index: usize, total_pages: usize) -> bool {
    page_index + 1 >= total_pages
}

/// Page index reached by stepping `dir` from `page_index`, if that page exists
pub fn step(page_index: usize, total_pages: usize, dir: isize) -> Option<usize> {
    let target = page_index.checked_add_signed(dir)?;
    (target < total_pages).then_some(target)
}

pub fn page_label(page_index: usize, total_pages: usize) -> String {
    format!("Page {} of {}", page_index + 1, total_pages)
}

/// Page to reload after deleting one of `items_on_page` items from `page_index`
///
/// Deleting the only item of a trailing page would leave it empty, so step back.
pub fn page_after_delete(page_index: usize, items_on_page: usize) -> usize {
    if items_on_page <= 1 && page_index > 0 {
        page_index - 1
    } else {
        page_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_prev_disabled_only_on_first_page() {
        assert!(prev_disabled(0));
        assert!(!prev_disabled(1));
        assert!(!prev_disabled(7));
    }

    #[test]
    fn test_next_disabled_on_last_page() {
        assert!(next_disabled(0, 0));
        assert!(next_disabled(0, 1));
        assert!(!next_disabled(0, 2));
        assert!(next_disabled(1, 2));
        assert!(!next_disabled(2, 5));
        assert!(next_disabled(4, 5));
    }

    #[test]
    fn test_step() {
        assert_eq!(step(0, 3, -1), None);
        assert_eq!(step(0, 3, 1), Some(1));
        assert_eq!(step(2, 3, 1), None);
        assert_eq!(step(2, 3, -1), Some(1));
    }

    #[test]
    fn test_page_label_is_one_based() {
        assert_eq!(page_label(0, 4), "Page 1 of 4");
        assert_eq!(page_label(3, 4), "Page 4 of 4");
    }

    #[test]
    fn test_page_after_delete() {
        assert_eq!(page_after_delete(0, 1), 0);
        assert_eq!(page_after_delete(2, 1), 1);
        assert_eq!(page_after_delete(2, 3), 2);
        assert_eq!(page_after_delete(0, 5), 0);
    }
}
