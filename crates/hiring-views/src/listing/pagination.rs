use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Width of the clickable page window.
pub const PAGE_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub current_page: usize,
    pub items_per_page: usize,
}

impl PageState {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn start_index(&self) -> usize {
        self.current_page
            .saturating_sub(1)
            .saturating_mul(self.items_per_page)
    }

    /// Pulls the current page back inside `[1, max(1, total_pages)]`.
    pub fn clamp_to(&mut self, total_pages: usize) {
        self.current_page = self.current_page.clamp(1, total_pages.max(1));
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    total_items.div_ceil(items_per_page.max(1))
}

/// Returns the items of the current page, or an empty slice when the page is
/// past the end.
pub fn page_slice<'a, T>(items: &'a [T], page: &PageState) -> &'a [T] {
    let start = page.start_index().min(items.len());
    let end = start.saturating_add(page.items_per_page).min(items.len());
    &items[start..end]
}

/// Sliding window of page numbers surfaced as pagination controls.
pub fn page_numbers(current_page: usize, total_pages: usize) -> Vec<usize> {
    window(current_page, total_pages).collect()
}

fn window(current: usize, total: usize) -> RangeInclusive<usize> {
    let edge = PAGE_WINDOW / 2;
    if total <= PAGE_WINDOW {
        1..=total
    } else if current <= edge + 1 {
        1..=PAGE_WINDOW
    } else if current >= total - edge {
        (total - PAGE_WINDOW + 1)..=total
    } else {
        (current - edge)..=(current + edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(12, 10), 2);
        assert_eq!(total_pages(21, 10), 3);
    }

    #[test]
    fn window_policy() {
        assert_eq!(page_numbers(1, 0), Vec::<usize>::new());
        assert_eq!(page_numbers(1, 2), [1, 2]);
        assert_eq!(page_numbers(2, 5), [1, 2, 3, 4, 5]);
        assert_eq!(page_numbers(3, 9), [1, 2, 3, 4, 5]);
        assert_eq!(page_numbers(4, 9), [2, 3, 4, 5, 6]);
        assert_eq!(page_numbers(7, 9), [5, 6, 7, 8, 9]);
        assert_eq!(page_numbers(9, 9), [5, 6, 7, 8, 9]);
    }

    #[test]
    fn window_law_holds_across_ranges() {
        for total in 0..=30 {
            for current in 1..=total.max(1) {
                let pages = page_numbers(current, total);
                assert!(pages.len() <= PAGE_WINDOW);
                assert!(pages.windows(2).all(|pair| pair[1] == pair[0] + 1));
                if total > 0 {
                    assert!(
                        pages.contains(&current),
                        "page {current} of {total} missing from {pages:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn slice_past_the_end_is_empty() {
        let items: Vec<u32> = (0..12).collect();
        let mut page = PageState::new(10);
        page.current_page = 2;
        assert_eq!(page_slice(&items, &page), &[10, 11]);
        page.current_page = 5;
        assert!(page_slice(&items, &page).is_empty());
        page.current_page = 0;
        assert_eq!(page_slice(&items, &page).len(), 10);
    }

    #[test]
    fn slice_borrows_from_items_not_page_state() {
        let items = vec!["a", "b", "c"];
        let slice = {
            let page = PageState::new(2);
            page_slice(&items, &page)
        };
        assert_eq!(slice, &["a", "b"]);
    }

    #[test]
    fn clamp_keeps_page_in_range() {
        let mut page = PageState::new(10);
        page.current_page = 7;
        page.clamp_to(3);
        assert_eq!(page.current_page, 3);
        page.clamp_to(0);
        assert_eq!(page.current_page, 1);
    }
}
