use std::collections::BTreeMap;

use serde::Serialize;

use super::record::Record;
use super::sort::SortState;

/// Everything a renderer needs to draw one page of a list screen.
#[derive(Debug, Clone, Serialize)]
pub struct ListPageView {
    pub items: Vec<Record>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub items_per_page: usize,
    pub page_numbers: Vec<usize>,
    /// 1-based index of the first item shown, 0 when the page is empty.
    pub showing_from: usize,
    pub showing_to: usize,
    pub search_term: String,
    pub filters: BTreeMap<String, String>,
    pub sort: SortState,
}

impl ListPageView {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
