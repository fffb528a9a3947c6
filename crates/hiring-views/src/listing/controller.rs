use std::collections::BTreeMap;

use super::config::ListViewConfig;
use super::filter::ALL;
use super::pagination::{self, PageState};
use super::record::Record;
use super::sort::{self, SortDirection, SortState};
use super::views::ListPageView;
use super::ListViewError;

/// Search, filter, sort, and pagination state over one page's dataset.
///
/// Derived values are recomputed from the current state on every read.
#[derive(Debug, Clone)]
pub struct ListViewController {
    records: Vec<Record>,
    config: ListViewConfig,
    search_term: String,
    filters: BTreeMap<String, String>,
    sort: SortState,
    page: PageState,
}

impl ListViewController {
    pub fn new(records: Vec<Record>, config: ListViewConfig) -> Self {
        let filters = config
            .filters
            .iter()
            .map(|filter| (filter.name.clone(), ALL.to_string()))
            .collect();
        let sort = config.default_sort.clone();
        let page = PageState::new(config.items_per_page);

        Self {
            records,
            config,
            search_term: String::new(),
            filters,
            sort,
            page,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filter_value(&self, name: &str) -> Option<&str> {
        self.filters.get(name).map(String::as_str)
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.page.items_per_page
    }

    /// Replaces the search term verbatim. The current page is kept unless the
    /// narrower result no longer reaches it.
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
        self.clamp_page();
    }

    pub fn set_filter(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), ListViewError> {
        let slot = self
            .filters
            .get_mut(name)
            .ok_or_else(|| ListViewError::UnknownFilter(name.to_string()))?;
        *slot = value.into();
        self.clamp_page();
        Ok(())
    }

    /// Clears the search term and sets every filter back to `all`.
    pub fn reset_filters(&mut self) {
        self.search_term.clear();
        for value in self.filters.values_mut() {
            *value = ALL.to_string();
        }
        self.clamp_page();
    }

    /// Column-header click: the same field flips direction, a new field starts
    /// ascending. Always returns to the first page.
    pub fn sort_by(&mut self, field: impl Into<String>) {
        let field = field.into();
        if self.sort.field == field {
            self.sort.direction = self.sort.direction.toggled();
        } else {
            self.sort = SortState::new(field, SortDirection::Asc);
        }
        self.page.current_page = 1;
    }

    /// Sets the sort state directly, as when it arrives in a request.
    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
        self.page.current_page = 1;
    }

    /// No bounds check; callers pass numbers taken from [`Self::page_numbers`].
    pub fn set_page(&mut self, page: usize) {
        self.page.current_page = page;
    }

    pub fn filtered_and_sorted(&self) -> Vec<&Record> {
        let needle = self.search_term.to_lowercase();
        let mut kept: Vec<&Record> = self
            .records
            .iter()
            .filter(|record| self.matches_search(record, &needle) && self.matches_filters(record))
            .collect();

        let kind = self.config.kind_of(&self.sort.field);
        sort::sort_records(&mut kept, &self.sort, kind);
        kept
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered_and_sorted().len(), self.page.items_per_page)
    }

    pub fn start_index(&self) -> usize {
        self.page.start_index()
    }

    pub fn current_page_slice(&self) -> Vec<&Record> {
        let rows = self.filtered_and_sorted();
        pagination::page_slice(&rows, &self.page).to_vec()
    }

    pub fn page_numbers(&self) -> Vec<usize> {
        pagination::page_numbers(self.page.current_page, self.total_pages())
    }

    pub fn page_view(&self) -> ListPageView {
        let rows = self.filtered_and_sorted();
        let total_items = rows.len();
        let total_pages = pagination::total_pages(total_items, self.page.items_per_page);
        let items: Vec<Record> = pagination::page_slice(&rows, &self.page)
            .iter()
            .map(|record| (*record).clone())
            .collect();
        let (showing_from, showing_to) = if items.is_empty() {
            (0, 0)
        } else {
            let start = self.page.start_index();
            (start + 1, start + items.len())
        };

        ListPageView {
            items,
            total_items,
            total_pages,
            current_page: self.page.current_page,
            items_per_page: self.page.items_per_page,
            page_numbers: pagination::page_numbers(self.page.current_page, total_pages),
            showing_from,
            showing_to,
            search_term: self.search_term.clone(),
            filters: self.filters.clone(),
            sort: self.sort.clone(),
        }
    }

    fn matches_search(&self, record: &Record, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }

        self.config.searched_fields.iter().any(|field| {
            record
                .text(field)
                .is_some_and(|value| value.to_lowercase().contains(needle))
        })
    }

    fn matches_filters(&self, record: &Record) -> bool {
        self.config.filters.iter().all(|filter| {
            let selected = self
                .filters
                .get(&filter.name)
                .map(String::as_str)
                .unwrap_or(ALL);
            filter.rule.matches(selected, record)
        })
    }

    fn clamp_page(&mut self) {
        let total = self.total_pages();
        self.page.clamp_to(total);
    }
}
