use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::filter::FilterRule;
use super::pagination::DEFAULT_ITEMS_PER_PAGE;
use super::sort::{FieldKind, SortDirection, SortState};

/// A filter control exposed by a list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedFilter {
    pub name: String,
    pub rule: FilterRule,
}

/// Describes one list screen: what is searched, which filters exist, how
/// fields compare, and how the list starts out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListViewConfig {
    pub searched_fields: Vec<String>,
    pub filters: Vec<NamedFilter>,
    pub field_kinds: BTreeMap<String, FieldKind>,
    pub default_sort: SortState,
    pub items_per_page: usize,
}

impl ListViewConfig {
    pub fn new(default_sort: SortState) -> Self {
        Self {
            searched_fields: Vec::new(),
            filters: Vec::new(),
            field_kinds: BTreeMap::new(),
            default_sort,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }

    pub fn search<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.searched_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn filter(mut self, name: impl Into<String>, rule: FilterRule) -> Self {
        self.filters.push(NamedFilter {
            name: name.into(),
            rule,
        });
        self
    }

    pub fn field_kind(mut self, field: impl Into<String>, kind: FieldKind) -> Self {
        self.field_kinds.insert(field.into(), kind);
        self
    }

    pub fn items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page.max(1);
        self
    }

    pub fn kind_of(&self, field: &str) -> FieldKind {
        self.field_kinds.get(field).copied().unwrap_or_default()
    }
}

impl Default for ListViewConfig {
    fn default() -> Self {
        Self::new(SortState::new("created_at", SortDirection::Desc))
            .field_kind("created_at", FieldKind::Date)
    }
}
