//! Generic list-view controller shared by every recruiting list screen.
//!
//! A [`ListViewController`] owns one page's dataset and the user's search,
//! filter, sort, and pagination choices. Screens differ only in the
//! [`ListViewConfig`] they hand to it.

mod config;
mod controller;
pub mod filter;
pub mod pagination;
mod query;
pub mod record;
pub mod sort;
pub mod views;

#[cfg(test)]
mod tests;

pub use config::{ListViewConfig, NamedFilter};
pub use controller::ListViewController;
pub use filter::{Condition, FilterChoice, FilterRule, ALL};
pub use pagination::{page_numbers, total_pages, PageState, DEFAULT_ITEMS_PER_PAGE};
pub use query::ListQuery;
pub use record::{FieldValue, Record};
pub use sort::{FieldKind, SortDirection, SortState};
pub use views::ListPageView;

/// Errors raised when a caller drives a list with input it does not accept.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListViewError {
    #[error("unknown filter '{0}'")]
    UnknownFilter(String),
    #[error("sort direction must be 'asc' or 'desc', got '{0}'")]
    InvalidDirection(String),
    #[error("page must be a positive integer, got '{0}'")]
    InvalidPage(String),
}
