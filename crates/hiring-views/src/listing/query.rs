use super::controller::ListViewController;
use super::sort::{SortDirection, SortState};
use super::ListViewError;

const SEARCH: &str = "search";
const SORT: &str = "sort";
const DIRECTION: &str = "direction";
const PAGE: &str = "page";

/// List state carried in a request or on the command line. Any parameter that
/// is not one of `search`, `sort`, `direction`, or `page` names a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search: Option<String>,
    pub filters: Vec<(String, String)>,
    pub sort: Option<String>,
    pub direction: Option<SortDirection>,
    pub page: Option<usize>,
}

impl ListQuery {
    pub fn from_params<I, K, V>(params: I) -> Result<Self, ListViewError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = Self::default();
        for (key, value) in params {
            let (key, value) = (key.as_ref(), value.as_ref());
            match key {
                SEARCH => query.search = Some(value.to_string()),
                SORT if !value.is_empty() => query.sort = Some(value.to_string()),
                DIRECTION if !value.is_empty() => query.direction = Some(value.parse()?),
                PAGE if !value.is_empty() => query.page = Some(parse_page(value)?),
                SORT | DIRECTION | PAGE => {}
                filter => query.filters.push((filter.to_string(), value.to_string())),
            }
        }
        Ok(query)
    }

    /// Applies filters, then search, then sort, then page, so an explicit page
    /// survives the reset that sorting performs.
    pub fn apply(&self, list: &mut ListViewController) -> Result<(), ListViewError> {
        for (name, value) in &self.filters {
            list.set_filter(name, value.as_str())?;
        }

        if let Some(search) = &self.search {
            list.set_search_term(search.as_str());
        }

        if self.sort.is_some() || self.direction.is_some() {
            let field = self
                .sort
                .clone()
                .unwrap_or_else(|| list.sort().field.clone());
            let direction = self.direction.unwrap_or(SortDirection::Asc);
            list.set_sort(SortState::new(field, direction));
        }

        if let Some(page) = self.page {
            list.set_page(page);
        }

        Ok(())
    }
}

fn parse_page(value: &str) -> Result<usize, ListViewError> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|page| *page > 0)
        .ok_or_else(|| ListViewError::InvalidPage(value.to_string()))
}
