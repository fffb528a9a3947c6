//! Presets for the three recruiting list screens.

pub mod candidates;
pub mod jobs;
pub mod reports;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::listing::{ListViewConfig, ListViewController, Record};

/// The list screens served by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Candidates,
    Jobs,
    Reports,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Candidates,
        EntityKind::Jobs,
        EntityKind::Reports,
    ];

    pub const fn slug(self) -> &'static str {
        match self {
            EntityKind::Candidates => "candidates",
            EntityKind::Jobs => "jobs",
            EntityKind::Reports => "reports",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EntityKind::Candidates => "Candidates",
            EntityKind::Jobs => "Jobs",
            EntityKind::Reports => "Job Fit Reports",
        }
    }

    pub fn list_config(self, settings: &ListSettings) -> ListViewConfig {
        let config = match self {
            EntityKind::Candidates => candidates::config(&settings.home_country),
            EntityKind::Jobs => jobs::config(),
            EntityKind::Reports => reports::config(),
        };
        config.items_per_page(settings.items_per_page)
    }

    pub fn controller(self, records: Vec<Record>, settings: &ListSettings) -> ListViewController {
        ListViewController::new(records, self.list_config(settings))
    }

    pub fn detail_path(self, record: &Record) -> Option<String> {
        match self {
            EntityKind::Candidates => candidates::detail_path(record),
            EntityKind::Jobs => jobs::detail_path(record),
            EntityKind::Reports => reports::detail_path(record),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown list '{0}'")]
pub struct UnknownEntity(pub String);

impl FromStr for EntityKind {
    type Err = UnknownEntity;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "candidates" | "resumes" => Ok(EntityKind::Candidates),
            "jobs" => Ok(EntityKind::Jobs),
            "reports" | "job_fit_reports" | "job-fit-reports" => Ok(EntityKind::Reports),
            _ => Err(UnknownEntity(value.to_string())),
        }
    }
}

/// Per-deployment knobs shared by every list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSettings {
    pub items_per_page: usize,
    pub home_country: String,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            items_per_page: crate::listing::DEFAULT_ITEMS_PER_PAGE,
            home_country: candidates::DEFAULT_HOME_COUNTRY.to_string(),
        }
    }
}

pub(crate) fn detail_path(prefix: &str, record: &Record) -> Option<String> {
    record.id().map(|id| format!("/hiring/{prefix}/{id}/"))
}

/// `"City, Country"`, whichever part exists, or `fallback`.
pub(crate) fn location_text(
    city: Option<String>,
    country: Option<String>,
    fallback: &str,
) -> String {
    let city = city.filter(|value| !value.is_empty());
    let country = country.filter(|value| !value.is_empty());
    match (city, country) {
        (Some(city), Some(country)) => format!("{city}, {country}"),
        (Some(part), None) | (None, Some(part)) => part,
        (None, None) => fallback.to_string(),
    }
}
