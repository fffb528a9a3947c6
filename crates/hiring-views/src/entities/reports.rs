use serde::Serialize;

use crate::listing::{FieldKind, FilterRule, ListViewConfig, Record, SortDirection, SortState};

pub const STATUS_FILTER: &str = "status";

pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_FAILED: &str = "failed";

pub fn config() -> ListViewConfig {
    ListViewConfig::new(SortState::new("created_at", SortDirection::Desc))
        .search(["candidate_name", "job_title"])
        .filter(
            STATUS_FILTER,
            FilterRule::FieldEquals {
                field: "status".to_string(),
            },
        )
        .field_kind("created_at", FieldKind::Date)
        .field_kind("fit_score", FieldKind::Number)
}

pub fn detail_path(record: &Record) -> Option<String> {
    super::detail_path("reports", record)
}

pub fn candidate_path(record: &Record) -> Option<String> {
    record
        .text("candidate_id")
        .map(|id| format!("/hiring/resumes/{id}/"))
}

pub fn job_path(record: &Record) -> Option<String> {
    record.text("job_id").map(|id| format!("/hiring/jobs/{id}/"))
}

/// Header counters shown above the report list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportStatusSummary {
    pub total: usize,
    pub completed: usize,
    pub processing: usize,
    pub failed: usize,
}

impl ReportStatusSummary {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut summary = Self::default();
        for record in records {
            summary.total += 1;
            let status = record.text("status").unwrap_or_default();
            if status.eq_ignore_ascii_case(STATUS_COMPLETED) {
                summary.completed += 1;
            } else if status.eq_ignore_ascii_case(STATUS_FAILED) {
                summary.failed += 1;
            }
        }
        summary.processing = summary
            .total
            .saturating_sub(summary.completed)
            .saturating_sub(summary.failed);
        summary
    }
}
