use crate::listing::{FieldKind, FilterRule, ListViewConfig, Record, SortDirection, SortState};

pub const EMPLOYMENT_TYPE_FILTER: &str = "employment_type";
pub const SENIORITY_FILTER: &str = "seniority";

pub fn config() -> ListViewConfig {
    ListViewConfig::new(SortState::new("created_at", SortDirection::Desc))
        .search(["title", "company_name", "location_city"])
        .filter(
            EMPLOYMENT_TYPE_FILTER,
            FilterRule::FieldEquals {
                field: "employment_type".to_string(),
            },
        )
        .filter(
            SENIORITY_FILTER,
            FilterRule::FieldEquals {
                field: "seniority".to_string(),
            },
        )
        .field_kind("created_at", FieldKind::Date)
}

pub fn detail_path(record: &Record) -> Option<String> {
    super::detail_path("jobs", record)
}

pub fn location_text(record: &Record) -> String {
    super::location_text(
        record.text("location_city"),
        record.text("location_country"),
        "Remote",
    )
}
