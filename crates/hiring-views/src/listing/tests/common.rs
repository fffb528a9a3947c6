use crate::listing::{
    Condition, FieldKind, FilterChoice, FilterRule, ListViewConfig, ListViewController, Record,
    SortDirection, SortState,
};

pub(super) fn person(name: &str, exp: Option<f64>) -> Record {
    Record::new().with("name", name).with("exp", exp)
}

pub(super) fn config() -> ListViewConfig {
    ListViewConfig::new(SortState::new("name", SortDirection::Asc))
        .search(["name", "email"])
        .filter(
            "level",
            FilterRule::Choices(vec![
                FilterChoice::new("junior", Condition::number_range("exp", None, Some(3.0))),
                FilterChoice::new("senior", Condition::number_range("exp", Some(3.0), None)),
            ]),
        )
        .filter(
            "team",
            FilterRule::FieldEquals {
                field: "team".to_string(),
            },
        )
        .field_kind("exp", FieldKind::Number)
        .field_kind("joined", FieldKind::Date)
}

pub(super) fn controller(records: Vec<Record>) -> ListViewController {
    ListViewController::new(records, config())
}

/// `count` rows named `row-00`, `row-01`, ... so text order equals index order.
pub(super) fn numbered(count: usize) -> Vec<Record> {
    (0..count)
        .map(|index| {
            Record::new()
                .with("name", format!("row-{index:02}"))
                .with("exp", index as f64)
                .with("team", if index % 2 == 0 { "core" } else { "infra" })
        })
        .collect()
}

pub(super) fn names(records: &[&Record]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.text("name").unwrap_or_default())
        .collect()
}
