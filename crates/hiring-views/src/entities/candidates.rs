use crate::listing::{
    Condition, FieldKind, FilterChoice, FilterRule, ListViewConfig, Record, SortDirection,
    SortState,
};

pub const DEFAULT_HOME_COUNTRY: &str = "Pakistan";

pub const LOCATION_FILTER: &str = "location";
pub const EXPERIENCE_FILTER: &str = "experience";

const EXPERIENCE_FIELD: &str = "total_years_experience";

pub fn config(home_country: &str) -> ListViewConfig {
    ListViewConfig::new(SortState::new("created_at", SortDirection::Desc))
        .search(["full_name", "email", "professional_title", "city"])
        .filter(
            LOCATION_FILTER,
            FilterRule::Choices(vec![
                FilterChoice::new("local", Condition::equals("country", home_country)),
                FilterChoice::new(
                    "international",
                    Condition::not_equals("country", home_country),
                ),
            ]),
        )
        .filter(
            EXPERIENCE_FILTER,
            FilterRule::Choices(vec![
                FilterChoice::new(
                    "entry",
                    Condition::number_range(EXPERIENCE_FIELD, None, Some(2.0)),
                ),
                FilterChoice::new(
                    "mid",
                    Condition::number_range(EXPERIENCE_FIELD, Some(2.0), Some(5.0)),
                ),
                FilterChoice::new(
                    "senior",
                    Condition::number_range(EXPERIENCE_FIELD, Some(5.0), None),
                ),
            ]),
        )
        .field_kind("created_at", FieldKind::Date)
        .field_kind(EXPERIENCE_FIELD, FieldKind::Number)
}

pub fn detail_path(record: &Record) -> Option<String> {
    super::detail_path("resumes", record)
}

pub fn location_text(record: &Record) -> String {
    super::location_text(record.text("city"), record.text("country"), "Not specified")
}

/// Up to two uppercase initials from the candidate's name.
pub fn initials(name: Option<&str>) -> String {
    let initials: String = name
        .unwrap_or_default()
        .split(' ')
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect();

    if initials.is_empty() {
        "??".to_string()
    } else {
        initials
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ListViewController;

    fn candidate(name: &str, country: Option<&str>, years: Option<f64>) -> Record {
        Record::new()
            .with("full_name", name)
            .with("country", country)
            .with(EXPERIENCE_FIELD, years)
    }

    fn names(list: &ListViewController) -> Vec<String> {
        list.filtered_and_sorted()
            .iter()
            .map(|record| record.text("full_name").unwrap_or_default())
            .collect()
    }

    #[test]
    fn location_filter_splits_home_and_abroad() {
        let records = vec![
            candidate("Amy", Some("Pakistan"), Some(1.0)),
            candidate("Bob", Some("Germany"), Some(3.0)),
            candidate("Cid", None, None),
        ];
        let mut list = ListViewController::new(records, config(DEFAULT_HOME_COUNTRY));

        list.set_filter(LOCATION_FILTER, "local").expect("filter exists");
        assert_eq!(names(&list), ["Amy"]);

        list.set_filter(LOCATION_FILTER, "international")
            .expect("filter exists");
        let mut abroad = names(&list);
        abroad.sort();
        assert_eq!(abroad, ["Bob", "Cid"]);
    }

    #[test]
    fn experience_buckets_treat_missing_as_entry() {
        let records = vec![
            candidate("Amy", None, None),
            candidate("Bob", None, Some(2.0)),
            candidate("Cid", None, Some(7.5)),
        ];
        let mut list = ListViewController::new(records, config(DEFAULT_HOME_COUNTRY));

        list.set_filter(EXPERIENCE_FILTER, "entry").expect("filter exists");
        assert_eq!(names(&list), ["Amy"]);
        list.set_filter(EXPERIENCE_FILTER, "mid").expect("filter exists");
        assert_eq!(names(&list), ["Bob"]);
        list.set_filter(EXPERIENCE_FILTER, "senior").expect("filter exists");
        assert_eq!(names(&list), ["Cid"]);
    }

    #[test]
    fn initials_and_location_fallbacks() {
        assert_eq!(initials(Some("amy lee jones")), "AL");
        assert_eq!(initials(Some("Cher")), "C");
        assert_eq!(initials(None), "??");
        assert_eq!(initials(Some("")), "??");

        let both = Record::new().with("city", "Lahore").with("country", "Pakistan");
        assert_eq!(location_text(&both), "Lahore, Pakistan");
        assert_eq!(location_text(&Record::new().with("country", "Chile")), "Chile");
        assert_eq!(location_text(&Record::new()), "Not specified");
    }

    #[test]
    fn detail_path_uses_resume_route() {
        let record = Record::new().with("id", 42_i64);
        assert_eq!(detail_path(&record).as_deref(), Some("/hiring/resumes/42/"));
        assert!(detail_path(&Record::new()).is_none());
    }
}
