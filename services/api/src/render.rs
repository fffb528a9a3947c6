use crate::infra::{parse_filter, parse_kind};
use crate::samples::sample_records;
use clap::Args;
use hiring_views::config::AppConfig;
use hiring_views::dataset;
use hiring_views::entities::reports::ReportStatusSummary;
use hiring_views::entities::{candidates, jobs};
use hiring_views::error::AppError;
use hiring_views::listing::{ListQuery, SortDirection};
use hiring_views::{EntityKind, ListPageView, Record};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ListArgs {
    /// List to render: candidates, jobs, or reports
    #[arg(value_parser = parse_kind)]
    pub(crate) kind: EntityKind,
    /// JSON array or CSV export holding the rows (defaults to built-in samples)
    #[arg(long)]
    pub(crate) data: Option<PathBuf>,
    /// Case-insensitive search term
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Filter as NAME=VALUE; may be repeated
    #[arg(long = "filter", value_parser = parse_filter)]
    pub(crate) filters: Vec<(String, String)>,
    /// Field to sort by
    #[arg(long)]
    pub(crate) sort: Option<String>,
    /// Sort direction (asc or desc)
    #[arg(long, value_parser = parse_direction)]
    pub(crate) direction: Option<SortDirection>,
    /// Page to render (1-based)
    #[arg(long)]
    pub(crate) page: Option<usize>,
    /// Override the configured page size
    #[arg(long)]
    pub(crate) per_page: Option<usize>,
    /// Print the page as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

fn parse_direction(raw: &str) -> Result<SortDirection, String> {
    raw.parse::<SortDirection>().map_err(|err| err.to_string())
}

pub(crate) fn run_list(args: ListArgs) -> Result<(), AppError> {
    let ListArgs {
        kind,
        data,
        search,
        filters,
        sort,
        direction,
        page,
        per_page,
        json,
    } = args;

    let config = AppConfig::load()?;
    let mut settings = config.lists.settings();
    if let Some(per_page) = per_page {
        settings.items_per_page = per_page.max(1);
    }

    let records = match data {
        Some(path) => dataset::load_path(&path)?,
        None => sample_records(kind),
    };
    let summary =
        (kind == EntityKind::Reports).then(|| ReportStatusSummary::from_records(&records));

    let mut list = kind.controller(records, &settings);
    let query = ListQuery {
        search,
        filters,
        sort,
        direction,
        page,
    };
    query.apply(&mut list)?;
    let view = list.page_view();

    if json {
        println!("{}", page_json(&view)?);
        return Ok(());
    }

    render_page(kind, &view, summary.as_ref());
    Ok(())
}

fn page_json(view: &ListPageView) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(view)?)
}

fn render_page(kind: EntityKind, view: &ListPageView, summary: Option<&ReportStatusSummary>) {
    println!("{}", kind.label());
    if let Some(summary) = summary {
        println!(
            "- {} reports | {} completed | {} processing | {} failed",
            summary.total, summary.completed, summary.processing, summary.failed
        );
    }

    let filters: Vec<String> = view
        .filters
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    println!(
        "- sorted by {} {} | search \"{}\" | filters: {}",
        view.sort.field,
        view.sort.direction,
        view.search_term,
        if filters.is_empty() {
            "none".to_string()
        } else {
            filters.join(", ")
        }
    );

    if view.is_empty() {
        println!("\nNo matching rows (page {} of {}).", view.current_page, view.total_pages);
        return;
    }

    println!(
        "\nShowing {}-{} of {} (page {} of {})",
        view.showing_from, view.showing_to, view.total_items, view.current_page, view.total_pages
    );
    for (offset, record) in view.items.iter().enumerate() {
        let link = kind.detail_path(record).unwrap_or_default();
        println!(
            "  {:>3}. {}  {}",
            view.showing_from + offset,
            row_text(kind, record),
            link
        );
    }

    let pages: Vec<String> = view
        .page_numbers
        .iter()
        .map(|page| {
            if *page == view.current_page {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect();
    println!("\nPages: {}", pages.join(" "));
}

fn row_text(kind: EntityKind, record: &Record) -> String {
    let field = |name: &str| record.text(name).unwrap_or_else(|| "-".to_string());
    match kind {
        EntityKind::Candidates => format!(
            "{} ({}) | {} | {} | {} yrs",
            field("full_name"),
            candidates::initials(record.text("full_name").as_deref()),
            field("professional_title"),
            candidates::location_text(record),
            field("total_years_experience"),
        ),
        EntityKind::Jobs => format!(
            "{} @ {} | {} | {} | {}",
            field("title"),
            field("company_name"),
            jobs::location_text(record),
            field("employment_type"),
            field("seniority"),
        ),
        EntityKind::Reports => format!(
            "{} -> {} | {} | score {}",
            field("candidate_name"),
            field("job_title"),
            field("status"),
            field("fit_score"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_text_marks_missing_fields() {
        let record = Record::new()
            .with("candidate_name", "Amy Lee")
            .with("job_title", "QA Analyst")
            .with("status", "processing");
        assert_eq!(
            row_text(EntityKind::Reports, &record),
            "Amy Lee -> QA Analyst | processing | score -"
        );
    }

    #[test]
    fn row_text_formats_whole_numbers_plainly() {
        let record = Record::new()
            .with("full_name", "Amy Lee")
            .with("total_years_experience", 4.0);
        assert_eq!(
            row_text(EntityKind::Candidates, &record),
            "Amy Lee (AL) | - | Not specified | 4 yrs"
        );
    }

    #[test]
    fn sample_reports_render_a_single_page() {
        let records = sample_records(EntityKind::Reports);
        let list = EntityKind::Reports.controller(records, &Default::default());
        let view = list.page_view();
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.page_numbers, [1]);
        render_page(EntityKind::Reports, &view, None);
    }

    #[test]
    fn json_output_is_the_serialized_page() {
        let records = sample_records(EntityKind::Jobs);
        let view = EntityKind::Jobs
            .controller(records, &Default::default())
            .page_view();
        let body = page_json(&view).expect("page serializes");
        let parsed: serde_json::Value = serde_json::from_str(&body).expect("valid json");
        assert_eq!(parsed["total_items"], 5);
        assert_eq!(parsed["current_page"], 1);
    }
}
