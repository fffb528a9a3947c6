use hiring_views::{EntityKind, Record};

/// Built-in rows so the service and CLI work without a data directory.
pub(crate) fn sample_records(kind: EntityKind) -> Vec<Record> {
    match kind {
        EntityKind::Candidates => candidates(),
        EntityKind::Jobs => jobs(),
        EntityKind::Reports => reports(),
    }
}

fn candidate(
    id: i64,
    name: &str,
    title: Option<&str>,
    city: Option<&str>,
    country: Option<&str>,
    years: Option<f64>,
    created_at: &str,
) -> Record {
    Record::new()
        .with("id", id)
        .with("full_name", name)
        .with(
            "email",
            format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        )
        .with("professional_title", title)
        .with("city", city)
        .with("country", country)
        .with("total_years_experience", years)
        .with("created_at", created_at)
}

fn candidates() -> Vec<Record> {
    vec![
        candidate(
            1,
            "Ayesha Khan",
            Some("Data Engineer"),
            Some("Lahore"),
            Some("Pakistan"),
            Some(6.0),
            "2025-03-01T09:12:00Z",
        ),
        candidate(
            2,
            "Bilal Ahmed",
            Some("Frontend Developer"),
            Some("Karachi"),
            Some("Pakistan"),
            Some(1.5),
            "2025-03-03T11:40:00Z",
        ),
        candidate(
            3,
            "Clara Novak",
            Some("QA Analyst"),
            Some("Prague"),
            Some("Czechia"),
            Some(3.0),
            "2025-02-18T08:05:00Z",
        ),
        candidate(4, "Daniel Ortiz", None, None, Some("Mexico"), None, "2025-03-05T16:20:00Z"),
        candidate(
            5,
            "Erin Walsh",
            Some("Engineering Manager"),
            Some("Dublin"),
            Some("Ireland"),
            Some(11.0),
            "2025-01-27T10:00:00Z",
        ),
        candidate(
            6,
            "Farah Siddiqui",
            Some("Backend Engineer"),
            Some("Islamabad"),
            Some("Pakistan"),
            Some(4.0),
            "2025-03-04T13:30:00Z",
        ),
    ]
}

fn job(
    id: i64,
    title: &str,
    company: &str,
    location: Option<(&str, &str)>,
    employment_type: &str,
    seniority: &str,
    created_at: &str,
) -> Record {
    Record::new()
        .with("id", id)
        .with("title", title)
        .with("company_name", company)
        .with("location_city", location.map(|(city, _)| city))
        .with("location_country", location.map(|(_, country)| country))
        .with("employment_type", employment_type)
        .with("seniority", seniority)
        .with("created_at", created_at)
}

fn jobs() -> Vec<Record> {
    vec![
        job(
            1,
            "Senior Rust Engineer",
            "Northwind",
            None,
            "full_time",
            "senior",
            "2025-03-02T09:00:00Z",
        ),
        job(
            2,
            "Data Analyst",
            "Contoso",
            Some(("Lahore", "Pakistan")),
            "full_time",
            "mid",
            "2025-02-25T09:00:00Z",
        ),
        job(
            3,
            "QA Contractor",
            "Fabrikam",
            Some(("Berlin", "Germany")),
            "contract",
            "mid",
            "2025-03-06T09:00:00Z",
        ),
        job(
            4,
            "Engineering Lead",
            "Northwind",
            Some(("Dubai", "UAE")),
            "full_time",
            "lead",
            "2025-01-30T09:00:00Z",
        ),
        job(
            5,
            "Support Intern",
            "Contoso",
            Some(("Karachi", "Pakistan")),
            "internship",
            "intern",
            "2025-03-04T09:00:00Z",
        ),
    ]
}

fn report(
    id: i64,
    candidate: &str,
    job_title: &str,
    status: &str,
    fit_score: Option<f64>,
    created_at: &str,
) -> Record {
    Record::new()
        .with("id", id)
        .with("candidate_id", id + 100)
        .with("job_id", id + 200)
        .with("candidate_name", candidate)
        .with("job_title", job_title)
        .with("status", status)
        .with("fit_score", fit_score)
        .with("created_at", created_at)
}

fn reports() -> Vec<Record> {
    vec![
        report(
            1,
            "Ayesha Khan",
            "Senior Rust Engineer",
            "completed",
            Some(84.0),
            "2025-03-07T10:00:00Z",
        ),
        report(
            2,
            "Farah Siddiqui",
            "Senior Rust Engineer",
            "completed",
            Some(71.5),
            "2025-03-07T10:05:00Z",
        ),
        report(3, "Clara Novak", "QA Contractor", "processing", None, "2025-03-08T09:30:00Z"),
        report(4, "Bilal Ahmed", "Data Analyst", "failed", None, "2025-03-06T15:45:00Z"),
        report(
            5,
            "Erin Walsh",
            "Engineering Lead",
            "completed",
            Some(92.0),
            "2025-03-05T12:00:00Z",
        ),
    ]
}
