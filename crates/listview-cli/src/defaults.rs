//! Built-in screen definitions for the job portal's list screens.
//!
//! Users can override any of these in `screens.toml`.

use listview_core::{FieldSpec, Schema, ScreenSpec, SortDirection};
use listview_engine::ScreenRegistry;

/// Recruiter view of received applications.
pub fn applications() -> ScreenSpec {
    ScreenSpec::new(
        "applications",
        Schema::new(vec![
            FieldSpec::text("candidate"),
            FieldSpec::text("job_title"),
            FieldSpec::text("company"),
            FieldSpec::text("status"),
            FieldSpec::number("experience"),
            FieldSpec::date("applied_on"),
        ]),
    )
    .with_title("Applications")
    .with_search_fields(["candidate", "job_title", "company"])
    .with_default_sort("applied_on", SortDirection::Descending)
}

/// Admin/recruiter list of job postings.
pub fn jobs() -> ScreenSpec {
    ScreenSpec::new("jobs", job_fields())
        .with_title("Job Postings")
        .with_search_fields(["title", "company", "location"])
}

/// Scheduled interviews.
pub fn interviews() -> ScreenSpec {
    ScreenSpec::new(
        "interviews",
        Schema::new(vec![
            FieldSpec::text("candidate"),
            FieldSpec::text("job_title"),
            FieldSpec::text("interviewer"),
            FieldSpec::text("mode"),
            FieldSpec::text("status"),
            FieldSpec::date("scheduled"),
        ]),
    )
    .with_title("Interviews")
    .with_search_fields(["candidate", "job_title", "interviewer"])
    .with_default_sort("scheduled", SortDirection::Ascending)
}

/// Recruiter candidate search.
pub fn candidates() -> ScreenSpec {
    ScreenSpec::new(
        "candidates",
        Schema::new(vec![
            FieldSpec::text("name"),
            FieldSpec::text("headline"),
            FieldSpec::text("location"),
            FieldSpec::text("skills").not_sortable().not_filterable(),
            FieldSpec::number("experience"),
            FieldSpec::number("rating"),
        ]),
    )
    .with_title("Candidates")
    .with_search_fields(["name", "headline", "skills"])
}

/// Applicant-facing job search.
pub fn job_search() -> ScreenSpec {
    ScreenSpec::new("job-search", job_fields())
        .with_title("Find Jobs")
        .with_search_fields(["title", "company", "location"])
        .with_page_size(5)
        .with_default_sort("posted", SortDirection::Descending)
}

fn job_fields() -> Schema {
    Schema::new(vec![
        FieldSpec::text("title"),
        FieldSpec::text("company"),
        FieldSpec::text("location"),
        FieldSpec::text("type"),
        FieldSpec::text("status"),
        FieldSpec::number("salary"),
        FieldSpec::number("applicants"),
        FieldSpec::date("posted"),
    ])
}

/// Every built-in screen.
pub fn all() -> Vec<ScreenSpec> {
    vec![applications(), jobs(), interviews(), candidates(), job_search()]
}

/// Registry pre-filled with the built-in screens.
pub fn registry() -> ScreenRegistry {
    let registry = ScreenRegistry::new();
    for screen in all() {
        // Built-ins are valid and unique; upsert cannot fail on them.
        if let Err(e) = registry.upsert(screen) {
            tracing::error!("Built-in screen rejected: {}", e);
        }
    }
    registry
}
