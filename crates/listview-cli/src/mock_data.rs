//! Mock record collections backing the built-in screens.

use listview_core::Record;
use listview_engine::StaticSource;

/// Built-in records for a screen, if it has any.
pub fn source_for(screen_id: &str) -> Option<StaticSource> {
    let records = match screen_id {
        "applications" => applications(),
        "jobs" | "job-search" => jobs(),
        "interviews" => interviews(),
        "candidates" => candidates(),
        _ => return None,
    };
    Some(StaticSource::new(format!("mock:{}", screen_id), records))
}

fn application(
    id: u64,
    candidate: &str,
    job_title: &str,
    company: &str,
    status: &str,
    experience: i32,
    applied_on: &str,
) -> Record {
    Record::new(id)
        .with("candidate", candidate)
        .with("job_title", job_title)
        .with("company", company)
        .with("status", status)
        .with("experience", experience)
        .with("applied_on", applied_on)
}

pub fn applications() -> Vec<Record> {
    vec![
        application(1, "Priya Sharma", "Frontend Engineer", "Acme Corp", "Pending", 3, "2024-03-02"),
        application(2, "Marcus Lee", "Backend Engineer", "Globex", "Reviewed", 5, "2024-02-27"),
        application(3, "Sofia García", "Product Designer", "Initech", "Shortlisted", 4, "2024-03-05"),
        application(4, "Daniel Okafor", "Data Analyst", "Acme Corp", "Rejected", 1, "2024-02-14"),
        application(5, "Emma Novak", "Frontend Engineer", "Acme Corp", "Pending", 2, "2024-03-06"),
        application(6, "Hiro Tanaka", "DevOps Engineer", "Umbrella", "Reviewed", 7, "2024-02-20"),
        application(7, "Aisha Bello", "Product Manager", "Globex", "Pending", 6, "2024-03-01"),
        application(8, "Lucas Martin", "Backend Engineer", "Initech", "Shortlisted", 4, "2024-03-04"),
        application(9, "Olivia Chen", "Data Analyst", "Umbrella", "Pending", 2, "pending review"),
        application(10, "Noah Schmidt", "QA Engineer", "Acme Corp", "Rejected", 3, "2024-02-10"),
        application(11, "Chloé Dubois", "Frontend Engineer", "Globex", "Reviewed", 5, "2024-02-29"),
        application(12, "Mateo Rossi", "Mobile Engineer", "Initech", "Pending", 4, "2024-03-07"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn job(
    id: u64,
    title: &str,
    company: &str,
    location: &str,
    kind: &str,
    status: &str,
    salary: i32,
    applicants: i32,
    posted: &str,
) -> Record {
    Record::new(id)
        .with("title", title)
        .with("company", company)
        .with("location", location)
        .with("type", kind)
        .with("status", status)
        .with("salary", salary)
        .with("applicants", applicants)
        .with("posted", posted)
}

pub fn jobs() -> Vec<Record> {
    vec![
        job(101, "Frontend Engineer", "Acme Corp", "Remote", "Full-time", "Open", 95000, 42, "2024-02-28"),
        job(102, "Backend Engineer", "Globex", "Berlin", "Full-time", "Open", 105000, 31, "2024-02-20"),
        job(103, "Product Designer", "Initech", "New York", "Contract", "Open", 88000, 17, "2024-03-01"),
        job(104, "Data Analyst", "Acme Corp", "Remote", "Part-time", "Closed", 60000, 55, "2024-01-15"),
        job(105, "DevOps Engineer", "Umbrella", "London", "Full-time", "Open", 110000, 12, "2024-03-04"),
        job(106, "Product Manager", "Globex", "Berlin", "Full-time", "Draft", 120000, 0, "2024-03-06"),
        job(107, "QA Engineer", "Acme Corp", "Toronto", "Contract", "Open", 70000, 9, "2024-02-11"),
        job(108, "Mobile Engineer", "Initech", "Remote", "Full-time", "Open", 100000, 23, "2024-02-25"),
        job(109, "Engineering Manager", "Engage Labs", "San Francisco", "Full-time", "Open", 160000, 8, "2024-03-03"),
        job(110, "Technical Writer", "Umbrella", "Remote", "Part-time", "Closed", 55000, 14, "2024-01-30"),
    ]
}

fn interview(
    id: u64,
    candidate: &str,
    job_title: &str,
    interviewer: &str,
    mode: &str,
    status: &str,
    scheduled: &str,
) -> Record {
    Record::new(id)
        .with("candidate", candidate)
        .with("job_title", job_title)
        .with("interviewer", interviewer)
        .with("mode", mode)
        .with("status", status)
        .with("scheduled", scheduled)
}

pub fn interviews() -> Vec<Record> {
    vec![
        interview(201, "Priya Sharma", "Frontend Engineer", "Jordan Blake", "Video", "Scheduled", "2024-03-12 10:00"),
        interview(202, "Sofia García", "Product Designer", "Alex Kim", "Onsite", "Scheduled", "2024-03-11 14:30"),
        interview(203, "Lucas Martin", "Backend Engineer", "Jordan Blake", "Phone", "Completed", "2024-03-08 09:00"),
        interview(204, "Marcus Lee", "Backend Engineer", "Sam Patel", "Video", "Cancelled", "2024-03-09 16:00"),
        interview(205, "Aisha Bello", "Product Manager", "Alex Kim", "Onsite", "Scheduled", "2024-03-12 10:00"),
        interview(206, "Hiro Tanaka", "DevOps Engineer", "Sam Patel", "Video", "Scheduled", "TBD"),
        interview(207, "Chloé Dubois", "Frontend Engineer", "Jordan Blake", "Video", "Completed", "2024-03-07 11:15"),
    ]
}

fn candidate(
    id: u64,
    name: &str,
    headline: &str,
    location: &str,
    skills: &str,
    experience: i32,
    rating: f64,
) -> Record {
    Record::new(id)
        .with("name", name)
        .with("headline", headline)
        .with("location", location)
        .with("skills", skills)
        .with("experience", experience)
        .with("rating", rating)
}

pub fn candidates() -> Vec<Record> {
    vec![
        candidate(301, "Priya Sharma", "Frontend Engineer", "Remote", "React, TypeScript, CSS", 3, 4.5),
        candidate(302, "Marcus Lee", "Backend Engineer", "Berlin", "Go, PostgreSQL, Kafka", 5, 4.0),
        candidate(303, "Sofia García", "Product Designer", "New York", "Figma, UX Research", 4, 4.8),
        candidate(304, "Daniel Okafor", "Junior Data Analyst", "Lagos", "SQL, Python, Tableau", 1, 3.6),
        candidate(305, "Hiro Tanaka", "DevOps Engineer", "London", "Kubernetes, Terraform, AWS", 7, 4.2),
        candidate(306, "Aisha Bello", "Product Manager", "Berlin", "Roadmapping, Analytics", 6, 4.5),
        candidate(307, "Mateo Rossi", "Mobile Engineer", "Remote", "Kotlin, Swift, Flutter", 4, 3.9),
        candidate(308, "Olivia Chen", "Data Engineer", "Toronto", "Spark, Python, Airflow", 2, 4.1),
    ]
}
