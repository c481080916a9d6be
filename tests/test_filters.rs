use chrono::{TimeZone, Utc};
use mindcare::application::browse::BrowseQuery;
use mindcare::application::fetch_page::fetch_page;
use mindcare::domain::entities::student::Student;
use mindcare::domain::ports::student_repository::StudentRepository;
use mindcare::domain::values::filter::RecordFilter;
use mindcare::domain::values::page::PageRequest;
use mindcare::domain::values::policy::FailurePolicy;
use mindcare::infrastructure::sqlite::migrations::run_migrations;
use mindcare::infrastructure::sqlite::student_repo::SqliteStudentRepo;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

mod common;
use common::{register_student, setup};

fn search_query(term: &str) -> BrowseQuery {
    BrowseQuery {
        search: Some(term.to_string()),
        ..Default::default()
    }
}

fn student_repo() -> SqliteStudentRepo {
    let conn = Connection::open_in_memory().unwrap();
    run_migrations(&conn).unwrap();
    SqliteStudentRepo::new(Arc::new(Mutex::new(conn)))
}

fn student_at(name: &str, created_at: chrono::DateTime<Utc>) -> Student {
    let mut student = Student::new(name.to_string(), None, None, None);
    student.created_at = created_at;
    student.updated_at = created_at;
    student
}

#[test]
fn test_search_matches_name_substring_case_insensitive() {
    let mc = setup();
    register_student(&mc, "Ahmad Hassan");
    register_student(&mc, "Yusuf Ali");

    let result = mc.students(&search_query("ahmad")).unwrap();
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].name, "Ahmad Hassan");
}

#[test]
fn test_search_matches_phone() {
    let mc = setup();
    mc.register_student(
        "Ahmad Hassan".into(),
        None,
        Some("0501234567".into()),
        None,
    )
    .unwrap();
    register_student(&mc, "Yusuf Ali");

    let result = mc.students(&search_query("123456")).unwrap();
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].name, "Ahmad Hassan");
}

#[test]
fn test_empty_search_matches_everything() {
    let mc = setup();
    register_student(&mc, "Ahmad Hassan");
    register_student(&mc, "Yusuf Ali");

    let result = mc.students(&search_query("   ")).unwrap();
    assert_eq!(result.pagination.total_records, 2);
}

#[test]
fn test_search_no_match() {
    let mc = setup();
    register_student(&mc, "Ahmad Hassan");

    let result = mc.students(&search_query("nonexistent")).unwrap();
    assert!(result.records.is_empty());
    assert_eq!(result.pagination.total_records, 0);
}

#[test]
fn test_numeric_search_matches_id_exactly() {
    let mc = setup();
    // Digit-free names so "42" can only match by id.
    for i in 0..45 {
        register_student(&mc, &format!("Talib {}", "x".repeat(i + 1)));
    }

    let result = mc.students(&search_query("42")).unwrap();
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].id, 42);
}

#[test]
fn test_numeric_search_also_matches_text() {
    let mc = setup();
    mc.register_student("Ahmad".into(), None, Some("0542".into()), None)
        .unwrap();

    let result = mc.students(&search_query("42")).unwrap();
    assert_eq!(result.records.len(), 1);
}

#[test]
fn test_like_metacharacters_match_literally() {
    let mc = setup();
    register_student(&mc, "Omar 100% effort");
    register_student(&mc, "Omar 100x effort");

    let result = mc.students(&search_query("0%")).unwrap();
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].name, "Omar 100% effort");

    let underscore = setup();
    register_student(&underscore, "a_b");
    register_student(&underscore, "aXb");
    let result = underscore.students(&search_query("a_b")).unwrap();
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].name, "a_b");
}

#[test]
fn test_date_range_is_inclusive() {
    let repo = student_repo();
    repo.create(&student_at(
        "Edge Start",
        Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
    ))
    .unwrap();
    repo.create(&student_at(
        "Edge End",
        Utc.with_ymd_and_hms(2024, 3, 5, 23, 59, 59).unwrap(),
    ))
    .unwrap();
    repo.create(&student_at(
        "After",
        Utc.with_ymd_and_hms(2024, 3, 6, 0, 0, 0).unwrap(),
    ))
    .unwrap();
    repo.create(&student_at(
        "Before",
        Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap(),
    ))
    .unwrap();

    let filter = RecordFilter::build(
        None,
        Some(chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
        Some(chrono::NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()),
    );
    let result = fetch_page(
        &repo,
        &filter,
        &PageRequest::default(),
        FailurePolicy::Propagate,
        "test",
    )
    .unwrap();

    let names: Vec<&str> = result.records.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(result.pagination.total_records, 2);
    assert!(names.contains(&"Edge Start"));
    assert!(names.contains(&"Edge End"));
}

#[test]
fn test_date_predicate_needs_both_bounds() {
    let filter = RecordFilter::build(None, Some(chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()), None);
    assert!(filter.range().is_none());
    assert!(filter.is_unfiltered());

    let filter = RecordFilter::build(None, None, Some(chrono::NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()));
    assert!(filter.range().is_none());
}

#[test]
fn test_search_and_date_range_combine() {
    let repo = student_repo();
    repo.create(&student_at(
        "Ahmad March",
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap(),
    ))
    .unwrap();
    repo.create(&student_at(
        "Ahmad April",
        Utc.with_ymd_and_hms(2024, 4, 10, 12, 0, 0).unwrap(),
    ))
    .unwrap();
    repo.create(&student_at(
        "Yusuf March",
        Utc.with_ymd_and_hms(2024, 3, 11, 12, 0, 0).unwrap(),
    ))
    .unwrap();

    let filter = RecordFilter::build(
        Some("ahmad"),
        Some(chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
        Some(chrono::NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()),
    );
    let result = fetch_page(
        &repo,
        &filter,
        &PageRequest::default(),
        FailurePolicy::Propagate,
        "test",
    )
    .unwrap();
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].name, "Ahmad March");
}

#[test]
fn test_ordering_is_newest_first_with_id_tiebreak() {
    let repo = student_repo();
    let same_instant = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
    for name in ["First", "Second", "Third"] {
        repo.create(&student_at(name, same_instant)).unwrap();
    }
    repo.create(&student_at(
        "Newest",
        Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap(),
    ))
    .unwrap();

    let result = fetch_page(
        &repo,
        &RecordFilter::default(),
        &PageRequest::default(),
        FailurePolicy::Propagate,
        "test",
    )
    .unwrap();
    let names: Vec<&str> = result.records.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Newest", "Third", "Second", "First"]);
}
