use chrono::NaiveDate;
use mindcare::application::browse::BrowseQuery;
use mindcare::domain::error::DomainError;

mod common;
use common::setup;

#[test]
fn test_add_task() {
    let mc = setup();
    let task = mc
        .add_task(
            "Call guardian".into(),
            Some("Discuss attendance".into()),
            NaiveDate::from_ymd_opt(2026, 9, 1),
        )
        .unwrap();
    assert!(task.id > 0);
    assert!(!task.done);
    assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2026, 9, 1));
}

#[test]
fn test_add_task_rejects_empty_title() {
    let mc = setup();
    let err = mc.add_task("  ".into(), None, None).unwrap_err();
    assert!(matches!(err, DomainError::InvalidRequest(_)));
}

#[test]
fn test_complete_and_reopen() {
    let mc = setup();
    let task = mc.add_task("Call guardian".into(), None, None).unwrap();

    mc.complete_task(task.id).unwrap();
    let result = mc.tasks(&BrowseQuery::default()).unwrap();
    assert!(result.records[0].done);

    mc.reopen_task(task.id).unwrap();
    let result = mc.tasks(&BrowseQuery::default()).unwrap();
    assert!(!result.records[0].done);
}

#[test]
fn test_complete_missing_task() {
    let mc = setup();
    let err = mc.complete_task(404).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[test]
fn test_remove_task() {
    let mc = setup();
    let task = mc.add_task("Call guardian".into(), None, None).unwrap();
    mc.remove_task(task.id).unwrap();

    let result = mc.tasks(&BrowseQuery::default()).unwrap();
    assert!(result.records.is_empty());

    let err = mc.remove_task(task.id).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[test]
fn test_browse_tasks_by_title_and_details() {
    let mc = setup();
    mc.add_task("Prepare report".into(), None, None).unwrap();
    mc.add_task(
        "Misc".into(),
        Some("prepare the session room".into()),
        None,
    )
    .unwrap();
    mc.add_task("Archive files".into(), None, None).unwrap();

    let query = BrowseQuery {
        search: Some("prepare".into()),
        ..Default::default()
    };
    let result = mc.tasks(&query).unwrap();
    assert_eq!(result.records.len(), 2);
}

#[test]
fn test_numeric_search_finds_task_by_id() {
    let mc = setup();
    let first = mc.add_task("Alpha".into(), None, None).unwrap();
    mc.add_task("Beta".into(), None, None).unwrap();

    let query = BrowseQuery {
        search: Some(first.id.to_string()),
        ..Default::default()
    };
    let result = mc.tasks(&query).unwrap();
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].id, first.id);
}
