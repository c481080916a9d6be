use chrono::{Duration, Utc};
use mindcare::application::browse::BrowseQuery;
use mindcare::domain::error::DomainError;
use mindcare::domain::values::appointment_status::AppointmentStatus;

mod common;
use common::{register_student, setup};

#[test]
fn test_book_appointment() {
    let mc = setup();
    let student_id = register_student(&mc, "Ahmad Hassan");
    let when = Utc::now() + Duration::days(2);

    let appointment = mc
        .book_appointment(student_id, when, "Follow-up session".into())
        .unwrap();
    assert!(appointment.id > 0);
    assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    assert_eq!(appointment.student_id, student_id);
}

#[test]
fn test_book_requires_existing_student() {
    let mc = setup();
    let err = mc
        .book_appointment(404, Utc::now(), "Follow-up".into())
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[test]
fn test_book_rejects_empty_reason() {
    let mc = setup();
    let student_id = register_student(&mc, "Ahmad Hassan");
    let err = mc
        .book_appointment(student_id, Utc::now(), " ".into())
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidRequest(_)));
}

#[test]
fn test_complete_and_cancel() {
    let mc = setup();
    let student_id = register_student(&mc, "Ahmad Hassan");
    let first = mc
        .book_appointment(student_id, Utc::now() + Duration::days(1), "Intake".into())
        .unwrap();
    let second = mc
        .book_appointment(student_id, Utc::now() + Duration::days(2), "Review".into())
        .unwrap();

    mc.complete_appointment(first.id).unwrap();
    mc.cancel_appointment(second.id).unwrap();

    let all = mc.appointments(&BrowseQuery::default()).unwrap();
    let by_id = |id: i64| all.records.iter().find(|a| a.id == id).unwrap();
    assert_eq!(by_id(first.id).status, AppointmentStatus::Completed);
    assert_eq!(by_id(second.id).status, AppointmentStatus::Cancelled);
}

#[test]
fn test_status_change_on_missing_appointment() {
    let mc = setup();
    let err = mc.complete_appointment(404).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[test]
fn test_upcoming_is_soonest_first_and_skips_finished() {
    let mc = setup();
    let student_id = register_student(&mc, "Ahmad Hassan");
    let soon = mc
        .book_appointment(student_id, Utc::now() + Duration::days(1), "Soon".into())
        .unwrap();
    let later = mc
        .book_appointment(student_id, Utc::now() + Duration::days(7), "Later".into())
        .unwrap();
    let done = mc
        .book_appointment(student_id, Utc::now() + Duration::days(3), "Done".into())
        .unwrap();
    mc.complete_appointment(done.id).unwrap();

    let upcoming = mc.upcoming_appointments(10).unwrap();
    let ids: Vec<i64> = upcoming.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![soon.id, later.id]);
}

#[test]
fn test_upcoming_respects_limit() {
    let mc = setup();
    let student_id = register_student(&mc, "Ahmad Hassan");
    for i in 1..=5 {
        mc.book_appointment(
            student_id,
            Utc::now() + Duration::days(i),
            "Session".into(),
        )
        .unwrap();
    }

    let upcoming = mc.upcoming_appointments(3).unwrap();
    assert_eq!(upcoming.len(), 3);
}

#[test]
fn test_browse_appointments_by_reason() {
    let mc = setup();
    let student_id = register_student(&mc, "Ahmad Hassan");
    mc.book_appointment(
        student_id,
        Utc::now() + Duration::days(1),
        "Memorization stress".into(),
    )
    .unwrap();
    mc.book_appointment(
        student_id,
        Utc::now() + Duration::days(2),
        "Family meeting".into(),
    )
    .unwrap();

    let query = BrowseQuery {
        search: Some("stress".into()),
        ..Default::default()
    };
    let result = mc.appointments(&query).unwrap();
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].reason, "Memorization stress");
}
