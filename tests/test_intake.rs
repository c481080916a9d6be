use mindcare::domain::error::DomainError;
use mindcare::domain::values::case_status::CaseStatus;

mod common;
use common::{open_case, register_student, setup};

#[test]
fn test_register_and_get_student() {
    let mc = setup();
    let student = mc
        .register_student(
            "Ahmad Hassan".into(),
            Some("Hassan".into()),
            Some("0501234567".into()),
            Some("Al-Furqan".into()),
        )
        .unwrap();
    assert!(student.id > 0);

    let fetched = mc.student(student.id).unwrap();
    assert_eq!(fetched.name, "Ahmad Hassan");
    assert_eq!(fetched.circle.as_deref(), Some("Al-Furqan"));
}

#[test]
fn test_register_student_rejects_empty_name() {
    let mc = setup();
    let err = mc
        .register_student("   ".into(), None, None, None)
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidRequest(_)));
}

#[test]
fn test_update_student_partial() {
    let mc = setup();
    let id = register_student(&mc, "Ahmad Hassan");

    let updated = mc
        .update_student(id, None, None, Some("0559876543".into()), None)
        .unwrap();
    assert_eq!(updated.name, "Ahmad Hassan");
    assert_eq!(updated.phone.as_deref(), Some("0559876543"));

    let fetched = mc.student(id).unwrap();
    assert_eq!(fetched.phone.as_deref(), Some("0559876543"));
}

#[test]
fn test_update_missing_student() {
    let mc = setup();
    let err = mc
        .update_student(99, Some("Ghost".into()), None, None, None)
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[test]
fn test_remove_student() {
    let mc = setup();
    let id = register_student(&mc, "Ahmad Hassan");
    mc.remove_student(id).unwrap();

    let err = mc.student(id).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));

    let err = mc.remove_student(id).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[test]
fn test_open_case_for_student() {
    let mc = setup();
    let student_id = register_student(&mc, "Ahmad Hassan");

    let case = mc
        .open_case(
            student_id,
            "Exam anxiety".into(),
            Some("Generalized anxiety".into()),
        )
        .unwrap();
    assert!(case.id > 0);
    assert_eq!(case.status, CaseStatus::Open);
    assert!(case.resolved_at.is_none());
}

#[test]
fn test_open_case_requires_existing_student() {
    let mc = setup();
    let err = mc.open_case(404, "Exam anxiety".into(), None).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[test]
fn test_resolve_case() {
    let mc = setup();
    let student_id = register_student(&mc, "Ahmad Hassan");
    let case_id = open_case(&mc, student_id, "Exam anxiety");

    mc.resolve_case(case_id).unwrap();

    let case = mc.case(case_id).unwrap();
    assert_eq!(case.status, CaseStatus::Solved);
    assert!(case.resolved_at.is_some());
}

#[test]
fn test_resolve_missing_case() {
    let mc = setup();
    let err = mc.resolve_case(404).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[test]
fn test_general_case_lifecycle() {
    let mc = setup();
    let case = mc
        .open_general_case("Umm Khalid".into(), "Walk-in consultation".into())
        .unwrap();
    assert_eq!(case.status, CaseStatus::Open);

    mc.resolve_general_case(case.id).unwrap();
    let fetched = mc.general_case(case.id).unwrap();
    assert_eq!(fetched.status, CaseStatus::Solved);
    assert!(fetched.resolved_at.is_some());
}
