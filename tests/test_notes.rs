use mindcare::domain::error::DomainError;
use mindcare::domain::values::note_kind::NoteKind;

mod common;
use common::{open_case, register_student, setup};

#[test]
fn test_add_and_list_notes() {
    let mc = setup();
    let student_id = register_student(&mc, "Ahmad Hassan");
    let case_id = open_case(&mc, student_id, "Exam anxiety");

    mc.add_note(case_id, NoteKind::Observation, "Restless during session".into())
        .unwrap();
    mc.add_note(case_id, NoteKind::Diagnosis, "Test anxiety".into())
        .unwrap();
    mc.add_note(case_id, NoteKind::Treatment, "Weekly breathing exercises".into())
        .unwrap();

    let notes = mc.case_notes(case_id).unwrap();
    assert_eq!(notes.len(), 3);
    // Oldest first.
    assert_eq!(notes[0].kind, NoteKind::Observation);
    assert_eq!(notes[1].kind, NoteKind::Diagnosis);
    assert_eq!(notes[2].kind, NoteKind::Treatment);
    assert!(notes.iter().all(|n| n.case_id == case_id));
}

#[test]
fn test_note_requires_existing_case() {
    let mc = setup();
    let err = mc
        .add_note(404, NoteKind::Observation, "Orphan note".into())
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));

    let err = mc.case_notes(404).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[test]
fn test_note_rejects_empty_body() {
    let mc = setup();
    let student_id = register_student(&mc, "Ahmad Hassan");
    let case_id = open_case(&mc, student_id, "Exam anxiety");

    let err = mc
        .add_note(case_id, NoteKind::Observation, "  ".into())
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidRequest(_)));
}

#[test]
fn test_case_without_notes_is_empty() {
    let mc = setup();
    let student_id = register_student(&mc, "Ahmad Hassan");
    let case_id = open_case(&mc, student_id, "Exam anxiety");

    let notes = mc.case_notes(case_id).unwrap();
    assert!(notes.is_empty());
}
