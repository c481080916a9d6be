use mindcare::MindCare;

mod common;
use common::register_student;

#[test]
fn test_data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("mindcare.db");
    let db_path = db_path.to_str().unwrap();

    let student_id;
    {
        let mc = MindCare::new(db_path).unwrap();
        student_id = register_student(&mc, "Ahmad Hassan");
        let case = mc
            .open_case(student_id, "Exam anxiety".into(), None)
            .unwrap();
        mc.resolve_case(case.id).unwrap();
    }

    let mc = MindCare::new(db_path).unwrap();
    let student = mc.student(student_id).unwrap();
    assert_eq!(student.name, "Ahmad Hassan");

    let summary = mc.dashboard();
    assert_eq!(summary.students_total, 1);
    assert_eq!(summary.open_cases, 0);
}

#[test]
fn test_migrations_are_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("mindcare.db");
    let db_path = db_path.to_str().unwrap();

    for _ in 0..3 {
        let mc = MindCare::new(db_path).unwrap();
        drop(mc);
    }
    let mc = MindCare::new(db_path).unwrap();
    assert_eq!(mc.dashboard().students_total, 0);
}
