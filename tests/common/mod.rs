//! Shared test helpers.

use mindcare::MindCare;

#[allow(dead_code)]
pub fn setup() -> MindCare {
    MindCare::new(":memory:").unwrap()
}

#[allow(dead_code)]
pub fn register_student(mc: &MindCare, name: &str) -> i64 {
    mc.register_student(name.to_string(), None, None, None)
        .unwrap()
        .id
}

#[allow(dead_code)]
pub fn open_case(mc: &MindCare, student_id: i64, title: &str) -> i64 {
    mc.open_case(student_id, title.to_string(), None).unwrap().id
}
