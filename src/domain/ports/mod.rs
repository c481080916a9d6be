pub mod appointment_repository;
pub mod case_repository;
pub mod general_case_repository;
pub mod record_store;
pub mod student_repository;
pub mod task_repository;
