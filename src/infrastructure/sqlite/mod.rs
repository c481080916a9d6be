pub mod appointment_repo;
pub mod case_repo;
pub mod filter_sql;
pub mod general_case_repo;
pub mod migrations;
pub mod student_repo;
pub mod task_repo;
