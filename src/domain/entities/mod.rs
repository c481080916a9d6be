pub mod appointment;
pub mod case_file;
pub mod case_note;
pub mod general_case;
pub mod student;
pub mod task_item;
