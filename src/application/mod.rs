pub mod browse;
pub mod dashboard;
pub mod fetch_page;
pub mod intake;
pub mod notes;
pub mod schedule;
pub mod tasks;
