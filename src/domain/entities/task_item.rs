use crate::domain::values::monthly::TrackedRecord;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A follow-up task for clinic staff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: i64,
    pub title: String,
    pub details: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub done: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TaskItem {
    pub fn new(title: String, details: Option<String>, due_date: Option<NaiveDate>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            title,
            details,
            due_date,
            done: false,
            created_at: now,
            updated_at: now,
        }
    }
}

impl TrackedRecord for TaskItem {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn is_resolved(&self) -> bool {
        self.done
    }
}
