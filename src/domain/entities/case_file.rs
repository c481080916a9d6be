use crate::domain::values::case_status::CaseStatus;
use crate::domain::values::monthly::TrackedRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A mental-health case opened for an enrolled student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseFile {
    pub id: i64,
    pub student_id: i64,
    pub title: String,
    pub diagnosis: Option<String>,
    pub status: CaseStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl CaseFile {
    pub fn new(student_id: i64, title: String, diagnosis: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            student_id,
            title,
            diagnosis,
            status: CaseStatus::Open,
            created_at: now,
            updated_at: now,
            resolved_at: None,
        }
    }

    pub fn resolve(&mut self) {
        let now = Utc::now();
        self.status = CaseStatus::Solved;
        self.resolved_at = Some(now);
        self.updated_at = now;
    }
}

impl TrackedRecord for CaseFile {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn is_resolved(&self) -> bool {
        self.status == CaseStatus::Solved
    }
}
