use crate::domain::values::case_status::CaseStatus;
use crate::domain::values::monthly::TrackedRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A walk-in case for someone who is not an enrolled student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralCase {
    pub id: i64,
    pub person_name: String,
    pub description: String,
    pub status: CaseStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl GeneralCase {
    pub fn new(person_name: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            person_name,
            description,
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

impl TrackedRecord for GeneralCase {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn is_resolved(&self) -> bool {
        self.status == CaseStatus::Solved
    }
}
