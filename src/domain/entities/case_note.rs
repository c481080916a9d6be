use crate::domain::values::note_kind::NoteKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A dated clinical note appended to a case file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseNote {
    pub id: i64,
    pub case_id: i64,
    pub kind: NoteKind,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl CaseNote {
    pub fn new(case_id: i64, kind: NoteKind, body: String) -> Self {
        Self {
            id: 0,
            case_id,
            kind,
            body,
            created_at: Utc::now(),
        }
    }
}
