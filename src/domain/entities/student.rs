use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An enrolled student of the center. `circle` is the Quran study
/// circle (halaqa) the student attends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub guardian_name: Option<String>,
    pub phone: Option<String>,
    pub circle: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    /// A new student carries id 0 until the store assigns a rowid.
    pub fn new(
        name: String,
        guardian_name: Option<String>,
        phone: Option<String>,
        circle: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name,
            guardian_name,
            phone,
            circle,
            created_at: now,
            updated_at: now,
        }
    }
}
