use crate::domain::values::appointment_status::AppointmentStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub student_id: i64,
    pub scheduled_for: DateTime<Utc>,
    pub reason: String,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    pub fn new(student_id: i64, scheduled_for: DateTime<Utc>, reason: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            student_id,
            scheduled_for,
            reason,
            status: AppointmentStatus::Scheduled,
            created_at: now,
            updated_at: now,
        }
    }
}
