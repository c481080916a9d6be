use crate::domain::entities::appointment::Appointment;
use crate::domain::error::DomainError;
use crate::domain::ports::appointment_repository::AppointmentRepository;
use crate::domain::ports::student_repository::StudentRepository;
use crate::domain::values::appointment_status::AppointmentStatus;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Appointment booking and lifecycle.
pub struct ScheduleUseCase {
    appointments: Arc<dyn AppointmentRepository>,
    students: Arc<dyn StudentRepository>,
}

impl ScheduleUseCase {
    pub fn new(
        appointments: Arc<dyn AppointmentRepository>,
        students: Arc<dyn StudentRepository>,
    ) -> Self {
        Self {
            appointments,
            students,
        }
    }

    pub fn book(
        &self,
        student_id: i64,
        scheduled_for: DateTime<Utc>,
        reason: String,
    ) -> Result<Appointment, DomainError> {
        if self.students.get(student_id)?.is_none() {
            return Err(DomainError::NotFound(format!(
                "Student not found: {student_id}"
            )));
        }
        if reason.trim().is_empty() {
            return Err(DomainError::InvalidRequest(
                "reason must not be empty".into(),
            ));
        }
        self.appointments
            .book(&Appointment::new(student_id, scheduled_for, reason))
    }

    pub fn complete(&self, id: i64) -> Result<(), DomainError> {
        self.appointments
            .set_status(id, AppointmentStatus::Completed)
    }

    pub fn cancel(&self, id: i64) -> Result<(), DomainError> {
        self.appointments
            .set_status(id, AppointmentStatus::Cancelled)
    }

    pub fn upcoming(&self, limit: u64) -> Result<Vec<Appointment>, DomainError> {
        self.appointments.upcoming(Utc::now(), limit)
    }
}
