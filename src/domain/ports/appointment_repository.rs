use crate::domain::entities::appointment::Appointment;
use crate::domain::error::DomainError;
use crate::domain::ports::record_store::RecordStore;
use crate::domain::values::appointment_status::AppointmentStatus;
use chrono::{DateTime, NaiveDate, Utc};

pub trait AppointmentRepository: RecordStore<Record = Appointment> {
    /// Persists a new appointment and returns it with the assigned id.
    fn book(&self, appointment: &Appointment) -> Result<Appointment, DomainError>;
    fn set_status(&self, id: i64, status: AppointmentStatus) -> Result<(), DomainError>;
    fn get(&self, id: i64) -> Result<Option<Appointment>, DomainError>;
    /// Scheduled appointments at or after `from`, soonest first.
    fn upcoming(&self, from: DateTime<Utc>, limit: u64) -> Result<Vec<Appointment>, DomainError>;
    /// Number of scheduled appointments on the given day.
    fn scheduled_on(&self, day: NaiveDate) -> Result<u64, DomainError>;
}
