use crate::domain::entities::appointment::Appointment;
use crate::domain::error::DomainError;
use crate::domain::ports::appointment_repository::AppointmentRepository;
use crate::domain::ports::record_store::RecordStore;
use crate::domain::values::appointment_status::AppointmentStatus;
use crate::domain::values::filter::RecordFilter;
use crate::infrastructure::sqlite::filter_sql::push_filter_clauses;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

const SELECT_COLS: &str =
    "id, student_id, scheduled_for, reason, status, created_at, updated_at";
const TEXT_COLS: &[&str] = &["reason"];

pub struct SqliteAppointmentRepo {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteAppointmentRepo {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn row_to_appointment(row: &rusqlite::Row) -> Result<Appointment, rusqlite::Error> {
        let scheduled_str: String = row.get(2)?;
        let status_str: String = row.get(4)?;
        let created_str: String = row.get(5)?;
        let updated_str: String = row.get(6)?;
        Ok(Appointment {
            id: row.get(0)?,
            student_id: row.get(1)?,
            scheduled_for: DateTime::parse_from_rfc3339(&scheduled_str)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
            reason: row.get(3)?,
            status: status_str.parse().unwrap_or_else(|_| {
                tracing::warn!(status = %status_str, "invalid appointment status in row, defaulting to scheduled");
                AppointmentStatus::Scheduled
            }),
            created_at: DateTime::parse_from_rfc3339(&created_str)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
            updated_at: DateTime::parse_from_rfc3339(&updated_str)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}

impl RecordStore for SqliteAppointmentRepo {
    type Record = Appointment;

    fn count(&self, filter: &RecordFilter) -> Result<u64, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let mut sql = String::from("SELECT COUNT(*) FROM appointments WHERE 1=1");
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();
        push_filter_clauses(&mut sql, &mut param_values, filter, TEXT_COLS, "id");
        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        conn.query_row(&sql, params_refs.as_slice(), |row| row.get(0))
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))
    }

    fn window(
        &self,
        filter: &RecordFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Appointment>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let mut sql = format!("SELECT {SELECT_COLS} FROM appointments WHERE 1=1");
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();
        push_filter_clauses(&mut sql, &mut param_values, filter, TEXT_COLS, "id");
        param_values.push(Box::new(limit as i64));
        sql.push_str(&format!(
            " ORDER BY created_at DESC, id DESC LIMIT ?{}",
            param_values.len()
        ));
        param_values.push(Box::new(offset as i64));
        sql.push_str(&format!(" OFFSET ?{}", param_values.len()));

        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let appointments = stmt
            .query_map(params_refs.as_slice(), Self::row_to_appointment)
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(appointments)
    }
}

impl AppointmentRepository for SqliteAppointmentRepo {
    fn book(&self, appointment: &Appointment) -> Result<Appointment, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        conn.execute(
            "INSERT INTO appointments (student_id, scheduled_for, reason, status, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                appointment.student_id,
                appointment.scheduled_for.to_rfc3339(),
                appointment.reason,
                appointment.status.to_string(),
                appointment.created_at.to_rfc3339(),
                appointment.updated_at.to_rfc3339(),
            ],
        )
        .map_err(|e| DomainError::StoreUnavailable(format!("Failed to book appointment: {e}")))?;
        Ok(Appointment {
            id: conn.last_insert_rowid(),
            ..appointment.clone()
        })
    }

    fn set_status(&self, id: i64, status: AppointmentStatus) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let rows = conn
            .execute(
                "UPDATE appointments SET status = ?1, updated_at = ?2 WHERE id = ?3",
                params![status.to_string(), Utc::now().to_rfc3339(), id],
            )
            .map_err(|e| {
                DomainError::StoreUnavailable(format!("Failed to update appointment: {e}"))
            })?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!(
                "Appointment not found: {id}"
            )));
        }
        Ok(())
    }

    fn get(&self, id: i64) -> Result<Option<Appointment>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let sql = format!("SELECT {SELECT_COLS} FROM appointments WHERE id = ?1");
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let mut rows = stmt
            .query_map(params![id], Self::row_to_appointment)
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        Ok(rows.next().and_then(|r| r.ok()))
    }

    fn upcoming(&self, from: DateTime<Utc>, limit: u64) -> Result<Vec<Appointment>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let sql = format!(
            "SELECT {SELECT_COLS} FROM appointments
             WHERE status = ?1 AND scheduled_for >= ?2
             ORDER BY scheduled_for ASC, id ASC LIMIT ?3"
        );
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let appointments = stmt
            .query_map(
                params![
                    AppointmentStatus::Scheduled.to_string(),
                    from.to_rfc3339(),
                    limit as i64,
                ],
                Self::row_to_appointment,
            )
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(appointments)
    }

    fn scheduled_on(&self, day: NaiveDate) -> Result<u64, DomainError> {
        let lo = Utc.from_utc_datetime(&day.and_hms_opt(0, 0, 0).unwrap_or_default());
        let hi = Utc.from_utc_datetime(&day.and_hms_milli_opt(23, 59, 59, 999).unwrap_or_default());
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        conn.query_row(
            "SELECT COUNT(*) FROM appointments
             WHERE status = ?1 AND scheduled_for >= ?2 AND scheduled_for <= ?3",
            params![
                AppointmentStatus::Scheduled.to_string(),
                lo.to_rfc3339(),
                hi.to_rfc3339(),
            ],
            |row| row.get(0),
        )
        .map_err(|e| DomainError::StoreUnavailable(e.to_string()))
    }
}
