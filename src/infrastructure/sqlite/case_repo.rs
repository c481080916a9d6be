use crate::domain::entities::case_file::CaseFile;
use crate::domain::entities::case_note::CaseNote;
use crate::domain::error::DomainError;
use crate::domain::ports::case_repository::CaseRepository;
use crate::domain::ports::record_store::RecordStore;
use crate::domain::values::case_status::CaseStatus;
use crate::domain::values::filter::RecordFilter;
use crate::domain::values::note_kind::NoteKind;
use crate::infrastructure::sqlite::filter_sql::push_filter_clauses;
use chrono::{DateTime, TimeZone, Utc};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

const SELECT_COLS: &str =
    "id, student_id, title, diagnosis, status, created_at, updated_at, resolved_at";
const NOTE_COLS: &str = "id, case_id, kind, body, created_at";
const TEXT_COLS: &[&str] = &["title", "diagnosis"];

pub struct SqliteCaseRepo {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteCaseRepo {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn row_to_case(row: &rusqlite::Row) -> Result<CaseFile, rusqlite::Error> {
        let status_str: String = row.get(4)?;
        let created_str: String = row.get(5)?;
        let updated_str: String = row.get(6)?;
        let resolved_str: Option<String> = row.get(7)?;
        Ok(CaseFile {
            id: row.get(0)?,
            student_id: row.get(1)?,
            title: row.get(2)?,
            diagnosis: row.get(3)?,
            status: status_str.parse().unwrap_or_else(|_| {
                tracing::warn!(status = %status_str, "invalid case status in row, defaulting to open");
                CaseStatus::Open
            }),
            created_at: DateTime::parse_from_rfc3339(&created_str)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
            updated_at: DateTime::parse_from_rfc3339(&updated_str)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
            resolved_at: resolved_str.and_then(|s| {
                DateTime::parse_from_rfc3339(&s)
                    .ok()
                    .map(|dt| dt.with_timezone(&Utc))
            }),
        })
    }

    fn row_to_note(row: &rusqlite::Row) -> Result<CaseNote, rusqlite::Error> {
        let kind_str: String = row.get(2)?;
        let created_str: String = row.get(4)?;
        Ok(CaseNote {
            id: row.get(0)?,
            case_id: row.get(1)?,
            kind: kind_str.parse().unwrap_or_else(|_| {
                tracing::warn!(kind = %kind_str, "invalid note kind in row, defaulting to observation");
                NoteKind::Observation
            }),
            body: row.get(3)?,
            created_at: DateTime::parse_from_rfc3339(&created_str)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}

impl RecordStore for SqliteCaseRepo {
    type Record = CaseFile;

    fn count(&self, filter: &RecordFilter) -> Result<u64, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let mut sql = String::from("SELECT COUNT(*) FROM case_files WHERE 1=1");
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
    ) -> Result<Vec<CaseFile>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let mut sql = format!("SELECT {SELECT_COLS} FROM case_files WHERE 1=1");
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
        let cases = stmt
            .query_map(params_refs.as_slice(), Self::row_to_case)
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(cases)
    }
}

impl CaseRepository for SqliteCaseRepo {
    fn create(&self, case: &CaseFile) -> Result<CaseFile, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        conn.execute(
            "INSERT INTO case_files (student_id, title, diagnosis, status, created_at, updated_at, resolved_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                case.student_id,
                case.title,
                case.diagnosis,
                case.status.to_string(),
                case.created_at.to_rfc3339(),
                case.updated_at.to_rfc3339(),
                case.resolved_at.map(|dt| dt.to_rfc3339()),
            ],
        )
        .map_err(|e| DomainError::StoreUnavailable(format!("Failed to add case: {e}")))?;
        Ok(CaseFile {
            id: conn.last_insert_rowid(),
            ..case.clone()
        })
    }

    fn resolve(&self, id: i64) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let now = Utc::now().to_rfc3339();
        let rows = conn
            .execute(
                "UPDATE case_files SET status = ?1, resolved_at = ?2, updated_at = ?2 WHERE id = ?3",
                params![CaseStatus::Solved.to_string(), now, id],
            )
            .map_err(|e| DomainError::StoreUnavailable(format!("Failed to resolve case: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Case not found: {id}")));
        }
        Ok(())
    }

    fn get(&self, id: i64) -> Result<Option<CaseFile>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let sql = format!("SELECT {SELECT_COLS} FROM case_files WHERE id = ?1");
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let mut rows = stmt
            .query_map(params![id], Self::row_to_case)
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        Ok(rows.next().and_then(|r| r.ok()))
    }

    fn open_count(&self) -> Result<u64, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        conn.query_row(
            "SELECT COUNT(*) FROM case_files WHERE status = ?1",
            params![CaseStatus::Open.to_string()],
            |row| row.get(0),
        )
        .map_err(|e| DomainError::StoreUnavailable(e.to_string()))
    }

    fn by_year(&self, year: i32) -> Result<Vec<CaseFile>, DomainError> {
        let start = Utc
            .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
            .single()
            .ok_or_else(|| DomainError::InvalidRequest(format!("invalid year: {year}")))?;
        let end = Utc
            .with_ymd_and_hms(year + 1, 1, 1, 0, 0, 0)
            .single()
            .ok_or_else(|| DomainError::InvalidRequest(format!("invalid year: {year}")))?;

        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let sql = format!(
            "SELECT {SELECT_COLS} FROM case_files WHERE created_at >= ?1 AND created_at < ?2
             ORDER BY created_at ASC, id ASC"
        );
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let cases = stmt
            .query_map(
                params![start.to_rfc3339(), end.to_rfc3339()],
                Self::row_to_case,
            )
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(cases)
    }

    fn add_note(&self, note: &CaseNote) -> Result<CaseNote, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        conn.execute(
            "INSERT INTO case_notes (case_id, kind, body, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                note.case_id,
                note.kind.to_string(),
                note.body,
                note.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| DomainError::StoreUnavailable(format!("Failed to add note: {e}")))?;
        Ok(CaseNote {
            id: conn.last_insert_rowid(),
            ..note.clone()
        })
    }

    fn notes_for(&self, case_id: i64) -> Result<Vec<CaseNote>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let sql = format!(
            "SELECT {NOTE_COLS} FROM case_notes WHERE case_id = ?1 ORDER BY created_at ASC, id ASC"
        );
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let notes = stmt
            .query_map(params![case_id], Self::row_to_note)
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(notes)
    }
}
