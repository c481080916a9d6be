use crate::domain::entities::general_case::GeneralCase;
use crate::domain::error::DomainError;
use crate::domain::ports::general_case_repository::GeneralCaseRepository;
use crate::domain::ports::record_store::RecordStore;
use crate::domain::values::case_status::CaseStatus;
use crate::domain::values::filter::RecordFilter;
use crate::infrastructure::sqlite::filter_sql::push_filter_clauses;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

const SELECT_COLS: &str =
    "id, person_name, description, status, created_at, updated_at, resolved_at";
const TEXT_COLS: &[&str] = &["person_name", "description"];

pub struct SqliteGeneralCaseRepo {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteGeneralCaseRepo {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn row_to_case(row: &rusqlite::Row) -> Result<GeneralCase, rusqlite::Error> {
        let status_str: String = row.get(3)?;
        let created_str: String = row.get(4)?;
        let updated_str: String = row.get(5)?;
        let resolved_str: Option<String> = row.get(6)?;
        Ok(GeneralCase {
            id: row.get(0)?,
            person_name: row.get(1)?,
            description: row.get(2)?,
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
}

impl RecordStore for SqliteGeneralCaseRepo {
    type Record = GeneralCase;

    fn count(&self, filter: &RecordFilter) -> Result<u64, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let mut sql = String::from("SELECT COUNT(*) FROM general_cases WHERE 1=1");
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
    ) -> Result<Vec<GeneralCase>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let mut sql = format!("SELECT {SELECT_COLS} FROM general_cases WHERE 1=1");
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

impl GeneralCaseRepository for SqliteGeneralCaseRepo {
    fn create(&self, case: &GeneralCase) -> Result<GeneralCase, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        conn.execute(
            "INSERT INTO general_cases (person_name, description, status, created_at, updated_at, resolved_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                case.person_name,
                case.description,
                case.status.to_string(),
                case.created_at.to_rfc3339(),
                case.updated_at.to_rfc3339(),
                case.resolved_at.map(|dt| dt.to_rfc3339()),
            ],
        )
        .map_err(|e| DomainError::StoreUnavailable(format!("Failed to add general case: {e}")))?;
        Ok(GeneralCase {
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
                "UPDATE general_cases SET status = ?1, resolved_at = ?2, updated_at = ?2 WHERE id = ?3",
                params![CaseStatus::Solved.to_string(), now, id],
            )
            .map_err(|e| {
                DomainError::StoreUnavailable(format!("Failed to resolve general case: {e}"))
            })?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!(
                "General case not found: {id}"
            )));
        }
        Ok(())
    }

    fn get(&self, id: i64) -> Result<Option<GeneralCase>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let sql = format!("SELECT {SELECT_COLS} FROM general_cases WHERE id = ?1");
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let mut rows = stmt
            .query_map(params![id], Self::row_to_case)
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        Ok(rows.next().and_then(|r| r.ok()))
    }
}
