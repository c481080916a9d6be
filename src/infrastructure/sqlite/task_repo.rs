use crate::domain::entities::task_item::TaskItem;
use crate::domain::error::DomainError;
use crate::domain::ports::record_store::RecordStore;
use crate::domain::ports::task_repository::TaskRepository;
use crate::domain::values::filter::RecordFilter;
use crate::infrastructure::sqlite::filter_sql::push_filter_clauses;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

const SELECT_COLS: &str = "id, title, details, due_date, done, created_at, updated_at";
const TEXT_COLS: &[&str] = &["title", "details"];

pub struct SqliteTaskRepo {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteTaskRepo {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn row_to_task(row: &rusqlite::Row) -> Result<TaskItem, rusqlite::Error> {
        let due_str: Option<String> = row.get(3)?;
        let done_int: i32 = row.get(4)?;
        let created_str: String = row.get(5)?;
        let updated_str: String = row.get(6)?;
        Ok(TaskItem {
            id: row.get(0)?,
            title: row.get(1)?,
            details: row.get(2)?,
            due_date: due_str.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
            done: done_int != 0,
            created_at: DateTime::parse_from_rfc3339(&created_str)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
            updated_at: DateTime::parse_from_rfc3339(&updated_str)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}

impl RecordStore for SqliteTaskRepo {
    type Record = TaskItem;

    fn count(&self, filter: &RecordFilter) -> Result<u64, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let mut sql = String::from("SELECT COUNT(*) FROM tasks WHERE 1=1");
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
    ) -> Result<Vec<TaskItem>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let mut sql = format!("SELECT {SELECT_COLS} FROM tasks WHERE 1=1");
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
        let tasks = stmt
            .query_map(params_refs.as_slice(), Self::row_to_task)
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(tasks)
    }
}

impl TaskRepository for SqliteTaskRepo {
    fn create(&self, task: &TaskItem) -> Result<TaskItem, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        conn.execute(
            "INSERT INTO tasks (title, details, due_date, done, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                task.title,
                task.details,
                task.due_date.map(|d| d.format("%Y-%m-%d").to_string()),
                task.done as i32,
                task.created_at.to_rfc3339(),
                task.updated_at.to_rfc3339(),
            ],
        )
        .map_err(|e| DomainError::StoreUnavailable(format!("Failed to add task: {e}")))?;
        Ok(TaskItem {
            id: conn.last_insert_rowid(),
            ..task.clone()
        })
    }

    fn set_done(&self, id: i64, done: bool) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let rows = conn
            .execute(
                "UPDATE tasks SET done = ?1, updated_at = ?2 WHERE id = ?3",
                params![done as i32, Utc::now().to_rfc3339(), id],
            )
            .map_err(|e| DomainError::StoreUnavailable(format!("Failed to update task: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Task not found: {id}")));
        }
        Ok(())
    }

    fn remove(&self, id: i64) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let rows = conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])
            .map_err(|e| DomainError::StoreUnavailable(format!("Failed to remove task: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Task not found: {id}")));
        }
        Ok(())
    }

    fn get(&self, id: i64) -> Result<Option<TaskItem>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let sql = format!("SELECT {SELECT_COLS} FROM tasks WHERE id = ?1");
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let mut rows = stmt
            .query_map(params![id], Self::row_to_task)
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        Ok(rows.next().and_then(|r| r.ok()))
    }

    fn pending_count(&self) -> Result<u64, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        conn.query_row("SELECT COUNT(*) FROM tasks WHERE done = 0", [], |row| {
            row.get(0)
        })
        .map_err(|e| DomainError::StoreUnavailable(e.to_string()))
    }
}
