use crate::domain::entities::student::Student;
use crate::domain::error::DomainError;
use crate::domain::ports::record_store::RecordStore;
use crate::domain::ports::student_repository::StudentRepository;
use crate::domain::values::filter::RecordFilter;
use crate::infrastructure::sqlite::filter_sql::push_filter_clauses;
use chrono::DateTime;
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

const SELECT_COLS: &str = "id, name, guardian_name, phone, circle, created_at, updated_at";
const TEXT_COLS: &[&str] = &["name", "phone"];

pub struct SqliteStudentRepo {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStudentRepo {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn row_to_student(row: &rusqlite::Row) -> Result<Student, rusqlite::Error> {
        let created_str: String = row.get(5)?;
        let updated_str: String = row.get(6)?;
        Ok(Student {
            id: row.get(0)?,
            name: row.get(1)?,
            guardian_name: row.get(2)?,
            phone: row.get(3)?,
            circle: row.get(4)?,
            created_at: DateTime::parse_from_rfc3339(&created_str)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .unwrap_or_else(|_| chrono::Utc::now()),
            updated_at: DateTime::parse_from_rfc3339(&updated_str)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .unwrap_or_else(|_| chrono::Utc::now()),
        })
    }
}

impl RecordStore for SqliteStudentRepo {
    type Record = Student;

    fn count(&self, filter: &RecordFilter) -> Result<u64, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let mut sql = String::from("SELECT COUNT(*) FROM students WHERE 1=1");
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
    ) -> Result<Vec<Student>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let mut sql = format!("SELECT {SELECT_COLS} FROM students WHERE 1=1");
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
        let students = stmt
            .query_map(params_refs.as_slice(), Self::row_to_student)
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(students)
    }
}

impl StudentRepository for SqliteStudentRepo {
    fn create(&self, student: &Student) -> Result<Student, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        conn.execute(
            "INSERT INTO students (name, guardian_name, phone, circle, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                student.name,
                student.guardian_name,
                student.phone,
                student.circle,
                student.created_at.to_rfc3339(),
                student.updated_at.to_rfc3339(),
            ],
        )
        .map_err(|e| DomainError::StoreUnavailable(format!("Failed to add student: {e}")))?;
        Ok(Student {
            id: conn.last_insert_rowid(),
            ..student.clone()
        })
    }

    fn update(&self, student: &Student) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let rows = conn
            .execute(
                "UPDATE students SET name = ?1, guardian_name = ?2, phone = ?3, circle = ?4, updated_at = ?5
                 WHERE id = ?6",
                params![
                    student.name,
                    student.guardian_name,
                    student.phone,
                    student.circle,
                    student.updated_at.to_rfc3339(),
                    student.id,
                ],
            )
            .map_err(|e| DomainError::StoreUnavailable(format!("Failed to update student: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!(
                "Student not found: {}",
                student.id
            )));
        }
        Ok(())
    }

    fn remove(&self, id: i64) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let rows = conn
            .execute("DELETE FROM students WHERE id = ?1", params![id])
            .map_err(|e| DomainError::StoreUnavailable(format!("Failed to remove student: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Student not found: {id}")));
        }
        Ok(())
    }

    fn get(&self, id: i64) -> Result<Option<Student>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let sql = format!("SELECT {SELECT_COLS} FROM students WHERE id = ?1");
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        let mut rows = stmt
            .query_map(params![id], Self::row_to_student)
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        Ok(rows.next().and_then(|r| r.ok()))
    }
}
