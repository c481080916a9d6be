use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS students (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            guardian_name TEXT,
            phone TEXT,
            circle TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS case_files (
            id INTEGER PRIMARY KEY,
            student_id INTEGER NOT NULL REFERENCES students(id),
            title TEXT NOT NULL,
            diagnosis TEXT,
            status TEXT NOT NULL DEFAULT 'open',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            resolved_at TEXT
        );

        CREATE TABLE IF NOT EXISTS case_notes (
            id INTEGER PRIMARY KEY,
            case_id INTEGER NOT NULL REFERENCES case_files(id),
            kind TEXT NOT NULL,
            body TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS general_cases (
            id INTEGER PRIMARY KEY,
            person_name TEXT NOT NULL,
            description TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'open',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            resolved_at TEXT
        );

        CREATE TABLE IF NOT EXISTS appointments (
            id INTEGER PRIMARY KEY,
            student_id INTEGER NOT NULL REFERENCES students(id),
            scheduled_for TEXT NOT NULL,
            reason TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'scheduled',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            details TEXT,
            due_date TEXT,
            done INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_students_created ON students(created_at);
        CREATE INDEX IF NOT EXISTS idx_case_files_created ON case_files(created_at);
        CREATE INDEX IF NOT EXISTS idx_case_files_student ON case_files(student_id);
        CREATE INDEX IF NOT EXISTS idx_case_files_status ON case_files(status);
        CREATE INDEX IF NOT EXISTS idx_case_notes_case ON case_notes(case_id);
        CREATE INDEX IF NOT EXISTS idx_general_cases_created ON general_cases(created_at);
        CREATE INDEX IF NOT EXISTS idx_appointments_created ON appointments(created_at);
        CREATE INDEX IF NOT EXISTS idx_appointments_student ON appointments(student_id);
        CREATE INDEX IF NOT EXISTS idx_appointments_scheduled ON appointments(scheduled_for);
        CREATE INDEX IF NOT EXISTS idx_tasks_created ON tasks(created_at);
        CREATE INDEX IF NOT EXISTS idx_tasks_done ON tasks(done);
        ",
    )
    .map_err(|e| format!("Migration failed: {e}"))
}
