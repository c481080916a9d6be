pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::browse::{BrowseQuery, BrowseUseCase};
use crate::application::dashboard::{DashboardSummary, DashboardUseCase, MonthlyCaseLoad};
use crate::application::intake::IntakeUseCase;
use crate::application::notes::NotesUseCase;
use crate::application::schedule::ScheduleUseCase;
use crate::application::tasks::TasksUseCase;
use crate::domain::entities::appointment::Appointment;
use crate::domain::entities::case_file::CaseFile;
use crate::domain::entities::case_note::CaseNote;
use crate::domain::entities::general_case::GeneralCase;
use crate::domain::entities::student::Student;
use crate::domain::entities::task_item::TaskItem;
use crate::domain::error::DomainError;
use crate::domain::ports::appointment_repository::AppointmentRepository;
use crate::domain::ports::case_repository::CaseRepository;
use crate::domain::ports::general_case_repository::GeneralCaseRepository;
use crate::domain::ports::record_store::PagedResult;
use crate::domain::ports::student_repository::StudentRepository;
use crate::domain::ports::task_repository::TaskRepository;
use crate::domain::values::note_kind::NoteKind;
use crate::domain::values::policy::FailurePolicy;
use crate::infrastructure::sqlite::appointment_repo::SqliteAppointmentRepo;
use crate::infrastructure::sqlite::case_repo::SqliteCaseRepo;
use crate::infrastructure::sqlite::general_case_repo::SqliteGeneralCaseRepo;
use crate::infrastructure::sqlite::migrations::run_migrations;
use crate::infrastructure::sqlite::student_repo::SqliteStudentRepo;
use crate::infrastructure::sqlite::task_repo::SqliteTaskRepo;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct MindCare {
    browse_uc: BrowseUseCase,
    intake_uc: IntakeUseCase,
    notes_uc: NotesUseCase,
    schedule_uc: ScheduleUseCase,
    tasks_uc: TasksUseCase,
    dashboard_uc: DashboardUseCase,
}

impl MindCare {
    pub fn new(db_path: &str) -> Result<Self, DomainError> {
        Self::with_policy(db_path, FailurePolicy::Propagate)
    }

    /// `policy` governs how the paginated browse operations respond to a
    /// failing store; dashboard widgets always degrade to zero states.
    pub fn with_policy(db_path: &str, policy: FailurePolicy) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path)
            .map_err(|e| DomainError::StoreUnavailable(format!("DB error: {e}")))?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| DomainError::StoreUnavailable(format!("WAL error: {e}")))?;
        // A locked database surfaces as StoreUnavailable instead of hanging.
        conn.busy_timeout(BUSY_TIMEOUT)
            .map_err(|e| DomainError::StoreUnavailable(format!("Busy timeout error: {e}")))?;

        run_migrations(&conn)?;
        tracing::debug!(db_path, "store ready");

        let conn = Arc::new(Mutex::new(conn));
        let students: Arc<dyn StudentRepository> = Arc::new(SqliteStudentRepo::new(conn.clone()));
        let cases: Arc<dyn CaseRepository> = Arc::new(SqliteCaseRepo::new(conn.clone()));
        let general_cases: Arc<dyn GeneralCaseRepository> =
            Arc::new(SqliteGeneralCaseRepo::new(conn.clone()));
        let appointments: Arc<dyn AppointmentRepository> =
            Arc::new(SqliteAppointmentRepo::new(conn.clone()));
        let tasks: Arc<dyn TaskRepository> = Arc::new(SqliteTaskRepo::new(conn));

        Ok(Self {
            browse_uc: BrowseUseCase::new(
                students.clone(),
                cases.clone(),
                general_cases.clone(),
                appointments.clone(),
                tasks.clone(),
                policy,
            ),
            intake_uc: IntakeUseCase::new(students.clone(), cases.clone(), general_cases),
            notes_uc: NotesUseCase::new(cases.clone()),
            schedule_uc: ScheduleUseCase::new(appointments.clone(), students.clone()),
            tasks_uc: TasksUseCase::new(tasks.clone()),
            dashboard_uc: DashboardUseCase::new(students, cases, appointments, tasks),
        })
    }

    // Intake
    pub fn register_student(
        &self,
        name: String,
        guardian_name: Option<String>,
        phone: Option<String>,
        circle: Option<String>,
    ) -> Result<Student, DomainError> {
        self.intake_uc
            .register_student(name, guardian_name, phone, circle)
    }

    pub fn update_student(
        &self,
        id: i64,
        name: Option<String>,
        guardian_name: Option<String>,
        phone: Option<String>,
        circle: Option<String>,
    ) -> Result<Student, DomainError> {
        self.intake_uc
            .update_student(id, name, guardian_name, phone, circle)
    }

    pub fn remove_student(&self, id: i64) -> Result<(), DomainError> {
        self.intake_uc.remove_student(id)
    }

    pub fn student(&self, id: i64) -> Result<Student, DomainError> {
        self.intake_uc.student(id)
    }

    pub fn open_case(
        &self,
        student_id: i64,
        title: String,
        diagnosis: Option<String>,
    ) -> Result<CaseFile, DomainError> {
        self.intake_uc.open_case(student_id, title, diagnosis)
    }

    pub fn resolve_case(&self, id: i64) -> Result<(), DomainError> {
        self.intake_uc.resolve_case(id)
    }

    pub fn case(&self, id: i64) -> Result<CaseFile, DomainError> {
        self.intake_uc.case(id)
    }

    pub fn open_general_case(
        &self,
        person_name: String,
        description: String,
    ) -> Result<GeneralCase, DomainError> {
        self.intake_uc.open_general_case(person_name, description)
    }

    pub fn resolve_general_case(&self, id: i64) -> Result<(), DomainError> {
        self.intake_uc.resolve_general_case(id)
    }

    pub fn general_case(&self, id: i64) -> Result<GeneralCase, DomainError> {
        self.intake_uc.general_case(id)
    }

    // Notes
    pub fn add_note(
        &self,
        case_id: i64,
        kind: NoteKind,
        body: String,
    ) -> Result<CaseNote, DomainError> {
        self.notes_uc.add_note(case_id, kind, body)
    }

    pub fn case_notes(&self, case_id: i64) -> Result<Vec<CaseNote>, DomainError> {
        self.notes_uc.list_notes(case_id)
    }

    // Scheduling
    pub fn book_appointment(
        &self,
        student_id: i64,
        scheduled_for: DateTime<Utc>,
        reason: String,
    ) -> Result<Appointment, DomainError> {
        self.schedule_uc.book(student_id, scheduled_for, reason)
    }

    pub fn complete_appointment(&self, id: i64) -> Result<(), DomainError> {
        self.schedule_uc.complete(id)
    }

    pub fn cancel_appointment(&self, id: i64) -> Result<(), DomainError> {
        self.schedule_uc.cancel(id)
    }

    pub fn upcoming_appointments(&self, limit: u64) -> Result<Vec<Appointment>, DomainError> {
        self.schedule_uc.upcoming(limit)
    }

    // Tasks
    pub fn add_task(
        &self,
        title: String,
        details: Option<String>,
        due_date: Option<NaiveDate>,
    ) -> Result<TaskItem, DomainError> {
        self.tasks_uc.add(title, details, due_date)
    }

    pub fn complete_task(&self, id: i64) -> Result<(), DomainError> {
        self.tasks_uc.mark_done(id)
    }

    pub fn reopen_task(&self, id: i64) -> Result<(), DomainError> {
        self.tasks_uc.reopen(id)
    }

    pub fn remove_task(&self, id: i64) -> Result<(), DomainError> {
        self.tasks_uc.remove(id)
    }

    // Paginated browse
    pub fn students(&self, query: &BrowseQuery) -> Result<PagedResult<Student>, DomainError> {
        self.browse_uc.students(query)
    }

    pub fn cases(&self, query: &BrowseQuery) -> Result<PagedResult<CaseFile>, DomainError> {
        self.browse_uc.cases(query)
    }

    pub fn general_cases(
        &self,
        query: &BrowseQuery,
    ) -> Result<PagedResult<GeneralCase>, DomainError> {
        self.browse_uc.general_cases(query)
    }

    pub fn appointments(
        &self,
        query: &BrowseQuery,
    ) -> Result<PagedResult<Appointment>, DomainError> {
        self.browse_uc.appointments(query)
    }

    pub fn tasks(&self, query: &BrowseQuery) -> Result<PagedResult<TaskItem>, DomainError> {
        self.browse_uc.tasks(query)
    }

    // Dashboard
    pub fn dashboard(&self) -> DashboardSummary {
        self.dashboard_uc.summary()
    }

    pub fn monthly_report(&self, year: i32) -> Vec<MonthlyCaseLoad> {
        self.dashboard_uc.monthly_report(year)
    }
}
