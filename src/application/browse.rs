use crate::application::fetch_page::fetch_page;
use crate::domain::entities::appointment::Appointment;
use crate::domain::entities::case_file::CaseFile;
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
use crate::domain::values::filter::RecordFilter;
use crate::domain::values::page::PageRequest;
use crate::domain::values::policy::FailurePolicy;
use chrono::NaiveDate;
use std::sync::Arc;

/// Request parameters for one paginated table.
#[derive(Debug, Clone, Default)]
pub struct BrowseQuery {
    pub search: Option<String>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl BrowseQuery {
    fn parts(&self) -> Result<(RecordFilter, PageRequest), DomainError> {
        let filter = RecordFilter::build(self.search.as_deref(), self.start_date, self.end_date);
        let request = PageRequest::new(self.page, self.page_size)?;
        Ok((filter, request))
    }
}

/// The paginated tables: every entity browses through the same
/// fetch-and-paginate core.
pub struct BrowseUseCase {
    students: Arc<dyn StudentRepository>,
    cases: Arc<dyn CaseRepository>,
    general_cases: Arc<dyn GeneralCaseRepository>,
    appointments: Arc<dyn AppointmentRepository>,
    tasks: Arc<dyn TaskRepository>,
    policy: FailurePolicy,
}

impl BrowseUseCase {
    pub fn new(
        students: Arc<dyn StudentRepository>,
        cases: Arc<dyn CaseRepository>,
        general_cases: Arc<dyn GeneralCaseRepository>,
        appointments: Arc<dyn AppointmentRepository>,
        tasks: Arc<dyn TaskRepository>,
        policy: FailurePolicy,
    ) -> Self {
        Self {
            students,
            cases,
            general_cases,
            appointments,
            tasks,
            policy,
        }
    }

    pub fn students(&self, query: &BrowseQuery) -> Result<PagedResult<Student>, DomainError> {
        let (filter, request) = query.parts()?;
        fetch_page(
            self.students.as_ref(),
            &filter,
            &request,
            self.policy,
            "students.browse",
        )
    }

    pub fn cases(&self, query: &BrowseQuery) -> Result<PagedResult<CaseFile>, DomainError> {
        let (filter, request) = query.parts()?;
        fetch_page(
            self.cases.as_ref(),
            &filter,
            &request,
            self.policy,
            "cases.browse",
        )
    }

    pub fn general_cases(
        &self,
        query: &BrowseQuery,
    ) -> Result<PagedResult<GeneralCase>, DomainError> {
        let (filter, request) = query.parts()?;
        fetch_page(
            self.general_cases.as_ref(),
            &filter,
            &request,
            self.policy,
            "general_cases.browse",
        )
    }

    pub fn appointments(
        &self,
        query: &BrowseQuery,
    ) -> Result<PagedResult<Appointment>, DomainError> {
        let (filter, request) = query.parts()?;
        fetch_page(
            self.appointments.as_ref(),
            &filter,
            &request,
            self.policy,
            "appointments.browse",
        )
    }

    pub fn tasks(&self, query: &BrowseQuery) -> Result<PagedResult<TaskItem>, DomainError> {
        let (filter, request) = query.parts()?;
        fetch_page(
            self.tasks.as_ref(),
            &filter,
            &request,
            self.policy,
            "tasks.browse",
        )
    }
}
