use crate::domain::entities::case_file::CaseFile;
use crate::domain::entities::general_case::GeneralCase;
use crate::domain::entities::student::Student;
use crate::domain::error::DomainError;
use crate::domain::ports::case_repository::CaseRepository;
use crate::domain::ports::general_case_repository::GeneralCaseRepository;
use crate::domain::ports::student_repository::StudentRepository;
use chrono::Utc;
use std::sync::Arc;

/// Student registration and case intake.
pub struct IntakeUseCase {
    students: Arc<dyn StudentRepository>,
    cases: Arc<dyn CaseRepository>,
    general_cases: Arc<dyn GeneralCaseRepository>,
}

impl IntakeUseCase {
    pub fn new(
        students: Arc<dyn StudentRepository>,
        cases: Arc<dyn CaseRepository>,
        general_cases: Arc<dyn GeneralCaseRepository>,
    ) -> Self {
        Self {
            students,
            cases,
            general_cases,
        }
    }

    pub fn register_student(
        &self,
        name: String,
        guardian_name: Option<String>,
        phone: Option<String>,
        circle: Option<String>,
    ) -> Result<Student, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidRequest("name must not be empty".into()));
        }
        self.students
            .create(&Student::new(name, guardian_name, phone, circle))
    }

    pub fn update_student(
        &self,
        id: i64,
        name: Option<String>,
        guardian_name: Option<String>,
        phone: Option<String>,
        circle: Option<String>,
    ) -> Result<Student, DomainError> {
        let mut student = self.student(id)?;
        if let Some(name) = name {
            if name.trim().is_empty() {
                return Err(DomainError::InvalidRequest("name must not be empty".into()));
            }
            student.name = name;
        }
        if guardian_name.is_some() {
            student.guardian_name = guardian_name;
        }
        if phone.is_some() {
            student.phone = phone;
        }
        if circle.is_some() {
            student.circle = circle;
        }
        student.updated_at = Utc::now();
        self.students.update(&student)?;
        Ok(student)
    }

    pub fn remove_student(&self, id: i64) -> Result<(), DomainError> {
        self.students.remove(id)
    }

    pub fn student(&self, id: i64) -> Result<Student, DomainError> {
        self.students
            .get(id)?
            .ok_or_else(|| DomainError::NotFound(format!("Student not found: {id}")))
    }

    pub fn open_case(
        &self,
        student_id: i64,
        title: String,
        diagnosis: Option<String>,
    ) -> Result<CaseFile, DomainError> {
        // The case must belong to an enrolled student.
        self.student(student_id)?;
        if title.trim().is_empty() {
            return Err(DomainError::InvalidRequest(
                "title must not be empty".into(),
            ));
        }
        self.cases
            .create(&CaseFile::new(student_id, title, diagnosis))
    }

    pub fn resolve_case(&self, id: i64) -> Result<(), DomainError> {
        self.cases.resolve(id)
    }

    pub fn case(&self, id: i64) -> Result<CaseFile, DomainError> {
        self.cases
            .get(id)?
            .ok_or_else(|| DomainError::NotFound(format!("Case not found: {id}")))
    }

    pub fn open_general_case(
        &self,
        person_name: String,
        description: String,
    ) -> Result<GeneralCase, DomainError> {
        if person_name.trim().is_empty() {
            return Err(DomainError::InvalidRequest(
                "person_name must not be empty".into(),
            ));
        }
        self.general_cases
            .create(&GeneralCase::new(person_name, description))
    }

    pub fn resolve_general_case(&self, id: i64) -> Result<(), DomainError> {
        self.general_cases.resolve(id)
    }

    pub fn general_case(&self, id: i64) -> Result<GeneralCase, DomainError> {
        self.general_cases
            .get(id)?
            .ok_or_else(|| DomainError::NotFound(format!("General case not found: {id}")))
    }
}
