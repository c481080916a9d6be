use crate::domain::entities::case_note::CaseNote;
use crate::domain::error::DomainError;
use crate::domain::ports::case_repository::CaseRepository;
use crate::domain::values::note_kind::NoteKind;
use std::sync::Arc;

/// Diagnosis, observation, and treatment notes on case files.
pub struct NotesUseCase {
    cases: Arc<dyn CaseRepository>,
}

impl NotesUseCase {
    pub fn new(cases: Arc<dyn CaseRepository>) -> Self {
        Self { cases }
    }

    pub fn add_note(
        &self,
        case_id: i64,
        kind: NoteKind,
        body: String,
    ) -> Result<CaseNote, DomainError> {
        if self.cases.get(case_id)?.is_none() {
            return Err(DomainError::NotFound(format!("Case not found: {case_id}")));
        }
        if body.trim().is_empty() {
            return Err(DomainError::InvalidRequest("body must not be empty".into()));
        }
        self.cases.add_note(&CaseNote::new(case_id, kind, body))
    }

    pub fn list_notes(&self, case_id: i64) -> Result<Vec<CaseNote>, DomainError> {
        if self.cases.get(case_id)?.is_none() {
            return Err(DomainError::NotFound(format!("Case not found: {case_id}")));
        }
        self.cases.notes_for(case_id)
    }
}
