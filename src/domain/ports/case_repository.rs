use crate::domain::entities::case_file::CaseFile;
use crate::domain::entities::case_note::CaseNote;
use crate::domain::error::DomainError;
use crate::domain::ports::record_store::RecordStore;

pub trait CaseRepository: RecordStore<Record = CaseFile> {
    fn create(&self, case: &CaseFile) -> Result<CaseFile, DomainError>;
    fn resolve(&self, id: i64) -> Result<(), DomainError>;
    fn get(&self, id: i64) -> Result<Option<CaseFile>, DomainError>;
    fn open_count(&self) -> Result<u64, DomainError>;
    /// All cases created in the given calendar year, for the yearly
    /// case-load report.
    fn by_year(&self, year: i32) -> Result<Vec<CaseFile>, DomainError>;
    fn add_note(&self, note: &CaseNote) -> Result<CaseNote, DomainError>;
    /// Notes for a case, oldest first.
    fn notes_for(&self, case_id: i64) -> Result<Vec<CaseNote>, DomainError>;
}
