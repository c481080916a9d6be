use crate::domain::entities::general_case::GeneralCase;
use crate::domain::error::DomainError;
use crate::domain::ports::record_store::RecordStore;

pub trait GeneralCaseRepository: RecordStore<Record = GeneralCase> {
    fn create(&self, case: &GeneralCase) -> Result<GeneralCase, DomainError>;
    fn resolve(&self, id: i64) -> Result<(), DomainError>;
    fn get(&self, id: i64) -> Result<Option<GeneralCase>, DomainError>;
}
