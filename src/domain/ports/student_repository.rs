use crate::domain::entities::student::Student;
use crate::domain::error::DomainError;
use crate::domain::ports::record_store::RecordStore;

pub trait StudentRepository: RecordStore<Record = Student> {
    /// Persists a new student and returns it with the assigned id.
    fn create(&self, student: &Student) -> Result<Student, DomainError>;
    fn update(&self, student: &Student) -> Result<(), DomainError>;
    fn remove(&self, id: i64) -> Result<(), DomainError>;
    fn get(&self, id: i64) -> Result<Option<Student>, DomainError>;
}
