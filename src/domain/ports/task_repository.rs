use crate::domain::entities::task_item::TaskItem;
use crate::domain::error::DomainError;
use crate::domain::ports::record_store::RecordStore;

pub trait TaskRepository: RecordStore<Record = TaskItem> {
    fn create(&self, task: &TaskItem) -> Result<TaskItem, DomainError>;
    fn set_done(&self, id: i64, done: bool) -> Result<(), DomainError>;
    fn remove(&self, id: i64) -> Result<(), DomainError>;
    fn get(&self, id: i64) -> Result<Option<TaskItem>, DomainError>;
    fn pending_count(&self) -> Result<u64, DomainError>;
}
