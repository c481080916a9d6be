use crate::domain::entities::task_item::TaskItem;
use crate::domain::error::DomainError;
use crate::domain::ports::task_repository::TaskRepository;
use chrono::NaiveDate;
use std::sync::Arc;

pub struct TasksUseCase {
    tasks: Arc<dyn TaskRepository>,
}

impl TasksUseCase {
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    pub fn add(
        &self,
        title: String,
        details: Option<String>,
        due_date: Option<NaiveDate>,
    ) -> Result<TaskItem, DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::InvalidRequest(
                "title must not be empty".into(),
            ));
        }
        self.tasks.create(&TaskItem::new(title, details, due_date))
    }

    pub fn mark_done(&self, id: i64) -> Result<(), DomainError> {
        self.tasks.set_done(id, true)
    }

    pub fn reopen(&self, id: i64) -> Result<(), DomainError> {
        self.tasks.set_done(id, false)
    }

    pub fn remove(&self, id: i64) -> Result<(), DomainError> {
        self.tasks.remove(id)
    }
}
