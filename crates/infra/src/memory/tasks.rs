//! In-memory task store

use async_trait::async_trait;
use parking_lot::RwLock;
use worklens_core::TaskRepository;
use worklens_domain::{Result, Task};

/// In-memory implementation of [`TaskRepository`]
#[derive(Default)]
pub struct InMemoryTaskStore {
    tasks: RwLock<Vec<Task>>,
}

impl InMemoryTaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the provided tasks
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks: RwLock::new(tasks) }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskStore {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.read().clone())
    }

    async fn find_tasks(&self, ids: &[String]) -> Result<Vec<Task>> {
        Ok(self.tasks.read().iter().filter(|task| ids.contains(&task.id)).cloned().collect())
    }
}
