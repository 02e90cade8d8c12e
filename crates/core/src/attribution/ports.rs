//! Port interfaces for attribution inputs

use async_trait::async_trait;
use worklens_domain::{Pattern, Result, Task};

/// Trait for reading the current user's attribution rules
#[async_trait]
pub trait PatternRepository: Send + Sync {
    /// Get all patterns, in their authored order (unbounded page)
    async fn list_patterns(&self) -> Result<Vec<Pattern>>;
}

/// Trait for reading tasks referenced by attribution rules
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Get all tasks (unbounded page)
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    /// Get the tasks with the given ids; missing ids are silently absent
    async fn find_tasks(&self, ids: &[String]) -> Result<Vec<Task>>;
}
