//! Resolved attribution tuples

use serde::{Deserialize, Serialize};

/// The `(project, category, task, labels)` combination resolved for a time
/// range
///
/// Two tuples are identical for merge purposes iff every field compares
/// equal, including all of them being absent. The all-absent tuple is the
/// "unattributed" bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribution {
    /// Attributed project, if any
    pub project_id: Option<String>,
    /// Attributed category, if any
    pub category_id: Option<String>,
    /// Attributed task, if any
    pub task_id: Option<String>,
    /// Attributed labels (empty when none)
    pub label_ids: Vec<String>,
}

impl Attribution {
    /// Whether this is the unattributed tuple
    pub fn is_empty(&self) -> bool {
        self.project_id.is_none()
            && self.category_id.is_none()
            && self.task_id.is_none()
            && self.label_ids.is_empty()
    }

    /// Copy of this tuple with the task reference cleared
    pub fn without_task(mut self) -> Self {
        self.task_id = None;
        self
    }
}
