//! Attribution target entities
//!
//! Minimal shapes of the entities attribution points at. Their full
//! lifecycle (creation, editing, archival) lives outside the engine; the
//! resolver only needs `Task::project_id` for its consistency check.

use serde::{Deserialize, Serialize};

/// A task belonging to a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Project this task belongs to
    pub project_id: String,
    /// Display name
    pub name: String,
}

/// A project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
}

/// A work category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
}

/// A free-form label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
}
