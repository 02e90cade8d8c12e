//! User-authored attribution rules
//!
//! Patterns are data, not code: a small declarative rule set evaluated
//! against a fixed set of activity fields. They stay user-editable and
//! sandboxed; the engine interprets them, it never compiles dispatch out
//! of them.

use serde::{Deserialize, Serialize};

use crate::types::attribution::Attribution;

/// A rule mapping an application (plus optional window-title regex) to an
/// attribution
///
/// Matches an activity if `basename` equals the activity's basename AND
/// either no `regular_expression` is set, or at least one of the
/// activity's detail titles satisfies it (unanchored, exactly as
/// authored).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pattern {
    /// Unique identifier
    pub id: String,
    /// Executable basename this rule applies to
    pub basename: String,
    /// Optional window-title regular expression, stored as authored
    pub regular_expression: Option<String>,
    /// Project to attribute on match
    pub project_id: Option<String>,
    /// Category to attribute on match
    pub category_id: Option<String>,
    /// Task to attribute on match
    pub task_id: Option<String>,
    /// Labels to attribute on match
    #[serde(default)]
    pub label_ids: Vec<String>,
}

impl Pattern {
    /// The attribution tuple this rule applies when matched
    pub fn attribution(&self) -> Attribution {
        Attribution {
            project_id: self.project_id.clone(),
            category_id: self.category_id.clone(),
            task_id: self.task_id.clone(),
            label_ids: self.label_ids.clone(),
        }
    }
}
