//! Calendar event entries
//!
//! One type covers planned, actual and shared entries; the synthesis
//! engine only ever creates provisional ACTUAL entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::attribution::Attribution;
use crate::types::time::TimeRange;

/// Kind of a calendar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    /// Planned time block
    Plan,
    /// Recorded (or synthesized) time block
    Actual,
    /// Entry shared from an external calendar
    Shared,
}

/// One calendar entry
///
/// Invariant: `task_id` is only present when the referenced task's
/// `project_id` equals this entry's `project_id`; the resolver clears the
/// field otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEntry {
    /// Unique identifier; stores upsert by this value and assign one when
    /// handed an empty id
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Entry kind
    pub event_type: EventType,
    /// Display title
    pub summary: String,
    /// Start of the entry
    pub start: DateTime<Utc>,
    /// End of the entry
    pub end: DateTime<Utc>,
    /// Whether this entry is a synthesized, not-yet-confirmed actual
    pub is_provisional: bool,
    /// Attributed project, if any
    pub project_id: Option<String>,
    /// Attributed category, if any
    pub category_id: Option<String>,
    /// Attributed task, if any
    pub task_id: Option<String>,
    /// Attributed labels
    #[serde(default)]
    pub label_ids: Vec<String>,
    /// Free-form description
    pub description: Option<String>,
    /// Soft-delete flag; stores return deleted rows, callers filter
    #[serde(default)]
    pub deleted: bool,
}

impl EventEntry {
    /// Build a provisional ACTUAL entry spanning `range` with the given
    /// attribution (all fields absent for the unattributed case)
    pub fn provisional_actual(
        user_id: &str,
        range: TimeRange,
        summary: &str,
        attribution: Attribution,
    ) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            user_id: user_id.to_string(),
            event_type: EventType::Actual,
            summary: summary.to_string(),
            start: range.start,
            end: range.end,
            is_provisional: true,
            project_id: attribution.project_id,
            category_id: attribution.category_id,
            task_id: attribution.task_id,
            label_ids: attribution.label_ids,
            description: None,
            deleted: false,
        }
    }

    /// The `[start, end)` interval covered by this entry
    pub fn range(&self) -> TimeRange {
        TimeRange::new(self.start, self.end)
    }

    /// Whether this entry overlaps the given range
    pub fn overlaps(&self, range: &TimeRange) -> bool {
        self.range().overlaps(range)
    }

    /// The attribution tuple carried by this entry
    pub fn attribution(&self) -> Attribution {
        Attribution {
            project_id: self.project_id.clone(),
            category_id: self.category_id.clone(),
            task_id: self.task_id.clone(),
            label_ids: self.label_ids.clone(),
        }
    }
}
