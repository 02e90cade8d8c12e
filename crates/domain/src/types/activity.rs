//! Window focus logs and the activity intervals derived from them
//!
//! `WindowLog` rows are produced by the OS-level sampler: one row per
//! continuous focus session of one application window. `ActivityEvent` is a
//! derived view — consecutive same-application logs collapsed into one
//! interval — recomputed from the log range on every query and never
//! persisted on its own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::IDLE_PROCESS_ID;
use crate::types::time::TimeRange;

/// One continuous focus session of one application window
///
/// Created by the external sampler. Immutable once the next sample
/// supersedes it, except for `deactivated_at` which the sampler extends
/// while focus is unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowLog {
    /// Unique identifier
    pub id: String,
    /// Executable basename (e.g. "excel.exe")
    pub basename: String,
    /// OS process id, or [`IDLE_PROCESS_ID`] for an idle interval
    pub process_id: i64,
    /// Window title at capture time
    pub window_title: String,
    /// Full executable path
    pub path: String,
    /// When the window gained focus
    pub activated_at: DateTime<Utc>,
    /// When the window lost focus (extended while focus is unchanged)
    pub deactivated_at: DateTime<Utc>,
}

impl WindowLog {
    /// Whether this log records system idle rather than a real window
    pub fn is_idle(&self) -> bool {
        self.process_id == IDLE_PROCESS_ID
    }
}

/// One `WindowLog`'s contribution to an [`ActivityEvent`]
///
/// Retains the title text needed for pattern matching. The id is the id of
/// the source log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityDetail {
    /// Id of the source window log
    pub id: String,
    /// When this contribution starts
    pub start: DateTime<Utc>,
    /// When this contribution ends
    pub end: DateTime<Utc>,
    /// Window title of the source log
    pub window_title: String,
}

/// A run of consecutive same-basename, non-idle window logs
///
/// Invariants: `start == details[0].start`, `end == details.last().end`,
/// details ordered by time ascending with contiguous coverage (idle always
/// terminates an event, so no internal idle gaps exist).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEvent {
    /// Identifier of this derived event (fresh per aggregation run)
    pub id: String,
    /// Executable basename shared by all contributing logs
    pub basename: String,
    /// Start of the first contribution
    pub start: DateTime<Utc>,
    /// End of the last contribution
    pub end: DateTime<Utc>,
    /// Per-log contributions, time ascending
    pub details: Vec<ActivityDetail>,
}

impl ActivityEvent {
    /// The `[start, end)` interval covered by this event
    pub fn range(&self) -> TimeRange {
        TimeRange::new(self.start, self.end)
    }

    /// Whether this event overlaps the given range
    pub fn overlaps(&self, range: &TimeRange) -> bool {
        self.range().overlaps(range)
    }
}
