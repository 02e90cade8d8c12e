//! Port interfaces for the auto-registration orchestrator
//!
//! These traits define the boundaries between the orchestration logic and
//! the collaborators that own activity derivation and entry persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use worklens_domain::{ActivityEvent, EventEntry, EventType, Result};

/// Trait for reading derived activity intervals
///
/// Implementations compose the window-log store with the aggregator;
/// activity is a pure function over the log range, recomputed per query.
#[async_trait]
pub trait ActivityReader: Send + Sync {
    /// Get the activity events overlapping `[start, end)`
    async fn activities_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ActivityEvent>>;
}

/// Trait for persisting calendar event entries
#[async_trait]
pub trait EventEntryRepository: Send + Sync {
    /// Get a user's entries overlapping `[start, end)`, optionally
    /// filtered by type
    ///
    /// Deleted rows are returned; callers filter `deleted` client-side.
    async fn find_entries(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        event_type: Option<EventType>,
    ) -> Result<Vec<EventEntry>>;

    /// Upsert an entry by id, assigning an id when handed an empty one
    async fn save_entry(&self, entry: EventEntry) -> Result<EventEntry>;
}
