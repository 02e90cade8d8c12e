//! Mock collaborator implementations for testing
//!
//! Provides in-memory mocks for all orchestrator ports, enabling
//! deterministic integration tests without a real store.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;
use worklens_core::registration::ports::{ActivityReader, EventEntryRepository};
use worklens_core::{PatternRepository, TaskRepository};
use worklens_domain::{
    ActivityDetail, ActivityEvent, EventEntry, EventType, Pattern, Result as DomainResult, Task,
    TimeRange,
};

/// Minutes-from-midnight helper anchored on a fixed test day (2024-06-03).
pub fn ts(mins: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap() + chrono::Duration::minutes(mins)
}

/// Build an activity event from `(title, start_min, end_min)` spans.
pub fn activity(basename: &str, titled_spans: &[(&str, i64, i64)]) -> ActivityEvent {
    let details: Vec<ActivityDetail> = titled_spans
        .iter()
        .map(|(title, start, end)| ActivityDetail {
            id: Uuid::now_v7().to_string(),
            start: ts(*start),
            end: ts(*end),
            window_title: (*title).to_string(),
        })
        .collect();
    ActivityEvent {
        id: Uuid::now_v7().to_string(),
        basename: basename.to_string(),
        start: details[0].start,
        end: details[details.len() - 1].end,
        details,
    }
}

/// In-memory mock for `ActivityReader`.
///
/// Stores a fixed set of derived activity events and answers overlap
/// queries against them.
#[derive(Default, Clone)]
pub struct MockActivityReader {
    events: Arc<Vec<ActivityEvent>>,
}

impl MockActivityReader {
    /// Create a new mock seeded with the provided events.
    pub fn new(events: Vec<ActivityEvent>) -> Self {
        Self { events: Arc::new(events) }
    }
}

#[async_trait]
impl ActivityReader for MockActivityReader {
    async fn activities_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<Vec<ActivityEvent>> {
        let window = TimeRange::new(start, end);
        Ok(self.events.iter().filter(|event| event.overlaps(&window)).cloned().collect())
    }
}

/// In-memory mock for `PatternRepository` preserving authored order.
#[derive(Default, Clone)]
pub struct MockPatternRepository {
    patterns: Arc<Vec<Pattern>>,
}

impl MockPatternRepository {
    /// Create a new mock seeded with the provided patterns.
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns: Arc::new(patterns) }
    }
}

#[async_trait]
impl PatternRepository for MockPatternRepository {
    async fn list_patterns(&self) -> DomainResult<Vec<Pattern>> {
        Ok(self.patterns.as_ref().clone())
    }
}

/// In-memory mock for `TaskRepository`.
#[derive(Default, Clone)]
pub struct MockTaskRepository {
    tasks: Arc<Vec<Task>>,
}

impl MockTaskRepository {
    /// Create a new mock seeded with the provided tasks.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks: Arc::new(tasks) }
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn list_tasks(&self) -> DomainResult<Vec<Task>> {
        Ok(self.tasks.as_ref().clone())
    }

    async fn find_tasks(&self, ids: &[String]) -> DomainResult<Vec<Task>> {
        Ok(self.tasks.iter().filter(|task| ids.contains(&task.id)).cloned().collect())
    }
}

/// In-memory mock for `EventEntryRepository`.
///
/// Upserts by id and answers range queries with overlap semantics,
/// returning deleted rows the way the real store contract does.
#[derive(Default, Clone)]
pub struct MockEventEntryStore {
    entries: Arc<Mutex<HashMap<String, EventEntry>>>,
}

impl MockEventEntryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an entry, assigning an id when absent.
    pub fn with_entry(self, mut entry: EventEntry) -> Self {
        if entry.id.is_empty() {
            entry.id = Uuid::now_v7().to_string();
        }
        self.entries.lock().unwrap().insert(entry.id.clone(), entry);
        self
    }

    /// Snapshot of every stored entry, unordered.
    pub fn all(&self) -> Vec<EventEntry> {
        self.entries.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl EventEntryRepository for MockEventEntryStore {
    async fn find_entries(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        event_type: Option<EventType>,
    ) -> DomainResult<Vec<EventEntry>> {
        let window = TimeRange::new(start, end);
        Ok(self
            .entries
            .lock()
            .unwrap()
            .values()
            .filter(|entry| entry.user_id == user_id)
            .filter(|entry| event_type.map_or(true, |wanted| entry.event_type == wanted))
            .filter(|entry| entry.overlaps(&window))
            .cloned()
            .collect())
    }

    async fn save_entry(&self, mut entry: EventEntry) -> DomainResult<EventEntry> {
        if entry.id.is_empty() {
            entry.id = Uuid::now_v7().to_string();
        }
        self.entries.lock().unwrap().insert(entry.id.clone(), entry.clone());
        Ok(entry)
    }
}
