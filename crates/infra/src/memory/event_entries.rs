//! In-memory calendar entry store

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use uuid::Uuid;
use worklens_core::EventEntryRepository;
use worklens_domain::{EventEntry, EventType, Result, TimeRange};

/// In-memory implementation of [`EventEntryRepository`]
///
/// Upserts by id, assigning a fresh uuid when handed an empty one. Range
/// queries use overlap semantics and return deleted rows; filtering
/// `deleted` is the caller's job, per the store contract.
#[derive(Default)]
pub struct InMemoryEventEntryStore {
    entries: RwLock<HashMap<String, EventEntry>>,
}

impl InMemoryEventEntryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, deleted rows included
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the store holds no entries at all
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Snapshot of every stored entry, unordered
    pub fn all(&self) -> Vec<EventEntry> {
        self.entries.read().values().cloned().collect()
    }
}

#[async_trait]
impl EventEntryRepository for InMemoryEventEntryStore {
    async fn find_entries(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        event_type: Option<EventType>,
    ) -> Result<Vec<EventEntry>> {
        let window = TimeRange::new(start, end);
        Ok(self
            .entries
            .read()
            .values()
            .filter(|entry| entry.user_id == user_id)
            .filter(|entry| event_type.map_or(true, |wanted| entry.event_type == wanted))
            .filter(|entry| entry.overlaps(&window))
            .cloned()
            .collect())
    }

    async fn save_entry(&self, mut entry: EventEntry) -> Result<EventEntry> {
        if entry.id.is_empty() {
            entry.id = Uuid::now_v7().to_string();
        }
        self.entries.write().insert(entry.id.clone(), entry.clone());
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use worklens_domain::Attribution;

    use super::*;

    fn entry(user: &str, event_type: EventType, start_secs: i64, end_secs: i64) -> EventEntry {
        EventEntry {
            event_type,
            ..EventEntry::provisional_actual(
                user,
                TimeRange::new(
                    Utc.timestamp_opt(start_secs, 0).unwrap(),
                    Utc.timestamp_opt(end_secs, 0).unwrap(),
                ),
                "仮実績",
                Attribution::default(),
            )
        }
    }

    #[tokio::test]
    async fn save_assigns_an_id_when_handed_an_empty_one() {
        let store = InMemoryEventEntryStore::new();
        let mut unsaved = entry("u1", EventType::Actual, 0, 100);
        unsaved.id = String::new();

        let saved = store.save_entry(unsaved).await.unwrap();

        assert!(!saved.id.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn save_upserts_by_id() {
        let store = InMemoryEventEntryStore::new();
        let saved = store.save_entry(entry("u1", EventType::Actual, 0, 100)).await.unwrap();

        let mut updated = saved.clone();
        updated.summary = "edited".to_string();
        store.save_entry(updated).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].summary, "edited");
    }

    #[tokio::test]
    async fn find_filters_by_user_type_and_overlap_but_not_deleted() {
        let store = InMemoryEventEntryStore::new();
        store.save_entry(entry("u1", EventType::Actual, 0, 100)).await.unwrap();
        store.save_entry(entry("u1", EventType::Plan, 0, 100)).await.unwrap();
        store.save_entry(entry("u2", EventType::Actual, 0, 100)).await.unwrap();
        store.save_entry(entry("u1", EventType::Actual, 500, 600)).await.unwrap();
        let mut tombstone = entry("u1", EventType::Actual, 0, 100);
        tombstone.deleted = true;
        store.save_entry(tombstone).await.unwrap();

        let rows = store
            .find_entries(
                "u1",
                Utc.timestamp_opt(0, 0).unwrap(),
                Utc.timestamp_opt(200, 0).unwrap(),
                Some(EventType::Actual),
            )
            .await
            .unwrap();

        assert_eq!(rows.len(), 2, "deleted rows are returned, callers filter");
        assert!(rows.iter().all(|row| row.user_id == "u1"));
        assert!(rows.iter().all(|row| row.event_type == EventType::Actual));
    }
}
