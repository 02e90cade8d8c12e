//! In-memory window-focus log store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use worklens_core::WindowLogRepository;
use worklens_domain::{Result, TimeRange, WindowLog};

/// In-memory implementation of [`WindowLogRepository`]
///
/// Rows are kept unordered; range queries sort by `activated_at` the way
/// the port contract requires.
#[derive(Default)]
pub struct InMemoryWindowLogStore {
    logs: RwLock<Vec<WindowLog>>,
}

impl InMemoryWindowLogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the provided logs
    pub fn with_logs(logs: Vec<WindowLog>) -> Self {
        Self { logs: RwLock::new(logs) }
    }

    /// Append one sampler row
    pub fn push(&self, log: WindowLog) {
        self.logs.write().push(log);
    }
}

#[async_trait]
impl WindowLogRepository for InMemoryWindowLogStore {
    async fn find_logs_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<WindowLog>> {
        let window = TimeRange::new(start, end);
        let mut rows: Vec<WindowLog> = self
            .logs
            .read()
            .iter()
            .filter(|log| {
                TimeRange::new(log.activated_at, log.deactivated_at).overlaps(&window)
            })
            .cloned()
            .collect();
        rows.sort_by_key(|log| log.activated_at);
        Ok(rows)
    }
}
