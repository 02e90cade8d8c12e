//! Activity-feed adapter
//!
//! Bridges the window-log store and the aggregator: activity is a pure
//! function over the log range, recomputed on every query rather than
//! persisted with a lifecycle of its own.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;
use worklens_core::registration::ports::ActivityReader;
use worklens_core::{aggregate, WindowLogRepository};
use worklens_domain::{ActivityEvent, Result};

/// [`ActivityReader`] implementation backed by a window-log store
pub struct LogActivityReader {
    logs: Arc<dyn WindowLogRepository>,
}

impl LogActivityReader {
    /// Create a new reader over the given log store
    pub fn new(logs: Arc<dyn WindowLogRepository>) -> Self {
        Self { logs }
    }
}

#[async_trait]
impl ActivityReader for LogActivityReader {
    async fn activities_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ActivityEvent>> {
        let logs = self.logs.find_logs_between(start, end).await?;
        let events = aggregate(&logs);
        debug!(logs = logs.len(), events = events.len(), "derived activity for range");
        Ok(events)
    }
}
