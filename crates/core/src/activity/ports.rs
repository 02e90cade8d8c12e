//! Port interfaces for window-focus log access
//!
//! These traits define the boundary between the aggregation logic and the
//! store that holds sampler output.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use worklens_domain::{Result, WindowLog};

/// Trait for reading persisted window-focus logs
#[async_trait]
pub trait WindowLogRepository: Send + Sync {
    /// Get logs overlapping `[start, end)`, ordered by `activated_at`
    async fn find_logs_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<WindowLog>>;
}
