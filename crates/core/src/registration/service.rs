//! Auto-registration orchestrator - core business logic
//!
//! Drives aggregation, attribution and reconciliation across a full day
//! split into fixed-size slices, then hands the merged result to the
//! entry store. Slices already covered by recorded actuals are skipped:
//! existing actuals are authoritative and are never overwritten or split.

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use tracing::{debug, info};
use worklens_domain::constants::REGISTRATION_WINDOW_HOURS;
use worklens_domain::{
    EventEntry, EventType, Result, SynthesisConfig, TimeRange, WorklensError,
};

use super::ports::{ActivityReader, EventEntryRepository};
use crate::attribution::ports::{PatternRepository, TaskRepository};
use crate::attribution::resolver::resolve;
use crate::reconcile::merge;

/// Auto-registration service
pub struct AutoRegistrationService {
    activities: Arc<dyn ActivityReader>,
    patterns: Arc<dyn PatternRepository>,
    tasks: Arc<dyn TaskRepository>,
    entries: Arc<dyn EventEntryRepository>,
    config: SynthesisConfig,
}

impl AutoRegistrationService {
    /// Create a new auto-registration service with the default config
    pub fn new(
        activities: Arc<dyn ActivityReader>,
        patterns: Arc<dyn PatternRepository>,
        tasks: Arc<dyn TaskRepository>,
        entries: Arc<dyn EventEntryRepository>,
    ) -> Self {
        Self { activities, patterns, tasks, entries, config: SynthesisConfig::default() }
    }

    /// Override the synthesis configuration
    pub fn with_config(mut self, config: SynthesisConfig) -> Self {
        self.config = config;
        self
    }

    /// Synthesize and persist provisional actuals for one day
    ///
    /// Partitions the 24-hour UTC day anchored at `target_date` into
    /// slices, skips slices already overlapped by a recorded actual,
    /// attributes the rest from overlapping activity, merges touching
    /// identically-attributed slices, retitles merged entries from
    /// overlapping plan or shared entries, and persists the result with
    /// independent saves. Returns the persisted entries.
    ///
    /// Concurrent invocations for the same user and overlapping dates are
    /// not safe against each other; callers serialize per user and day.
    pub async fn auto_register_provisional_actuals(
        &self,
        user_id: &str,
        target_date: NaiveDate,
    ) -> Result<Vec<EventEntry>> {
        let day = day_range(target_date);
        let slice_len = self.slice_length()?;

        let patterns = self.patterns.list_patterns().await?;
        let tasks = self.tasks.list_tasks().await?;

        let mut provisional = Vec::new();
        let mut cursor = day.start;
        while cursor < day.end {
            let slice = TimeRange::new(cursor, (cursor + slice_len).min(day.end));
            cursor = slice.end;

            let recorded = self
                .entries
                .find_entries(user_id, slice.start, slice.end, Some(EventType::Actual))
                .await?;
            if recorded.iter().any(|entry| !entry.deleted && entry.overlaps(&slice)) {
                debug!(user_id, slice_start = %slice.start, "slice has recorded actuals, skipping");
                continue;
            }

            let activities =
                self.activities.activities_between(slice.start, slice.end).await?;
            if !activities.iter().any(|activity| activity.overlaps(&slice)) {
                continue;
            }

            // An overlapping activity always yields an entry; a None
            // resolution just leaves the attribution fields absent.
            let attribution =
                resolve(&slice, &activities, &patterns, &tasks)?.unwrap_or_default();
            provisional.push(EventEntry::provisional_actual(
                user_id,
                slice,
                &self.config.provisional_summary,
                attribution,
            ));
        }

        let mut merged = merge(provisional);
        self.retitle_from_plans(user_id, &day, &mut merged).await?;

        let mut saved = Vec::with_capacity(merged.len());
        for entry in merged {
            saved.push(self.entries.save_entry(entry).await?);
        }

        info!(user_id, date = %target_date, entries = saved.len(), "registered provisional actuals");
        Ok(saved)
    }

    /// Clear the provisional flag on one day's synthesized actuals
    ///
    /// Returns the number of entries confirmed.
    pub async fn confirm_actual_registration(
        &self,
        user_id: &str,
        target_date: NaiveDate,
    ) -> Result<usize> {
        let mut confirmed = 0;
        for mut entry in self.provisional_actuals(user_id, target_date).await? {
            entry.is_provisional = false;
            self.entries.save_entry(entry).await?;
            confirmed += 1;
        }
        info!(user_id, date = %target_date, confirmed, "confirmed provisional actuals");
        Ok(confirmed)
    }

    /// Remove one day's still-provisional actuals
    ///
    /// Removal is a soft delete: the entries stay addressable in the store
    /// with `deleted` set, matching the store contract of client-side
    /// deleted filtering. Returns the number of entries removed.
    pub async fn delete_provisional_actuals(
        &self,
        user_id: &str,
        target_date: NaiveDate,
    ) -> Result<usize> {
        let mut removed = 0;
        for mut entry in self.provisional_actuals(user_id, target_date).await? {
            entry.deleted = true;
            self.entries.save_entry(entry).await?;
            removed += 1;
        }
        info!(user_id, date = %target_date, removed, "deleted provisional actuals");
        Ok(removed)
    }

    /// Replace each merged entry's summary with the first overlapping plan
    /// or shared entry's summary
    ///
    /// Candidates are sorted by start time then id before selection so the
    /// retitle stays deterministic over stores with unstable ordering.
    async fn retitle_from_plans(
        &self,
        user_id: &str,
        day: &TimeRange,
        entries: &mut [EventEntry],
    ) -> Result<()> {
        let mut candidates = self
            .entries
            .find_entries(user_id, day.start, day.end, Some(EventType::Plan))
            .await?;
        candidates.extend(
            self.entries
                .find_entries(user_id, day.start, day.end, Some(EventType::Shared))
                .await?,
        );
        candidates.retain(|candidate| !candidate.deleted);
        candidates.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));

        for entry in entries.iter_mut() {
            if let Some(plan) = candidates.iter().find(|candidate| candidate.overlaps(&entry.range()))
            {
                entry.summary = plan.summary.clone();
            }
        }
        Ok(())
    }

    async fn provisional_actuals(
        &self,
        user_id: &str,
        target_date: NaiveDate,
    ) -> Result<Vec<EventEntry>> {
        let day = day_range(target_date);
        let mut entries = self
            .entries
            .find_entries(user_id, day.start, day.end, Some(EventType::Actual))
            .await?;
        entries.retain(|entry| !entry.deleted && entry.is_provisional);
        Ok(entries)
    }

    fn slice_length(&self) -> Result<Duration> {
        if self.config.slice_minutes == 0 {
            return Err(WorklensError::InvalidInput(
                "slice_minutes must be positive".to_string(),
            ));
        }
        Ok(Duration::minutes(i64::from(self.config.slice_minutes)))
    }
}

/// The 24-hour UTC window anchored at a civil date
fn day_range(date: NaiveDate) -> TimeRange {
    let start: DateTime<Utc> = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    TimeRange::new(start, start + Duration::hours(REGISTRATION_WINDOW_HOURS))
}
