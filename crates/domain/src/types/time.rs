//! Half-open time range helper
//!
//! All interval math in the engine works on `[start, end)` ranges. The
//! overlap rule is the usual half-open check (`a.start < b.end && a.end >
//! b.start`); exact boundary touching is handled separately where merging
//! cares about it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, WorklensError};

/// A half-open `[start, end)` interval in UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Inclusive lower bound
    pub start: DateTime<Utc>,
    /// Exclusive upper bound
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Create a new range without validating it
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Reject degenerate ranges before any synthesis begins
    pub fn validate(&self) -> Result<()> {
        if self.end <= self.start {
            return Err(WorklensError::InvalidInput(format!(
                "degenerate range: end {} <= start {}",
                self.end, self.start
            )));
        }
        Ok(())
    }

    /// Whether this range overlaps `[start, end)` of another
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Whether `other` overlaps or touches this range exactly at a boundary
    pub fn overlaps_or_touches(&self, other: &Self) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Intersection with another range, `None` when the clip is empty
    pub fn clip(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if end <= start {
            return None;
        }
        Some(Self { start, end })
    }

    /// Length of the range in milliseconds
    pub fn duration_ms(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }
}
