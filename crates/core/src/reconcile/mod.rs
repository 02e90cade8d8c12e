//! Overlap reconciler - merges touching, identically-attributed blocks
//!
//! Operates on the ACTUAL, provisional entries produced by the resolver
//! and the orchestrator. Two blocks merge iff their ranges overlap or touch
//! exactly at a boundary AND their attribution tuples are identical; the
//! merged block spans `[min(starts), max(ends))` and keeps the shared
//! attribution. The operation is idempotent.

use worklens_domain::{Attribution, EventEntry};

/// Merge touching or overlapping blocks that share an attribution tuple
///
/// Blocks that differ in any attribution field, or that do not touch in
/// time, stay separate. Input order is not significant; the output is
/// grouped by attribution in first-seen order, each group sorted by start.
pub fn merge(blocks: Vec<EventEntry>) -> Vec<EventEntry> {
    // Group by identical attribution. Linear scan keeps first-seen group
    // order; block counts here are a day's worth of slices at most.
    let mut groups: Vec<(Attribution, Vec<EventEntry>)> = Vec::new();
    for block in blocks {
        let attribution = block.attribution();
        match groups.iter_mut().find(|(key, _)| *key == attribution) {
            Some((_, members)) => members.push(block),
            None => groups.push((attribution, vec![block])),
        }
    }

    let mut merged = Vec::new();
    for (_, mut members) in groups {
        members.sort_by_key(|entry| (entry.start, entry.end));

        let mut run = members.into_iter();
        let Some(mut current) = run.next() else {
            continue;
        };
        for block in run {
            // Sorted by start, so touching-or-overlapping reduces to the
            // block starting no later than the current end.
            if current.range().overlaps_or_touches(&block.range()) {
                current.end = current.end.max(block.end);
            } else {
                merged.push(current);
                current = block;
            }
        }
        merged.push(current);
    }

    merged
}
