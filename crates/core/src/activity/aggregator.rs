//! Activity aggregator - collapses window-focus logs into activity intervals
//!
//! Walks a chronological list of window logs maintaining a "current event".
//! Consecutive logs with the same basename extend the event; an idle log
//! closes it without starting a new one; any other log closes it and seeds
//! the next. The output is a derived view: recomputed from the log range on
//! every query, never persisted.

use uuid::Uuid;
use worklens_domain::{ActivityDetail, ActivityEvent, WindowLog};

/// Collapse a chronological list of window logs into activity intervals
///
/// `logs` must be ordered by `activated_at` ascending and already filtered
/// to the caller's time window. Idle periods are discarded: an idle log
/// always ends the current event without starting a new one, so no event
/// ever spans an idle gap. Empty input yields an empty list.
pub fn aggregate(logs: &[WindowLog]) -> Vec<ActivityEvent> {
    let mut events = Vec::new();
    let mut current: Option<ActivityEvent> = None;

    for log in logs {
        if log.is_idle() {
            if let Some(event) = current.take() {
                events.push(event);
            }
            continue;
        }

        match current.as_mut() {
            Some(event) if event.basename == log.basename => extend(event, log),
            _ => {
                if let Some(event) = current.take() {
                    events.push(event);
                }
                current = Some(seed(log));
            }
        }
    }

    if let Some(event) = current {
        events.push(event);
    }

    events
}

/// Return only the most recent run of same-basename, non-idle logs
///
/// Scans from the end backward until the basename changes or an idle log is
/// hit. Used to seed continuation state across process restarts. `None` on
/// empty input or when the most recent log is idle.
pub fn last_activity(logs: &[WindowLog]) -> Option<ActivityEvent> {
    let last = logs.last()?;
    if last.is_idle() {
        return None;
    }

    let run_start = logs
        .iter()
        .rposition(|log| log.is_idle() || log.basename != last.basename)
        .map_or(0, |boundary| boundary + 1);

    let mut run = logs[run_start..].iter();
    let mut event = seed(run.next()?);
    for log in run {
        extend(&mut event, log);
    }
    Some(event)
}

fn seed(log: &WindowLog) -> ActivityEvent {
    ActivityEvent {
        id: Uuid::now_v7().to_string(),
        basename: log.basename.clone(),
        start: log.activated_at,
        end: log.deactivated_at,
        details: vec![detail(log)],
    }
}

fn extend(event: &mut ActivityEvent, log: &WindowLog) {
    event.details.push(detail(log));
    event.end = event.end.max(log.deactivated_at);
}

fn detail(log: &WindowLog) -> ActivityDetail {
    ActivityDetail {
        id: log.id.clone(),
        start: log.activated_at,
        end: log.deactivated_at,
        window_title: log.window_title.clone(),
    }
}
