//! Pattern attribution resolver
//!
//! Determines the single best-fit attribution for a time range from the
//! activity intervals overlapping it. Patterns are user-authored data
//! evaluated as a declarative rule set: basename equality plus an optional
//! window-title regex, interpreted one activity at a time.
//!
//! # Algorithm
//! 1. Clip every overlapping activity to the range, discard empty clips
//! 2. Match each clipped activity against the rule set; regexes run over
//!    the *unclipped* activity's detail titles, unanchored, exactly as
//!    authored
//! 3. Accumulate clipped milliseconds per attribution tuple, including the
//!    unattributed bucket, preserving first-seen bucket order
//! 4. The tuple with the greatest cumulative duration wins; ties resolve
//!    to the first-seen bucket; an unattributed winner means no synthesis
//! 5. A winning task whose project differs from the tuple's project (or
//!    which no longer exists) is cleared, the rest of the tuple intact

use ahash::AHashMap as HashMap;
use regex::Regex;
use tracing::warn;
use worklens_domain::{
    ActivityEvent, Attribution, Pattern, Result, Task, TimeRange, WorklensError,
};

/// Resolve the attribution for `range` from the activities overlapping it
///
/// When more than one pattern matches the same activity, the first pattern
/// in `patterns` order wins. This tie-break is deliberate: rules are
/// evaluated in their authored order, so earlier rules shadow later ones.
///
/// Returns `Ok(None)` when no activity overlaps the range or when the
/// unattributed bucket dominates. A degenerate range (`end <= start`) is
/// rejected before any work; a malformed pattern expression surfaces as
/// [`WorklensError::InvalidPattern`] (patterns are expected to have been
/// validated before persistence, see [`validate_pattern`]).
pub fn resolve(
    range: &TimeRange,
    activities: &[ActivityEvent],
    patterns: &[Pattern],
    tasks: &[Task],
) -> Result<Option<Attribution>> {
    range.validate()?;

    let compiled = compile_patterns(patterns)?;

    // Buckets keep first-seen order so duration ties stay deterministic;
    // the map only locates a tuple's slot.
    let mut buckets: Vec<(Attribution, i64)> = Vec::new();
    let mut slots: HashMap<Attribution, usize> = HashMap::new();

    for activity in activities {
        let Some(clipped) = activity.range().clip(range) else {
            continue;
        };

        let attribution = match first_match(activity, &compiled) {
            Some(pattern) => pattern.attribution(),
            None => Attribution::default(),
        };

        let slot = *slots.entry(attribution.clone()).or_insert_with(|| {
            buckets.push((attribution, 0));
            buckets.len() - 1
        });
        buckets[slot].1 += clipped.duration_ms();
    }

    let mut winner: Option<&(Attribution, i64)> = None;
    for bucket in &buckets {
        if winner.map_or(true, |best| bucket.1 > best.1) {
            winner = Some(bucket);
        }
    }

    match winner {
        Some((attribution, _)) if !attribution.is_empty() => {
            Ok(Some(enforce_task_consistency(attribution.clone(), tasks)))
        }
        _ => Ok(None),
    }
}

/// Check that a pattern's regular expression compiles
///
/// Authoring-time companion to [`resolve`]: stores call this before
/// persisting a rule so resolution never meets a malformed expression.
pub fn validate_pattern(pattern: &Pattern) -> Result<()> {
    if let Some(expression) = pattern.regular_expression.as_deref() {
        compile(&pattern.id, expression)?;
    }
    Ok(())
}

struct CompiledPattern<'a> {
    pattern: &'a Pattern,
    regex: Option<Regex>,
}

fn compile_patterns(patterns: &[Pattern]) -> Result<Vec<CompiledPattern<'_>>> {
    patterns
        .iter()
        .map(|pattern| {
            let regex = pattern
                .regular_expression
                .as_deref()
                .map(|expression| compile(&pattern.id, expression))
                .transpose()?;
            Ok(CompiledPattern { pattern, regex })
        })
        .collect()
}

fn compile(pattern_id: &str, expression: &str) -> Result<Regex> {
    Regex::new(expression).map_err(|err| {
        WorklensError::InvalidPattern(format!("pattern {pattern_id}: {err}"))
    })
}

/// First rule in authored order matching the activity, if any
///
/// The regex is tested against every detail title of the unclipped
/// activity; one matching title is enough.
fn first_match<'a>(
    activity: &ActivityEvent,
    compiled: &'a [CompiledPattern<'_>],
) -> Option<&'a Pattern> {
    compiled
        .iter()
        .find(|candidate| {
            if candidate.pattern.basename != activity.basename {
                return false;
            }
            match &candidate.regex {
                None => true,
                Some(regex) => {
                    activity.details.iter().any(|detail| regex.is_match(&detail.window_title))
                }
            }
        })
        .map(|candidate| candidate.pattern)
}

fn enforce_task_consistency(attribution: Attribution, tasks: &[Task]) -> Attribution {
    let Some(task_id) = attribution.task_id.as_deref() else {
        return attribution;
    };

    let Some(task) = tasks.iter().find(|task| task.id == task_id) else {
        // Lookup miss: the rule references a task that no longer exists.
        warn!(task_id, "attributed task not found, clearing task reference");
        return attribution.without_task();
    };

    if attribution.project_id.as_deref() != Some(task.project_id.as_str()) {
        return attribution.without_task();
    }

    attribution
}
