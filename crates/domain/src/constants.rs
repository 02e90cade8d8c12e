//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

/// Sentinel `process_id` written by the sampler when no real window held
/// focus for a sampling interval. No operating system assigns a negative
/// process id, so the value can never collide with a real log.
pub const IDLE_PROCESS_ID: i64 = -1;

/// Summary given to synthesized actual entries until a matching plan entry
/// supplies a real title or the user confirms them.
pub const PROVISIONAL_SUMMARY: &str = "仮実績";

/// Default length of one registration slice in minutes.
pub const DEFAULT_SLICE_MINUTES: u32 = 60;

/// Hours covered by one auto-registration run.
pub const REGISTRATION_WINDOW_HOURS: i64 = 24;
