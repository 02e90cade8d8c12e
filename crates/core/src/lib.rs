//! # Worklens Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains the activity-to-actual synthesis engine:
//! - Activity aggregation over raw window-focus logs
//! - Pattern attribution resolution over activity intervals
//! - Overlap reconciliation of synthesized blocks
//! - The auto-registration orchestrator driving a full day
//! - Port/adapter interfaces (traits) for every collaborator
//!
//! ## Architecture Principles
//! - Only depends on `worklens-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod activity;
pub mod attribution;
pub mod reconcile;
pub mod registration;

// Re-export specific items to avoid ambiguity
pub use activity::aggregator::{aggregate, last_activity};
pub use activity::ports::WindowLogRepository;
pub use attribution::ports::{PatternRepository, TaskRepository};
pub use attribution::resolver::{resolve, validate_pattern};
pub use reconcile::merge;
pub use registration::ports::{ActivityReader, EventEntryRepository};
pub use registration::AutoRegistrationService;
