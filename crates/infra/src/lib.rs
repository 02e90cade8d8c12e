//! # Worklens Infra
//!
//! Adapter layer implementing the core port traits.
//!
//! This crate contains:
//! - In-memory reference stores for every collaborator port (window logs,
//!   patterns, tasks, event entries)
//! - The activity-feed adapter composing the window-log store with the
//!   aggregator
//!
//! Embedders that bring their own persistence implement the same ports;
//! the in-memory stores document the expected contract and back the
//! integration test suites.

pub mod activity_feed;
pub mod memory;

pub use activity_feed::LogActivityReader;
pub use memory::{
    InMemoryEventEntryStore, InMemoryPatternStore, InMemoryTaskStore, InMemoryWindowLogStore,
};
