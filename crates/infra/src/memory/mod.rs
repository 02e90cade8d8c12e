//! In-memory reference stores
//!
//! Each store holds its rows behind a `parking_lot::RwLock` and implements
//! the corresponding core port. They are the reference collaborators used
//! by tests and by embedders that have not wired real persistence yet.

pub mod event_entries;
pub mod patterns;
pub mod tasks;
pub mod window_logs;

pub use event_entries::InMemoryEventEntryStore;
pub use patterns::InMemoryPatternStore;
pub use tasks::InMemoryTaskStore;
pub use window_logs::InMemoryWindowLogStore;
