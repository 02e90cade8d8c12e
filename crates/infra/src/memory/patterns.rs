//! In-memory attribution rule store

use async_trait::async_trait;
use parking_lot::RwLock;
use worklens_core::{validate_pattern, PatternRepository};
use worklens_domain::{Pattern, Result};

/// In-memory implementation of [`PatternRepository`]
///
/// Preserves authored order, which the resolver's tie-break depends on.
/// Rules are validated on insertion so resolution never meets a malformed
/// expression.
#[derive(Default)]
pub struct InMemoryPatternStore {
    patterns: RwLock<Vec<Pattern>>,
}

impl InMemoryPatternStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the provided rules, validating each
    pub fn with_patterns(patterns: Vec<Pattern>) -> Result<Self> {
        let store = Self::new();
        for pattern in patterns {
            store.save(pattern)?;
        }
        Ok(store)
    }

    /// Append a rule after validating its expression
    pub fn save(&self, pattern: Pattern) -> Result<()> {
        validate_pattern(&pattern)?;
        let mut patterns = self.patterns.write();
        match patterns.iter_mut().find(|existing| existing.id == pattern.id) {
            Some(existing) => *existing = pattern,
            None => patterns.push(pattern),
        }
        Ok(())
    }
}

#[async_trait]
impl PatternRepository for InMemoryPatternStore {
    async fn list_patterns(&self) -> Result<Vec<Pattern>> {
        Ok(self.patterns.read().clone())
    }
}
