// Query Service - read operations over the neighborhood store
//
// Every operation is a pure read. The store is injected so tests can run
// against fabricated datasets instead of the seed.

use std::sync::Arc;
use thiserror::Error;

use crate::model::NeighborhoodRecord;
use crate::preferences::SearchPreferences;
use crate::store::NeighborhoodStore;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("neighborhood not found: {0}")]
    NotFound(String),
}

/// Filtered and ranked search output
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<'a> {
    pub records: Vec<&'a NeighborhoodRecord>,
}

impl<'a> SearchResult<'a> {
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.records.iter().copied().map(|r| r.name.as_str()).collect()
    }
}

#[derive(Debug, Clone)]
pub struct QueryService {
    store: Arc<NeighborhoodStore>,
}

impl QueryService {
    pub fn new(store: Arc<NeighborhoodStore>) -> Self {
        QueryService { store }
    }

    /// Service over the built-in seed dataset
    pub fn seeded() -> Self {
        Self::new(Arc::new(NeighborhoodStore::seeded()))
    }

    /// Read-only view of every record in insertion order
    pub fn get_all(&self) -> &[NeighborhoodRecord] {
        self.store.all()
    }

    pub fn get_by_id(&self, id: &str) -> Result<&NeighborhoodRecord, QueryError> {
        self.store
            .by_id(id)
            .ok_or_else(|| QueryError::NotFound(id.to_string()))
    }

    /// Conjunctive threshold filter, then rank by match score (highest first).
    ///
    /// The sort is stable: records with equal match scores keep their
    /// insertion order.
    pub fn search(&self, preferences: &SearchPreferences) -> SearchResult<'_> {
        let mut records: Vec<&NeighborhoodRecord> = self
            .store
            .all()
            .iter()
            .filter(|record| preferences.admits(record))
            .collect();

        records.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        SearchResult { records }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl Default for QueryService {
    fn default() -> Self {
        Self::seeded()
    }
}

// ============================================================================
// TESTS
// ============================================================================
