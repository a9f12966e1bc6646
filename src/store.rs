// Neighborhood Store - canonical, ordered, read-only collection
//
// The store is built once at process start (seed data or an injected dataset)
// and shared behind an Arc. Nothing mutates it afterwards.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::model::{NeighborhoodRecord, MAX_SCORE};
use crate::seed;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate neighborhood id: {0}")]
    DuplicateId(String),

    #[error("neighborhood {id}: {field} = {value} is outside 0..={max}", max = MAX_SCORE)]
    ScoreOutOfRange {
        id: String,
        field: &'static str,
        value: u8,
    },
}

#[derive(Debug, Clone)]
pub struct NeighborhoodStore {
    records: Vec<NeighborhoodRecord>,
}

impl NeighborhoodStore {
    /// Store holding the built-in seed dataset
    pub fn seeded() -> Self {
        NeighborhoodStore {
            records: seed::records(),
        }
    }

    /// Build a store from arbitrary records, enforcing unique ids and score ranges
    pub fn from_records(records: Vec<NeighborhoodRecord>) -> std::result::Result<Self, StoreError> {
        let mut seen = HashSet::new();

        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(StoreError::DuplicateId(record.id.clone()));
            }
            if let Some((field, value)) = record.out_of_range_score() {
                return Err(StoreError::ScoreOutOfRange {
                    id: record.id.clone(),
                    field,
                    value,
                });
            }
        }

        Ok(NeighborhoodStore { records })
    }

    /// Load a dataset from a JSON array of records
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read dataset file: {:?}", path.as_ref()))?;

        let records: Vec<NeighborhoodRecord> =
            serde_json::from_str(&content).context("Failed to parse dataset JSON")?;

        let store = NeighborhoodStore::from_records(records)
            .with_context(|| format!("Invalid dataset in {:?}", path.as_ref()))?;

        tracing::info!(records = store.len(), "Loaded neighborhood dataset from file");
        Ok(store)
    }

    /// Every record, in insertion order
    pub fn all(&self) -> &[NeighborhoodRecord] {
        &self.records
    }

    /// Exact, case-sensitive id lookup
    pub fn by_id(&self, id: &str) -> Option<&NeighborhoodRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for NeighborhoodStore {
    fn default() -> Self {
        Self::seeded()
    }
}

// ============================================================================
// TESTS
// ============================================================================
