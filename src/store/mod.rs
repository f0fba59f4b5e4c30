// src/store/mod.rs

//! In-memory append-only affirmation store.
//!
//! Records live for the lifetime of the process; there is no persistence,
//! eviction, or mutation after append. A single mutex guards the id counter
//! and the append so concurrent requests cannot double-book ids.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// One generated affirmation. Created once per successful request,
/// never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffirmationRecord {
    pub id: u64,
    pub mood: String,
    pub situation: String,
    pub affirmation: String,
    pub timestamp: DateTime<Utc>,
    pub ai_generated: bool,
}

/// Append-only ordered collection of all generated records.
///
/// Invariant: ids are 1-based and strictly increasing, and the store's
/// length always equals the highest assigned id.
#[derive(Default)]
pub struct AffirmationStore {
    records: Mutex<Vec<AffirmationRecord>>,
}

impl AffirmationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the next id and append a new record, returning a copy of it.
    pub fn append(
        &self,
        mood: String,
        situation: String,
        affirmation: String,
        ai_generated: bool,
    ) -> AffirmationRecord {
        let mut records = self.records.lock().expect("affirmation store poisoned");
        let record = AffirmationRecord {
            id: records.len() as u64 + 1,
            mood,
            situation,
            affirmation,
            timestamp: Utc::now(),
            ai_generated,
        };
        records.push(record.clone());
        record
    }

    /// All records in insert order.
    pub fn snapshot(&self) -> Vec<AffirmationRecord> {
        self.records.lock().expect("affirmation store poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().expect("affirmation store poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
