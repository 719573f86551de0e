use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::types::{Category, Code};

/// Default per-store capacity.
pub const DEFAULT_CAPACITY: usize = 50;

/// A record identified by a unique integer code.
pub trait Keyed {
    /// The record's identity within its store.
    fn code(&self) -> Code;
}

/// In-place mutation of a record's mutable fields.
///
/// Implementations must never change the record's code.
pub trait RecordPatch<T> {
    /// Writes the patch's values into `rec`.
    fn apply_to(&self, rec: &mut T);
}

/// Failures of store and registry operations. None of them mutate state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store already holds `capacity` records.
    CapacityExceeded {
        /// Configured maximum record count.
        capacity: usize,
    },
    /// No occupied entry carries this code.
    NotFound(Code),
    /// A record with this code is already stored.
    DuplicateCode(Code),
    /// Every code in the category's range has been handed out.
    CodeRangeExhausted(Category),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { capacity } => {
                write!(f, "record limit of {capacity} has been reached")
            }
            Self::NotFound(code) => write!(f, "no existing record for code {code}"),
            Self::DuplicateCode(code) => write!(f, "code {code} already exists"),
            Self::CodeRangeExhausted(category) => {
                write!(f, "no {} codes are left to assign", category.label())
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Serializable copy of a store's capacity and records, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot<T> {
    /// Maximum record count of the captured store.
    pub capacity: usize,
    /// Occupied entries in insertion order.
    pub records: Vec<T>,
}

/// Fixed-capacity, insertion-ordered collection keyed by a unique code.
///
/// Occupied entries are always dense: deletion shifts later entries down
/// instead of leaving a gap or swapping in the last element.
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    entries: Vec<T>,
    capacity: usize,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<T: Keyed> RecordStore<T> {
    /// Empty store with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store, re-checking capacity and code uniqueness.
    pub fn from_snapshot(snapshot: StoreSnapshot<T>) -> Result<Self, StoreError> {
        let mut store = Self::with_capacity(snapshot.capacity);
        for rec in snapshot.records {
            store.add(rec)?;
        }
        Ok(store)
    }

    /// Copies the current contents into a snapshot.
    pub fn export_snapshot(&self) -> StoreSnapshot<T>
    where
        T: Clone,
    {
        StoreSnapshot {
            capacity: self.capacity,
            records: self.entries.clone(),
        }
    }

    /// Appends `rec` after the last occupied entry.
    ///
    /// Capacity is checked before uniqueness; on any error the store is left
    /// untouched.
    pub fn add(&mut self, rec: T) -> Result<(), StoreError> {
        if self.is_full() {
            return Err(StoreError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let code = rec.code();
        if self.find_index_by_code(code).is_some() {
            return Err(StoreError::DuplicateCode(code));
        }

        self.entries.push(rec);
        debug!("event=record_add code={code} count={}", self.entries.len());
        Ok(())
    }

    /// Linear scan over the occupied entries.
    pub fn find_index_by_code(&self, code: Code) -> Option<usize> {
        self.entries.iter().position(|rec| rec.code() == code)
    }

    /// Record with `code`, if stored.
    pub fn get(&self, code: Code) -> Option<&T> {
        self.find_index_by_code(code).map(|idx| &self.entries[idx])
    }

    /// Applies `patch` to the record with `code` in place.
    pub fn update<P: RecordPatch<T>>(&mut self, code: Code, patch: &P) -> Result<(), StoreError> {
        let idx = self.find_index_by_code(code).ok_or(StoreError::NotFound(code))?;
        let rec = &mut self.entries[idx];
        patch.apply_to(rec);
        debug_assert_eq!(rec.code(), code, "patch must not change the record code");
        debug!("event=record_update code={code} index={idx}");
        Ok(())
    }

    /// Removes and returns the record, shifting every later entry down one
    /// slot so survivors keep their relative order.
    pub fn delete(&mut self, code: Code) -> Result<T, StoreError> {
        let idx = self.find_index_by_code(code).ok_or(StoreError::NotFound(code))?;
        let removed = self.entries.remove(idx);
        debug!(
            "event=record_delete code={code} index={idx} count={}",
            self.entries.len()
        );
        Ok(removed)
    }
}

impl<T> RecordStore<T> {
    /// Empty store holding at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Occupied entries in insertion order.
    pub fn list(&self) -> &[T] {
        &self.entries
    }

    /// Number of occupied entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry is occupied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when another add would exceed capacity.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Configured maximum record count.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
