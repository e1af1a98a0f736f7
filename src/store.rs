//! Persistence collaborator for filterable units.
//!
//! Filtering a unit must happen at most once. The store enforces this with
//! an atomic check-and-set: an outcome is only committed while the stored
//! unit is still unfiltered.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{FilterError, FilterResult};
use crate::unit::{FilterOutcome, FilterableUnit};

/// What happened when an outcome was committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The unit was updated.
    Applied,

    /// Another pass filtered the unit first; nothing was written.
    AlreadyFiltered,

    /// The outcome carried no change for the unit.
    Unchanged,
}

/// Record storage used by the orchestrator.
pub trait UnitStore: Send + Sync {
    /// Returns a snapshot of the unit.
    fn load(&self, id: &str) -> FilterResult<FilterableUnit>;

    /// Inserts or replaces a unit.
    fn save(&self, unit: FilterableUnit) -> FilterResult<()>;

    /// Atomically applies `outcome` if the unit is not yet filtered.
    fn commit_filtered(&self, id: &str, outcome: &FilterOutcome) -> FilterResult<CommitOutcome>;

    /// Atomically reverts a filtered unit to its original content.
    /// Returns false if the unit was not filtered.
    fn restore_original(&self, id: &str) -> FilterResult<bool>;
}

/// In-memory [`UnitStore`] guarded by a single mutex.
#[derive(Debug, Default)]
pub struct MemoryStore {
    units: Mutex<HashMap<String, FilterableUnit>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().map(|units| units.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> FilterResult<MutexGuard<'_, HashMap<String, FilterableUnit>>> {
        self.units.lock().map_err(|_| FilterError::Store {
            unit_id: "<all>".to_string(),
            reason: "store lock poisoned".to_string(),
        })
    }
}

impl UnitStore for MemoryStore {
    fn load(&self, id: &str) -> FilterResult<FilterableUnit> {
        self.lock()?
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    fn save(&self, unit: FilterableUnit) -> FilterResult<()> {
        self.lock()?.insert(unit.id().to_string(), unit);
        Ok(())
    }

    fn commit_filtered(&self, id: &str, outcome: &FilterOutcome) -> FilterResult<CommitOutcome> {
        let mut units = self.lock()?;
        let unit = units.get_mut(id).ok_or_else(|| not_found(id))?;

        if unit.contains_privacy_info() {
            return Ok(CommitOutcome::AlreadyFiltered);
        }

        if unit.apply(outcome) {
            Ok(CommitOutcome::Applied)
        } else {
            Ok(CommitOutcome::Unchanged)
        }
    }

    fn restore_original(&self, id: &str) -> FilterResult<bool> {
        let mut units = self.lock()?;
        let unit = units.get_mut(id).ok_or_else(|| not_found(id))?;
        Ok(unit.restore_original())
    }
}

fn not_found(id: &str) -> FilterError {
    FilterError::Store {
        unit_id: id.to_string(),
        reason: "unit not found".to_string(),
    }
}
