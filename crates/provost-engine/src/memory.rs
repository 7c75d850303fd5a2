//! In-memory implementation of `ResultStore`.
//!
//! `InMemoryResultStore` is the reference store: a `Vec` of results behind a
//! `Mutex`, safe to share across threads via `Arc`. The store-wide lock is
//! held for the whole of `update`, which trivially satisfies the per-result
//! serialization contract — a result set sized for one institution never
//! makes that lock contended.

use std::sync::{Arc, Mutex};

use provost_contracts::{
    error::{ProvostError, ProvostResult},
    result::{ResultId, StudentResult},
};

use crate::traits::ResultStore;

/// An in-memory, mutex-guarded result store.
///
/// Clone the `Arc` handle to share between the engine (write path) and the
/// visibility resolver (read path).
pub struct InMemoryResultStore {
    state: Arc<Mutex<Vec<StudentResult>>>,
}

impl InMemoryResultStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a store pre-populated with `results`, preserving their order.
    pub fn with_results(results: Vec<StudentResult>) -> Self {
        Self {
            state: Arc::new(Mutex::new(results)),
        }
    }
}

impl Default for InMemoryResultStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultStore for InMemoryResultStore {
    fn insert(&self, result: StudentResult) -> ProvostResult<()> {
        let mut state = self.state.lock().expect("result store lock poisoned");
        state.push(result);
        Ok(())
    }

    fn get(&self, id: &ResultId) -> ProvostResult<Option<StudentResult>> {
        let state = self.state.lock().expect("result store lock poisoned");
        Ok(state.iter().find(|r| &r.id == id).cloned())
    }

    fn list(&self) -> ProvostResult<Vec<StudentResult>> {
        let state = self.state.lock().expect("result store lock poisoned");
        Ok(state.clone())
    }

    /// Apply `apply` to the committed result and swap in its return value.
    ///
    /// The lock is held across the closure call, so no other update or read
    /// can observe the result between the snapshot and the commit.
    fn update(
        &self,
        id: &ResultId,
        apply: &mut dyn FnMut(&StudentResult) -> ProvostResult<StudentResult>,
    ) -> ProvostResult<StudentResult> {
        let mut state = self.state.lock().expect("result store lock poisoned");
        let index = state
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| ProvostError::NotFound {
                result_id: id.to_string(),
            })?;

        let next = apply(&state[index])?;
        state[index] = next.clone();
        Ok(next)
    }
}
