//! Persistent notebook storage.

use std::sync::Mutex;

use chrono::Utc;

use crate::error::{LadleError, Result};
use crate::storage::Storage;

use super::CustomRecipe;

/// Storage key holding the serialized notebook sequence.
pub const STORAGE_KEY: &str = "customrecipes";

/// CRUD over the persisted sequence of user-authored recipes.
///
/// The whole sequence lives as one JSON blob under [`STORAGE_KEY`] and is
/// rewritten in full on every mutation. A per-store lock is held across
/// each read-modify-persist cycle, so operations apply in invocation
/// order and a mutation's persist completes before the next operation
/// reads the blob.
///
/// Mutating operations return the updated sequence; callers treat any
/// previously loaded snapshot as stale from that point on.
pub struct NotebookStore<S: Storage> {
    storage: S,
    op_lock: Mutex<()>,
}

impl<S: Storage> NotebookStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            op_lock: Mutex::new(()),
        }
    }

    /// Load the current sequence of custom recipes.
    ///
    /// An absent blob yields an empty sequence. A malformed or unreadable
    /// blob is logged and also yields an empty sequence; local corruption
    /// must never crash the caller. The next successful mutation replaces
    /// the corrupt blob with a valid one.
    pub fn load(&self) -> Vec<CustomRecipe> {
        let _guard = self.op_lock.lock().expect("notebook lock poisoned");
        self.read_sequence()
    }

    /// Append a recipe and persist the full sequence.
    ///
    /// Stamps `created_at` if the caller left it unset. Returns the
    /// updated sequence.
    pub fn add(&self, mut recipe: CustomRecipe) -> Result<Vec<CustomRecipe>> {
        let _guard = self.op_lock.lock().expect("notebook lock poisoned");

        if recipe.created_at.is_none() {
            recipe.created_at = Some(Utc::now());
        }

        let mut recipes = self.read_sequence();
        recipes.push(recipe);
        self.persist(&recipes)?;

        tracing::debug!(count = recipes.len(), "added custom recipe");
        Ok(recipes)
    }

    /// Replace the recipe at `index` and persist the full sequence.
    ///
    /// Preserves the original `created_at` and stamps `updated_at`.
    /// Returns the updated sequence.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Indices come from a prior
    /// [`load`](Self::load) result; an out-of-range index is a caller
    /// programming error, not a user-facing failure.
    pub fn update(&self, index: usize, mut recipe: CustomRecipe) -> Result<Vec<CustomRecipe>> {
        let _guard = self.op_lock.lock().expect("notebook lock poisoned");

        let mut recipes = self.read_sequence();
        assert!(
            index < recipes.len(),
            "notebook update index {} out of range (len {})",
            index,
            recipes.len()
        );

        if recipe.created_at.is_none() {
            recipe.created_at = recipes[index].created_at;
        }
        recipe.updated_at = Some(Utc::now());

        recipes[index] = recipe;
        self.persist(&recipes)?;

        tracing::debug!(index, "updated custom recipe");
        Ok(recipes)
    }

    /// Remove the recipe at `index` and persist the full sequence.
    ///
    /// Returns the updated sequence.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range, same contract as
    /// [`update`](Self::update).
    pub fn remove(&self, index: usize) -> Result<Vec<CustomRecipe>> {
        let _guard = self.op_lock.lock().expect("notebook lock poisoned");

        let mut recipes = self.read_sequence();
        assert!(
            index < recipes.len(),
            "notebook remove index {} out of range (len {})",
            index,
            recipes.len()
        );

        recipes.remove(index);
        self.persist(&recipes)?;

        tracing::debug!(index, count = recipes.len(), "removed custom recipe");
        Ok(recipes)
    }

    fn read_sequence(&self) -> Vec<CustomRecipe> {
        let blob = match self.storage.read(STORAGE_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("failed to read notebook, starting empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&blob) {
            Ok(recipes) => recipes,
            Err(e) => {
                tracing::warn!("notebook blob is malformed, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    fn persist(&self, recipes: &[CustomRecipe]) -> Result<()> {
        let blob = serde_json::to_string(recipes).map_err(|e| LadleError::StorageWrite {
            key: STORAGE_KEY.to_string(),
            message: e.to_string(),
        })?;

        self.storage.write(STORAGE_KEY, &blob)
    }
}
