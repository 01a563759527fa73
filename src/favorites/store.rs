//! In-memory favorites store.

use crate::recipe::{Recipe, RecipeId};

/// Handle identifying a registered listener.
pub type ListenerId = usize;

/// What a toggle did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Removed,
}

/// Notification delivered to subscribers after a toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoritesChange {
    /// Identity of the recipe that was toggled.
    pub id: RecipeId,
    pub kind: ChangeKind,
    /// Number of favorites after the change.
    pub total: usize,
}

type Listener = Box<dyn FnMut(&FavoritesChange) + Send>;

/// The set of recipes the user has marked as favorite.
///
/// The store owns its list exclusively; screens read snapshots through
/// [`recipes`](Self::recipes) and [`is_favorite`](Self::is_favorite) and
/// must re-read after any toggle. Membership is decided by [`RecipeId`]
/// alone, so the store holds at most one entry per recipe.
///
/// The store is created and passed around by the embedder. It is not
/// global state.
#[derive(Default)]
pub struct FavoritesStore {
    recipes: Vec<Recipe>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: ListenerId,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the recipe to the favorites if absent, remove it if present.
    ///
    /// Matching is by `recipe.id` only. All subscribers are notified
    /// synchronously, in registration order, before this returns.
    pub fn toggle(&mut self, recipe: Recipe) {
        let id = recipe.id.clone();

        let change = match self.recipes.iter().position(|r| r.id == id) {
            Some(index) => {
                self.recipes.remove(index);
                tracing::debug!(%id, "removed favorite");
                FavoritesChange {
                    id,
                    kind: ChangeKind::Removed,
                    total: self.recipes.len(),
                }
            }
            None => {
                self.recipes.push(recipe);
                tracing::debug!(%id, "added favorite");
                FavoritesChange {
                    id,
                    kind: ChangeKind::Added,
                    total: self.recipes.len(),
                }
            }
        };

        for (_, listener) in &mut self.listeners {
            listener(&change);
        }
    }

    /// Whether a recipe with this id is currently favorited.
    ///
    /// Pure read; never mutates the store.
    pub fn is_favorite(&self, id: &RecipeId) -> bool {
        self.recipes.iter().any(|r| &r.id == id)
    }

    /// The favorited recipes, in the order they were added.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Register a listener called synchronously after every toggle.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&FavoritesChange) + Send + 'static,
    ) -> ListenerId {
        let id = self.next_listener;
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a previously registered listener.
    ///
    /// Returns whether the listener was still registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("recipes", &self.recipes.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
