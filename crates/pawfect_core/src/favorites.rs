use std::collections::HashSet;

use crate::AnimalId;

/// Set of favorited animal ids.
///
/// Ids are kept even when no loaded record carries them; readers join
/// against the catalog so stale ids never surface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FavoritesTracker {
    ids: HashSet<AnimalId>,
}

impl FavoritesTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id` and returns whether it is now a favorite.
    pub fn toggle(&mut self, id: AnimalId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: &AnimalId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
