//! Memoized permutations, shared between every cube of the same dimension.

use super::moves::MoveFamily;
use super::permutation::Permutation;

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use log::debug;

/// Everything a single-layer permutation depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PermKey {
    /// Cube dimension.
    pub size: usize,
    /// The family turned.
    pub family: MoveFamily,
    /// The layer turned, counted from the family's ring face.
    pub layer: usize,
    /// Clockwise quarter turns, in `1..=3`.
    pub quarter_turns: u8,
}

/// A cache of built permutations. Lookups only take a read lock; a missing permutation is built
/// without holding any lock and then inserted, with the first inserted copy kept.
#[derive(Debug, Default)]
pub struct PermutationCache {
    perms: RwLock<HashMap<PermKey, Arc<Permutation>>>,
}

static GLOBAL: LazyLock<PermutationCache> = LazyLock::new(PermutationCache::new);

impl PermutationCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cache used by `Cube::apply_move`.
    pub fn global() -> &'static PermutationCache {
        &GLOBAL
    }

    /// The permutation for `key`, building it if it has not been asked for before.
    ///
    /// # Panics
    /// If the key does not describe a layer of the cube (see `Permutation::build`).
    pub fn get(&self, key: PermKey) -> Arc<Permutation> {
        // The map is only written by a single insert, so a poisoned lock still holds a valid map.
        if let Some(p) = self
            .perms
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Arc::clone(p);
        }

        let built = Arc::new(Permutation::build(
            key.size,
            key.family,
            key.layer,
            key.quarter_turns,
        ));
        debug!("built permutation for {key:?} over {} stickers", built.len());

        let mut perms = self.perms.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(perms.entry(key).or_insert(built))
    }

    /// How many permutations are stored.
    pub fn len(&self) -> usize {
        self.perms
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been built yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(size: usize, family: MoveFamily, layer: usize, quarter_turns: u8) -> PermKey {
        PermKey {
            size,
            family,
            layer,
            quarter_turns,
        }
    }

    #[test]
    fn builds_once() {
        let cache = PermutationCache::new();
        assert!(cache.is_empty());
        let a = cache.get(key(3, MoveFamily::R, 0, 1));
        let b = cache.get(key(3, MoveFamily::R, 0, 1));
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);

        cache.get(key(3, MoveFamily::R, 0, 2));
        cache.get(key(4, MoveFamily::R, 0, 1));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn matches_direct_build() {
        let cache = PermutationCache::new();
        for family in MoveFamily::ARRAY {
            let p = cache.get(key(5, family, 2, 3));
            assert_eq!(*p, Permutation::build(5, family, 2, 3));
        }
    }

    #[test]
    fn concurrent_readers_agree() {
        let cache = PermutationCache::new();
        let k = key(6, MoveFamily::F, 1, 1);
        let perms: Vec<Arc<Permutation>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8).map(|_| s.spawn(|| cache.get(k))).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(cache.len(), 1);
        let stored = cache.get(k);
        for p in &perms {
            assert_eq!(**p, *stored);
        }
    }

    #[test]
    fn global_is_shared() {
        let a = PermutationCache::global().get(key(2, MoveFamily::Y, 1, 2));
        let b = PermutationCache::global().get(key(2, MoveFamily::Y, 1, 2));
        assert!(Arc::ptr_eq(&a, &b));
    }
}
