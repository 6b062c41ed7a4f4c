//! Per-declaration entity options.
//!
//! Options are computed once per accessor declaration from the host's
//! [`EntityKind`], the declaration's own cache setting (if any), and the
//! module-wide default cache.

use crate::hir::EntityKind;

/// Backing store of the per-instance view cache.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum CacheImplementation {
    SparseArray,
    #[default]
    HashMap,
    NoCache,
}

impl CacheImplementation {
    pub fn has_cache(self) -> bool {
        self != CacheImplementation::NoCache
    }
}

/// Options governing how accessors in one host declaration are lowered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityOptions {
    pub entity_kind: EntityKind,
    pub cache: CacheImplementation,
}

impl EntityOptions {
    /// Options with an explicit cache; kinds that do not support caching
    /// get [`CacheImplementation::NoCache`] regardless.
    pub fn new(entity_kind: EntityKind, cache: CacheImplementation) -> Self {
        let cache = if entity_kind.supports_cache() {
            cache
        } else {
            CacheImplementation::NoCache
        };
        Self { entity_kind, cache }
    }

    pub fn uncached(entity_kind: EntityKind) -> Self {
        Self::new(entity_kind, CacheImplementation::NoCache)
    }

    /// Resolve the effective cache for a declaration.
    ///
    /// Kinds that do not support caching never get one. Otherwise an
    /// explicit `declared` setting wins; without one, kinds with the cache
    /// enabled by default use `global` and the rest get no cache.
    pub fn resolve(
        entity_kind: EntityKind,
        declared: Option<CacheImplementation>,
        global: CacheImplementation,
    ) -> Self {
        let cache = if !entity_kind.supports_cache() {
            CacheImplementation::NoCache
        } else if let Some(declared) = declared {
            declared
        } else if entity_kind.cache_enabled_by_default() {
            global
        } else {
            CacheImplementation::NoCache
        };
        Self::new(entity_kind, cache)
    }

    pub fn has_cache(&self) -> bool {
        self.cache.has_cache()
    }
}
