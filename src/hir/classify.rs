//! Entity classification — walking a host type's supertypes to find the
//! Android container category it belongs to.
//!
//! # Algorithm
//!
//! 1. If the type's own qualified name is one of the named kinds, that kind
//!    wins immediately and no supertypes are visited.
//! 2. Otherwise each immediate supertype is classified in declaration order,
//!    depth-first, and the first non-`Unknown` result is returned.
//! 3. If nothing matches, the result is [`EntityKind::Unknown`].
//!
//! Because the walk is depth-first in declaration order, a class that
//! inherits two named ancestors gets the one reached through its first
//! declared supertype.
//!
//! The supertype graph comes from an external resolver and is not trusted to
//! be acyclic. A type already on the current path is a cycle and classifies
//! as `Unknown` along that branch; a walk deeper than the configured cap is
//! cut off the same way.

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use super::entity::EntityKind;
use super::types::{TargetType, TypeIndex};

/// Classifies host types into [`EntityKind`]s.
#[derive(Clone, Copy, Debug)]
pub struct EntityClassifier {
    max_depth: usize,
}

/// Per-walk bookkeeping.
#[derive(Default)]
struct Walk<'a> {
    /// Types on the current DFS path.
    on_path: FxHashSet<&'a str>,
    /// Types whose whole closure is already known to be `Unknown`.
    exhausted: FxHashSet<&'a str>,
    /// Set when the depth cap cut off part of the subtree being walked.
    truncated: bool,
}

impl Default for EntityClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityClassifier {
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    pub fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the maximum supertype-chain depth explored before giving up.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Classify a resolved host type.
    pub fn classify(&self, ty: TargetType<'_>) -> EntityKind {
        let mut walk = Walk::default();
        let kind = self.classify_in(ty, 0, &mut walk);
        tracing::trace!(
            "[CLASSIFY] {} -> {:?} ({} types visited)",
            ty.qualified_name(),
            kind,
            walk.exhausted.len() + walk.on_path.len()
        );
        kind
    }

    /// Classify a type by qualified name; a name missing from the index is `Unknown`.
    pub fn classify_name(&self, index: &TypeIndex, qualified_name: &str) -> EntityKind {
        match index.lookup(qualified_name) {
            Some(ty) => self.classify(ty),
            None => {
                tracing::trace!("[CLASSIFY] {} is not in the index", qualified_name);
                EntityKind::Unknown
            }
        }
    }

    /// Classify many types in parallel. Output order matches input order.
    pub fn classify_all<S>(&self, index: &TypeIndex, names: &[S]) -> Vec<EntityKind>
    where
        S: AsRef<str> + Sync,
    {
        let kinds: Vec<EntityKind> = names
            .par_iter()
            .map(|name| self.classify_name(index, name.as_ref()))
            .collect();
        tracing::debug!(
            "Classified {} types, {} unknown",
            kinds.len(),
            kinds.iter().filter(|k| k.is_unknown()).count()
        );
        kinds
    }

    fn classify_in<'a>(&self, ty: TargetType<'a>, depth: usize, walk: &mut Walk<'a>) -> EntityKind {
        let name = ty.qualified_name();

        if let Some(kind) = EntityKind::from_qualified_name(name) {
            return kind;
        }

        if walk.exhausted.contains(name) {
            return EntityKind::Unknown;
        }

        if !walk.on_path.insert(name) {
            tracing::warn!("[CLASSIFY] Supertype cycle through {}, treating as unknown", name);
            return EntityKind::Unknown;
        }

        if depth >= self.max_depth {
            tracing::warn!(
                "[CLASSIFY] Supertype chain deeper than {} at {}, treating as unknown",
                self.max_depth,
                name
            );
            walk.on_path.remove(name);
            walk.truncated = true;
            return EntityKind::Unknown;
        }

        // A type is only memoized as exhausted if its whole closure was searched;
        // a truncated subtree may still match when reached by a shorter route.
        let outer_truncated = std::mem::replace(&mut walk.truncated, false);
        for supertype in ty.supertypes().flatten() {
            let kind = self.classify_in(supertype, depth + 1, walk);
            if !kind.is_unknown() {
                return kind;
            }
        }

        walk.on_path.remove(name);
        if !walk.truncated {
            walk.exhausted.insert(name);
        }
        walk.truncated |= outer_truncated;
        EntityKind::Unknown
    }
}
