//! Host type declarations and the index that resolves supertypes.
//!
//! The index stands in for the compiler's type resolver: it maps qualified
//! names to declarations, and a supertype name that has no declaration in
//! the index is treated as unresolved.

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

use super::entity::EntityKind;

// ============================================================================
// DECLARATIONS
// ============================================================================

/// A declared class with its immediate supertypes in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDecl {
    /// Dotted qualified name (e.g., "com.app.MainActivity").
    pub qualified_name: Arc<str>,
    /// Immediate supertypes, superclass first, then interfaces.
    pub supertypes: Vec<Arc<str>>,
}

impl TypeDecl {
    pub fn new(qualified_name: impl Into<Arc<str>>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            supertypes: Vec::new(),
        }
    }

    /// Append an immediate supertype.
    pub fn with_supertype(mut self, supertype: impl Into<Arc<str>>) -> Self {
        self.supertypes.push(supertype.into());
        self
    }
}

// ============================================================================
// TYPE INDEX
// ============================================================================

/// Index of declared types, keyed by qualified name.
///
/// Insertion order is preserved so iteration is deterministic.
#[derive(Clone, Debug, Default)]
pub struct TypeIndex {
    types: IndexMap<Arc<str>, TypeDecl>,
}

impl TypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// An index pre-populated with the Android base classes the classifier
    /// recognizes.
    pub fn with_platform_types() -> Self {
        let mut index = Self::new();
        for kind in EntityKind::NAMED {
            index.insert(TypeDecl::new(kind.qualified_name()));
        }
        index
    }

    /// Insert a declaration, returning the one it replaced.
    pub fn insert(&mut self, decl: TypeDecl) -> Option<TypeDecl> {
        self.types.insert(decl.qualified_name.clone(), decl)
    }

    /// Look up a type by qualified name.
    pub fn lookup(&self, qualified_name: &str) -> Option<TargetType<'_>> {
        self.types
            .get(qualified_name)
            .map(|decl| TargetType { index: self, decl })
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.types.contains_key(qualified_name)
    }

    /// All declared types in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = TargetType<'_>> {
        self.types.values().map(|decl| TargetType { index: self, decl })
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<TypeDecl> for TypeIndex {
    fn from_iter<I: IntoIterator<Item = TypeDecl>>(iter: I) -> Self {
        let mut index = Self::new();
        for decl in iter {
            index.insert(decl);
        }
        index
    }
}

// ============================================================================
// TARGET TYPE
// ============================================================================

/// A resolved host type: a declaration viewed through the index it lives in.
#[derive(Clone, Copy)]
pub struct TargetType<'a> {
    index: &'a TypeIndex,
    decl: &'a TypeDecl,
}

impl<'a> TargetType<'a> {
    pub fn qualified_name(&self) -> &'a str {
        &self.decl.qualified_name
    }

    pub fn decl(&self) -> &'a TypeDecl {
        self.decl
    }

    /// Immediate supertypes in declaration order.
    ///
    /// Yields `None` for a supertype the index cannot resolve.
    pub fn supertypes(self) -> impl Iterator<Item = Option<TargetType<'a>>> + 'a {
        let index = self.index;
        self.decl
            .supertypes
            .iter()
            .map(move |name| index.lookup(name))
    }
}

impl fmt::Debug for TargetType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetType")
            .field("qualified_name", &self.decl.qualified_name)
            .field("supertypes", &self.decl.supertypes)
            .finish()
    }
}
