//! High-level IR (HIR) — host types and their classification.
//!
//! ## Key Types
//!
//! - [`TypeIndex`] — Declared host types keyed by qualified name; resolves supertypes
//! - [`TargetType`] — A resolved host type viewed through its index
//! - [`EntityKind`] — The closed set of Android container categories
//! - [`EntityClassifier`] — Walks supertypes to find a type's [`EntityKind`]
//!
//! ```text
//! TypeIndex::lookup(name)      ← resolved host type
//!     │
//!     ▼
//! EntityClassifier::classify   ← first named ancestor in declaration order
//!     │
//!     ▼
//! EntityKind                   ← consumed by codegen
//! ```

mod classify;
mod entity;
mod types;

pub use classify::EntityClassifier;
pub use entity::EntityKind;
pub use types::{TargetType, TypeDecl, TypeIndex};
