//! # synthetic-base
//!
//! Core library for lowering synthetic Android view accessors: classifying
//! host classes by their supertypes and emitting the JVM instructions that
//! read a view or fragment by resource id.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! codegen   → Entity options, resources, accessor synthesis, instructions
//!   ↓
//! hir       → Host type index, entity kinds, supertype classification
//!   ↓
//! base      → Primitives (JVM names and descriptors, identifiers, constants)
//! ```

// ============================================================================
// MODULES (dependency order: base → hir → codegen)
// ============================================================================

/// Foundation types: JVM names and descriptors, Android constants
pub mod base;

/// High-level IR: host types and entity classification
pub mod hir;

/// Code generation: accessor synthesis and the instruction model
pub mod codegen;

// Re-export the entry points
pub use codegen::{
    AccessorRequest, AccessorSynthesizer, CodegenConfig, CodegenError, EntityOptions,
    InstructionSequence, ResourceDescriptor,
};
pub use hir::{EntityClassifier, EntityKind, TargetType, TypeIndex};
