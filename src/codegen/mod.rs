//! Accessor code generation.
//!
//! Turns a classified host ([`EntityOptions`]) and a resource
//! ([`ResourceDescriptor`]) into the [`InstructionSequence`] that reads it.
//!
//! ## Key Types
//!
//! - [`CodegenConfig`] — Module package, cache defaults, cached-lookup method name
//! - [`EntityOptions`] — Entity kind plus the effective [`CacheImplementation`]
//! - [`ResourceDescriptor`] — The view or fragment being read
//! - [`AccessorSynthesizer`] — Selects an [`AccessorShape`] and emits instructions
//! - [`Instruction`] — Fully specified operations for the bytecode emitter

mod config;
mod error;
mod insn;
mod options;
mod resource;
mod synthesize;

pub use config::CodegenConfig;
pub use error::{CodegenError, Result};
pub use insn::{FieldRef, Instruction, InstructionSequence, MethodRef, Receiver};
pub use options::{CacheImplementation, EntityOptions};
pub use resource::{DeclaredType, ResourceDescriptor};
pub use synthesize::{
    AccessorRequest, AccessorShape, AccessorSynthesizer, CacheAll, CachePredicate,
    resource_id_load,
};
