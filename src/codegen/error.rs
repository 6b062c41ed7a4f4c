//! Error types for accessor code generation.

use thiserror::Error;

use super::synthesize::AccessorShape;
use crate::hir::EntityKind;

/// Errors that can occur while generating accessor code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// The entity kind cannot be lowered through the selected accessor shape.
    ///
    /// Callers only synthesize accessors for classified hosts, so this marks a
    /// defect upstream rather than a recoverable condition.
    #[error("Invalid entity kind {kind:?} for {shape} accessor")]
    InvalidEntityKind {
        kind: EntityKind,
        shape: AccessorShape,
    },

    /// A name that must be a JVM identifier is not one.
    #[error("Invalid {kind}: {name:?}")]
    InvalidIdentifier { kind: &'static str, name: String },

    /// Configuration could not be parsed.
    #[cfg(feature = "serde")]
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CodegenError {
    /// Create an invalid entity kind error.
    pub fn invalid_entity_kind(kind: EntityKind, shape: AccessorShape) -> Self {
        Self::InvalidEntityKind { kind, shape }
    }

    /// Create an invalid resource name error.
    pub fn invalid_resource_name(name: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            kind: "resource name",
            name: name.into(),
        }
    }

    /// Create an invalid package name error.
    pub fn invalid_package(name: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            kind: "package name",
            name: name.into(),
        }
    }

    /// Create an invalid method name error.
    pub fn invalid_method_name(name: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            kind: "method name",
            name: name.into(),
        }
    }
}

/// Result type for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;
