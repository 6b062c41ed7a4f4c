//! Foundation types for the synthetic accessor generator.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`FqName`], [`InternalName`] - Dotted and slash-separated class names
//! - [`JvmType`], [`MethodDescriptor`] - Descriptor building blocks
//! - Identifier validation for resource and package names
//! - Well-known Android class and member names ([`constants`])
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod ident;
mod jvm;

pub use ident::{is_java_identifier, is_package_name};
pub use jvm::{FqName, InternalName, JvmType, MethodDescriptor};
