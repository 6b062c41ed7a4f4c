//! Resource descriptors — the view or fragment an accessor reads.

use smol_str::SmolStr;

use super::error::{CodegenError, Result};
use crate::base::constants::{FRAGMENT_FQNAME, SUPPORT_FRAGMENT_FQNAME};
use crate::base::{FqName, JvmType, is_java_identifier, is_package_name};

/// The declared type of a resource property.
///
/// A flexible type has distinct lower and upper bounds (a platform type
/// seen from the source language); only the lower bound matters for
/// deciding the accessor shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclaredType {
    pub upper: FqName,
    pub lower: Option<FqName>,
}

impl DeclaredType {
    /// A non-flexible type.
    pub fn exact(name: impl Into<FqName>) -> Self {
        Self {
            upper: name.into(),
            lower: None,
        }
    }

    pub fn flexible(lower: impl Into<FqName>, upper: impl Into<FqName>) -> Self {
        Self {
            upper: upper.into(),
            lower: Some(lower.into()),
        }
    }

    pub fn lower_if_flexible(&self) -> &FqName {
        self.lower.as_ref().unwrap_or(&self.upper)
    }

    /// Whether the type, after dropping flexibility, is exactly one of the
    /// two fragment classes.
    pub fn is_fragment(&self) -> bool {
        matches!(
            self.lower_if_flexible().as_str(),
            FRAGMENT_FQNAME | SUPPORT_FRAGMENT_FQNAME
        )
    }

    pub fn jvm_type(&self) -> JvmType {
        JvmType::Object(self.upper.to_internal())
    }
}

/// Identifies one resource read by an accessor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceDescriptor {
    name: SmolStr,
    owner_package: Option<String>,
    declared_type: DeclaredType,
    is_flexible_lower_bound_fragment_type: bool,
}

impl ResourceDescriptor {
    /// Create a descriptor; `name` becomes a field name in `R$id`.
    pub fn new(name: impl Into<SmolStr>, declared_type: DeclaredType) -> Result<Self> {
        let name = name.into();
        if !is_java_identifier(&name) {
            return Err(CodegenError::invalid_resource_name(name.as_str()));
        }
        Ok(Self {
            name,
            owner_package: None,
            is_flexible_lower_bound_fragment_type: declared_type.is_fragment(),
            declared_type,
        })
    }

    /// Set the package that owns the resource (e.g., a library module).
    pub fn with_owner_package(mut self, package: impl Into<String>) -> Result<Self> {
        let package = package.into();
        if !is_package_name(&package) {
            return Err(CodegenError::invalid_package(package));
        }
        self.owner_package = Some(package);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner_package(&self) -> Option<&str> {
        self.owner_package.as_deref()
    }

    /// The owning package, or `default` when the resource declares none.
    pub fn package_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.owner_package.as_deref().unwrap_or(default)
    }

    pub fn declared_type(&self) -> &DeclaredType {
        &self.declared_type
    }

    pub fn is_flexible_lower_bound_fragment_type(&self) -> bool {
        self.is_flexible_lower_bound_fragment_type
    }
}
