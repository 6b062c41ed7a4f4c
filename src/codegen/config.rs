//! Code generation configuration.
//!
//! Carries the contextual defaults the synthesizer consumes: the module's
//! own Android package (used for `R$id` when a resource names none), the
//! name of the generated cached-lookup method, the module-wide default cache,
//! and the classifier's supertype depth cap.

use smol_str::SmolStr;

use super::error::{CodegenError, Result};
use super::options::CacheImplementation;
use crate::base::constants::CACHED_FIND_VIEW_BY_ID_METHOD_NAME;
use crate::base::{is_java_identifier, is_package_name};
use crate::hir::EntityClassifier;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodegenConfig {
    /// Dotted package of the module being compiled (e.g., "com.example.app").
    pub android_package: String,
    #[cfg_attr(feature = "serde", serde(default = "default_cached_find_view_method"))]
    pub cached_find_view_method: SmolStr,
    #[cfg_attr(feature = "serde", serde(default))]
    pub global_cache: CacheImplementation,
    #[cfg_attr(feature = "serde", serde(default = "default_max_supertype_depth"))]
    pub max_supertype_depth: usize,
}

fn default_cached_find_view_method() -> SmolStr {
    SmolStr::new_static(CACHED_FIND_VIEW_BY_ID_METHOD_NAME)
}

fn default_max_supertype_depth() -> usize {
    EntityClassifier::DEFAULT_MAX_DEPTH
}

impl CodegenConfig {
    /// Create a configuration for the given module package.
    pub fn new(android_package: impl Into<String>) -> Result<Self> {
        let config = Self {
            android_package: android_package.into(),
            cached_find_view_method: default_cached_find_view_method(),
            global_cache: CacheImplementation::default(),
            max_supertype_depth: default_max_supertype_depth(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_cached_find_view_method(mut self, name: impl Into<SmolStr>) -> Self {
        self.cached_find_view_method = name.into();
        self
    }

    pub fn with_global_cache(mut self, cache: CacheImplementation) -> Self {
        self.global_cache = cache;
        self
    }

    pub fn with_max_supertype_depth(mut self, depth: usize) -> Self {
        self.max_supertype_depth = depth;
        self
    }

    /// Check that every name here can appear in a class file.
    pub fn validate(&self) -> Result<()> {
        if !is_package_name(&self.android_package) {
            return Err(CodegenError::invalid_package(self.android_package.as_str()));
        }
        if !is_java_identifier(&self.cached_find_view_method) {
            return Err(CodegenError::invalid_method_name(
                self.cached_find_view_method.as_str(),
            ));
        }
        Ok(())
    }

    /// A classifier honoring this configuration's depth cap.
    pub fn classifier(&self) -> EntityClassifier {
        EntityClassifier::new().with_max_depth(self.max_supertype_depth)
    }

    /// Parse and validate a JSON configuration.
    ///
    /// Only `android_package` is required.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CodegenError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
