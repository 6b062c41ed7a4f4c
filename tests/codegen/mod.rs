//! Codegen layer tests
//!
//! Tests for accessor synthesis:
//! - Uncached find-view-by-id shapes per entity kind
//! - Cached fast path and its precedence
//! - Fragment-manager lookups and their precedence over the cache
//! - Invariant violations for unclassified hosts

pub mod tests_accessor_shapes;
