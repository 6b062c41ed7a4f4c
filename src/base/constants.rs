//! Well-known Android class names and member names.
//!
//! Qualified names are in dotted source form; the codegen layer converts
//! them to internal (slash-separated) names when it builds instructions.

// ============================================================================
// HOST CLASSES
// ============================================================================

pub const ACTIVITY_FQNAME: &str = "android.app.Activity";
pub const FRAGMENT_FQNAME: &str = "android.app.Fragment";
pub const DIALOG_FQNAME: &str = "android.app.Dialog";
pub const SUPPORT_FRAGMENT_ACTIVITY_FQNAME: &str = "android.support.v4.app.FragmentActivity";
pub const SUPPORT_FRAGMENT_FQNAME: &str = "android.support.v4.app.Fragment";
pub const VIEW_FQNAME: &str = "android.view.View";
pub const ENTITY_FQNAME: &str = "kotlinx.android.extensions.AndroidEntity";

// ============================================================================
// COLLABORATOR CLASSES
// ============================================================================

pub const FRAGMENT_MANAGER_FQNAME: &str = "android.app.FragmentManager";
pub const SUPPORT_FRAGMENT_MANAGER_FQNAME: &str = "android.support.v4.app.FragmentManager";

/// Simple name of the generated resource-id holder nested in `R`.
pub const RESOURCE_ID_CLASS: &str = "R$id";

// ============================================================================
// MEMBERS
// ============================================================================

pub const FIND_VIEW_BY_ID: &str = "findViewById";
pub const GET_VIEW: &str = "getView";
pub const GET_ENTITY_VIEW: &str = "getEntityView";
pub const GET_FRAGMENT_MANAGER: &str = "getFragmentManager";
pub const GET_SUPPORT_FRAGMENT_MANAGER: &str = "getSupportFragmentManager";
pub const FIND_FRAGMENT_BY_ID: &str = "findFragmentById";

/// Default name of the per-class cached lookup method generated alongside
/// host classes that use the view cache.
pub const CACHED_FIND_VIEW_BY_ID_METHOD_NAME: &str = "_$_findCachedViewById";
