//! Entity kinds — the closed set of Android container categories.

use crate::base::constants::{
    ACTIVITY_FQNAME, DIALOG_FQNAME, ENTITY_FQNAME, FRAGMENT_FQNAME,
    SUPPORT_FRAGMENT_ACTIVITY_FQNAME, SUPPORT_FRAGMENT_FQNAME, VIEW_FQNAME,
};
use crate::base::{InternalName, JvmType};

/// The container category of a host class.
///
/// Each variant carries fixed facts about how accessors inside such a class
/// may be compiled. [`EntityKind::Unknown`] is the "no match" result of
/// classification, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    Activity,
    Fragment,
    Dialog,
    SupportFragmentActivity,
    SupportFragment,
    View,
    GenericEntity,
    Unknown,
}

impl EntityKind {
    /// Every kind with a qualified name, in lookup-table order.
    pub const NAMED: [EntityKind; 7] = [
        EntityKind::Activity,
        EntityKind::Fragment,
        EntityKind::Dialog,
        EntityKind::SupportFragmentActivity,
        EntityKind::SupportFragment,
        EntityKind::View,
        EntityKind::GenericEntity,
    ];

    /// Dotted qualified name of the base class; empty for `Unknown`.
    pub fn qualified_name(self) -> &'static str {
        match self {
            EntityKind::Activity => ACTIVITY_FQNAME,
            EntityKind::Fragment => FRAGMENT_FQNAME,
            EntityKind::Dialog => DIALOG_FQNAME,
            EntityKind::SupportFragmentActivity => SUPPORT_FRAGMENT_ACTIVITY_FQNAME,
            EntityKind::SupportFragment => SUPPORT_FRAGMENT_FQNAME,
            EntityKind::View => VIEW_FQNAME,
            EntityKind::GenericEntity => ENTITY_FQNAME,
            EntityKind::Unknown => "",
        }
    }

    /// Whether accessors in this kind of class may use the view cache at all.
    pub fn supports_cache(self) -> bool {
        !matches!(self, EntityKind::Dialog | EntityKind::Unknown)
    }

    /// Whether the cache is on unless a declaration opts out.
    pub fn cache_enabled_by_default(self) -> bool {
        !matches!(self, EntityKind::View)
    }

    pub fn is_fragment(self) -> bool {
        matches!(self, EntityKind::Fragment | EntityKind::SupportFragment)
    }

    pub fn is_unknown(self) -> bool {
        self == EntityKind::Unknown
    }

    /// Exact lookup of a qualified name in the named-kind table.
    pub fn from_qualified_name(name: &str) -> Option<Self> {
        match name {
            ACTIVITY_FQNAME => Some(EntityKind::Activity),
            FRAGMENT_FQNAME => Some(EntityKind::Fragment),
            DIALOG_FQNAME => Some(EntityKind::Dialog),
            SUPPORT_FRAGMENT_ACTIVITY_FQNAME => Some(EntityKind::SupportFragmentActivity),
            SUPPORT_FRAGMENT_FQNAME => Some(EntityKind::SupportFragment),
            VIEW_FQNAME => Some(EntityKind::View),
            ENTITY_FQNAME => Some(EntityKind::GenericEntity),
            _ => None,
        }
    }

    /// Internal (slash-separated) name of the base class.
    pub fn internal_name(self) -> InternalName {
        InternalName::from_fq_name(self.qualified_name())
    }

    /// Object type of the base class, used when loading a receiver as this kind.
    pub fn jvm_type(self) -> JvmType {
        JvmType::Object(self.internal_name())
    }
}
