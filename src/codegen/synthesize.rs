//! Accessor synthesis — lowering a resource accessor to instructions.
//!
//! # Shape selection
//!
//! The accessor shape is chosen in a fixed order:
//!
//! 1. **Fragment manager** — the resource's declared type is a fragment
//!    class. This wins over the cache.
//! 2. **Cached** — the host has a cache and the resource is cacheable. The
//!    generated per-class lookup method on the declaring class is called.
//! 3. **Find view by id** — everything else, lowered per entity kind.
//!
//! Every shape ends with a `CHECKCAST` to the requested result type.
//! On error nothing is emitted.

use rayon::prelude::*;
use smol_str::SmolStr;
use std::fmt;

use super::config::CodegenConfig;
use super::error::{CodegenError, Result};
use super::insn::{FieldRef, Instruction, InstructionSequence, MethodRef, Receiver};
use super::options::EntityOptions;
use super::resource::ResourceDescriptor;
use crate::base::constants::{
    FIND_FRAGMENT_BY_ID, FIND_VIEW_BY_ID, FRAGMENT_FQNAME, FRAGMENT_MANAGER_FQNAME,
    GET_ENTITY_VIEW, GET_FRAGMENT_MANAGER, GET_SUPPORT_FRAGMENT_MANAGER, GET_VIEW,
    SUPPORT_FRAGMENT_FQNAME, SUPPORT_FRAGMENT_MANAGER_FQNAME, VIEW_FQNAME,
};
use crate::base::{InternalName, JvmType, MethodDescriptor};
use crate::hir::EntityKind;

// ============================================================================
// CACHE ELIGIBILITY
// ============================================================================

/// Decides whether a resource may go through the view cache.
pub trait CachePredicate {
    fn should_cache(&self, resource: &ResourceDescriptor) -> bool;
}

impl<F> CachePredicate for F
where
    F: Fn(&ResourceDescriptor) -> bool,
{
    fn should_cache(&self, resource: &ResourceDescriptor) -> bool {
        self(resource)
    }
}

/// Every resource is cacheable.
#[derive(Clone, Copy, Debug, Default)]
pub struct CacheAll;

impl CachePredicate for CacheAll {
    fn should_cache(&self, _resource: &ResourceDescriptor) -> bool {
        true
    }
}

// ============================================================================
// REQUESTS
// ============================================================================

/// The accessor shapes the synthesizer can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessorShape {
    FragmentManager,
    Cached,
    FindViewById,
}

impl fmt::Display for AccessorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AccessorShape::FragmentManager => "fragment-manager",
            AccessorShape::Cached => "cached",
            AccessorShape::FindViewById => "find-view-by-id",
        })
    }
}

/// One resource accessor to lower.
#[derive(Clone, Debug)]
pub struct AccessorRequest<'a> {
    pub receiver: Receiver,
    pub options: EntityOptions,
    pub resource: &'a ResourceDescriptor,
    /// The class whose generated cache method the cached shape calls.
    pub declaring_class: InternalName,
    /// Type the final `CHECKCAST` narrows to.
    pub result_type: JvmType,
}

impl<'a> AccessorRequest<'a> {
    /// A request narrowing to the resource's declared type.
    pub fn new(
        receiver: Receiver,
        options: EntityOptions,
        resource: &'a ResourceDescriptor,
        declaring_class: InternalName,
    ) -> Self {
        Self {
            receiver,
            options,
            result_type: resource.declared_type().jvm_type(),
            resource,
            declaring_class,
        }
    }

    pub fn with_result_type(mut self, result_type: JvmType) -> Self {
        self.result_type = result_type;
        self
    }
}

// ============================================================================
// SYNTHESIZER
// ============================================================================

/// Lowers resource accessors to [`InstructionSequence`]s.
///
/// Stateless apart from its configuration, so one synthesizer can serve any
/// number of declarations, including from several threads.
#[derive(Clone, Debug)]
pub struct AccessorSynthesizer<'c, P = CacheAll> {
    config: &'c CodegenConfig,
    cache_predicate: P,
}

impl<'c> AccessorSynthesizer<'c> {
    pub fn new(config: &'c CodegenConfig) -> Self {
        Self {
            config,
            cache_predicate: CacheAll,
        }
    }
}

impl<'c, P: CachePredicate> AccessorSynthesizer<'c, P> {
    /// Replace the cache eligibility predicate.
    pub fn with_cache_predicate<Q: CachePredicate>(
        self,
        predicate: Q,
    ) -> AccessorSynthesizer<'c, Q> {
        AccessorSynthesizer {
            config: self.config,
            cache_predicate: predicate,
        }
    }

    pub fn config(&self) -> &CodegenConfig {
        self.config
    }

    /// Pick the accessor shape for a resource.
    pub fn select_shape(
        &self,
        options: &EntityOptions,
        resource: &ResourceDescriptor,
    ) -> AccessorShape {
        if resource.is_flexible_lower_bound_fragment_type() {
            AccessorShape::FragmentManager
        } else if options.has_cache() && self.cache_predicate.should_cache(resource) {
            AccessorShape::Cached
        } else {
            AccessorShape::FindViewById
        }
    }

    /// Lower one accessor.
    ///
    /// Fails with [`CodegenError::InvalidEntityKind`] if the host is
    /// unclassified, or if a fragment is requested from a kind that has no
    /// fragment manager.
    pub fn synthesize(&self, request: &AccessorRequest<'_>) -> Result<InstructionSequence> {
        let kind = request.options.entity_kind;
        let shape = self.select_shape(&request.options, request.resource);
        if kind.is_unknown() {
            return Err(CodegenError::invalid_entity_kind(kind, shape));
        }

        let mut out = Vec::with_capacity(5);
        match shape {
            AccessorShape::FragmentManager => self.emit_fragment_lookup(request, &mut out)?,
            AccessorShape::Cached => self.emit_cached(request, &mut out),
            AccessorShape::FindViewById => self.emit_find_view(request, &mut out)?,
        }
        out.push(Instruction::CheckCast(request.result_type.clone()));

        tracing::trace!(
            "[SYNTH] {}.{} as {:?} via {} ({} instructions)",
            request.declaring_class,
            request.resource.name(),
            kind,
            shape,
            out.len()
        );
        Ok(InstructionSequence::from(out))
    }

    /// Lower many accessors in parallel. Output order matches input order.
    pub fn synthesize_all(
        &self,
        requests: &[AccessorRequest<'_>],
    ) -> Vec<Result<InstructionSequence>>
    where
        P: Sync,
    {
        let results: Vec<_> = requests.par_iter().map(|r| self.synthesize(r)).collect();
        tracing::debug!(
            "Synthesized {} accessors, {} failed",
            results.len(),
            results.iter().filter(|r| r.is_err()).count()
        );
        results
    }

    fn emit_cached(&self, request: &AccessorRequest<'_>, out: &mut Vec<Instruction>) {
        let owner = request.declaring_class.clone();
        out.push(Instruction::LoadReceiver {
            receiver: request.receiver.clone(),
            ty: JvmType::Object(owner.clone()),
        });
        out.push(self.resource_id(request.resource));
        out.push(invoke(
            owner,
            self.config.cached_find_view_method.clone(),
            MethodDescriptor::by_id(view_type()),
        ));
    }

    fn emit_find_view(
        &self,
        request: &AccessorRequest<'_>,
        out: &mut Vec<Instruction>,
    ) -> Result<()> {
        let kind = request.options.entity_kind;
        let view_getter = match kind {
            EntityKind::Activity
            | EntityKind::SupportFragmentActivity
            | EntityKind::View
            | EntityKind::Dialog => None,
            EntityKind::Fragment | EntityKind::SupportFragment => Some(GET_VIEW),
            EntityKind::GenericEntity => Some(GET_ENTITY_VIEW),
            EntityKind::Unknown => {
                return Err(CodegenError::invalid_entity_kind(kind, AccessorShape::FindViewById));
            }
        };

        let entity = kind.internal_name();
        out.push(load_as_entity(request, kind));
        match view_getter {
            None => {
                out.push(self.resource_id(request.resource));
                out.push(invoke(entity, FIND_VIEW_BY_ID, MethodDescriptor::by_id(view_type())));
            }
            Some(getter) => {
                out.push(invoke(entity, getter, MethodDescriptor::getter(view_type())));
                out.push(self.resource_id(request.resource));
                out.push(invoke(
                    InternalName::from_fq_name(VIEW_FQNAME),
                    FIND_VIEW_BY_ID,
                    MethodDescriptor::by_id(view_type()),
                ));
            }
        }
        Ok(())
    }

    fn emit_fragment_lookup(
        &self,
        request: &AccessorRequest<'_>,
        out: &mut Vec<Instruction>,
    ) -> Result<()> {
        let kind = request.options.entity_kind;
        let (getter, manager, fragment) = match kind {
            EntityKind::Activity | EntityKind::Fragment => {
                (GET_FRAGMENT_MANAGER, FRAGMENT_MANAGER_FQNAME, FRAGMENT_FQNAME)
            }
            EntityKind::SupportFragment => (
                GET_FRAGMENT_MANAGER,
                SUPPORT_FRAGMENT_MANAGER_FQNAME,
                SUPPORT_FRAGMENT_FQNAME,
            ),
            EntityKind::SupportFragmentActivity => (
                GET_SUPPORT_FRAGMENT_MANAGER,
                SUPPORT_FRAGMENT_MANAGER_FQNAME,
                SUPPORT_FRAGMENT_FQNAME,
            ),
            EntityKind::Dialog
            | EntityKind::View
            | EntityKind::GenericEntity
            | EntityKind::Unknown => {
                return Err(CodegenError::invalid_entity_kind(kind, AccessorShape::FragmentManager));
            }
        };

        let manager = InternalName::from_fq_name(manager);
        out.push(load_as_entity(request, kind));
        out.push(invoke(
            kind.internal_name(),
            getter,
            MethodDescriptor::getter(JvmType::Object(manager.clone())),
        ));
        out.push(self.resource_id(request.resource));
        out.push(invoke(
            manager,
            FIND_FRAGMENT_BY_ID,
            MethodDescriptor::by_id(JvmType::object(fragment)),
        ));
        Ok(())
    }

    fn resource_id(&self, resource: &ResourceDescriptor) -> Instruction {
        resource_id_load(resource, &self.config.android_package)
    }
}

/// `GETSTATIC <package>/R$id.<name> : I`, with the package falling back to
/// `context_package` when the resource declares none.
pub fn resource_id_load(resource: &ResourceDescriptor, context_package: &str) -> Instruction {
    Instruction::GetStatic(FieldRef {
        owner: InternalName::resource_ids(resource.package_or(context_package)),
        name: SmolStr::new(resource.name()),
        ty: JvmType::Int,
    })
}

fn load_as_entity(request: &AccessorRequest<'_>, kind: EntityKind) -> Instruction {
    Instruction::LoadReceiver {
        receiver: request.receiver.clone(),
        ty: kind.jvm_type(),
    }
}

fn invoke(
    owner: InternalName,
    name: impl Into<SmolStr>,
    descriptor: MethodDescriptor,
) -> Instruction {
    Instruction::InvokeVirtual(MethodRef::new(owner, name, descriptor))
}

fn view_type() -> JvmType {
    JvmType::object(VIEW_FQNAME)
}
