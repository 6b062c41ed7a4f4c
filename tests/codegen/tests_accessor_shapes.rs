//! Instruction sequences for each accessor shape.

use rstest::rstest;
use synthetic::base::{InternalName, JvmType, MethodDescriptor};
use synthetic::codegen::{
    AccessorShape, AccessorSynthesizer, CacheImplementation, CodegenError, EntityOptions,
    FieldRef, Instruction, MethodRef, Receiver, ResourceDescriptor, resource_id_load,
};
use synthetic::hir::EntityKind;

use crate::helpers::fixtures::{config, fragment_resource, request, view_resource};
use crate::helpers::listing::assert_listing;

const MAIN: &str = "com/app/MainActivity";

// ============================================================================
// Resource id
// ============================================================================

#[test]
fn test_resource_id_load_defaults_to_context_package() {
    let toolbar = view_resource("toolbar", "android.widget.Toolbar");
    assert_eq!(
        resource_id_load(&toolbar, "com.app"),
        Instruction::GetStatic(FieldRef {
            owner: InternalName::new("com/app/R$id"),
            name: "toolbar".into(),
            ty: JvmType::Int,
        })
    );
}

// ============================================================================
// Uncached find-view-by-id
// ============================================================================

#[test]
fn test_activity_uncached_exact_sequence() {
    let config = config();
    let synth = AccessorSynthesizer::new(&config);
    let title = view_resource("title", "android.widget.TextView");
    let sequence = synth
        .synthesize(&request(EntityOptions::uncached(EntityKind::Activity), &title, MAIN))
        .unwrap();

    let view = JvmType::object("android.view.View");
    assert_eq!(
        sequence.as_slice(),
        &[
            Instruction::LoadReceiver {
                receiver: Receiver::This,
                ty: JvmType::object("android.app.Activity"),
            },
            Instruction::GetStatic(FieldRef {
                owner: InternalName::new("com/app/R$id"),
                name: "title".into(),
                ty: JvmType::Int,
            }),
            Instruction::InvokeVirtual(MethodRef::new(
                InternalName::new("android/app/Activity"),
                "findViewById",
                MethodDescriptor::by_id(view),
            )),
            Instruction::CheckCast(JvmType::object("android.widget.TextView")),
        ]
    );
}

#[rstest]
#[case(EntityKind::Activity, "android/app/Activity")]
#[case(EntityKind::SupportFragmentActivity, "android/support/v4/app/FragmentActivity")]
#[case(EntityKind::View, "android/view/View")]
#[case(EntityKind::Dialog, "android/app/Dialog")]
fn test_direct_find_view_kinds(#[case] kind: EntityKind, #[case] owner: &str) {
    let config = config();
    let synth = AccessorSynthesizer::new(&config);
    let button = view_resource("ok", "android.widget.Button");
    let sequence = synth
        .synthesize(&request(EntityOptions::uncached(kind), &button, MAIN))
        .unwrap();

    let load = format!("LOAD this : L{owner};");
    let find = format!("INVOKEVIRTUAL {owner}.findViewById (I)Landroid/view/View;");
    assert_listing(
        &sequence,
        &[
            load.as_str(),
            "GETSTATIC com/app/R$id.ok : I",
            find.as_str(),
            "CHECKCAST android/widget/Button",
        ],
    );
}

#[rstest]
#[case(EntityKind::Fragment, "android/app/Fragment", "getView")]
#[case(EntityKind::SupportFragment, "android/support/v4/app/Fragment", "getView")]
#[case(EntityKind::GenericEntity, "kotlinx/android/extensions/AndroidEntity", "getEntityView")]
fn test_container_view_kinds(#[case] kind: EntityKind, #[case] owner: &str, #[case] getter: &str) {
    let config = config();
    let synth = AccessorSynthesizer::new(&config);
    let image = view_resource("avatar", "android.widget.ImageView");
    let sequence = synth
        .synthesize(&request(EntityOptions::uncached(kind), &image, "com/app/Holder"))
        .unwrap();

    let load = format!("LOAD this : L{owner};");
    let get_view = format!("INVOKEVIRTUAL {owner}.{getter} ()Landroid/view/View;");
    assert_listing(
        &sequence,
        &[
            load.as_str(),
            get_view.as_str(),
            "GETSTATIC com/app/R$id.avatar : I",
            "INVOKEVIRTUAL android/view/View.findViewById (I)Landroid/view/View;",
            "CHECKCAST android/widget/ImageView",
        ],
    );
}

#[test]
fn test_dialog_with_explicit_cache_uses_find_view() {
    let config = config();
    let synth = AccessorSynthesizer::new(&config);
    let label = view_resource("label", "android.widget.TextView");
    let options = EntityOptions::new(EntityKind::Dialog, CacheImplementation::HashMap);
    let sequence = synth.synthesize(&request(options, &label, "com/app/Prompt")).unwrap();

    assert_listing(
        &sequence,
        &[
            "LOAD this : Landroid/app/Dialog;",
            "GETSTATIC com/app/R$id.label : I",
            "INVOKEVIRTUAL android/app/Dialog.findViewById (I)Landroid/view/View;",
            "CHECKCAST android/widget/TextView",
        ],
    );
}

#[test]
fn test_dialog_never_caches() {
    let config = config();
    let synth = AccessorSynthesizer::new(&config);
    let options = EntityOptions::resolve(
        EntityKind::Dialog,
        Some(CacheImplementation::HashMap),
        config.global_cache,
    );
    let label = view_resource("label", "android.widget.TextView");
    assert_eq!(synth.select_shape(&options, &label), AccessorShape::FindViewById);
}

// ============================================================================
// Cached fast path
// ============================================================================

#[test]
fn test_cache_overrides_fragment_host_shape() {
    let config = config();
    let synth = AccessorSynthesizer::new(&config);
    let list = view_resource("items", "android.widget.ListView");
    let options = EntityOptions::new(EntityKind::Fragment, CacheImplementation::HashMap);
    let sequence = synth
        .synthesize(&request(options, &list, "com/app/ListFragment"))
        .unwrap();

    assert_listing(
        &sequence,
        &[
            "LOAD this : Lcom/app/ListFragment;",
            "GETSTATIC com/app/R$id.items : I",
            "INVOKEVIRTUAL com/app/ListFragment._$_findCachedViewById (I)Landroid/view/View;",
            "CHECKCAST android/widget/ListView",
        ],
    );
}

#[test]
fn test_cached_uses_configured_method_and_owner_package() {
    let config = config().with_cached_find_view_method("findCached");
    let synth = AccessorSynthesizer::new(&config);
    let chip = view_resource("chip", "android.view.View")
        .with_owner_package("com.lib.widgets")
        .unwrap();
    let options = EntityOptions::new(EntityKind::View, CacheImplementation::SparseArray);
    let sequence = synth.synthesize(&request(options, &chip, "com/app/Badge")).unwrap();

    assert_listing(
        &sequence,
        &[
            "LOAD this : Lcom/app/Badge;",
            "GETSTATIC com/lib/widgets/R$id.chip : I",
            "INVOKEVIRTUAL com/app/Badge.findCached (I)Landroid/view/View;",
            "CHECKCAST android/view/View",
        ],
    );
}

#[test]
fn test_uncacheable_resource_falls_back_to_kind_shape() {
    let config = config();
    let synth = AccessorSynthesizer::new(&config)
        .with_cache_predicate(|r: &ResourceDescriptor| !r.name().starts_with("dynamic"));
    let options = EntityOptions::new(EntityKind::Activity, CacheImplementation::HashMap);
    let dynamic = view_resource("dynamicSlot", "android.widget.FrameLayout");
    let sequence = synth.synthesize(&request(options, &dynamic, MAIN)).unwrap();

    assert_listing(
        &sequence,
        &[
            "LOAD this : Landroid/app/Activity;",
            "GETSTATIC com/app/R$id.dynamicSlot : I",
            "INVOKEVIRTUAL android/app/Activity.findViewById (I)Landroid/view/View;",
            "CHECKCAST android/widget/FrameLayout",
        ],
    );
}

// ============================================================================
// Fragment-manager lookup
// ============================================================================

#[test]
fn test_support_activity_fragment_ignores_cache() {
    let config = config();
    let synth = AccessorSynthesizer::new(&config);
    let details = fragment_resource("details", "android.support.v4.app.Fragment");
    let options =
        EntityOptions::new(EntityKind::SupportFragmentActivity, CacheImplementation::HashMap);
    assert!(options.has_cache());

    let sequence = synth
        .synthesize(&request(options, &details, "com/app/CompatActivity"))
        .unwrap();
    assert_listing(
        &sequence,
        &[
            "LOAD this : Landroid/support/v4/app/FragmentActivity;",
            "INVOKEVIRTUAL android/support/v4/app/FragmentActivity.getSupportFragmentManager ()Landroid/support/v4/app/FragmentManager;",
            "GETSTATIC com/app/R$id.details : I",
            "INVOKEVIRTUAL android/support/v4/app/FragmentManager.findFragmentById (I)Landroid/support/v4/app/Fragment;",
            "CHECKCAST android/support/v4/app/Fragment",
        ],
    );
}

#[rstest]
#[case(EntityKind::Activity, "android/app/Activity")]
#[case(EntityKind::Fragment, "android/app/Fragment")]
fn test_platform_fragment_manager(#[case] kind: EntityKind, #[case] owner: &str) {
    let config = config();
    let synth = AccessorSynthesizer::new(&config);
    let pane = fragment_resource("pane", "android.app.Fragment");
    let sequence = synth
        .synthesize(&request(EntityOptions::uncached(kind), &pane, MAIN))
        .unwrap();

    let load = format!("LOAD this : L{owner};");
    let get_manager =
        format!("INVOKEVIRTUAL {owner}.getFragmentManager ()Landroid/app/FragmentManager;");
    assert_listing(
        &sequence,
        &[
            load.as_str(),
            get_manager.as_str(),
            "GETSTATIC com/app/R$id.pane : I",
            "INVOKEVIRTUAL android/app/FragmentManager.findFragmentById (I)Landroid/app/Fragment;",
            "CHECKCAST android/app/Fragment",
        ],
    );
}

#[test]
fn test_support_fragment_child_lookup() {
    let config = config();
    let synth = AccessorSynthesizer::new(&config);
    let child = fragment_resource("child", "android.support.v4.app.Fragment");
    let options = EntityOptions::uncached(EntityKind::SupportFragment);
    let sequence = synth
        .synthesize(&request(options, &child, "com/app/DetailFragment"))
        .unwrap();

    assert_listing(
        &sequence,
        &[
            "LOAD this : Landroid/support/v4/app/Fragment;",
            "INVOKEVIRTUAL android/support/v4/app/Fragment.getFragmentManager ()Landroid/support/v4/app/FragmentManager;",
            "GETSTATIC com/app/R$id.child : I",
            "INVOKEVIRTUAL android/support/v4/app/FragmentManager.findFragmentById (I)Landroid/support/v4/app/Fragment;",
            "CHECKCAST android/support/v4/app/Fragment",
        ],
    );
}

#[rstest]
#[case(EntityKind::Dialog)]
#[case(EntityKind::View)]
#[case(EntityKind::GenericEntity)]
fn test_fragment_lookup_rejects_kinds_without_manager(#[case] kind: EntityKind) {
    let config = config();
    let synth = AccessorSynthesizer::new(&config);
    let pane = fragment_resource("pane", "android.app.Fragment");
    assert_eq!(
        synth.synthesize(&request(EntityOptions::uncached(kind), &pane, MAIN)),
        Err(CodegenError::InvalidEntityKind {
            kind,
            shape: AccessorShape::FragmentManager,
        })
    );
}

// ============================================================================
// Invariant violations
// ============================================================================

#[rstest]
#[case(CacheImplementation::NoCache)]
#[case(CacheImplementation::HashMap)]
fn test_unknown_kind_fails(#[case] cache: CacheImplementation) {
    let config = config();
    let synth = AccessorSynthesizer::new(&config);
    let title = view_resource("title", "android.widget.TextView");
    let options = EntityOptions::new(EntityKind::Unknown, cache);
    let result = synth.synthesize(&request(options, &title, MAIN));
    assert_eq!(
        result,
        Err(CodegenError::InvalidEntityKind {
            kind: EntityKind::Unknown,
            shape: AccessorShape::FindViewById,
        })
    );
}

#[test]
fn test_error_message() {
    let err = CodegenError::invalid_entity_kind(EntityKind::View, AccessorShape::FragmentManager);
    assert_eq!(err.to_string(), "Invalid entity kind View for fragment-manager accessor");
}

#[test]
fn test_explicit_result_type() {
    let config = config();
    let synth = AccessorSynthesizer::new(&config);
    let flexible = ResourceDescriptor::new(
        "header",
        synthetic::codegen::DeclaredType::flexible("android.view.View", "android.view.View"),
    )
    .unwrap();
    let req = request(EntityOptions::uncached(EntityKind::View), &flexible, "com/app/Badge")
        .with_result_type(JvmType::object("com.app.HeaderView"));
    let sequence = synth.synthesize(&req).unwrap();
    assert_eq!(
        sequence.as_slice().last(),
        Some(&Instruction::CheckCast(JvmType::object("com.app.HeaderView")))
    );
}
