//! JVM naming primitives.
//!
//! Source-level names are dotted (`android.view.View`), while the class file
//! format uses internal names (`android/view/View`) and type descriptors
//! (`Landroid/view/View;`). Instructions handed to the emitter carry the
//! class file forms verbatim.

use std::fmt;
use std::sync::Arc;

use super::constants::RESOURCE_ID_CLASS;

// ============================================================================
// NAMES
// ============================================================================

/// A fully-qualified class name in dotted source form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FqName(Arc<str>);

impl FqName {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last dotted segment (`View` for `android.view.View`).
    pub fn short_name(&self) -> &str {
        match self.0.rfind('.') {
            Some(dot) => &self.0[dot + 1..],
            None => &self.0,
        }
    }

    /// Convert to the slash-separated internal form.
    pub fn to_internal(&self) -> InternalName {
        InternalName::from_fq_name(&self.0)
    }
}

impl fmt::Display for FqName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FqName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A class name in internal (slash-separated) form, e.g. `android/app/Activity`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InternalName(Arc<str>);

impl InternalName {
    /// Wrap a name that is already in internal form.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn from_fq_name(fq_name: &str) -> Self {
        Self(Arc::from(fq_name.replace('.', "/")))
    }

    /// The `R$id` holder class of a resource package (`com.app` → `com/app/R$id`).
    pub fn resource_ids(package: &str) -> Self {
        if package.is_empty() {
            return Self(Arc::from(RESOURCE_ID_CLASS));
        }
        Self(Arc::from(format!(
            "{}/{}",
            package.replace('.', "/"),
            RESOURCE_ID_CLASS
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Object type descriptor, `L<name>;`.
    pub fn descriptor(&self) -> String {
        format!("L{};", self.0)
    }
}

impl fmt::Display for InternalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// TYPES
// ============================================================================

/// A JVM field type as it appears in descriptors.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JvmType {
    /// 32-bit integer, `I`.
    Int,
    /// A class or interface type.
    Object(InternalName),
    /// An array of the element type.
    Array(Box<JvmType>),
}

impl JvmType {
    /// Object type for a dotted qualified name.
    pub fn object(fq_name: &str) -> Self {
        JvmType::Object(InternalName::from_fq_name(fq_name))
    }

    pub fn descriptor(&self) -> String {
        match self {
            JvmType::Int => "I".to_string(),
            JvmType::Object(name) => name.descriptor(),
            JvmType::Array(element) => format!("[{}", element.descriptor()),
        }
    }

    /// Operand of a type instruction such as `CHECKCAST`.
    ///
    /// Class types use their internal name, arrays use their descriptor.
    pub fn type_operand(&self) -> String {
        match self {
            JvmType::Object(name) => name.as_str().to_string(),
            other => other.descriptor(),
        }
    }

    pub fn internal_name(&self) -> Option<&InternalName> {
        match self {
            JvmType::Object(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for JvmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.descriptor())
    }
}

/// A method descriptor such as `(I)Landroid/view/View;`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodDescriptor {
    pub params: Vec<JvmType>,
    pub ret: JvmType,
}

impl MethodDescriptor {
    pub fn new(params: Vec<JvmType>, ret: JvmType) -> Self {
        Self { params, ret }
    }

    /// A getter-shaped descriptor, `()<ret>`.
    pub fn getter(ret: JvmType) -> Self {
        Self::new(Vec::new(), ret)
    }

    /// A lookup-by-id descriptor, `(I)<ret>`.
    pub fn by_id(ret: JvmType) -> Self {
        Self::new(vec![JvmType::Int], ret)
    }
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for param in &self.params {
            f.write_str(&param.descriptor())?;
        }
        write!(f, "){}", self.ret.descriptor())
    }
}
