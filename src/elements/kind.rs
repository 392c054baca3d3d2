use crate::derive::Reflect;
use crate::engine::{Report, deserialize_into, serialize_object};
use crate::{Format, FormatError};

// -----------------------------------------------------------------------------
// Kind payloads

/// Kind-specific fields of a [`Root`](ElementKind::Root) element.
///
/// The marker exists purely for round-trip fidelity of the serialized form;
/// it carries no other semantics. The same holds for the other payloads.
#[derive(Reflect, Debug, Clone, PartialEq, Eq)]
pub struct RootData {
    #[property(rename = "isRoot")]
    pub is_root: bool,
}

impl Default for RootData {
    fn default() -> Self {
        Self { is_root: true }
    }
}

/// Kind-specific fields of a [`Namespace`](ElementKind::Namespace) element.
#[derive(Reflect, Debug, Clone, PartialEq, Eq)]
pub struct NamespaceData {
    #[property(rename = "isNamespace")]
    pub is_namespace: bool,
}

impl Default for NamespaceData {
    fn default() -> Self {
        Self { is_namespace: true }
    }
}

/// Kind-specific fields of a [`Function`](ElementKind::Function) element.
#[derive(Reflect, Debug, Clone, PartialEq, Eq)]
pub struct FunctionData {
    #[property(rename = "isFunction")]
    pub is_function: bool,
}

impl Default for FunctionData {
    fn default() -> Self {
        Self { is_function: true }
    }
}

/// Kind-specific fields of a [`Type`](ElementKind::Type) element.
#[derive(Reflect, Debug, Clone, PartialEq, Eq)]
pub struct TypeData {
    #[property(rename = "isType")]
    pub is_type: bool,
}

impl Default for TypeData {
    fn default() -> Self {
        Self { is_type: true }
    }
}

// -----------------------------------------------------------------------------
// ElementKind

/// The closed set of concrete element kinds.
///
/// Each variant carries its reflectable payload, serialized through the
/// generic engine as the element's `specific` sub-document. The variant
/// doubles as the reconstruction dispatch table: [`ElementKind::from_tag`]
/// maps a serialized type tag back to a default-constructed kind, and an
/// unknown tag is a named `None` outcome rather than an implicit fallthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    Root(RootData),
    Namespace(NamespaceData),
    Function(FunctionData),
    Type(TypeData),
}

impl ElementKind {
    /// The type tag embedded in this kind's serialized form.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Root(_) => "Root",
            Self::Namespace(_) => "Namespace",
            Self::Function(_) => "Function",
            Self::Type(_) => "Type",
        }
    }

    /// Constructs the default kind for a serialized type tag.
    ///
    /// Returns `None` for unknown tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Root" => Some(Self::Root(RootData::default())),
            "Namespace" => Some(Self::Namespace(NamespaceData::default())),
            "Function" => Some(Self::Function(FunctionData::default())),
            "Type" => Some(Self::Type(TypeData::default())),
            _ => None,
        }
    }

    pub(crate) fn serialize_specific<F: Format>(&self) -> Result<F, FormatError> {
        match self {
            Self::Root(data) => serialize_object(data),
            Self::Namespace(data) => serialize_object(data),
            Self::Function(data) => serialize_object(data),
            Self::Type(data) => serialize_object(data),
        }
    }

    pub(crate) fn deserialize_specific<F: Format>(&mut self, fragment: &F) -> Report {
        match self {
            Self::Root(data) => deserialize_into(fragment, data),
            Self::Namespace(data) => deserialize_into(fragment, data),
            Self::Function(data) => deserialize_into(fragment, data),
            Self::Type(data) => deserialize_into(fragment, data),
        }
    }
}
