use core::fmt;

use crate::{FieldError, Format, FormatError};

// -----------------------------------------------------------------------------
// FieldKind

/// The classification of a property's declared type.
///
/// Classification is decided by which [`Field`] implementation a type has, so
/// it is fully resolved at compile time. It is also total: any type either
/// matches one of the wrapper kinds or is a plain value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Serialized by a direct document read/write.
    Plain,
    /// Declares its own property list; serialized by recursive descent.
    Reflectable,
    /// [`Optional`](crate::Optional): a value that may be absent.
    Optional,
    /// [`Reference`](crate::Reference): a lazily materialized heap slot.
    Reference,
    /// [`Custom`](crate::Custom): the value's own codec is invoked.
    Custom,
    /// `Vec<T>`: the element type is classified independently.
    Sequence,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Plain => "plain",
            Self::Reflectable => "reflectable",
            Self::Optional => "optional",
            Self::Reference => "reference",
            Self::Custom => "custom",
            Self::Sequence => "sequence",
        };
        write!(f, "{name}")
    }
}

// -----------------------------------------------------------------------------
// Field

/// A type usable as a property of a reflectable type.
///
/// Implementations exist for the plain value set (primitives and `String`),
/// for `Vec<T: Field>`, for the wrapper types in [`wrap`](crate::wrap), and,
/// via `#[derive(Reflect)]`, for every reflectable type.
pub trait Field {
    /// This type's classification.
    const KIND: FieldKind;

    /// Emits the value as a document fragment.
    ///
    /// `Ok(None)` means there is nothing to store: an absent
    /// [`Optional`](crate::Optional) or an unmaterialized
    /// [`Reference`](crate::Reference). The engine skips such properties
    /// entirely, so they round-trip as absent keys.
    fn emit<F: Format>(&self) -> Result<Option<F>, FormatError>;

    /// Rebuilds the value in place from a document fragment.
    ///
    /// On error the value must be left either untouched or in a state the
    /// caller handed in; sequence and wrapper implementations are atomic in
    /// this sense.
    fn absorb<F: Format>(&mut self, fragment: &F) -> Result<(), FieldError>;
}
