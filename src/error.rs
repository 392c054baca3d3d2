use alloc::string::String;
use core::{error, fmt};

// -----------------------------------------------------------------------------
// FormatError

/// An error raised by the document format's typed value bridge.
///
/// The engine is generic over the document type, so the underlying format
/// error is carried as its rendered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A value could not be encoded into a document fragment.
    Encode(String),
    /// A document fragment could not be decoded into the requested type.
    Decode(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode(message) => write!(f, "failed to encode value: {message}"),
            Self::Decode(message) => write!(f, "failed to decode fragment: {message}"),
        }
    }
}

impl error::Error for FormatError {}

// -----------------------------------------------------------------------------
// FieldError

/// An error raised while absorbing a single property's document fragment.
///
/// Field errors never escape the deserialize engine: they are collected into
/// the walk's [`Report`](crate::Report) as
/// [`FieldOutcome::Malformed`](crate::FieldOutcome::Malformed) entries, and
/// the affected property keeps its prior value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The fragment did not convert to the field's type.
    Format(FormatError),
    /// A sequence field was fed a fragment that is not an array.
    ExpectedSequence,
    /// A custom-serialized value rejected its text form.
    Custom(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(err) => write!(f, "{err}"),
            Self::ExpectedSequence => write!(f, "expected an array fragment"),
            Self::Custom(message) => write!(f, "custom deserialization failed: {message}"),
        }
    }
}

impl error::Error for FieldError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Format(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FormatError> for FieldError {
    #[inline]
    fn from(value: FormatError) -> Self {
        Self::Format(value)
    }
}

// -----------------------------------------------------------------------------
// UnsetReference

/// Raised when a [`Reference`](crate::Reference) is read before it has been
/// materialized.
///
/// This is a hard error by design: a default-constructed payload can be
/// semantically valid, so "never set" must stay distinguishable from
/// "set to a default".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsetReference;

impl fmt::Display for UnsetReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reference accessed without being set")
    }
}

impl error::Error for UnsetReference {}

// -----------------------------------------------------------------------------
// TreeError

/// An illegal mutation of the element tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The child is already owned by a parent.
    AlreadyOwned,
    /// Attaching the node would make it its own ancestor.
    WouldCycle,
    /// The node is not a child of this parent.
    NotAChild,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyOwned => write!(f, "child is already owned by a parent"),
            Self::WouldCycle => write!(f, "attaching the node would create a cycle"),
            Self::NotAChild => write!(f, "node is not a child of this parent"),
        }
    }
}

impl error::Error for TreeError {}
