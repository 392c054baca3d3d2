//! The document format contract the engine is generic over.

use serde_core::Serialize;
use serde_core::de::DeserializeOwned;

use crate::FormatError;

#[cfg(feature = "json")]
mod json;

// -----------------------------------------------------------------------------
// Format

/// A dynamically-typed, JSON-like tree document.
///
/// Any value type offering this minimal surface is substitutable: keyed reads
/// and writes, array append, existence checks, and a typed value bridge.
/// The crate ships an implementation for `serde_json::Value` behind the
/// `json` feature.
///
/// # Auto-Vivification
///
/// [`set`](Format::set) and [`push`](Format::push) follow the convention of
/// JSON document libraries: writing a key into a non-keyed document first
/// resets it to an empty object, and appending to a non-array document first
/// resets it to an empty array.
pub trait Format: Sized + 'static {
    /// Creates an empty keyed document.
    fn object() -> Self;

    /// Creates an empty array document.
    fn array() -> Self;

    /// Whether a field named `key` exists.
    fn contains(&self, key: &str) -> bool;

    /// Borrows the field named `key`, if present.
    fn get(&self, key: &str) -> Option<&Self>;

    /// Inserts `value` under `key`, replacing an existing field.
    fn set(&mut self, key: &str, value: Self);

    /// Appends `value` to the array.
    fn push(&mut self, value: Self);

    /// Borrows the items when this document is an array.
    fn items(&self) -> Option<&[Self]>;

    /// Encodes a plain value into a document fragment.
    fn encode<T: Serialize>(value: &T) -> Result<Self, FormatError>;

    /// Decodes this fragment into a plain value.
    fn decode<T: DeserializeOwned>(&self) -> Result<T, FormatError>;
}
