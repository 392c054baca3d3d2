use alloc::string::String;
use core::ops::{Deref, DerefMut};

use crate::{Field, FieldError, FieldKind, Format, FormatError};

// -----------------------------------------------------------------------------
// CustomSerialize

/// A value supplying its own text codec, bypassing structural field-walking.
pub trait CustomSerialize {
    /// Renders the value into its serialized text form.
    fn to_text(&self) -> String;

    /// Rebuilds the value in place from its serialized text form.
    fn from_text(&mut self, raw: &str) -> Result<(), FieldError>;
}

// -----------------------------------------------------------------------------
// Custom

/// Marks a property as custom-serialized.
///
/// The wrapped value's [`CustomSerialize`] codec is invoked instead of the
/// engine's structural walk; the document stores the text form as a plain
/// string field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Custom<T>(pub T);

impl<T> Deref for Custom<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Custom<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> From<T> for Custom<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: CustomSerialize> Field for Custom<T> {
    const KIND: FieldKind = FieldKind::Custom;

    fn emit<F: Format>(&self) -> Result<Option<F>, FormatError> {
        F::encode(&self.0.to_text()).map(Some)
    }

    fn absorb<F: Format>(&mut self, fragment: &F) -> Result<(), FieldError> {
        let raw: String = fragment.decode()?;
        self.0.from_text(&raw)
    }
}
