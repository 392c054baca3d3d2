use alloc::boxed::Box;

use crate::{Field, FieldError, FieldKind, Format, FormatError, UnsetReference};

// -----------------------------------------------------------------------------
// Reference

/// A lazily materialized, heap-allocated property value.
///
/// Distinguishes "never materialized" from "materialized with a value": a
/// default-constructed payload can be semantically valid, so reads before
/// materialization fail with [`UnsetReference`] instead of returning a
/// default. Intended for deep or mutually-referencing payloads that should
/// not inflate the owning struct.
///
/// The wrapper has standard value semantics: cloning deep-copies the
/// materialized payload, moves transfer it, and dropping releases it exactly
/// once.
///
/// Unmaterialized references emit nothing during serialization, exactly like
/// an absent [`Optional`](crate::Optional).
///
/// # Examples
///
/// ```
/// use cx_reflect::Reference;
///
/// let mut reference: Reference<String> = Reference::default();
/// assert!(!reference.exists());
/// assert!(reference.get().is_err());
///
/// reference.set("payload".into());
/// assert_eq!(reference.get().unwrap(), "payload");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference<T> {
    slot: Option<Box<T>>,
}

impl<T> Reference<T> {
    /// Creates an unmaterialized reference.
    #[inline]
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Whether the payload has been materialized.
    #[inline]
    pub fn exists(&self) -> bool {
        self.slot.is_some()
    }

    /// Materializes the payload by storing `value`, replacing any previous
    /// payload.
    #[inline]
    pub fn set(&mut self, value: T) {
        self.slot = Some(Box::new(value));
    }

    /// Borrows the payload.
    pub fn get(&self) -> Result<&T, UnsetReference> {
        self.slot.as_deref().ok_or(UnsetReference)
    }

    /// Mutably borrows the payload.
    pub fn get_mut(&mut self) -> Result<&mut T, UnsetReference> {
        self.slot.as_deref_mut().ok_or(UnsetReference)
    }

    /// Takes the payload out, leaving the reference unmaterialized.
    pub fn take(&mut self) -> Option<T> {
        self.slot.take().map(|boxed| *boxed)
    }
}

impl<T: Default> Reference<T> {
    /// Materializes a default payload.
    pub fn create(&mut self) {
        self.slot = Some(Box::default());
    }
}

impl<T> Default for Reference<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<T> for Reference<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self {
            slot: Some(Box::new(value)),
        }
    }
}

impl<M: Field + Default> Field for Reference<M> {
    const KIND: FieldKind = FieldKind::Reference;

    fn emit<F: Format>(&self) -> Result<Option<F>, FormatError> {
        match &self.slot {
            Some(value) => value.emit(),
            None => Ok(None),
        }
    }

    /// Materializes on demand. When the reference is not yet materialized the
    /// payload is rebuilt aside and only stored on success, so a malformed
    /// fragment leaves the reference unset.
    fn absorb<F: Format>(&mut self, fragment: &F) -> Result<(), FieldError> {
        match &mut self.slot {
            Some(value) => value.absorb(fragment),
            None => {
                let mut value = M::default();
                value.absorb(fragment)?;
                self.set(value);
                Ok(())
            }
        }
    }
}
