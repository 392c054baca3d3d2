use crate::{Field, FieldError, FieldKind, Format, FormatError};

// -----------------------------------------------------------------------------
// Optional

/// A property value that may be absent.
///
/// Unlike `Option`, the inner value is always present in memory; the wrapper
/// tracks an existence flag for serialization. Absent optionals emit nothing,
/// so they round-trip as absent keys; an absorbed fragment sets the flag.
///
/// # Examples
///
/// ```
/// use cx_reflect::Optional;
///
/// let mut opt: Optional<u32> = Optional::default();
/// assert!(!opt.exists());
///
/// opt.set(5);
/// assert!(opt.exists());
/// assert_eq!(*opt.get(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Optional<T> {
    exists: bool,
    value: T,
}

impl<T> Optional<T> {
    /// Wraps `value` as an existing optional.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            exists: true,
            value,
        }
    }

    /// Whether a value has been set.
    #[inline]
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Stores `value` and marks the optional as existing.
    #[inline]
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.exists = true;
    }

    /// Borrows the inner value, regardless of the existence flag.
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Mutably borrows the inner value without touching the existence flag.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Converts into `Option`, honoring the existence flag.
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        self.exists.then_some(&self.value)
    }
}

impl<T: Default> Optional<T> {
    /// Resets the value to its default and clears the existence flag.
    pub fn clear(&mut self) {
        self.value = T::default();
        self.exists = false;
    }
}

impl<T: Default> Default for Optional<T> {
    fn default() -> Self {
        Self {
            exists: false,
            value: T::default(),
        }
    }
}

impl<T> From<T> for Optional<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<M: Field> Field for Optional<M> {
    const KIND: FieldKind = FieldKind::Optional;

    fn emit<F: Format>(&self) -> Result<Option<F>, FormatError> {
        if self.exists { self.value.emit() } else { Ok(None) }
    }

    fn absorb<F: Format>(&mut self, fragment: &F) -> Result<(), FieldError> {
        self.value.absorb(fragment)?;
        self.exists = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::Optional;
    use crate::Field;

    #[test]
    fn absent_emits_nothing() {
        let opt: Optional<u32> = Optional::default();
        assert_eq!(opt.emit::<Value>().unwrap(), None);
    }

    #[test]
    fn existing_emits_the_value() {
        let opt = Optional::new(3_u32);
        assert_eq!(opt.emit::<Value>().unwrap(), Some(json!(3)));
    }

    #[test]
    fn absorb_sets_the_flag() {
        let mut opt: Optional<u32> = Optional::default();
        opt.absorb(&json!(8)).unwrap();
        assert!(opt.exists());
        assert_eq!(*opt.get(), 8);
    }

    #[test]
    fn failed_absorb_leaves_the_flag_clear() {
        let mut opt: Optional<u32> = Optional::default();
        assert!(opt.absorb(&json!("eight")).is_err());
        assert!(!opt.exists());
    }

    #[test]
    fn clear_resets() {
        let mut opt = Optional::new(3_u32);
        opt.clear();
        assert!(!opt.exists());
        assert_eq!(*opt.get(), 0);
    }
}
