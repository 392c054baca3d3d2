use alloc::vec::Vec;

use crate::{Field, FieldError, FieldKind, Format, FormatError};

/// Homogeneous sequences; the element type is classified independently and
/// may itself be a sequence, wrapper, or reflectable type.
impl<M: Field + Default> Field for Vec<M> {
    const KIND: FieldKind = FieldKind::Sequence;

    /// Emits an array with one entry per element, in order. Elements that emit
    /// nothing (absent optionals) are skipped. An empty sequence emits an
    /// explicit empty array, so it round-trips as "clear the destination"
    /// rather than "leave it alone".
    fn emit<F: Format>(&self) -> Result<Option<F>, FormatError> {
        let mut items = F::array();
        for element in self {
            if let Some(fragment) = element.emit()? {
                items.push(fragment);
            }
        }
        Ok(Some(items))
    }

    /// Replaces the destination: elements are rebuilt into a fresh vector
    /// which overwrites `self` only once every element absorbed successfully.
    /// Re-deserializing onto a non-empty destination is therefore idempotent,
    /// and a malformed element leaves the destination untouched.
    fn absorb<F: Format>(&mut self, fragment: &F) -> Result<(), FieldError> {
        let items = fragment.items().ok_or(FieldError::ExpectedSequence)?;

        let mut rebuilt = Vec::with_capacity(items.len());
        for item in items {
            let mut element = M::default();
            element.absorb(item)?;
            rebuilt.push(element);
        }

        *self = rebuilt;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;
    use serde_json::{Value, json};

    use crate::{Field, FieldError, FieldKind, Optional};

    #[test]
    fn classification_nests() {
        assert_eq!(<Vec<u32>>::KIND, FieldKind::Sequence);
        assert_eq!(<Vec<Vec<u32>>>::KIND, FieldKind::Sequence);
        assert_eq!(<Optional<u32>>::KIND, FieldKind::Optional);
    }

    #[test]
    fn replace_policy() {
        let mut target = vec![9_u32, 9, 9];
        target.absorb(&json!([1, 2])).unwrap();
        assert_eq!(target, [1, 2]);

        // Re-absorbing the same fragment does not accumulate.
        target.absorb(&json!([1, 2])).unwrap();
        assert_eq!(target, [1, 2]);
    }

    #[test]
    fn empty_sequence_emits_an_empty_array() {
        let empty: Vec<u32> = Vec::new();
        let fragment: Value = empty.emit().unwrap().unwrap();
        assert_eq!(fragment, json!([]));
    }

    #[test]
    fn malformed_element_is_atomic() {
        let mut target = vec![7_u32];
        let err = target.absorb(&json!([1, "two"])).unwrap_err();
        assert!(matches!(err, FieldError::Format(_)));
        assert_eq!(target, [7]);
    }

    #[test]
    fn non_array_fragment_is_rejected() {
        let mut target: Vec<u32> = Vec::new();
        assert_eq!(
            target.absorb(&json!({"a": 1})).unwrap_err(),
            FieldError::ExpectedSequence
        );
    }
}
