use alloc::string::String;

use crate::{Field, FieldError, FieldKind, Format, FormatError};

macro_rules! impl_plain_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Field for $ty {
                const KIND: FieldKind = FieldKind::Plain;

                fn emit<F: Format>(&self) -> Result<Option<F>, FormatError> {
                    F::encode(self).map(Some)
                }

                fn absorb<F: Format>(&mut self, fragment: &F) -> Result<(), FieldError> {
                    *self = fragment.decode()?;
                    Ok(())
                }
            }
        )*
    };
}

impl_plain_field! {
    bool, char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    String,
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::{Field, FieldKind};

    #[test]
    fn classification() {
        assert_eq!(u32::KIND, FieldKind::Plain);
        assert_eq!(alloc::string::String::KIND, FieldKind::Plain);
    }

    #[test]
    fn plain_round_trip() {
        let value = 42_u32;
        let fragment: Value = value.emit().unwrap().unwrap();
        assert_eq!(fragment, json!(42));

        let mut target = 0_u32;
        target.absorb(&fragment).unwrap();
        assert_eq!(target, 42);
    }

    #[test]
    fn mismatch_leaves_the_value_untouched() {
        let mut target = 7_u32;
        assert!(target.absorb(&json!("seven")).is_err());
        assert_eq!(target, 7);
    }
}
