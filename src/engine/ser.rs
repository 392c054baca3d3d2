use crate::{Format, FormatError, Reflect};

/// Serializes `value` into a fresh document.
///
/// Walks the property list in declaration order; each property that emits a
/// fragment is stored under its name. Properties with nothing to store
/// (absent optionals, unmaterialized references) are skipped, so they appear
/// as absent keys. The source is read-only and the walk has no other side
/// effects; the only failure source is the format's own value bridge.
///
/// # Examples
///
/// ```
/// use cx_reflect::derive::Reflect;
/// use cx_reflect::serialize_object;
/// use serde_json::{Value, json};
///
/// #[derive(Reflect, Default)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let doc: Value = serialize_object(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(doc, json!({ "x": 1, "y": 2 }));
/// ```
pub fn serialize_object<T: Reflect, F: Format>(value: &T) -> Result<F, FormatError> {
    let mut document = F::object();

    for property in T::property_list::<F>().iter() {
        if let Some(fragment) = property.emit(value)? {
            document.set(property.name(), fragment);
        }
    }

    Ok(document)
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use serde_json::{Value, json};

    use crate::derive::Reflect;
    use crate::{Optional, Reference, serialize_object};

    #[derive(Reflect, Default)]
    struct Inner {
        id: u32,
    }

    #[derive(Reflect, Default)]
    struct Outer {
        label: String,
        inner: Inner,
        items: Vec<Inner>,
        maybe: Optional<u32>,
        linked: Reference<Inner>,
    }

    #[test]
    fn nested_and_skipped_fields() {
        let outer = Outer {
            label: "out".into(),
            inner: Inner { id: 1 },
            items: vec![Inner { id: 2 }, Inner { id: 3 }],
            maybe: Optional::default(),
            linked: Reference::new(),
        };

        let doc: Value = serialize_object(&outer).unwrap();
        assert_eq!(
            doc,
            json!({
                "label": "out",
                "inner": { "id": 1 },
                "items": [{ "id": 2 }, { "id": 3 }],
            })
        );
    }

    #[test]
    fn present_wrappers_are_written() {
        let mut outer = Outer::default();
        outer.maybe.set(9);
        outer.linked.set(Inner { id: 4 });

        let doc: Value = serialize_object(&outer).unwrap();
        assert_eq!(doc["maybe"], json!(9));
        assert_eq!(doc["linked"], json!({ "id": 4 }));
    }
}
