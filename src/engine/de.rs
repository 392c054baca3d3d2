use crate::engine::{FieldOutcome, Report};
use crate::{Format, Reflect};

/// Deserializes a document onto `target`, mutating it in place.
///
/// The mirror walk of [`serialize_object`](crate::serialize_object), with one
/// extra contract: **every property is handled in complete isolation**. A
/// missing key leaves the property untouched, a key that fails to convert
/// leaves the property at its prior value, and neither aborts the walk.
/// Unknown keys in the document are ignored. The returned [`Report`] records
/// the outcome per property; dropping it keeps the default best-effort
/// posture.
///
/// # Examples
///
/// ```
/// use cx_reflect::derive::Reflect;
/// use cx_reflect::{FieldOutcome, deserialize_into};
/// use serde_json::json;
///
/// #[derive(Reflect, Default)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let mut point = Point { x: 7, y: 7 };
/// let report = deserialize_into(&json!({ "y": 2, "unknown": true }), &mut point);
///
/// assert_eq!((point.x, point.y), (7, 2));
/// assert_eq!(report.outcome_of("x"), Some(&FieldOutcome::Absent));
/// assert_eq!(report.outcome_of("y"), Some(&FieldOutcome::Applied));
/// ```
pub fn deserialize_into<T: Reflect, F: Format>(document: &F, target: &mut T) -> Report {
    let mut report = Report::new();

    for property in T::property_list::<F>().iter() {
        let outcome = match document.get(property.name()) {
            None => FieldOutcome::Absent,
            Some(fragment) => match property.absorb(target, fragment) {
                Ok(()) => FieldOutcome::Applied,
                Err(err) => FieldOutcome::Malformed(err),
            },
        };
        report.push(property.name(), outcome);
    }

    report
}

/// Deserializes a document into a fresh, default-constructed instance.
pub fn deserialize_object<T: Reflect + Default, F: Format>(document: &F) -> (T, Report) {
    let mut value = T::default();
    let report = deserialize_into(document, &mut value);
    (value, report)
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use serde_json::json;

    use crate::derive::Reflect;
    use crate::{
        FieldOutcome, Optional, Reference, deserialize_into, deserialize_object, serialize_object,
    };

    #[derive(Reflect, Default, Debug, PartialEq, Clone)]
    struct Inner {
        id: u32,
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Outer {
        label: String,
        count: u32,
        inner: Inner,
        items: Vec<Inner>,
        maybe: Optional<u32>,
        linked: Reference<Inner>,
    }

    #[test]
    fn plain_round_trip() {
        let source = Outer {
            label: "x".into(),
            count: 3,
            inner: Inner { id: 9 },
            items: vec![Inner { id: 1 }, Inner { id: 2 }, Inner { id: 3 }],
            maybe: Optional::new(5),
            linked: Reference::from(Inner { id: 4 }),
        };

        let doc: serde_json::Value = serialize_object(&source).unwrap();
        let (rebuilt, report) = deserialize_object::<Outer, _>(&doc);

        assert_eq!(rebuilt, source);
        assert!(report.is_clean());
    }

    #[test]
    fn missing_fields_leave_prior_values() {
        let mut target = Outer {
            label: "keep".into(),
            count: 7,
            ..Outer::default()
        };

        let report = deserialize_into(&json!({ "count": 8 }), &mut target);

        assert_eq!(target.label, "keep");
        assert_eq!(target.count, 8);
        assert_eq!(report.outcome_of("label"), Some(&FieldOutcome::Absent));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let (value, report) =
            deserialize_object::<Inner, _>(&json!({ "id": 2, "ghost": [1, 2, 3] }));
        assert_eq!(value, Inner { id: 2 });
        assert!(report.is_clean());
        assert!(report.outcome_of("ghost").is_none());
    }

    #[test]
    fn malformed_fields_do_not_abort_the_walk() {
        let mut target = Outer::default();
        let report = deserialize_into(
            &json!({ "label": 1, "count": 2, "inner": { "id": 3 } }),
            &mut target,
        );

        // `label` failed, everything after it still applied.
        assert_eq!(target.label, "");
        assert_eq!(target.count, 2);
        assert_eq!(target.inner, Inner { id: 3 });

        assert!(!report.is_clean());
        assert!(matches!(
            report.outcome_of("label"),
            Some(&FieldOutcome::Malformed(_))
        ));
        assert_eq!(report.outcome_of("count"), Some(&FieldOutcome::Applied));
        let malformed: Vec<_> = report.malformed().map(|(name, _)| name).collect();
        assert_eq!(malformed, ["label"]);
    }

    #[test]
    fn wrappers_absorb_only_when_present() {
        let (value, _) = deserialize_object::<Outer, _>(&json!({ "count": 1 }));
        assert!(!value.maybe.exists());
        assert!(!value.linked.exists());

        let (value, _) =
            deserialize_object::<Outer, _>(&json!({ "maybe": 6, "linked": { "id": 2 } }));
        assert_eq!(value.maybe.as_option(), Some(&6));
        assert_eq!(value.linked.get().unwrap(), &Inner { id: 2 });
    }

    #[test]
    fn sequence_of_reflectable_round_trip_preserves_order() {
        let doc = json!({ "items": [{ "id": 1 }, { "id": 2 }, { "id": 3 }] });
        let (value, report) = deserialize_object::<Outer, _>(&doc);

        let ids: Vec<u32> = value.items.iter().map(|inner| inner.id).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(report.outcome_of("items"), Some(&FieldOutcome::Applied));
    }

    #[test]
    fn renamed_and_skipped_properties() {
        #[derive(Reflect, Default)]
        struct Marked {
            #[property(rename = "isRoot")]
            is_root: bool,
            #[property(skip)]
            cache: u32,
        }

        let marked = Marked {
            is_root: true,
            cache: 9,
        };
        let doc: serde_json::Value = serialize_object(&marked).unwrap();
        assert_eq!(doc, json!({ "isRoot": true }));

        let (rebuilt, _) = deserialize_object::<Marked, _>(&json!({ "isRoot": true, "cache": 1 }));
        assert!(rebuilt.is_root);
        // Skipped fields keep their default; the document key is an unknown.
        assert_eq!(rebuilt.cache, 0);
    }
}
