//! The property-list walk: [`serialize_object`], [`deserialize_object`],
//! [`deserialize_into`], and the per-property [`Report`].

mod de;
mod report;
mod ser;

pub use de::{deserialize_into, deserialize_object};
pub use report::{FieldOutcome, Report};
pub use ser::serialize_object;
