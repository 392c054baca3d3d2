#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Derive-generated code always spells paths as `cx_reflect::...`; this alias
// lets the crate itself (and its doctests) use the macro too.
extern crate self as cx_reflect;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod field;
mod property;

pub mod elements;
pub mod engine;
pub mod format;
pub mod impls;
pub mod wrap;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use cx_reflect_derive as derive;

pub use error::{FieldError, FormatError, TreeError, UnsetReference};
pub use field::{Field, FieldKind};
pub use format::Format;
pub use property::{Property, PropertyList, Reflect};

pub use engine::{FieldOutcome, Report, deserialize_into, deserialize_object, serialize_object};
pub use wrap::{Custom, CustomSerialize, Optional, Reference};
