//! The element tree: a polymorphic parent/child hierarchy of typed nodes
//! built on the reflection engine.
//!
//! Every [`Element`] has a name, a concrete [`ElementKind`] identified by a
//! type tag, an ordered collection of exclusively-owned children, and a
//! non-owning parent back-reference. Nodes serialize themselves plus their
//! children recursively, and [`Element::deserialize`] reconstructs the
//! correct concrete kind by dispatching on the serialized tag.

mod element;
mod kind;

pub use element::{Element, ROOT_NAME, WeakElement};
pub use kind::{ElementKind, FunctionData, NamespaceData, RootData, TypeData};
