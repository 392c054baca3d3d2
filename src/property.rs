use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::{Field, FieldError, Format, FormatError};

// -----------------------------------------------------------------------------
// Reflect

/// A type that declares a property list and can therefore be driven by the
/// generic (de)serialization engine.
///
/// Usually implemented with `#[derive(Reflect)]`, which builds the list from
/// the struct's named fields in declaration order. A manual implementation is
/// equivalent:
///
/// ```
/// use cx_reflect::{Format, Property, PropertyList, Reflect};
///
/// #[derive(Default)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// impl Reflect for Person {
///     fn property_list<F: Format>() -> PropertyList<Self, F> {
///         PropertyList::new([
///             Property::new("name", |p: &Self| &p.name, |p: &mut Self| &mut p.name),
///             Property::new("age", |p: &Self| &p.age, |p: &mut Self| &mut p.age),
///         ])
///     }
/// }
/// ```
pub trait Reflect: Sized + 'static {
    /// The ordered property list defining this type's serializable shape.
    fn property_list<F: Format>() -> PropertyList<Self, F>;
}

// -----------------------------------------------------------------------------
// Property

/// An immutable binding of a document key to one member of `T`.
///
/// The member's type is erased at construction; its [`Field`] implementation
/// (and thus its classification) is baked into the binding.
pub struct Property<T: 'static, F: Format> {
    name: &'static str,
    bind: Box<dyn Bind<T, F>>,
}

impl<T: 'static, F: Format> Property<T, F> {
    /// Creates a property binding `name` to the member reached by the
    /// accessor pair.
    pub fn new<M: Field + 'static>(
        name: &'static str,
        get: fn(&T) -> &M,
        get_mut: fn(&mut T) -> &mut M,
    ) -> Self {
        Self {
            name,
            bind: Box::new(FieldBind { get, get_mut }),
        }
    }
}

impl<T: 'static, F: Format> Property<T, F> {
    /// The document key this property reads and writes.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The classification of the bound member's type.
    #[inline]
    pub fn kind(&self) -> crate::FieldKind {
        self.bind.kind()
    }

    /// Emits the bound member of `object` as a document fragment.
    ///
    /// `Ok(None)` means the property stores nothing (see [`Field::emit`]).
    pub fn emit(&self, object: &T) -> Result<Option<F>, FormatError> {
        self.bind.emit(object)
    }

    /// Rebuilds the bound member of `object` from a document fragment.
    pub fn absorb(&self, object: &mut T, fragment: &F) -> Result<(), FieldError> {
        self.bind.absorb(object, fragment)
    }
}

impl<T: 'static, F: Format> fmt::Debug for Property<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .finish()
    }
}

// Per-member monomorphic accessors, erased so a list can hold mixed member
// types.
trait Bind<T, F: Format> {
    fn kind(&self) -> crate::FieldKind;
    fn emit(&self, object: &T) -> Result<Option<F>, FormatError>;
    fn absorb(&self, object: &mut T, fragment: &F) -> Result<(), FieldError>;
}

struct FieldBind<T, M> {
    get: fn(&T) -> &M,
    get_mut: fn(&mut T) -> &mut M,
}

impl<T, M: Field, F: Format> Bind<T, F> for FieldBind<T, M> {
    #[inline]
    fn kind(&self) -> crate::FieldKind {
        M::KIND
    }

    fn emit(&self, object: &T) -> Result<Option<F>, FormatError> {
        (self.get)(object).emit()
    }

    fn absorb(&self, object: &mut T, fragment: &F) -> Result<(), FieldError> {
        (self.get_mut)(object).absorb(fragment)
    }
}

// -----------------------------------------------------------------------------
// PropertyList

/// The ordered property list one type declares.
///
/// Insertion order is serialization order. Names must be unique within one
/// list: [`PropertyList::new`] panics on a duplicate, and the derive rejects
/// duplicates at compile time.
pub struct PropertyList<T: 'static, F: Format> {
    properties: Vec<Property<T, F>>,
}

impl<T: 'static, F: Format> PropertyList<T, F> {
    /// Builds a list from properties in serialization order.
    ///
    /// # Panics
    ///
    /// Panics if two properties share a name.
    pub fn new<I>(properties: I) -> Self
    where
        I: IntoIterator<Item = Property<T, F>>,
    {
        let properties: Vec<_> = properties.into_iter().collect();
        for (index, property) in properties.iter().enumerate() {
            if properties[..index].iter().any(|p| p.name == property.name) {
                panic!("duplicate property name `{}`", property.name);
            }
        }
        Self { properties }
    }

    /// The number of properties.
    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Iterates the properties in serialization order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Property<T, F>> {
        self.properties.iter()
    }

    /// Returns the property named `name`, if declared.
    pub fn get(&self, name: &str) -> Option<&Property<T, F>> {
        self.properties.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::{Property, PropertyList};
    use crate::FieldKind;

    #[derive(Default)]
    struct Pair {
        left: u32,
        right: u32,
    }

    fn property(name: &'static str) -> Property<Pair, Value> {
        Property::new(name, |p: &Pair| &p.left, |p: &mut Pair| &mut p.left)
    }

    #[test]
    fn order_and_lookup() {
        let list = PropertyList::new([
            Property::new("right", |p: &Pair| &p.right, |p: &mut Pair| &mut p.right),
            property("left"),
        ]);

        // Insertion order, not field declaration order.
        let names: alloc::vec::Vec<_> = list.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["right", "left"]);
        assert_eq!(list.len(), 2);
        assert!(list.get("left").is_some());
        assert!(list.get("middle").is_none());
        assert_eq!(list.get("left").unwrap().kind(), FieldKind::Plain);
    }

    #[test]
    #[should_panic(expected = "duplicate property name `left`")]
    fn duplicate_names_are_rejected() {
        let _ = PropertyList::new([property("left"), property("left")]);
    }
}
