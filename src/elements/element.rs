use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::elements::ElementKind;
use crate::{Format, FormatError, TreeError};

/// The conventional name of a [`Root`](ElementKind::Root) element.
pub const ROOT_NAME: &str = "_ROOT";

#[derive(Debug)]
struct Node {
    name: String,
    kind: ElementKind,
    // Observational only: never used to extend a lifetime.
    parent: Weak<RefCell<Node>>,
    children: Vec<Element>,
}

// -----------------------------------------------------------------------------
// Element

/// A handle to one node of the element tree.
///
/// Cloning the handle does not clone the node; both handles refer to the same
/// node (compare with [`is_same`](Element::is_same)).
///
/// # Ownership
///
/// Each node exclusively owns its children: [`add_child`](Element::add_child)
/// transfers ownership into the parent, and dropping the last handle to a
/// detached node drops its entire subtree. The parent back-reference is a
/// weak, non-owning handle, so teardown cascades top-down through ownership
/// alone. [`remove_child`](Element::remove_child) detaches a child without
/// destroying it and hands its ownership back to the caller.
///
/// The tree is single-threaded; a tree instance is expected to be owned and
/// mutated by one logical owner at a time.
#[derive(Clone, Debug)]
pub struct Element {
    node: Rc<RefCell<Node>>,
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl Element {
    // -- Constructors ---------------------------------------------------------

    /// Creates a detached element of the given kind.
    pub fn with_kind(kind: ElementKind, name: impl Into<String>) -> Self {
        Self {
            node: Rc::new(RefCell::new(Node {
                name: name.into(),
                kind,
                parent: Weak::new(),
                children: Vec::new(),
            })),
        }
    }

    /// Creates a root element, conventionally named [`ROOT_NAME`].
    pub fn root() -> Self {
        Self::with_kind(ElementKind::Root(Default::default()), ROOT_NAME)
    }

    /// Creates a namespace element.
    pub fn namespace(name: impl Into<String>) -> Self {
        Self::with_kind(ElementKind::Namespace(Default::default()), name)
    }

    /// Creates a function element.
    pub fn function(name: impl Into<String>) -> Self {
        Self::with_kind(ElementKind::Function(Default::default()), name)
    }

    /// Creates a type element.
    pub fn ty(name: impl Into<String>) -> Self {
        Self::with_kind(ElementKind::Type(Default::default()), name)
    }

    // -- Accessors ------------------------------------------------------------

    /// This element's name.
    pub fn name(&self) -> String {
        self.node.borrow().name.clone()
    }

    /// Renames this element.
    pub fn set_name(&self, name: impl Into<String>) {
        self.node.borrow_mut().name = name.into();
    }

    /// The type tag of this element's concrete kind.
    pub fn tag(&self) -> &'static str {
        self.node.borrow().kind.tag()
    }

    /// A clone of this element's kind payload.
    pub fn kind(&self) -> ElementKind {
        self.node.borrow().kind.clone()
    }

    /// This element's parent, if attached.
    pub fn parent(&self) -> Option<Element> {
        self.node.borrow().parent.upgrade().map(|node| Element { node })
    }

    /// The number of direct children.
    pub fn children_len(&self) -> usize {
        self.node.borrow().children.len()
    }

    /// Whether two handles refer to the same node.
    #[inline]
    pub fn is_same(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    /// Downgrades to a non-owning handle.
    pub fn downgrade(&self) -> WeakElement {
        WeakElement {
            node: Rc::downgrade(&self.node),
        }
    }

    // -- Mutation -------------------------------------------------------------

    /// Attaches `child` as the last child of this element, transferring its
    /// ownership into the tree.
    ///
    /// Rejects a child that already has an owner, and rejects this element
    /// itself or any of its ancestors (the tree stays acyclic).
    pub fn add_child(&self, child: Element) -> Result<(), TreeError> {
        if child.parent().is_some() {
            return Err(TreeError::AlreadyOwned);
        }
        let mut ancestor = Some(self.clone());
        while let Some(element) = ancestor {
            if element.is_same(&child) {
                return Err(TreeError::WouldCycle);
            }
            ancestor = element.parent();
        }

        self.attach(child);
        Ok(())
    }

    /// Detaches `child` without destroying it and returns its owning handle.
    ///
    /// Rejects a node that is not currently a child of this element, leaving
    /// its parent pointer intact.
    pub fn remove_child(&self, child: &Element) -> Result<Element, TreeError> {
        let mut node = self.node.borrow_mut();
        let index = node
            .children
            .iter()
            .position(|existing| existing.is_same(child))
            .ok_or(TreeError::NotAChild)?;

        let detached = node.children.remove(index);
        drop(node);

        detached.node.borrow_mut().parent = Weak::new();
        Ok(detached)
    }

    /// Invokes `callback` once per direct child, in insertion order.
    ///
    /// Iterates over a snapshot of the child handles, so the callback may
    /// mutate the tree; mutations are not reflected in the ongoing iteration.
    pub fn for_each_child(&self, mut callback: impl FnMut(&Element)) {
        let children = self.node.borrow().children.clone();
        for child in &children {
            callback(child);
        }
    }

    // Insertion used by both `add_child` and reconstruction; the caller has
    // already ruled out double ownership and cycles.
    fn attach(&self, child: Element) {
        child.node.borrow_mut().parent = Rc::downgrade(&self.node);
        self.node.borrow_mut().children.push(child);
    }

    // -- Serialization --------------------------------------------------------

    /// Serializes this element and its subtree.
    ///
    /// Produces `{ "name", "type", "specific", "children" }`, where
    /// `specific` is the kind payload's property-list serialization and
    /// `children` (omitted when empty) holds each child's full serialization
    /// in insertion order.
    pub fn serialize<F: Format>(&self) -> Result<F, FormatError> {
        let node = self.node.borrow();

        let mut document = F::object();
        document.set("name", F::encode(&node.name)?);
        document.set("type", F::encode(&node.kind.tag())?);
        document.set("specific", node.kind.serialize_specific()?);

        if !node.children.is_empty() {
            let mut children = F::array();
            for child in &node.children {
                children.push(child.serialize()?);
            }
            document.set("children", children);
        }

        Ok(document)
    }

    /// Reconstructs an element tree from a document shaped as
    /// [`serialize`](Element::serialize) produces.
    ///
    /// Dispatches on the `type` tag through [`ElementKind::from_tag`]; the
    /// `specific` sub-document feeds the kind payload's best-effort
    /// deserialization, and children are reconstructed and attached in
    /// document array order. Child documents that fail to reconstruct are
    /// skipped.
    ///
    /// Returns `None` rather than an error when the tag is unknown or the
    /// `name`/`type` fields are missing or malformed.
    pub fn deserialize<F: Format>(document: &F) -> Option<Element> {
        let name: String = document.get("name")?.decode().ok()?;
        let tag: String = document.get("type")?.decode().ok()?;

        let mut kind = ElementKind::from_tag(&tag)?;
        if let Some(specific) = document.get("specific") {
            let _ = kind.deserialize_specific(specific);
        }

        let element = Element::with_kind(kind, name);
        if let Some(children) = document.get("children").and_then(|c| c.items()) {
            for fragment in children {
                if let Some(child) = Element::deserialize(fragment) {
                    element.attach(child);
                }
            }
        }

        Some(element)
    }
}

// -----------------------------------------------------------------------------
// WeakElement

/// A non-owning handle to an element.
///
/// Does not keep the node alive; useful for observing teardown and for
/// long-lived back-references outside the tree.
#[derive(Clone)]
pub struct WeakElement {
    node: Weak<RefCell<Node>>,
}

impl WeakElement {
    /// Upgrades to an owning handle, if the node is still alive.
    pub fn upgrade(&self) -> Option<Element> {
        self.node.upgrade().map(|node| Element { node })
    }
}
