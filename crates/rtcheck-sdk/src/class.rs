//! Class identities
//!
//! A class is an immutable identity (`id`, `name`) plus an explicit parent
//! link. Instance-of checks walk that chain instead of inspecting any
//! host-level prototype, so a wrapper class declared with the original as
//! its parent is indistinguishable from the original for `is_subclass_of`.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;

/// Well-known class IDs for builtin types
pub mod core_class_ids {
    /// Object class ID (root of every class chain)
    pub const OBJECT: usize = 0;
    /// Array class ID (built-in)
    pub const ARRAY: usize = 1;
    /// First ID handed out to user-defined classes
    pub const FIRST_USER_CLASS: usize = 2;
}

static NEXT_CLASS_ID: AtomicUsize = AtomicUsize::new(core_class_ids::FIRST_USER_CLASS);

static OBJECT_CLASS: Lazy<ClassRef> = Lazy::new(|| {
    ClassRef(Arc::new(ClassInfo {
        id: ClassId(core_class_ids::OBJECT),
        name: "Object".to_string(),
        parent: None,
    }))
});

static ARRAY_CLASS: Lazy<ClassRef> = Lazy::new(|| {
    ClassRef(Arc::new(ClassInfo {
        id: ClassId(core_class_ids::ARRAY),
        name: "Array".to_string(),
        parent: Some(ClassRef::object()),
    }))
});

/// Process-unique class identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(usize);

impl ClassId {
    /// Raw numeric ID
    pub fn as_usize(self) -> usize {
        self.0
    }

    fn next() -> Self {
        ClassId(NEXT_CLASS_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
struct ClassInfo {
    id: ClassId,
    name: String,
    parent: Option<ClassRef>,
}

/// Shared handle to a class identity. Equality and hashing use the class ID.
#[derive(Clone)]
pub struct ClassRef(Arc<ClassInfo>);

impl ClassRef {
    /// Declare a new class. Classes without an explicit parent extend `Object`.
    pub fn new(name: impl Into<String>, parent: Option<&ClassRef>) -> Self {
        let parent = parent.cloned().unwrap_or_else(ClassRef::object);
        ClassRef(Arc::new(ClassInfo {
            id: ClassId::next(),
            name: name.into(),
            parent: Some(parent),
        }))
    }

    /// The builtin `Object` root class
    pub fn object() -> Self {
        OBJECT_CLASS.clone()
    }

    /// The builtin `Array` class
    pub fn array() -> Self {
        ARRAY_CLASS.clone()
    }

    /// Class ID
    pub fn id(&self) -> ClassId {
        self.0.id
    }

    /// Class name
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Direct parent (`None` only for `Object`)
    pub fn parent(&self) -> Option<&ClassRef> {
        self.0.parent.as_ref()
    }

    /// Check if `self` is `other` or inherits from it
    pub fn is_subclass_of(&self, other: &ClassRef) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if class.id() == other.id() {
                return true;
            }
            current = class.parent();
        }
        false
    }

    /// The inheritance chain, starting with `self` and ending at `Object`
    pub fn hierarchy(&self) -> Vec<ClassRef> {
        let mut chain = Vec::new();
        let mut current = Some(self);
        while let Some(class) = current {
            chain.push(class.clone());
            current = class.parent();
        }
        chain
    }
}

impl PartialEq for ClassRef {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for ClassRef {}

impl std::hash::Hash for ClassRef {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class {}{}", self.name(), self.id())
    }
}
