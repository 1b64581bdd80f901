//! Class registry
//!
//! Maps class IDs to their constructor and method table. Lookups walk the
//! class chain, so a constructor wrapper class (whose parent is the
//! original) inherits every method of the original.

use std::fmt;

use rtcheck_sdk::{ClassId, ClassRef, MethodDescriptor, NativeFn};
use rustc_hash::FxHashMap;

/// Callable slots registered for one class
#[derive(Clone)]
pub struct ClassEntry {
    /// Class identity
    pub class: ClassRef,
    /// Constructor body (`None` for the implicit empty constructor)
    pub constructor: Option<NativeFn>,
    /// Own methods by name
    pub methods: FxHashMap<String, MethodDescriptor>,
}

impl ClassEntry {
    fn new(class: ClassRef) -> Self {
        Self {
            class,
            constructor: None,
            methods: FxHashMap::default(),
        }
    }
}

impl fmt::Debug for ClassEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassEntry")
            .field("class", &self.class)
            .field("has_constructor", &self.constructor.is_some())
            .field("methods", &self.methods)
            .finish()
    }
}

/// Registry of classes known to a runtime
#[derive(Debug, Default)]
pub struct ClassRegistry {
    /// Entries indexed by class ID
    classes: FxHashMap<ClassId, ClassEntry>,
    /// Class name to the most recently registered class with that name
    name_to_id: FxHashMap<String, ClassId>,
}

impl ClassRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class. Re-registering keeps the existing entry.
    pub fn register(&mut self, class: ClassRef) -> &mut ClassEntry {
        self.name_to_id.insert(class.name().to_string(), class.id());
        self.classes
            .entry(class.id())
            .or_insert_with(|| ClassEntry::new(class))
    }

    /// Get entry by class
    pub fn get(&self, class: &ClassRef) -> Option<&ClassEntry> {
        self.classes.get(&class.id())
    }

    /// Get mutable entry by class
    pub fn get_mut(&mut self, class: &ClassRef) -> Option<&mut ClassEntry> {
        self.classes.get_mut(&class.id())
    }

    /// Get class by name
    pub fn get_by_name(&self, name: &str) -> Option<&ClassRef> {
        self.name_to_id
            .get(name)
            .and_then(|id| self.classes.get(id))
            .map(|entry| &entry.class)
    }

    /// Check if a class is registered
    pub fn contains(&self, class: &ClassRef) -> bool {
        self.classes.contains_key(&class.id())
    }

    /// Find a method on the class or its nearest ancestor that defines it
    pub fn lookup_method(&self, class: &ClassRef, name: &str) -> Option<&MethodDescriptor> {
        class
            .hierarchy()
            .iter()
            .filter_map(|c| self.classes.get(&c.id()))
            .find_map(|entry| entry.methods.get(name))
    }

    /// Find the constructor body of the class or its nearest ancestor that has one
    pub fn lookup_constructor(&self, class: &ClassRef) -> Option<NativeFn> {
        class
            .hierarchy()
            .iter()
            .filter_map(|c| self.classes.get(&c.id()))
            .find_map(|entry| entry.constructor.clone())
    }

    /// Number of registered classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
