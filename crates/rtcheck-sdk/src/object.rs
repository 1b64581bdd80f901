//! Object instances

use std::fmt;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::class::ClassRef;
use crate::value::Value;

/// An instance of a class with named, mutable fields.
///
/// Instances are shared as `Arc<Instance>` inside [`Value::Object`]; field
/// writes go through an internal lock so a constructor can initialize the
/// receiver it was handed by reference.
pub struct Instance {
    class: ClassRef,
    fields: RwLock<FxHashMap<String, Value>>,
}

impl Instance {
    /// Create an instance with no fields set
    pub fn new(class: ClassRef) -> Self {
        Self {
            class,
            fields: RwLock::new(FxHashMap::default()),
        }
    }

    /// The class this instance was created from
    pub fn class(&self) -> &ClassRef {
        &self.class
    }

    /// Read a field; unset fields read as `undefined`
    pub fn get(&self, name: &str) -> Value {
        self.fields
            .read()
            .get(name)
            .cloned()
            .unwrap_or(Value::Undefined)
    }

    /// Write a field
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.fields.write().insert(name.into(), value);
    }

    /// Check if a field has been set
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.read().contains_key(name)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(self.class.name())
            .field("fields", &*self.fields.read())
            .finish()
    }
}
