//! Dynamic values passed across checked call boundaries
//!
//! `Value` covers what a checked parameter can carry: the two nullish
//! values, the three primitive kinds, arrays, object instances, and class
//! references (values that behave as a type themselves).
//!
//! `Display` renders values the way a JavaScript template string would
//! (`234`, `str`, `[object Object]`, ...) because that is the text the
//! diagnostics embed.

use std::fmt;
use std::sync::Arc;

use crate::class::ClassRef;
use crate::object::Instance;

/// A dynamically typed value
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absent value
    #[default]
    Undefined,
    /// Explicit null
    Null,
    /// Boolean primitive
    Bool(bool),
    /// Number primitive (IEEE 754 double)
    Number(f64),
    /// String primitive
    String(Arc<str>),
    /// Array of values
    Array(Arc<[Value]>),
    /// Class instance
    Object(Arc<Instance>),
    /// Reference to a class itself
    Class(ClassRef),
}

impl Value {
    /// Create a string value
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::String(s.into())
    }

    /// Create an array value
    pub fn array(items: impl Into<Vec<Value>>) -> Self {
        Value::Array(items.into().into())
    }

    /// Wrap an instance
    pub fn object(instance: Instance) -> Self {
        Value::Object(Arc::new(instance))
    }

    // ========================================================================
    // Type checks
    // ========================================================================

    /// Check if value is `null`
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if value is `undefined`
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Check if value is `null` or `undefined`
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get as number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Get array elements
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items.as_ref()),
            _ => None,
        }
    }

    /// Get as object instance
    pub fn as_object(&self) -> Option<&Arc<Instance>> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Get as class reference
    pub fn as_class(&self) -> Option<&ClassRef> {
        match self {
            Value::Class(class) => Some(class),
            _ => None,
        }
    }

    // ========================================================================
    // Class membership
    // ========================================================================

    /// The class this value is an instance of. Primitives and nullish values
    /// have none.
    pub fn class_of(&self) -> Option<ClassRef> {
        match self {
            Value::Object(obj) => Some(obj.class().clone()),
            Value::Array(_) => Some(ClassRef::array()),
            _ => None,
        }
    }

    /// Check if the value is an instance of `class` or one of its subclasses
    pub fn is_instance_of(&self, class: &ClassRef) -> bool {
        self.class_of().is_some_and(|own| own.is_subclass_of(class))
    }

    /// Name of the value's runtime type as used in diagnostics.
    ///
    /// `null` for null, the class's own name for class references, the
    /// boxed type name for primitives and the class name for instances.
    /// `undefined` has no runtime type and falls back to its text.
    pub fn type_name(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Class(class) => class.name().to_string(),
            Value::Bool(_) => "Boolean".to_string(),
            Value::Number(_) => "Number".to_string(),
            Value::String(_) => "String".to_string(),
            Value::Array(_) | Value::Object(_) => match self.class_of() {
                Some(class) => class.name().to_string(),
                None => self.to_string(),
            },
            Value::Undefined => self.to_string(),
        }
    }
}

fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        f.write_str("0")
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // Exponent form with an explicit sign, e.g. 1e+21 and 1.5e-7
        let exp = format!("{:e}", n);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, power)
            }
            _ => f.write_str(&exp),
        }
    } else {
        write!(f, "{}", n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => fmt_number(*n, f),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    // Nullish elements print as empty slots
                    if !item.is_nullish() {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
            Value::Object(_) => f.write_str("[object Object]"),
            Value::Class(class) => write!(f, "[class {}]", class.name()),
        }
    }
}

/// Strict equality: primitives by value, arrays and objects by identity
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            (Value::Class(a), Value::Class(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        Value::object(instance)
    }
}

impl From<Arc<Instance>> for Value {
    fn from(instance: Arc<Instance>) -> Self {
        Value::Object(instance)
    }
}

impl From<ClassRef> for Value {
    fn from(class: ClassRef) -> Self {
        Value::Class(class)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::array(items)
    }
}
