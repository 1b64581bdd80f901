//! Expected types and custom check configuration

use std::fmt;
use std::sync::Arc;

use crate::class::ClassRef;
use crate::value::Value;

/// A custom validation predicate.
///
/// Returns `None` (or an empty message) when the value is acceptable, or a
/// message describing why it is not.
pub type Predicate = Arc<dyn Fn(&Value) -> Option<String> + Send + Sync>;

/// Wrap a closure as a [`Predicate`]
pub fn predicate(f: impl Fn(&Value) -> Option<String> + Send + Sync + 'static) -> Predicate {
    Arc::new(f)
}

/// Primitive kinds that are checked by value kind rather than by class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Number primitive
    Number,
    /// String primitive
    String,
    /// Boolean primitive
    Boolean,
}

impl PrimitiveKind {
    /// Type name used in diagnostics
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Number => "Number",
            PrimitiveKind::String => "String",
            PrimitiveKind::Boolean => "Boolean",
        }
    }

    /// Check if `value` is a primitive of this kind
    pub fn matches(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (PrimitiveKind::Number, Value::Number(_))
                | (PrimitiveKind::String, Value::String(_))
                | (PrimitiveKind::Boolean, Value::Bool(_))
        )
    }
}

/// The declared type of a parameter or return value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExpectedType {
    /// One of the primitive kinds
    Primitive(PrimitiveKind),
    /// A nominal class; instances of subclasses are accepted
    Class(ClassRef),
}

impl ExpectedType {
    /// `number`
    pub fn number() -> Self {
        ExpectedType::Primitive(PrimitiveKind::Number)
    }

    /// `string`
    pub fn string() -> Self {
        ExpectedType::Primitive(PrimitiveKind::String)
    }

    /// `boolean`
    pub fn boolean() -> Self {
        ExpectedType::Primitive(PrimitiveKind::Boolean)
    }

    /// Any array
    pub fn array() -> Self {
        ExpectedType::Class(ClassRef::array())
    }

    /// Instances of `class`
    pub fn class(class: &ClassRef) -> Self {
        ExpectedType::Class(class.clone())
    }

    /// Type name used in diagnostics
    pub fn name(&self) -> &str {
        match self {
            ExpectedType::Primitive(kind) => kind.name(),
            ExpectedType::Class(class) => class.name(),
        }
    }

    /// The nominal class, if this is not a primitive
    pub fn as_class(&self) -> Option<&ClassRef> {
        match self {
            ExpectedType::Class(class) => Some(class),
            ExpectedType::Primitive(_) => None,
        }
    }

    /// Default nominal/primitive check, ignoring nullability
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            ExpectedType::Primitive(kind) => kind.matches(value),
            ExpectedType::Class(class) => value.is_instance_of(class),
        }
    }
}

impl From<PrimitiveKind> for ExpectedType {
    fn from(kind: PrimitiveKind) -> Self {
        ExpectedType::Primitive(kind)
    }
}

impl From<ClassRef> for ExpectedType {
    fn from(class: ClassRef) -> Self {
        ExpectedType::Class(class)
    }
}

impl From<&ClassRef> for ExpectedType {
    fn from(class: &ClassRef) -> Self {
        ExpectedType::Class(class.clone())
    }
}

/// Per-position override recorded by the parameter and return annotations.
///
/// The default value means "use the default type check, not nullable".
#[derive(Clone, Default)]
pub struct CustomCheckConfig {
    /// Replaces the type check entirely when present
    pub predicate: Option<Predicate>,
    /// Lets `null`/`undefined` through the default type check
    pub nullable: bool,
}

impl CustomCheckConfig {
    /// Empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the predicate
    pub fn with_predicate(
        mut self,
        f: impl Fn(&Value) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.predicate = Some(Arc::new(f));
        self
    }

    /// Mark the position as nullable
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

impl fmt::Debug for CustomCheckConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomCheckConfig")
            .field("predicate", &self.predicate.as_ref().map(|_| "<fn>"))
            .field("nullable", &self.nullable)
            .finish()
    }
}
