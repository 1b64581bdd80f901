//! rtcheck SDK - value and object model for call-boundary type checks
//!
//! This crate holds the types shared between the check engine and the code
//! that declares checked classes: dynamic values, class identities with an
//! explicit is-a chain, object instances, expected types, custom predicates
//! and the error kinds a checked call can produce.
//!
//! # Example
//!
//! ```ignore
//! use rtcheck_sdk::{ClassRef, ExpectedType, Instance, Value};
//!
//! let animal = ClassRef::new("Animal", None);
//! let dog = ClassRef::new("Dog", Some(&animal));
//!
//! let rex = Value::object(Instance::new(dog));
//! assert!(ExpectedType::class(&animal).accepts(&rex));
//! assert!(!ExpectedType::number().accepts(&rex));
//! ```

#![warn(missing_docs)]

pub mod class;
pub mod error;
pub mod handler;
pub mod object;
pub mod types;
pub mod value;

pub use class::{core_class_ids, ClassId, ClassRef};
pub use error::{CallError, CallResult, TypeCheckError};
pub use handler::{native_fn, MethodDescriptor, NativeFn};
pub use object::Instance;
pub use types::{predicate, CustomCheckConfig, ExpectedType, Predicate, PrimitiveKind};
pub use value::Value;
