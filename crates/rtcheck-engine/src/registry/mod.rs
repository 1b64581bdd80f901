//! Side tables consulted by the check builder and the call path
//!
//! - [`DeclarationRegistry`]: declared types, custom checks and type-level
//!   validators, keyed by (owner class, member)
//! - [`ClassRegistry`]: constructors and method tables per class

mod classes;
mod declarations;

pub use classes::{ClassEntry, ClassRegistry};
pub use declarations::DeclarationRegistry;
