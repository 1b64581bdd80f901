//! Runtime facade
//!
//! A [`Runtime`] owns the class registry and the declaration registry. It
//! exposes three groups of operations:
//!
//! - definition time: [`Runtime::define_class`], [`Runtime::define_constructor`],
//!   [`Runtime::define_method`], which also capture declared types
//! - annotations: [`Runtime::check_params`], [`Runtime::check_return`],
//!   [`Runtime::check`], [`Runtime::custom_check`]
//! - call time: [`Runtime::construct`], [`Runtime::invoke`]
//!
//! Registry locks are released before any user code (constructor bodies,
//! methods, predicates) runs, so that code may call back into the runtime.

use parking_lot::RwLock;
use rtcheck_sdk::{
    CallError, CallResult, ClassRef, CustomCheckConfig, ExpectedType, Instance, MethodDescriptor,
    NativeFn, Predicate, Value,
};
use tracing::debug;

use crate::check::{build_param_checks, build_return_check, CallSite};
use crate::error::{DeclarationError, DeclarationResult};
use crate::registry::{ClassRegistry, DeclarationRegistry};
use crate::wrap::{wrap_constructor, wrap_method, wrap_return};

fn unknown_class(class: &ClassRef) -> DeclarationError {
    DeclarationError::UnknownClass(class.name().to_string())
}

/// Classes, declarations and the checked call path
#[derive(Debug, Default)]
pub struct Runtime {
    classes: RwLock<ClassRegistry>,
    declarations: RwLock<DeclarationRegistry>,
}

impl Runtime {
    /// Create an empty runtime
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Definition time
    // ========================================================================

    /// Declare and register a class. `None` as parent extends `Object`.
    pub fn define_class(&self, name: &str, parent: Option<&ClassRef>) -> ClassRef {
        let class = ClassRef::new(name, parent);
        self.classes.write().register(class.clone());
        class
    }

    /// Install a constructor body and capture its declared parameter types
    pub fn define_constructor(
        &self,
        class: &ClassRef,
        param_types: Vec<Option<ExpectedType>>,
        body: NativeFn,
    ) -> DeclarationResult<()> {
        self.classes
            .write()
            .get_mut(class)
            .ok_or_else(|| unknown_class(class))?
            .constructor = Some(body);
        self.declarations
            .write()
            .define_param_types(class, None, param_types);
        Ok(())
    }

    /// Install a method and capture its declared parameter and return types
    pub fn define_method(
        &self,
        class: &ClassRef,
        name: &str,
        param_types: Vec<Option<ExpectedType>>,
        return_type: Option<ExpectedType>,
        body: NativeFn,
    ) -> DeclarationResult<()> {
        self.classes
            .write()
            .get_mut(class)
            .ok_or_else(|| unknown_class(class))?
            .methods
            .insert(name.to_string(), MethodDescriptor::new(body));
        let mut declarations = self.declarations.write();
        declarations.define_param_types(class, Some(name), param_types);
        declarations.define_return_type(class, name, return_type);
        Ok(())
    }

    /// Look up a registered class by name. Wrapped constructors shadow the
    /// class they wrap.
    pub fn class_by_name(&self, name: &str) -> Option<ClassRef> {
        self.classes.read().get_by_name(name).cloned()
    }

    /// The method slot `name` resolves to on `class`
    pub fn method_descriptor(&self, class: &ClassRef, name: &str) -> Option<MethodDescriptor> {
        self.classes.read().lookup_method(class, name).cloned()
    }

    // ========================================================================
    // Annotations
    // ========================================================================

    /// Parameter-checking annotation.
    ///
    /// With `member = None` this wraps the constructor of `owner` and returns
    /// the wrapper class, which must be used for construction from then on.
    /// With a method name it replaces that method in place and returns
    /// `owner`. Checks are built here, once, from the declarations recorded
    /// so far; [`Runtime::check`] calls must come first.
    pub fn check_params(
        &self,
        owner: &ClassRef,
        member: Option<&str>,
    ) -> DeclarationResult<ClassRef> {
        let site = CallSite::new(owner.name(), member);
        let checks = {
            let declarations = self.declarations.read();
            build_param_checks(
                &site,
                &declarations.expected_param_types(owner, member),
                &declarations.custom_param_checks(owner, member),
                &declarations,
            )
        };

        let mut classes = self.classes.write();
        match member {
            Some(name) => {
                let entry = classes
                    .get_mut(owner)
                    .ok_or_else(|| unknown_class(owner))?;
                let original = entry.methods.get(name).ok_or_else(|| {
                    DeclarationError::UnknownMember {
                        owner: owner.name().to_string(),
                        member: name.to_string(),
                    }
                })?;
                let wrapped = wrap_method(original, checks);
                entry.methods.insert(name.to_string(), wrapped);
                debug!(owner = owner.name(), member = name, "installed parameter checks");
                Ok(owner.clone())
            }
            None => {
                if !classes.contains(owner) {
                    return Err(unknown_class(owner));
                }
                let body = classes.lookup_constructor(owner);
                let wrapped = wrap_constructor(owner, body, checks);
                classes.register(wrapped.class.clone()).constructor = Some(wrapped.constructor);
                debug!(owner = owner.name(), "installed constructor checks");
                Ok(wrapped.class)
            }
        }
    }

    /// Return-checking annotation for method `member` of `owner`
    pub fn check_return(
        &self,
        owner: &ClassRef,
        member: &str,
        config: CustomCheckConfig,
    ) -> DeclarationResult<()> {
        let site = CallSite::method(owner.name(), member);
        let check = {
            let declarations = self.declarations.read();
            build_return_check(
                &site,
                declarations.expected_return_type(owner, member).as_ref(),
                Some(&config),
                &declarations,
            )
        };

        let mut classes = self.classes.write();
        let entry = classes
            .get_mut(owner)
            .ok_or_else(|| unknown_class(owner))?;
        let original = entry
            .methods
            .get(member)
            .ok_or_else(|| DeclarationError::UnknownMember {
                owner: owner.name().to_string(),
                member: member.to_string(),
            })?;
        let wrapped = wrap_return(original, check);
        entry.methods.insert(member.to_string(), wrapped);
        debug!(owner = owner.name(), member, "installed return check");
        Ok(())
    }

    /// Per-parameter annotation: record a custom check for position `index`
    /// of the constructor (`member = None`) or method `member`
    pub fn check(
        &self,
        owner: &ClassRef,
        member: Option<&str>,
        index: usize,
        config: CustomCheckConfig,
    ) {
        self.declarations
            .write()
            .set_custom_param_check(owner, member, index, config);
    }

    /// Per-type annotation: validate every value expected as `class` with
    /// `predicate` instead of the default instance check
    pub fn custom_check(&self, class: &ClassRef, predicate: Predicate) {
        self.declarations
            .write()
            .set_type_validator(class, predicate);
    }

    // ========================================================================
    // Call time
    // ========================================================================

    /// Create an instance of `class` and run the nearest constructor body
    /// with it as receiver
    pub fn construct(&self, class: &ClassRef, args: &[Value]) -> CallResult<Value> {
        let body = self.classes.read().lookup_constructor(class);
        let this = Value::object(Instance::new(class.clone()));
        if let Some(body) = body {
            body(&this, args)?;
        }
        Ok(this)
    }

    /// Call method `name` on `receiver`
    pub fn invoke(&self, receiver: &Value, name: &str, args: &[Value]) -> CallResult<Value> {
        let Some(class) = receiver.class_of() else {
            return Err(CallError::NotAnObject {
                method: name.to_string(),
                receiver: receiver.to_string(),
            });
        };
        let method = self.method_descriptor(&class, name).ok_or_else(|| {
            CallError::NoSuchMethod {
                class: class.name().to_string(),
                method: name.to_string(),
            }
        })?;
        method.call(receiver, args)
    }
}
