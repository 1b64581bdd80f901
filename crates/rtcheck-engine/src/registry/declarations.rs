//! Declaration storage
//!
//! Holds what a definition site declares about a callable: expected
//! parameter types, expected return type and per-parameter custom checks.
//! Entries are keyed by owner class ID plus member name, with `None` as the
//! member for the constructor. Type-level validators are keyed by class ID
//! alone.

use std::fmt;

use rtcheck_sdk::{ClassId, ClassRef, CustomCheckConfig, ExpectedType, Predicate};
use rustc_hash::FxHashMap;

/// Declarations for a single constructor or method
#[derive(Debug, Default)]
struct MemberDeclarations {
    /// Expected types by parameter position; `None` for untyped positions
    param_types: Vec<Option<ExpectedType>>,
    /// Expected return type
    return_type: Option<ExpectedType>,
    /// Custom checks by parameter position (sparse)
    custom_checks: Vec<Option<CustomCheckConfig>>,
}

/// Declarations for all members of one class
#[derive(Debug, Default)]
struct OwnerDeclarations {
    constructor: MemberDeclarations,
    members: FxHashMap<String, MemberDeclarations>,
}

impl OwnerDeclarations {
    fn member(&self, member: Option<&str>) -> Option<&MemberDeclarations> {
        match member {
            None => Some(&self.constructor),
            Some(name) => self.members.get(name),
        }
    }

    fn member_mut(&mut self, member: Option<&str>) -> &mut MemberDeclarations {
        match member {
            None => &mut self.constructor,
            Some(name) => self.members.entry(name.to_string()).or_default(),
        }
    }
}

/// Declaration side table
#[derive(Default)]
pub struct DeclarationRegistry {
    owners: FxHashMap<ClassId, OwnerDeclarations>,
    type_validators: FxHashMap<ClassId, Predicate>,
}

impl DeclarationRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    fn member(&self, owner: &ClassRef, member: Option<&str>) -> Option<&MemberDeclarations> {
        self.owners.get(&owner.id())?.member(member)
    }

    fn member_mut(&mut self, owner: &ClassRef, member: Option<&str>) -> &mut MemberDeclarations {
        self.owners.entry(owner.id()).or_default().member_mut(member)
    }

    // ========================================================================
    // Definition-time capture
    // ========================================================================

    /// Record the declared parameter types of a constructor or method
    pub fn define_param_types(
        &mut self,
        owner: &ClassRef,
        member: Option<&str>,
        types: Vec<Option<ExpectedType>>,
    ) {
        self.member_mut(owner, member).param_types = types;
    }

    /// Record the declared return type of a method
    pub fn define_return_type(
        &mut self,
        owner: &ClassRef,
        member: &str,
        return_type: Option<ExpectedType>,
    ) {
        self.member_mut(owner, Some(member)).return_type = return_type;
    }

    // ========================================================================
    // Accessors used by the check builder
    // ========================================================================

    /// Expected parameter types; empty for parameterless or undeclared members
    pub fn expected_param_types(
        &self,
        owner: &ClassRef,
        member: Option<&str>,
    ) -> Vec<Option<ExpectedType>> {
        self.member(owner, member)
            .map(|m| m.param_types.clone())
            .unwrap_or_default()
    }

    /// Expected return type of a method
    pub fn expected_return_type(&self, owner: &ClassRef, member: &str) -> Option<ExpectedType> {
        self.member(owner, Some(member))
            .and_then(|m| m.return_type.clone())
    }

    /// Custom checks by parameter position; positions without an override are `None`
    pub fn custom_param_checks(
        &self,
        owner: &ClassRef,
        member: Option<&str>,
    ) -> Vec<Option<CustomCheckConfig>> {
        self.member(owner, member)
            .map(|m| m.custom_checks.clone())
            .unwrap_or_default()
    }

    /// Record a custom check for one parameter position
    pub fn set_custom_param_check(
        &mut self,
        owner: &ClassRef,
        member: Option<&str>,
        index: usize,
        config: CustomCheckConfig,
    ) {
        let checks = &mut self.member_mut(owner, member).custom_checks;
        if checks.len() <= index {
            checks.resize(index + 1, None);
        }
        checks[index] = Some(config);
    }

    /// Validator registered for a class itself
    pub fn type_validator(&self, class: &ClassRef) -> Option<Predicate> {
        self.type_validators.get(&class.id()).cloned()
    }

    /// Register a validator for a class itself
    pub fn set_type_validator(&mut self, class: &ClassRef, predicate: Predicate) {
        self.type_validators.insert(class.id(), predicate);
    }
}

impl fmt::Debug for DeclarationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeclarationRegistry")
            .field("owners", &self.owners)
            .field("type_validators", &self.type_validators.len())
            .finish()
    }
}
