//! Diagnostic message formatting

use rtcheck_sdk::{ExpectedType, Value};

/// The callable a check belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    owner: String,
    member: Option<String>,
}

impl CallSite {
    /// A constructor of `owner`
    pub fn constructor(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            member: None,
        }
    }

    /// Method `member` of `owner`
    pub fn method(owner: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            member: Some(member.into()),
        }
    }

    /// Constructor when `member` is `None`, method otherwise
    pub fn new(owner: impl Into<String>, member: Option<&str>) -> Self {
        Self {
            owner: owner.into(),
            member: member.map(str::to_string),
        }
    }

    /// Owner label
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Member label (`None` for constructors)
    pub fn member(&self) -> Option<&str> {
        self.member.as_deref()
    }

    /// Common preamble of every message for this site
    pub fn base(&self) -> String {
        match &self.member {
            Some(member) => format!(
                "TypeCheckError when invoking '{}' of {}.",
                member, self.owner
            ),
            None => format!(
                "TypeCheckError when constructing an instance of '{}'.",
                self.owner
            ),
        }
    }

    /// Default type check failure
    pub fn mismatch(&self, position: Position, expected: &ExpectedType, actual: &Value) -> String {
        format!(
            "{} {} is expected of type '{}', but was '{}' of type '{}'",
            self.base(),
            position,
            expected.name(),
            actual,
            actual.type_name()
        )
    }

    /// Custom predicate failure
    pub fn custom_failure(&self, position: Position, message: &str) -> String {
        format!(
            "{} {} failed the check: {}",
            self.base(),
            position,
            message
        )
    }
}

/// What a check validates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Argument at this index
    Parameter(usize),
    /// Produced return value
    ReturnValue,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Parameter(index) => write!(f, "The parameter '{}'", index),
            Position::ReturnValue => f.write_str("The return value"),
        }
    }
}
