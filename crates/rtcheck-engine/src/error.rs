//! Declaration-time errors

/// Result type for declaration and annotation operations
pub type DeclarationResult<T> = Result<T, DeclarationError>;

/// Misuse of the declaration API (unknown class or member)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeclarationError {
    /// The class was never registered with this runtime
    #[error("Class '{0}' is not registered")]
    UnknownClass(String),

    /// The annotated method is not defined on the class itself
    #[error("'{member}' is not a method of {owner}")]
    UnknownMember {
        /// Class name
        owner: String,
        /// Method name
        member: String,
    },
}
