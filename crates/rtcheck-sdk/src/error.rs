//! Error types produced by checked calls

/// Result type for calls made through the runtime
pub type CallResult<T> = Result<T, CallError>;

/// The single failure kind produced by a parameter or return-value check.
///
/// The message is fully formatted when the check fails, e.g.
/// `TypeCheckError when invoking 'method' of Target. The parameter '1' is
/// expected of type 'Dependency2', but was '[object Object]' of type 'Dependency1'`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TypeCheckError {
    message: String,
}

impl TypeCheckError {
    /// Create an error carrying an already formatted message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The formatted diagnostic
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors raised while invoking a constructor or method
#[derive(Debug, Clone, thiserror::Error)]
pub enum CallError {
    /// A parameter or return-value check failed
    #[error(transparent)]
    TypeCheck(#[from] TypeCheckError),

    /// The callable itself raised an error
    #[error("Uncaught error: {0}")]
    Thrown(String),

    /// Method lookup failed on the receiver's class chain
    #[error("'{method}' is not a method of {class}")]
    NoSuchMethod {
        /// Receiver class name
        class: String,
        /// Requested method name
        method: String,
    },

    /// Methods can only be invoked on object instances
    #[error("Cannot invoke '{method}' on '{receiver}', which is not an object")]
    NotAnObject {
        /// Requested method name
        method: String,
        /// Stringified receiver
        receiver: String,
    },
}

impl CallError {
    /// Returns the type check failure, if that is what this error is
    pub fn as_type_check(&self) -> Option<&TypeCheckError> {
        match self {
            CallError::TypeCheck(e) => Some(e),
            _ => None,
        }
    }

    /// Check if this error came from a failed type check
    pub fn is_type_check(&self) -> bool {
        matches!(self, CallError::TypeCheck(_))
    }
}

impl From<String> for CallError {
    fn from(s: String) -> Self {
        CallError::Thrown(s)
    }
}

impl From<&str> for CallError {
    fn from(s: &str) -> Self {
        CallError::Thrown(s.to_string())
    }
}
