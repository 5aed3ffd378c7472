//! The error taxonomy collected during loading and formatting. Every error
//! is non-fatal: it is appended to the call's error list and resolution
//! continues with a best-effort substitute. A missing top-level message id
//! is the one exception, see [`LookupError`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FluentError {
    #[error("{0}")]
    Reference(String),

    #[error("Cyclic reference")]
    CyclicReference,

    #[error("Duplicate {kind} id: {id}")]
    DuplicateMessageId { kind: &'static str, id: String },

    #[error("Junk found while parsing a resource: {0:?}")]
    JunkFound(Vec<String>),

    #[error("{0}")]
    TypeError(String),

    #[error("{0}")]
    ValueError(String),
}

impl FluentError {
    pub fn unknown_message(id: &str) -> Self {
        FluentError::Reference(format!("Unknown message: {}", id))
    }

    pub fn unknown_term(id: &str) -> Self {
        FluentError::Reference(format!("Unknown term: {}", id))
    }

    pub fn unknown_attribute(id: &str) -> Self {
        FluentError::Reference(format!("Unknown attribute: {}", id))
    }

    pub fn unknown_variant(key: &str) -> Self {
        FluentError::Reference(format!("Unknown variant: {}", key))
    }

    pub fn unknown_external(name: &str) -> Self {
        FluentError::Reference(format!("Unknown external: {}", name))
    }

    pub fn unknown_function(name: &str) -> Self {
        FluentError::Reference(format!("Unknown function: {}", name))
    }
}

/// Raised by `format` (not collected as a `FluentError`) when the
/// requested top-level id is not present in the store at all. This is
/// treated as a programmer mistake rather than a translation-quality
/// issue: unlike every other error kind, it is not something a translator
/// could have caused by mistranslating a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no message or term with id {0:?} in this context")]
pub struct LookupError(pub String);
