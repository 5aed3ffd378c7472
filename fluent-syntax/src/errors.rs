//! Parser error codes, ported one-to-one from the stable `E00NN` codes used
//! by the original implementation's `fluent/syntax/errors.py` so downstream
//! tests can match on a code rather than a formatted string.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError {
    #[error("Generic error")]
    Generic,
    #[error("Expected an entry start")]
    ExpectedEntry,
    #[error("Expected token: \"{0}\"")]
    ExpectedToken(String),
    #[error("Expected a character from range: \"{0}\"")]
    ExpectedCharRange(String),
    #[error("Expected entry \"{0}\" to have a value or attributes")]
    MissingValue(String),
    #[error("Expected field: \"{0}\"")]
    ExpectedField(String),
    #[error("Keyword cannot end with a whitespace")]
    TrailingWhitespaceInKeyword,
    #[error("The callee has to be a simple, upper-case identifier")]
    InvalidCallee,
    #[error("The key has to be a simple identifier")]
    InvalidKey,
    #[error("Expected one of the variants to be marked as default (*)")]
    MissingDefaultVariant,
    #[error("Expected at least one variant after \"->\"")]
    MissingVariants,
    #[error("Expected variant key")]
    ExpectedVariantKey,
    #[error("Expected literal")]
    ExpectedLiteral,
    #[error("Only one variant can be marked as default (*)")]
    MultipleDefaultVariants,
    #[error("Message references cannot be used as selectors")]
    MessageReferenceAsSelector,
    #[error("Variants cannot be used as selectors")]
    VariantAsSelector,
    #[error("Attributes of public messages cannot be used as selectors")]
    MessageAttributeAsSelector,
    #[error("Attributes of private messages cannot be used as placeables")]
    TermAttributeAsPlaceable,
    #[error("Unterminated string expression")]
    UnterminatedStringLiteral,
}
