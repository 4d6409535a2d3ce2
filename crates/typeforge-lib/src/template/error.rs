//! Errors raised by generic template instantiation and bound operations.

use crate::TypeId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// The operation is not defined for the composite's element type.
    #[error("`{operation}` is not supported for element type `{element}`")]
    UnsupportedOperation {
        operation: &'static str,
        element: String,
    },

    /// The element type cannot parameterize this template.
    #[error("`{element}` cannot be used as an element type: {reason}")]
    UnsupportedElement { element: String, reason: String },

    /// The handle was not issued by this context.
    #[error("unknown type handle {0}")]
    UnknownHandle(TypeId),

    /// Counts and dimensions must be non-zero.
    #[error("{parameter} must be greater than zero")]
    InvalidCount { parameter: &'static str },

    #[error("expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("element {index} is not a value of type `{element}`")]
    ElementMismatch { index: usize, element: String },

    /// `-e` does not fit the element type (e.g. the minimum signed value).
    #[error("absolute value of element {index} overflows `{element}`")]
    AbsOverflow { index: usize, element: String },

    /// The value was built by a different composite type.
    #[error("value of type {actual} passed to operation of type {expected}")]
    ForeignValue { expected: TypeId, actual: TypeId },
}
