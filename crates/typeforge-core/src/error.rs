//! Errors raised while building or validating descriptors.

use crate::TypeKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    /// An attribute is missing, out of its kind's domain, or does not apply to the kind.
    #[error("invalid attribute `{attribute}` for {kind}: {reason}")]
    InvalidAttribute {
        kind: TypeKind,
        attribute: &'static str,
        reason: String,
    },
}

impl DescriptorError {
    pub(crate) fn invalid(
        kind: TypeKind,
        attribute: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            kind,
            attribute,
            reason: reason.into(),
        }
    }

    /// Name of the offending attribute.
    pub fn attribute(&self) -> &'static str {
        match self {
            Self::InvalidAttribute { attribute, .. } => attribute,
        }
    }
}

pub type Result<T> = std::result::Result<T, DescriptorError>;

/// Errors from parsing a scalar type name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDescriptorError {
    #[error("unknown type name `{0}`")]
    UnknownName(String),

    #[error(transparent)]
    Invalid(#[from] DescriptorError),
}
