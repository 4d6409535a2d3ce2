//! Errors raised by the reflector.

use typeforge_core::TypeKind;

use crate::TypeId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReflectError {
    /// The type exists but its kind has no descriptor form (function, opaque).
    #[error("cannot reflect {kind} type `{name}`")]
    UnsupportedType { kind: TypeKind, name: String },

    /// The handle was not issued by this context.
    #[error("unknown type handle {0}")]
    UnknownHandle(TypeId),
}
