//! Errors raised by the synthesizer.

use typeforge_core::{DescriptorError, TypeKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SynthesizeError {
    /// The descriptor (or one of its children) names a kind that cannot be built.
    #[error("cannot synthesize {kind} type `{name}`")]
    UnsynthesizableKind { kind: TypeKind, name: String },

    /// The descriptor's attributes are outside their domain.
    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(#[source] DescriptorError),
}
