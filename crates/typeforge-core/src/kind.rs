//! Canonical type kind definitions.
//!
//! Every `TypeDescriptor` has exactly one kind. The kind alone decides
//! which attributes a descriptor carries and which components accept it.

/// Semantic type kinds.
///
/// The discriminants are stable and used when a kind travels as a raw byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum TypeKind {
    /// Zero-sized unit type.
    Void = 0,
    /// `true` / `false`.
    Bool = 1,
    /// Arbitrary-width integer, signed or unsigned.
    Int = 2,
    /// IEEE float of a fixed width.
    Float = 3,
    /// Single-item, many-item or slice pointer.
    Pointer = 4,
    /// Fixed-length array, optionally sentinel-terminated.
    Array = 5,
    /// SIMD vector of scalars.
    Vector = 6,
    /// `?T` - zero or one value.
    Optional = 7,
    /// Set of named error values.
    ErrorSet = 8,
    /// `E!T` - either an error from `E` or a payload of `T`.
    ErrorUnion = 9,
    /// Record with ordered named fields.
    Struct = 10,
    /// Named integer constants backed by an integer tag.
    Enum = 11,
    /// Overlapping fields, optionally discriminated by an enum tag.
    Union = 12,
    /// Function signature.
    Function = 13,
    /// Type with unknown size and layout.
    Opaque = 14,
}

impl TypeKind {
    /// All kinds in discriminant order.
    pub const ALL: [TypeKind; 15] = [
        Self::Void,
        Self::Bool,
        Self::Int,
        Self::Float,
        Self::Pointer,
        Self::Array,
        Self::Vector,
        Self::Optional,
        Self::ErrorSet,
        Self::ErrorUnion,
        Self::Struct,
        Self::Enum,
        Self::Union,
        Self::Function,
        Self::Opaque,
    ];

    /// Convert from raw discriminant.
    pub fn from_u8(v: u8) -> Option<Self> {
        Self::ALL.get(v as usize).copied()
    }

    /// Lowercase display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Pointer => "pointer",
            Self::Array => "array",
            Self::Vector => "vector",
            Self::Optional => "optional",
            Self::ErrorSet => "error set",
            Self::ErrorUnion => "error union",
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Union => "union",
            Self::Function => "function",
            Self::Opaque => "opaque",
        }
    }

    /// Whether this is a scalar kind (Void, Bool, Int, Float).
    pub fn is_scalar(self) -> bool {
        matches!(self, Self::Void | Self::Bool | Self::Int | Self::Float)
    }

    /// Whether values of this kind are numbers.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }

    /// Whether this is a wrapper type (Pointer, Array, Vector, Optional).
    ///
    /// Wrapper types contain a single child type.
    pub fn is_wrapper(self) -> bool {
        matches!(
            self,
            Self::Pointer | Self::Array | Self::Vector | Self::Optional
        )
    }

    /// Whether this is a composite type (Struct, Enum, Union).
    pub fn is_composite(self) -> bool {
        matches!(self, Self::Struct | Self::Enum | Self::Union)
    }

    /// Whether the synthesizer can build a type of this kind from a descriptor.
    ///
    /// Only scalars and structural wrappers round-trip. Nominal kinds and
    /// function signatures must be declared by the host.
    pub fn is_synthesizable(self) -> bool {
        self.is_scalar() || self.is_wrapper()
    }

    /// Whether the reflector can describe a type of this kind.
    pub fn is_reflectable(self) -> bool {
        !matches!(self, Self::Function | Self::Opaque)
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
