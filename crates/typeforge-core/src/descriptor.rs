//! The type descriptor: a structured, tagged description of a type.
//!
//! Descriptors are plain immutable values. Deriving a new descriptor
//! (`widened`, `with_signedness`, `with_sentinel`) always produces a fresh
//! instance. Every constructor validates its input, so a descriptor obtained
//! through this API is always within its kind's domain. Descriptors built by
//! hand or by deserialization can be re-checked with [`TypeDescriptor::validate`].

use serde::{Deserialize, Serialize};

use crate::TypeKind;
use crate::error::{DescriptorError, Result};

/// Largest supported integer width.
pub const MAX_INT_BITS: u16 = u16::MAX;

/// Integer signedness.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signedness {
    Signed,
    Unsigned,
}

impl Signedness {
    /// Prefix used in type names (`i` / `u`).
    pub const fn prefix(self) -> char {
        match self {
            Self::Signed => 'i',
            Self::Unsigned => 'u',
        }
    }
}

/// Supported float widths.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
#[repr(u16)]
pub enum FloatBits {
    F16 = 16,
    F32 = 32,
    F64 = 64,
    F80 = 80,
    F128 = 128,
}

impl FloatBits {
    pub fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            16 => Some(Self::F16),
            32 => Some(Self::F32),
            64 => Some(Self::F64),
            80 => Some(Self::F80),
            128 => Some(Self::F128),
            _ => None,
        }
    }

    #[inline]
    pub const fn bits(self) -> u16 {
        self as u16
    }
}

impl TryFrom<u16> for FloatBits {
    type Error = DescriptorError;

    fn try_from(bits: u16) -> Result<Self> {
        Self::from_bits(bits).ok_or_else(|| {
            DescriptorError::invalid(
                TypeKind::Float,
                "bits",
                format!("{bits} is not one of 16, 32, 64, 80, 128"),
            )
        })
    }
}

impl From<FloatBits> for u16 {
    fn from(bits: FloatBits) -> Self {
        bits.bits()
    }
}

/// Pointer flavor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerSize {
    /// `*T`
    One,
    /// `[*]T`
    Many,
    /// `[]T`
    Slice,
}

/// Named member of a struct or union.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Named constant of an enum.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct EnumVariant {
    pub name: String,
    /// Wide enough for every value of a `u64` or `i64` tag.
    pub value: i128,
}

impl EnumVariant {
    pub fn new(name: impl Into<String>, value: i128) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Structured description of a type. Exactly one variant is active.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDescriptor {
    Void,
    Bool,
    Int {
        signedness: Signedness,
        bits: u16,
    },
    Float {
        bits: FloatBits,
    },
    Pointer {
        size: PointerSize,
        is_const: bool,
        child: Box<TypeDescriptor>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sentinel: Option<i64>,
    },
    Array {
        len: u64,
        child: Box<TypeDescriptor>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sentinel: Option<i64>,
    },
    Vector {
        len: u32,
        child: Box<TypeDescriptor>,
    },
    Optional {
        child: Box<TypeDescriptor>,
    },
    ErrorSet {
        errors: Vec<String>,
    },
    ErrorUnion {
        error_set: Box<TypeDescriptor>,
        payload: Box<TypeDescriptor>,
    },
    Struct {
        name: String,
        fields: Vec<Field>,
    },
    Enum {
        name: String,
        tag: Box<TypeDescriptor>,
        variants: Vec<EnumVariant>,
    },
    Union {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tag: Option<Box<TypeDescriptor>>,
        fields: Vec<Field>,
    },
    Function {
        params: Vec<TypeDescriptor>,
        ret: Box<TypeDescriptor>,
    },
    Opaque {
        name: String,
    },
}

// ========== Constructors ==========

impl TypeDescriptor {
    /// Integer of the given signedness and width (1..=65535).
    pub fn int(signedness: Signedness, bits: u32) -> Result<Self> {
        if bits == 0 || bits > MAX_INT_BITS as u32 {
            return Err(DescriptorError::invalid(
                TypeKind::Int,
                "bits",
                format!("{bits} is outside 1..={MAX_INT_BITS}"),
            ));
        }
        Ok(Self::Int {
            signedness,
            bits: bits as u16,
        })
    }

    pub fn signed(bits: u32) -> Result<Self> {
        Self::int(Signedness::Signed, bits)
    }

    pub fn unsigned(bits: u32) -> Result<Self> {
        Self::int(Signedness::Unsigned, bits)
    }

    /// Float of width 16, 32, 64, 80 or 128.
    pub fn float(bits: u16) -> Result<Self> {
        Ok(Self::Float {
            bits: FloatBits::try_from(bits)?,
        })
    }

    pub fn pointer(size: PointerSize, is_const: bool, child: TypeDescriptor) -> Result<Self> {
        Self::Pointer {
            size,
            is_const,
            child: Box::new(child),
            sentinel: None,
        }
        .validated()
    }

    pub fn array(child: TypeDescriptor, len: u64) -> Result<Self> {
        Self::Array {
            len,
            child: Box::new(child),
            sentinel: None,
        }
        .validated()
    }

    pub fn vector(child: TypeDescriptor, len: u32) -> Result<Self> {
        Self::Vector {
            len,
            child: Box::new(child),
        }
        .validated()
    }

    pub fn optional(child: TypeDescriptor) -> Result<Self> {
        Self::Optional {
            child: Box::new(child),
        }
        .validated()
    }

    pub fn error_set<I, S>(errors: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::ErrorSet {
            errors: errors.into_iter().map(Into::into).collect(),
        }
        .validated()
    }

    pub fn error_union(error_set: TypeDescriptor, payload: TypeDescriptor) -> Result<Self> {
        Self::ErrorUnion {
            error_set: Box::new(error_set),
            payload: Box::new(payload),
        }
        .validated()
    }

    pub fn structure(name: impl Into<String>, fields: Vec<Field>) -> Result<Self> {
        Self::Struct {
            name: name.into(),
            fields,
        }
        .validated()
    }

    pub fn enumeration(
        name: impl Into<String>,
        tag: TypeDescriptor,
        variants: Vec<EnumVariant>,
    ) -> Result<Self> {
        Self::Enum {
            name: name.into(),
            tag: Box::new(tag),
            variants,
        }
        .validated()
    }

    pub fn union(
        name: impl Into<String>,
        tag: Option<TypeDescriptor>,
        fields: Vec<Field>,
    ) -> Result<Self> {
        Self::Union {
            name: name.into(),
            tag: tag.map(Box::new),
            fields,
        }
        .validated()
    }

    pub fn function(params: Vec<TypeDescriptor>, ret: TypeDescriptor) -> Result<Self> {
        Self::Function {
            params,
            ret: Box::new(ret),
        }
        .validated()
    }

    pub fn opaque(name: impl Into<String>) -> Result<Self> {
        Self::Opaque { name: name.into() }.validated()
    }

    fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }
}

// ========== Accessors ==========

impl TypeDescriptor {
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Void => TypeKind::Void,
            Self::Bool => TypeKind::Bool,
            Self::Int { .. } => TypeKind::Int,
            Self::Float { .. } => TypeKind::Float,
            Self::Pointer { .. } => TypeKind::Pointer,
            Self::Array { .. } => TypeKind::Array,
            Self::Vector { .. } => TypeKind::Vector,
            Self::Optional { .. } => TypeKind::Optional,
            Self::ErrorSet { .. } => TypeKind::ErrorSet,
            Self::ErrorUnion { .. } => TypeKind::ErrorUnion,
            Self::Struct { .. } => TypeKind::Struct,
            Self::Enum { .. } => TypeKind::Enum,
            Self::Union { .. } => TypeKind::Union,
            Self::Function { .. } => TypeKind::Function,
            Self::Opaque { .. } => TypeKind::Opaque,
        }
    }

    /// Bit width of an Int or Float.
    pub fn bits(&self) -> Option<u16> {
        match self {
            Self::Int { bits, .. } => Some(*bits),
            Self::Float { bits } => Some(bits.bits()),
            _ => None,
        }
    }

    pub fn signedness(&self) -> Option<Signedness> {
        match self {
            Self::Int { signedness, .. } => Some(*signedness),
            _ => None,
        }
    }

    /// Element count of an Array or Vector.
    pub fn len(&self) -> Option<u64> {
        match self {
            Self::Array { len, .. } => Some(*len),
            Self::Vector { len, .. } => Some(*len as u64),
            _ => None,
        }
    }

    /// Child type of a wrapper kind.
    pub fn child(&self) -> Option<&TypeDescriptor> {
        match self {
            Self::Pointer { child, .. }
            | Self::Array { child, .. }
            | Self::Vector { child, .. }
            | Self::Optional { child } => Some(child),
            _ => None,
        }
    }

    pub fn sentinel(&self) -> Option<i64> {
        match self {
            Self::Pointer { sentinel, .. } | Self::Array { sentinel, .. } => *sentinel,
            _ => None,
        }
    }

    /// Ordered fields of a Struct or Union.
    pub fn fields(&self) -> Option<&[Field]> {
        match self {
            Self::Struct { fields, .. } | Self::Union { fields, .. } => Some(fields),
            _ => None,
        }
    }

    /// Name of a nominal type (Struct, Enum, Union, Opaque).
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Struct { name, .. }
            | Self::Enum { name, .. }
            | Self::Union { name, .. }
            | Self::Opaque { name } => Some(name),
            _ => None,
        }
    }

    /// Signed integers and floats: the types where negation is meaningful.
    pub fn is_signed_numeric(&self) -> bool {
        matches!(
            self,
            Self::Int {
                signedness: Signedness::Signed,
                ..
            } | Self::Float { .. }
        )
    }

    /// Whether `value` is representable by this Int descriptor.
    ///
    /// Always false for non-Int descriptors.
    pub fn int_fits(&self, value: i128) -> bool {
        match self {
            Self::Int { signedness, bits } => int_fits(*signedness, *bits, value),
            _ => false,
        }
    }
}

/// Whether a signed 128-bit value is representable in the given integer type.
///
/// A zero width holds no values.
pub fn int_fits(signedness: Signedness, bits: u16, value: i128) -> bool {
    match signedness {
        Signedness::Unsigned => value >= 0 && uint_fits(bits, value as u128),
        Signedness::Signed => {
            if bits == 0 {
                return false;
            }
            if bits >= 128 {
                return true;
            }
            let half = 1i128 << (bits - 1);
            (-half..half).contains(&value)
        }
    }
}

/// Whether an unsigned 128-bit value fits in `bits` bits.
pub fn uint_fits(bits: u16, value: u128) -> bool {
    bits != 0 && (bits >= 128 || value < (1u128 << bits))
}

// ========== Derivation ==========

impl TypeDescriptor {
    /// Same integer type, `by` bits wider.
    pub fn widened(&self, by: u16) -> Result<Self> {
        match self {
            Self::Int { signedness, bits } => Self::int(*signedness, *bits as u32 + by as u32),
            other => Err(DescriptorError::invalid(
                other.kind(),
                "bits",
                "only integers can be widened",
            )),
        }
    }

    /// Same integer width, different signedness.
    pub fn with_signedness(&self, signedness: Signedness) -> Result<Self> {
        match self {
            Self::Int { bits, .. } => Self::int(signedness, *bits as u32),
            other => Err(DescriptorError::invalid(
                other.kind(),
                "signedness",
                "only integers have a signedness",
            )),
        }
    }

    /// Same array or pointer, terminated by `sentinel`.
    pub fn with_sentinel(&self, sentinel: i64) -> Result<Self> {
        let derived = match self {
            Self::Pointer {
                size,
                is_const,
                child,
                ..
            } => Self::Pointer {
                size: *size,
                is_const: *is_const,
                child: child.clone(),
                sentinel: Some(sentinel),
            },
            Self::Array { len, child, .. } => Self::Array {
                len: *len,
                child: child.clone(),
                sentinel: Some(sentinel),
            },
            other => {
                return Err(DescriptorError::invalid(
                    other.kind(),
                    "sentinel",
                    "only arrays and pointers can be sentinel-terminated",
                ));
            }
        };
        derived.validated()
    }
}
