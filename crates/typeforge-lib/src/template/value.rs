use std::fmt;

use serde::{Deserialize, Serialize};
use typeforge_core::{Signedness, TypeDescriptor, uint_fits};

/// A scalar element of a composite value.
///
/// Integers are stored at 128 bits regardless of the element width;
/// [`Value::inhabits`] checks that a value fits its element type.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Bool(bool),
    Int(i128),
    #[serde(rename = "uint")]
    UInt(u128),
    Float(f64),
}

impl Value {
    /// Whether this value is a member of the scalar type `ty`.
    pub fn inhabits(&self, ty: &TypeDescriptor) -> bool {
        match (self, ty) {
            (Self::Bool(_), TypeDescriptor::Bool) => true,
            (Self::Int(v), TypeDescriptor::Int { .. }) => ty.int_fits(*v),
            (Self::UInt(v), TypeDescriptor::Int { signedness, bits }) => match signedness {
                Signedness::Unsigned => uint_fits(*bits, *v),
                // Past 128 bits every u128 is in range.
                Signedness::Signed => *bits > 128 || i128::try_from(*v).is_ok_and(|v| ty.int_fits(v)),
            },
            (Self::Float(_), TypeDescriptor::Float { .. }) => true,
            _ => false,
        }
    }

    /// Whether the value compares below zero.
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Int(v) => *v < 0,
            Self::Float(v) => *v < 0.0,
            Self::Bool(_) | Self::UInt(_) => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v.into())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::UInt(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}
