//! Canonical type names and multi-line outlines.

use std::fmt::{self, Display, Formatter, Write as _};
use std::str::FromStr;

use crate::Colors;
use crate::descriptor::{PointerSize, TypeDescriptor};
use crate::error::ParseDescriptorError;

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => f.write_str("void"),
            Self::Bool => f.write_str("bool"),
            Self::Int { signedness, bits } => write!(f, "{}{bits}", signedness.prefix()),
            Self::Float { bits } => write!(f, "f{}", bits.bits()),
            Self::Pointer {
                size,
                is_const,
                child,
                sentinel,
            } => {
                match (size, sentinel) {
                    (PointerSize::One, _) => f.write_str("*")?,
                    (PointerSize::Many, None) => f.write_str("[*]")?,
                    (PointerSize::Many, Some(s)) => write!(f, "[*:{s}]")?,
                    (PointerSize::Slice, None) => f.write_str("[]")?,
                    (PointerSize::Slice, Some(s)) => write!(f, "[:{s}]")?,
                }
                if *is_const {
                    f.write_str("const ")?;
                }
                write!(f, "{child}")
            }
            Self::Array {
                len,
                child,
                sentinel: None,
            } => write!(f, "[{len}]{child}"),
            Self::Array {
                len,
                child,
                sentinel: Some(s),
            } => write!(f, "[{len}:{s}]{child}"),
            Self::Vector { len, child } => write!(f, "@Vector({len}, {child})"),
            Self::Optional { child } => write!(f, "?{child}"),
            Self::ErrorSet { errors } => write!(f, "error{{{}}}", errors.join(",")),
            Self::ErrorUnion { error_set, payload } => write!(f, "{error_set}!{payload}"),
            // Nominal kinds carry their keyword so `struct u8` never reads as the scalar.
            Self::Struct { name, .. } => write!(f, "struct {name}"),
            Self::Enum { name, .. } => write!(f, "enum {name}"),
            Self::Union { name, .. } => write!(f, "union {name}"),
            Self::Opaque { name } => write!(f, "opaque {name}"),
            Self::Function { params, ret } => {
                f.write_str("fn(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, ") {ret}")
            }
        }
    }
}

/// Parses scalar type names: `void`, `bool`, `u<N>`, `i<N>`, `f<N>`.
impl FromStr for TypeDescriptor {
    type Err = ParseDescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "void" => return Ok(Self::Void),
            "bool" => return Ok(Self::Bool),
            _ => {}
        }

        let unknown = || ParseDescriptorError::UnknownName(s.to_string());
        let (prefix, digits) = s.split_at_checked(1).ok_or_else(unknown)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(unknown());
        }
        // Anything that does not fit u32 is out of range for every kind anyway.
        let bits: u32 = digits.parse().unwrap_or(u32::MAX);

        let descriptor = match prefix {
            "u" => Self::unsigned(bits)?,
            "i" => Self::signed(bits)?,
            "f" => Self::float(u16::try_from(bits).unwrap_or(u16::MAX))?,
            _ => return Err(unknown()),
        };
        Ok(descriptor)
    }
}

impl TypeDescriptor {
    /// The declared name of a nominal type, or the canonical rendering of
    /// anything else. Used where a name is embedded in another name.
    pub fn short_name(&self) -> String {
        self.name().map_or_else(|| self.to_string(), str::to_string)
    }

    /// Multi-line rendering that also lists members of composite kinds.
    ///
    /// Scalars and wrappers render as their one-line name.
    pub fn outline(&self, colors: Colors) -> String {
        let c = colors;
        let mut out = String::new();
        match self {
            Self::Struct { name, fields } | Self::Union { name, fields, .. } => {
                let keyword = if matches!(self, Self::Struct { .. }) {
                    "struct"
                } else {
                    "union"
                };
                let _ = write!(out, "{}{keyword}{} {}{name}{}", c.meta, c.reset, c.name, c.reset);
                if let Self::Union { tag: Some(tag), .. } = self {
                    let _ = write!(out, "({})", tag.name().unwrap_or_default());
                }
                for field in fields {
                    let _ = write!(out, "\n  {}{}{}: {}", c.name, field.name, c.reset, field.ty);
                }
            }
            Self::Enum {
                name,
                tag,
                variants,
            } => {
                let _ = write!(out, "{}enum{}({tag}) {}{name}{}", c.meta, c.reset, c.name, c.reset);
                for variant in variants {
                    let _ = write!(
                        out,
                        "\n  {}{}{} = {}{}{}",
                        c.name, variant.name, c.reset, c.value, variant.value, c.reset
                    );
                }
            }
            Self::ErrorSet { errors } => {
                let _ = write!(out, "{}error{}", c.meta, c.reset);
                for error in errors {
                    let _ = write!(out, "\n  {}{error}{}", c.name, c.reset);
                }
            }
            Self::Opaque { name } => {
                let _ = write!(out, "{}opaque{} {}{name}{}", c.meta, c.reset, c.name, c.reset);
            }
            other => {
                let _ = write!(out, "{}{other}{}", c.name, c.reset);
            }
        }
        out
    }
}
