//! Builtin type names registered by every `TypeContext`.
//!
//! Order matters: `void` and `bool` land on `TYPE_VOID` and `TYPE_BOOL`.

use typeforge_core::{FloatBits, Signedness, TypeDescriptor};

fn int(signedness: Signedness, bits: u32) -> TypeDescriptor {
    TypeDescriptor::Int {
        signedness,
        bits: bits as u16,
    }
}

fn float(bits: FloatBits) -> TypeDescriptor {
    TypeDescriptor::Float { bits }
}

/// Builtin `(name, descriptor)` pairs in registration order.
///
/// `usize`/`isize` alias the integer of the host's pointer width.
pub(crate) fn builtins() -> Vec<(&'static str, TypeDescriptor)> {
    use Signedness::{Signed, Unsigned};

    vec![
        ("void", TypeDescriptor::Void),
        ("bool", TypeDescriptor::Bool),
        ("u8", int(Unsigned, 8)),
        ("u16", int(Unsigned, 16)),
        ("u32", int(Unsigned, 32)),
        ("u64", int(Unsigned, 64)),
        ("u128", int(Unsigned, 128)),
        ("usize", int(Unsigned, usize::BITS)),
        ("i8", int(Signed, 8)),
        ("i16", int(Signed, 16)),
        ("i32", int(Signed, 32)),
        ("i64", int(Signed, 64)),
        ("i128", int(Signed, 128)),
        ("isize", int(Signed, usize::BITS)),
        ("f16", float(FloatBits::F16)),
        ("f32", float(FloatBits::F32)),
        ("f64", float(FloatBits::F64)),
        ("f80", float(FloatBits::F80)),
        ("f128", float(FloatBits::F128)),
        (
            "anyopaque",
            TypeDescriptor::Opaque {
                name: "anyopaque".to_string(),
            },
        ),
    ]
}
