//! Descriptors for Rust types.

use typeforge_core::{FloatBits, PointerSize, Signedness, TypeDescriptor};

/// A Rust type with a static descriptor.
///
/// Implementations must return a descriptor that passes
/// `TypeDescriptor::validate`. `TypeContext::type_of` re-checks it anyway.
/// Use [`reflect_struct!`](crate::reflect_struct) and
/// [`reflect_enum!`](crate::reflect_enum) for your own types.
pub trait Reflect {
    fn describe() -> TypeDescriptor;
}

macro_rules! reflect_int {
    ($($ty:ty => $signedness:ident),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn describe() -> TypeDescriptor {
                    TypeDescriptor::Int {
                        signedness: Signedness::$signedness,
                        bits: <$ty>::BITS as u16,
                    }
                }
            }
        )*
    };
}

reflect_int! {
    u8 => Unsigned,
    u16 => Unsigned,
    u32 => Unsigned,
    u64 => Unsigned,
    u128 => Unsigned,
    usize => Unsigned,
    i8 => Signed,
    i16 => Signed,
    i32 => Signed,
    i64 => Signed,
    i128 => Signed,
    isize => Signed,
}

impl Reflect for f32 {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::Float {
            bits: FloatBits::F32,
        }
    }
}

impl Reflect for f64 {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::Float {
            bits: FloatBits::F64,
        }
    }
}

impl Reflect for () {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::Void
    }
}

impl Reflect for bool {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::Bool
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::Array {
            len: N as u64,
            child: Box::new(T::describe()),
            sentinel: None,
        }
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::Optional {
            child: Box::new(T::describe()),
        }
    }
}

fn pointer<T: Reflect>(size: PointerSize, is_const: bool) -> TypeDescriptor {
    TypeDescriptor::Pointer {
        size,
        is_const,
        child: Box::new(T::describe()),
        sentinel: None,
    }
}

impl<T: Reflect> Reflect for &T {
    fn describe() -> TypeDescriptor {
        pointer::<T>(PointerSize::One, true)
    }
}

impl<T: Reflect> Reflect for &mut T {
    fn describe() -> TypeDescriptor {
        pointer::<T>(PointerSize::One, false)
    }
}

// Raw pointers may address more than one item.
impl<T: Reflect> Reflect for *const T {
    fn describe() -> TypeDescriptor {
        pointer::<T>(PointerSize::Many, true)
    }
}

impl<T: Reflect> Reflect for *mut T {
    fn describe() -> TypeDescriptor {
        pointer::<T>(PointerSize::Many, false)
    }
}

macro_rules! reflect_fn {
    ($($arg:ident),*) => {
        impl<R: Reflect, $($arg: Reflect),*> Reflect for fn($($arg),*) -> R {
            fn describe() -> TypeDescriptor {
                TypeDescriptor::Function {
                    params: vec![$($arg::describe()),*],
                    ret: Box::new(R::describe()),
                }
            }
        }
    };
}

reflect_fn!();
reflect_fn!(A);
reflect_fn!(A, B);
reflect_fn!(A, B, C);
reflect_fn!(A, B, C, D);

/// Implement [`Reflect`] for a struct by listing its fields in order.
///
/// ```
/// use typeforge_lib::{Reflect, reflect_struct};
///
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// reflect_struct!(Point { x: f32, y: f32 });
///
/// assert_eq!(Point::describe().to_string(), "struct Point");
/// ```
#[macro_export]
macro_rules! reflect_struct {
    ($ty:ident { $($field:ident : $field_ty:ty),* $(,)? }) => {
        impl $crate::Reflect for $ty {
            fn describe() -> $crate::TypeDescriptor {
                $crate::TypeDescriptor::Struct {
                    name: stringify!($ty).to_string(),
                    fields: vec![
                        $($crate::Field::new(
                            stringify!($field),
                            <$field_ty as $crate::Reflect>::describe(),
                        )),*
                    ],
                }
            }
        }
    };
}

/// Implement [`Reflect`] for a fieldless enum with an integer tag type.
///
/// ```
/// use typeforge_lib::{Reflect, reflect_enum};
///
/// #[repr(u8)]
/// enum Color {
///     Red = 0,
///     Green = 1,
/// }
///
/// reflect_enum!(Color: u8 { Red = 0, Green = 1 });
///
/// assert_eq!(Color::describe().name(), Some("Color"));
/// ```
#[macro_export]
macro_rules! reflect_enum {
    ($ty:ident : $tag:ty { $($variant:ident = $value:expr),* $(,)? }) => {
        impl $crate::Reflect for $ty {
            fn describe() -> $crate::TypeDescriptor {
                $crate::TypeDescriptor::Enum {
                    name: stringify!($ty).to_string(),
                    tag: Box::new(<$tag as $crate::Reflect>::describe()),
                    variants: vec![
                        $($crate::EnumVariant::new(stringify!($variant), $value)),*
                    ],
                }
            }
        }
    };
}
