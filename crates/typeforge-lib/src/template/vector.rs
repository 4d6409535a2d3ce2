//! Compile-time counterparts of the runtime templates.

use typeforge_core::{Field, TypeDescriptor};

use crate::reflect::Reflect;

/// Element types with a checked absolute value.
///
/// Implemented for signed integers and floats only, so `Vector::abs` does
/// not exist for unsigned or boolean vectors.
pub trait SignedAbs: Copy {
    /// `self < 0 ? -self : self`, or `None` when `-self` overflows.
    fn signed_abs(self) -> Option<Self>;
}

macro_rules! signed_abs_int {
    ($($ty:ty),*) => {
        $(
            impl SignedAbs for $ty {
                #[inline]
                fn signed_abs(self) -> Option<Self> {
                    self.checked_abs()
                }
            }
        )*
    };
}

signed_abs_int!(i8, i16, i32, i64, i128, isize);

macro_rules! signed_abs_float {
    ($($ty:ty),*) => {
        $(
            impl SignedAbs for $ty {
                #[inline]
                fn signed_abs(self) -> Option<Self> {
                    Some(if self < 0.0 { -self } else { self })
                }
            }
        )*
    };
}

signed_abs_float!(f32, f64);

/// Fixed-length vector of `N` elements of `T`.
///
/// Describes itself exactly like `TypeContext::instantiate(T, N)`, so both
/// paths land on the same registered type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

/// `H` rows of `W` elements.
pub type Matrix<T, const W: usize, const H: usize> = [[T; W]; H];

impl<T, const N: usize> Vector<T, N> {
    pub fn new(data: [T; N]) -> Self {
        const { assert!(N > 0, "a vector needs at least one element") };
        Self { data }
    }

    pub fn data(&self) -> &[T; N] {
        &self.data
    }

    pub fn into_inner(self) -> [T; N] {
        self.data
    }
}

impl<T: SignedAbs, const N: usize> Vector<T, N> {
    /// Element-wise absolute value, `None` if any element overflows.
    pub fn abs(&self) -> Option<Self> {
        let mut data = self.data;
        for e in &mut data {
            *e = e.signed_abs()?;
        }
        Some(Self { data })
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T: Reflect, const N: usize> Reflect for Vector<T, N> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::Struct {
            name: format!("Vec({N}, {})", T::describe().short_name()),
            fields: vec![Field::new("data", <[T; N]>::describe())],
        }
    }
}
