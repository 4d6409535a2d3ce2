#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Type descriptors for typeforge.
//!
//! A [`TypeDescriptor`] is a tagged, immutable description of a type: its
//! [`TypeKind`] plus the attributes that kind carries (bit width, signedness,
//! child type, fields, ...). Descriptors are validated on construction, so
//! attribute values always lie within their kind's domain.
//!
//! This crate is pure data. Registering, reflecting and synthesizing concrete
//! types happens in `typeforge-lib`.

mod attributes;
mod colors;
mod descriptor;
mod display;
mod error;
mod kind;
mod validate;

#[cfg(test)]
mod descriptor_tests;
#[cfg(test)]
mod kind_tests;

pub use attributes::Attributes;
pub use colors::Colors;
pub use descriptor::{
    EnumVariant, Field, FloatBits, MAX_INT_BITS, PointerSize, Signedness, TypeDescriptor,
    int_fits, uint_fits,
};
pub use error::{DescriptorError, ParseDescriptorError, Result};
pub use kind::TypeKind;
