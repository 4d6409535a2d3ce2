//! Reflection: concrete type → descriptor.
//!
//! Two entry points share one rule set:
//! - `TypeContext::reflect` for handles in the registry
//! - `reflect_type::<T>()` for Rust types implementing [`Reflect`]

mod error;
mod reflector;
mod rust_types;

#[cfg(test)]
mod rust_types_tests;

pub use error::ReflectError;
pub use reflector::reflect_type;
pub use rust_types::Reflect;
