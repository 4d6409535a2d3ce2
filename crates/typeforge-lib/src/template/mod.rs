//! Generic templates: types built from an element type and a count.
//!
//! Runtime templates go through the registry:
//! - `TypeContext::instantiate` → [`Composite`], a `Vec(N, T)` struct type
//!   with bound `construct` / `elementwise_abs` operations
//! - `TypeContext::instantiate_matrix` → `[H][W]T`
//!
//! When the parameters are known at build time, [`Vector`] and [`Matrix`]
//! give the same shapes as ordinary const-generic Rust types.

mod composite;
mod error;
mod value;
mod vector;

#[cfg(test)]
mod value_tests;

pub use composite::{Composite, CompositeValue};
pub use error::TemplateError;
pub use value::Value;
pub use vector::{Matrix, SignedAbs, Vector};
