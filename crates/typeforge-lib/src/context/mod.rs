//! The host registry of concrete types.

mod builtins;
mod registry;


pub use registry::{TYPE_BOOL, TYPE_VOID, TypeContext, TypeId};
