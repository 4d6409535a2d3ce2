//! typeforge: reflection and synthesis over a closed type registry.
//!
//! A [`TypeContext`] owns every concrete type. Types are described by
//! [`TypeDescriptor`]s and referred to by [`TypeId`] handles. On top of the
//! registry sit three components:
//! - reflection: handle or Rust type → descriptor
//! - synthesis: descriptor → handle
//! - templates: (element, count) → vector type, (element, w, h) → matrix type
//!
//! # Example
//!
//! ```
//! use typeforge_lib::{TypeContext, Value};
//!
//! let mut ctx = TypeContext::new();
//!
//! // Reflect u8, widen it by one bit, and get u9 back as a new type.
//! let u8_id = ctx.lookup("u8").unwrap();
//! let wider = ctx.reflect(u8_id).unwrap().widened(1).unwrap();
//! let u9_id = ctx.synthesize(&wider).unwrap();
//! assert_eq!(ctx.name_of(u9_id), "u9");
//!
//! // Instantiate a three-lane float vector and take its absolute value.
//! let f32_id = ctx.lookup("f32").unwrap();
//! let vec3 = ctx.instantiate(f32_id, 3).unwrap();
//! let v = vec3
//!     .construct(vec![Value::Float(10.0), Value::Float(-10.0), Value::Float(5.0)])
//!     .unwrap();
//! assert_eq!(vec3.elementwise_abs(&v).unwrap().to_string(), "{10, 10, 5}");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod context;
pub mod reflect;
pub mod synthesize;
pub mod template;
pub mod trace;

pub use context::{TYPE_BOOL, TYPE_VOID, TypeContext, TypeId};
pub use reflect::{Reflect, ReflectError, reflect_type};
pub use synthesize::SynthesizeError;
pub use template::{
    Composite, CompositeValue, Matrix, SignedAbs, TemplateError, Value, Vector,
};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};

pub use typeforge_core::{
    Attributes, Colors, DescriptorError, EnumVariant, Field, FloatBits, PointerSize, Signedness,
    TypeDescriptor, TypeKind,
};
