use typeforge_core::TypeDescriptor;

use crate::context::{TypeContext, TypeId};
use crate::trace::{NoopTracer, Tracer};

use super::{Reflect, ReflectError};

fn check_reflectable(ty: &TypeDescriptor) -> Result<(), ReflectError> {
    if ty.kind().is_reflectable() {
        return Ok(());
    }
    Err(ReflectError::UnsupportedType {
        kind: ty.kind(),
        name: ty.short_name(),
    })
}

impl TypeContext {
    /// Describe the concrete type behind `id`.
    ///
    /// Function and opaque types are registered like any other type but have
    /// no descriptor form; reflecting them fails with `UnsupportedType`.
    pub fn reflect(&self, id: TypeId) -> Result<TypeDescriptor, ReflectError> {
        self.reflect_with(id, &mut NoopTracer)
    }

    pub fn reflect_with<T: Tracer>(
        &self,
        id: TypeId,
        tracer: &mut T,
    ) -> Result<TypeDescriptor, ReflectError> {
        let ty = self.get(id).ok_or(ReflectError::UnknownHandle(id))?;
        if let Err(e) = check_reflectable(ty) {
            tracer.trace_reject("reflect", ty, "kind has no descriptor form");
            return Err(e);
        }
        tracer.trace_reflect(id, ty);
        Ok(ty.clone())
    }
}

/// Describe the Rust type `T` without registering it.
pub fn reflect_type<T: Reflect>() -> Result<TypeDescriptor, ReflectError> {
    let ty = T::describe();
    check_reflectable(&ty)?;
    Ok(ty)
}
