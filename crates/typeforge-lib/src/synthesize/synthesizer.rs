use typeforge_core::TypeDescriptor;

use crate::context::{TypeContext, TypeId};
use crate::trace::{NoopTracer, Tracer};

use super::SynthesizeError;

impl TypeContext {
    /// Build (or find) the concrete type described by `ty`.
    ///
    /// Only scalar and wrapper kinds can be synthesized. A wrapper's child may
    /// also be a nominal type that was previously declared, so `*Point` works
    /// once `Point` is registered. Equal descriptors always yield the same handle.
    pub fn synthesize(&mut self, ty: &TypeDescriptor) -> Result<TypeId, SynthesizeError> {
        self.synthesize_with(ty, &mut NoopTracer)
    }

    pub fn synthesize_with<T: Tracer>(
        &mut self,
        ty: &TypeDescriptor,
        tracer: &mut T,
    ) -> Result<TypeId, SynthesizeError> {
        if let Err(e) = self.check_synthesizable(ty, true) {
            tracer.trace_reject("synthesize", ty, &e.to_string());
            return Err(e);
        }
        if let Err(e) = ty.validate() {
            tracer.trace_reject("synthesize", ty, &e.to_string());
            return Err(SynthesizeError::InvalidDescriptor(e));
        }
        Ok(self.intern_with(ty.clone(), tracer))
    }

    fn check_synthesizable(&self, ty: &TypeDescriptor, top: bool) -> Result<(), SynthesizeError> {
        let kind = ty.kind();
        if !kind.is_synthesizable() {
            if !top && self.find(ty).is_some() {
                return Ok(());
            }
            return Err(SynthesizeError::UnsynthesizableKind {
                kind,
                name: ty.short_name(),
            });
        }
        match ty.child() {
            Some(child) => self.check_synthesizable(child, false),
            None => Ok(()),
        }
    }
}
