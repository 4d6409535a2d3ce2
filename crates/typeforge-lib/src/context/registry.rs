//! TypeContext: the closed registry that owns every concrete type.
//!
//! Types are interned descriptors. A `TypeId` is the descriptor's index in
//! the intern table, so two handles are equal exactly when their descriptors
//! are structurally equal. Interning doubles as the memoization cache for
//! synthesized and instantiated types.

use std::collections::{HashMap, HashSet};

use indexmap::IndexSet;
use typeforge_core::{DescriptorError, TypeDescriptor};

use crate::reflect::Reflect;
use crate::trace::{NoopTracer, Tracer};

use super::builtins::builtins;

/// Handle to a type interned in a [`TypeContext`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TypeId(u32);

impl TypeId {
    /// Raw index for serialization/debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// `void` is always the first registered type.
pub const TYPE_VOID: TypeId = TypeId(0);
/// `bool` is always the second registered type.
pub const TYPE_BOOL: TypeId = TypeId(1);

/// Registry of concrete types.
#[derive(Debug, Clone)]
pub struct TypeContext {
    /// Interned descriptors; the insertion index is the `TypeId`.
    types: IndexSet<TypeDescriptor>,
    /// Builtin and user-declared names
    names: HashMap<String, TypeId>,
    /// Names that `declare_named` may not rebind.
    builtin_names: HashSet<&'static str>,
}

impl Default for TypeContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeContext {
    /// Create a context with the builtin scalar types registered.
    pub fn new() -> Self {
        let mut ctx = Self {
            types: IndexSet::new(),
            names: HashMap::new(),
            builtin_names: HashSet::new(),
        };

        for (name, descriptor) in builtins() {
            let id = ctx.intern(descriptor);
            ctx.names.insert(name.to_string(), id);
            ctx.builtin_names.insert(name);
        }

        debug_assert_eq!(ctx.lookup("void"), Some(TYPE_VOID));
        debug_assert_eq!(ctx.lookup("bool"), Some(TYPE_BOOL));

        ctx
    }

    // ========== Interning ==========

    /// Intern an already-validated descriptor.
    pub(crate) fn intern(&mut self, ty: TypeDescriptor) -> TypeId {
        self.intern_with(ty, &mut NoopTracer)
    }

    pub(crate) fn intern_with<T: Tracer>(&mut self, ty: TypeDescriptor, tracer: &mut T) -> TypeId {
        if let Some(index) = self.types.get_index_of(&ty) {
            let id = TypeId(index as u32);
            tracer.trace_intern(id, &ty, false);
            return id;
        }

        let id = TypeId(self.types.len() as u32);
        tracer.trace_intern(id, &ty, true);
        self.types.insert(ty);
        id
    }

    /// Handle of a descriptor if it is already registered.
    pub fn find(&self, ty: &TypeDescriptor) -> Option<TypeId> {
        self.types.get_index_of(ty).map(|i| TypeId(i as u32))
    }

    // ========== Declaration ==========

    /// Register any valid descriptor as a concrete type.
    ///
    /// Unlike `synthesize`, this accepts every kind, including structs,
    /// function signatures and opaque types. It is how the host brings
    /// nominal types into the registry.
    pub fn declare(&mut self, ty: TypeDescriptor) -> Result<TypeId, DescriptorError> {
        ty.validate()?;
        Ok(self.intern(ty))
    }

    /// Register a descriptor and bind `name` to it.
    ///
    /// Rebinding a user-declared name points it at the new type. Builtin
    /// names (`u8`, `f32`, `anyopaque`, ...) are fixed and rejected as the
    /// `name` attribute; nothing is registered in that case.
    pub fn declare_named(
        &mut self,
        name: impl Into<String>,
        ty: TypeDescriptor,
    ) -> Result<TypeId, DescriptorError> {
        let name = name.into();
        if self.builtin_names.contains(name.as_str()) {
            return Err(DescriptorError::InvalidAttribute {
                kind: ty.kind(),
                attribute: "name",
                reason: format!("`{name}` is a builtin type name"),
            });
        }
        let id = self.declare(ty)?;
        self.names.insert(name, id);
        Ok(id)
    }

    /// Register the Rust type `T` and return its handle.
    pub fn type_of<T: Reflect>(&mut self) -> Result<TypeId, DescriptorError> {
        self.declare(T::describe())
    }

    // ========== Lookup ==========

    /// Descriptor behind a handle.
    pub fn get(&self, id: TypeId) -> Option<&TypeDescriptor> {
        self.types.get_index(id.index())
    }

    /// Handle bound to a builtin or declared name.
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.names.get(name).copied()
    }

    /// Canonical name of a type, or `<unknown #N>` for foreign handles.
    pub fn name_of(&self, id: TypeId) -> String {
        match self.get(id) {
            Some(ty) => ty.to_string(),
            None => format!("<unknown {id}>"),
        }
    }

    /// Number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over all registered types in handle order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeDescriptor)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, ty)| (TypeId(i as u32), ty))
    }
}
