use std::fmt;

use typeforge_core::{Field, TypeDescriptor, TypeKind};

use crate::context::{TypeContext, TypeId};
use crate::trace::{NoopTracer, Tracer};

use super::{TemplateError, Value};

/// A vector type instantiated at runtime: `Vec(N, T)`.
///
/// Carries everything its operations need, so it can be used without
/// borrowing the context that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Composite {
    id: TypeId,
    element: TypeId,
    element_ty: TypeDescriptor,
    count: u32,
}

/// An instance of a [`Composite`] type.
#[derive(Clone, Debug, PartialEq)]
pub struct CompositeValue {
    ty: TypeId,
    data: Vec<Value>,
}

fn vector_name(element: &TypeDescriptor, count: u32) -> String {
    format!("Vec({count}, {})", element.short_name())
}

impl TypeContext {
    /// Instantiate the vector template over `element` with `count` lanes.
    ///
    /// The result is a struct type with a single `data: [count]element`
    /// field. Repeating the call with the same arguments returns the same
    /// type handle.
    pub fn instantiate(&mut self, element: TypeId, count: u32) -> Result<Composite, TemplateError> {
        self.instantiate_with(element, count, &mut NoopTracer)
    }

    pub fn instantiate_with<T: Tracer>(
        &mut self,
        element: TypeId,
        count: u32,
        tracer: &mut T,
    ) -> Result<Composite, TemplateError> {
        let element_ty = self
            .get(element)
            .ok_or(TemplateError::UnknownHandle(element))?
            .clone();
        if count == 0 {
            return Err(TemplateError::InvalidCount { parameter: "count" });
        }
        if !matches!(
            element_ty.kind(),
            TypeKind::Bool | TypeKind::Int | TypeKind::Float
        ) {
            let reason = "vector elements must be bool, integer or float";
            tracer.trace_reject("instantiate", &element_ty, reason);
            return Err(TemplateError::UnsupportedElement {
                element: element_ty.to_string(),
                reason: reason.to_string(),
            });
        }

        let name = vector_name(&element_ty, count);
        let ty = TypeDescriptor::Struct {
            name: name.clone(),
            fields: vec![Field::new(
                "data",
                TypeDescriptor::Array {
                    len: count as u64,
                    child: Box::new(element_ty.clone()),
                    sentinel: None,
                },
            )],
        };
        debug_assert!(ty.validate().is_ok());

        let cached = self.find(&ty).is_some();
        let id = self.intern_with(ty, tracer);
        tracer.trace_instantiate(&name, id, cached);

        Ok(Composite {
            id,
            element,
            element_ty,
            count,
        })
    }

    /// Instantiate the matrix template: `[height][width]element`.
    ///
    /// Matrices have no bound operations; the result is an ordinary array
    /// type produced by the synthesizer.
    pub fn instantiate_matrix(
        &mut self,
        element: TypeId,
        width: u32,
        height: u32,
    ) -> Result<TypeId, TemplateError> {
        self.instantiate_matrix_with(element, width, height, &mut NoopTracer)
    }

    pub fn instantiate_matrix_with<T: Tracer>(
        &mut self,
        element: TypeId,
        width: u32,
        height: u32,
        tracer: &mut T,
    ) -> Result<TypeId, TemplateError> {
        let element_ty = self
            .get(element)
            .ok_or(TemplateError::UnknownHandle(element))?
            .clone();
        if width == 0 {
            return Err(TemplateError::InvalidCount { parameter: "width" });
        }
        if height == 0 {
            return Err(TemplateError::InvalidCount { parameter: "height" });
        }

        let name = format!("Matrix({width}, {height}, {})", element_ty.short_name());
        let row = TypeDescriptor::Array {
            len: width as u64,
            child: Box::new(element_ty.clone()),
            sentinel: None,
        };
        let matrix = TypeDescriptor::Array {
            len: height as u64,
            child: Box::new(row),
            sentinel: None,
        };

        let cached = self.find(&matrix).is_some();
        let id = self.synthesize_with(&matrix, tracer).map_err(|e| {
            TemplateError::UnsupportedElement {
                element: element_ty.to_string(),
                reason: e.to_string(),
            }
        })?;
        tracer.trace_instantiate(&name, id, cached);
        Ok(id)
    }
}

impl Composite {
    /// Handle of the instantiated struct type.
    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn element(&self) -> TypeId {
        self.element
    }

    pub fn element_type(&self) -> &TypeDescriptor {
        &self.element_ty
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Type name, e.g. `Vec(3, f32)`.
    pub fn name(&self) -> String {
        vector_name(&self.element_ty, self.count)
    }

    /// Wrap `data` as an instance of this type.
    pub fn construct(&self, data: Vec<Value>) -> Result<CompositeValue, TemplateError> {
        if data.len() != self.count as usize {
            return Err(TemplateError::LengthMismatch {
                expected: self.count as usize,
                actual: data.len(),
            });
        }
        if let Some(index) = data.iter().position(|v| !v.inhabits(&self.element_ty)) {
            return Err(TemplateError::ElementMismatch {
                index,
                element: self.element_ty.to_string(),
            });
        }
        Ok(CompositeValue { ty: self.id, data })
    }

    /// Absolute value of every element.
    ///
    /// Defined for signed integer and float elements only.
    pub fn elementwise_abs(&self, value: &CompositeValue) -> Result<CompositeValue, TemplateError> {
        if value.ty != self.id {
            return Err(TemplateError::ForeignValue {
                expected: self.id,
                actual: value.ty,
            });
        }
        if !self.element_ty.is_signed_numeric() {
            return Err(TemplateError::UnsupportedOperation {
                operation: "abs",
                element: self.element_ty.to_string(),
            });
        }

        let data = value
            .data
            .iter()
            .enumerate()
            .map(|(index, &e)| self.abs_element(index, e))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CompositeValue { ty: self.id, data })
    }

    fn abs_element(&self, index: usize, value: Value) -> Result<Value, TemplateError> {
        if !value.is_negative() {
            return Ok(value);
        }
        match value {
            Value::Float(v) => Ok(Value::Float(-v)),
            Value::Int(v) => match v.checked_neg() {
                Some(abs) if self.element_ty.int_fits(abs) => Ok(Value::Int(abs)),
                // `-i128::MIN` only exists as an unsigned magnitude.
                None if self.element_ty.bits().is_some_and(|bits| bits > 128) => {
                    Ok(Value::UInt(v.unsigned_abs()))
                }
                _ => Err(TemplateError::AbsOverflow {
                    index,
                    element: self.element_ty.to_string(),
                }),
            },
            other => Ok(other),
        }
    }
}

impl CompositeValue {
    /// Handle of the composite type this value belongs to.
    pub fn ty(&self) -> TypeId {
        self.ty
    }

    pub fn data(&self) -> &[Value] {
        &self.data
    }

    pub fn into_data(self) -> Vec<Value> {
        self.data
    }
}

impl fmt::Display for CompositeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "}}")
    }
}
