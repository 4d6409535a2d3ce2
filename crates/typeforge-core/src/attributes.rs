//! Kind-agnostic descriptor construction.
//!
//! `Attributes` is a bag of optional attribute values. [`TypeDescriptor::build`]
//! pairs it with a `TypeKind` and rejects any attribute that is missing,
//! out of range, or meaningless for that kind.

use crate::TypeKind;
use crate::descriptor::{EnumVariant, Field, PointerSize, Signedness, TypeDescriptor};
use crate::error::{DescriptorError, Result};

/// Attribute values for [`TypeDescriptor::build`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    bits: Option<u32>,
    signedness: Option<Signedness>,
    len: Option<u64>,
    child: Option<TypeDescriptor>,
    sentinel: Option<i64>,
    size: Option<PointerSize>,
    is_const: Option<bool>,
    name: Option<String>,
    fields: Option<Vec<Field>>,
    tag: Option<TypeDescriptor>,
    variants: Option<Vec<EnumVariant>>,
    errors: Option<Vec<String>>,
    error_set: Option<TypeDescriptor>,
    payload: Option<TypeDescriptor>,
    params: Option<Vec<TypeDescriptor>>,
    ret: Option<TypeDescriptor>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bits(mut self, bits: u32) -> Self {
        self.bits = Some(bits);
        self
    }

    pub fn signedness(mut self, signedness: Signedness) -> Self {
        self.signedness = Some(signedness);
        self
    }

    pub fn len(mut self, len: u64) -> Self {
        self.len = Some(len);
        self
    }

    pub fn child(mut self, child: TypeDescriptor) -> Self {
        self.child = Some(child);
        self
    }

    pub fn sentinel(mut self, sentinel: i64) -> Self {
        self.sentinel = Some(sentinel);
        self
    }

    pub fn size(mut self, size: PointerSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn is_const(mut self, is_const: bool) -> Self {
        self.is_const = Some(is_const);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn tag(mut self, tag: TypeDescriptor) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn variants(mut self, variants: Vec<EnumVariant>) -> Self {
        self.variants = Some(variants);
        self
    }

    pub fn errors<I, S>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.errors = Some(errors.into_iter().map(Into::into).collect());
        self
    }

    pub fn error_set(mut self, error_set: TypeDescriptor) -> Self {
        self.error_set = Some(error_set);
        self
    }

    pub fn payload(mut self, payload: TypeDescriptor) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn params(mut self, params: Vec<TypeDescriptor>) -> Self {
        self.params = Some(params);
        self
    }

    pub fn ret(mut self, ret: TypeDescriptor) -> Self {
        self.ret = Some(ret);
        self
    }

    /// Names of all attributes that have been set.
    fn present(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut mark = |set: bool, name| {
            if set {
                names.push(name);
            }
        };
        mark(self.bits.is_some(), "bits");
        mark(self.signedness.is_some(), "signedness");
        mark(self.len.is_some(), "len");
        mark(self.child.is_some(), "child");
        mark(self.sentinel.is_some(), "sentinel");
        mark(self.size.is_some(), "size");
        mark(self.is_const.is_some(), "is_const");
        mark(self.name.is_some(), "name");
        mark(self.fields.is_some(), "fields");
        mark(self.tag.is_some(), "tag");
        mark(self.variants.is_some(), "variants");
        mark(self.errors.is_some(), "errors");
        mark(self.error_set.is_some(), "error_set");
        mark(self.payload.is_some(), "payload");
        mark(self.params.is_some(), "params");
        mark(self.ret.is_some(), "ret");
        names
    }
}

/// Attributes each kind accepts.
fn accepted(kind: TypeKind) -> &'static [&'static str] {
    match kind {
        TypeKind::Void | TypeKind::Bool => &[],
        TypeKind::Int => &["bits", "signedness"],
        TypeKind::Float => &["bits"],
        TypeKind::Pointer => &["size", "is_const", "child", "sentinel"],
        TypeKind::Array => &["len", "child", "sentinel"],
        TypeKind::Vector => &["len", "child"],
        TypeKind::Optional => &["child"],
        TypeKind::ErrorSet => &["errors"],
        TypeKind::ErrorUnion => &["error_set", "payload"],
        TypeKind::Struct => &["name", "fields"],
        TypeKind::Enum => &["name", "tag", "variants"],
        TypeKind::Union => &["name", "tag", "fields"],
        TypeKind::Function => &["params", "ret"],
        TypeKind::Opaque => &["name"],
    }
}

fn require<T>(kind: TypeKind, attribute: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| DescriptorError::invalid(kind, attribute, "required attribute is missing"))
}

impl TypeDescriptor {
    /// Construct a descriptor of `kind` from loose attributes.
    ///
    /// Optional attributes: `Pointer.is_const` (default false),
    /// `Pointer.sentinel`, `Array.sentinel`, `Union.tag`, and the collection
    /// attributes (`fields`, `variants`, `errors`, `params`), which default to empty.
    pub fn build(kind: TypeKind, attrs: Attributes) -> Result<Self> {
        let allowed = accepted(kind);
        if let Some(extra) = attrs.present().into_iter().find(|a| !allowed.contains(a)) {
            return Err(DescriptorError::invalid(
                kind,
                extra,
                format!("does not apply to {kind}"),
            ));
        }

        let a = attrs;
        let descriptor = match kind {
            TypeKind::Void => Self::Void,
            TypeKind::Bool => Self::Bool,
            TypeKind::Int => {
                let signedness = require(kind, "signedness", a.signedness)?;
                let bits = require(kind, "bits", a.bits)?;
                return Self::int(signedness, bits);
            }
            TypeKind::Float => {
                let bits = require(kind, "bits", a.bits)?;
                let bits = u16::try_from(bits).map_err(|_| {
                    DescriptorError::invalid(kind, "bits", format!("{bits} is not a float width"))
                })?;
                return Self::float(bits);
            }
            TypeKind::Pointer => Self::Pointer {
                size: require(kind, "size", a.size)?,
                is_const: a.is_const.unwrap_or(false),
                child: Box::new(require(kind, "child", a.child)?),
                sentinel: a.sentinel,
            },
            TypeKind::Array => Self::Array {
                len: require(kind, "len", a.len)?,
                child: Box::new(require(kind, "child", a.child)?),
                sentinel: a.sentinel,
            },
            TypeKind::Vector => {
                let len = require(kind, "len", a.len)?;
                let len = u32::try_from(len).map_err(|_| {
                    DescriptorError::invalid(kind, "len", format!("{len} lanes is too many"))
                })?;
                Self::Vector {
                    len,
                    child: Box::new(require(kind, "child", a.child)?),
                }
            }
            TypeKind::Optional => Self::Optional {
                child: Box::new(require(kind, "child", a.child)?),
            },
            TypeKind::ErrorSet => Self::ErrorSet {
                errors: a.errors.unwrap_or_default(),
            },
            TypeKind::ErrorUnion => Self::ErrorUnion {
                error_set: Box::new(require(kind, "error_set", a.error_set)?),
                payload: Box::new(require(kind, "payload", a.payload)?),
            },
            TypeKind::Struct => Self::Struct {
                name: require(kind, "name", a.name)?,
                fields: a.fields.unwrap_or_default(),
            },
            TypeKind::Enum => Self::Enum {
                name: require(kind, "name", a.name)?,
                tag: Box::new(require(kind, "tag", a.tag)?),
                variants: a.variants.unwrap_or_default(),
            },
            TypeKind::Union => Self::Union {
                name: require(kind, "name", a.name)?,
                tag: a.tag.map(Box::new),
                fields: a.fields.unwrap_or_default(),
            },
            TypeKind::Function => Self::Function {
                params: a.params.unwrap_or_default(),
                ret: Box::new(require(kind, "ret", a.ret)?),
            },
            TypeKind::Opaque => Self::Opaque {
                name: require(kind, "name", a.name)?,
            },
        };

        descriptor.validate()?;
        Ok(descriptor)
    }
}
