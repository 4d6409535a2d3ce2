//! Domain checks for descriptor trees.

use std::collections::HashSet;

use crate::TypeKind;
use crate::descriptor::{EnumVariant, Field, PointerSize, TypeDescriptor};
use crate::error::{DescriptorError, Result};

impl TypeDescriptor {
    /// Check every attribute of this descriptor and all of its children.
    pub fn validate(&self) -> Result<()> {
        let kind = self.kind();
        match self {
            Self::Void | Self::Bool | Self::Float { .. } => Ok(()),
            Self::Int { bits, .. } => {
                if *bits == 0 {
                    return Err(DescriptorError::invalid(kind, "bits", "width must be non-zero"));
                }
                Ok(())
            }
            Self::Pointer {
                size,
                child,
                sentinel,
                ..
            } => {
                child.validate()?;
                if let Some(sentinel) = sentinel {
                    if *size == PointerSize::One {
                        return Err(DescriptorError::invalid(
                            kind,
                            "sentinel",
                            "single-item pointers cannot be sentinel-terminated",
                        ));
                    }
                    check_sentinel(kind, child, *sentinel)?;
                }
                Ok(())
            }
            Self::Array {
                child, sentinel, ..
            } => {
                check_sized(kind, "child", child)?;
                if let Some(sentinel) = sentinel {
                    check_sentinel(kind, child, *sentinel)?;
                }
                Ok(())
            }
            Self::Vector { len, child } => {
                if *len == 0 {
                    return Err(DescriptorError::invalid(kind, "len", "vectors cannot be empty"));
                }
                child.validate()?;
                let lane_ok = matches!(
                    **child,
                    Self::Bool
                        | Self::Int { .. }
                        | Self::Float { .. }
                        | Self::Pointer {
                            size: PointerSize::One,
                            ..
                        }
                );
                if !lane_ok {
                    return Err(DescriptorError::invalid(
                        kind,
                        "child",
                        format!("{} cannot be a vector element", child.kind()),
                    ));
                }
                Ok(())
            }
            Self::Optional { child } => check_sized(kind, "child", child),
            Self::ErrorSet { errors } => check_names(kind, "errors", errors.iter()),
            Self::ErrorUnion { error_set, payload } => {
                if !matches!(**error_set, Self::ErrorSet { .. }) {
                    return Err(DescriptorError::invalid(
                        kind,
                        "error_set",
                        format!("expected an error set, got {}", error_set.kind()),
                    ));
                }
                error_set.validate()?;
                check_sized(kind, "payload", payload)
            }
            Self::Struct { name, fields } => {
                check_type_name(kind, name)?;
                check_fields(kind, fields)
            }
            Self::Enum {
                name,
                tag,
                variants,
            } => {
                check_type_name(kind, name)?;
                check_enum(kind, tag, variants)
            }
            Self::Union { name, tag, fields } => {
                check_type_name(kind, name)?;
                check_fields(kind, fields)?;
                if let Some(tag) = tag {
                    check_union_tag(kind, tag, fields)?;
                }
                Ok(())
            }
            Self::Function { params, ret } => {
                for param in params {
                    check_not_opaque(kind, "params", param)?;
                }
                check_not_opaque(kind, "ret", ret)
            }
            Self::Opaque { name } => check_type_name(kind, name),
        }
    }
}

/// Children stored by value must have a known size.
fn check_sized(kind: TypeKind, attribute: &'static str, child: &TypeDescriptor) -> Result<()> {
    child.validate()?;
    if matches!(child.kind(), TypeKind::Opaque | TypeKind::Function) {
        return Err(DescriptorError::invalid(
            kind,
            attribute,
            format!("{} has no size", child.kind()),
        ));
    }
    Ok(())
}

fn check_not_opaque(kind: TypeKind, attribute: &'static str, ty: &TypeDescriptor) -> Result<()> {
    ty.validate()?;
    if ty.kind() == TypeKind::Opaque {
        return Err(DescriptorError::invalid(kind, attribute, "opaque has no size"));
    }
    Ok(())
}

fn check_sentinel(kind: TypeKind, child: &TypeDescriptor, sentinel: i64) -> Result<()> {
    if child.kind() != TypeKind::Int {
        return Err(DescriptorError::invalid(
            kind,
            "sentinel",
            format!("sentinel requires an integer element, got {}", child.kind()),
        ));
    }
    if !child.int_fits(sentinel as i128) {
        return Err(DescriptorError::invalid(
            kind,
            "sentinel",
            format!("{sentinel} does not fit in {child}"),
        ));
    }
    Ok(())
}

fn check_type_name(kind: TypeKind, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(DescriptorError::invalid(kind, "name", "name cannot be empty"));
    }
    Ok(())
}

fn check_names<'a>(
    kind: TypeKind,
    attribute: &'static str,
    names: impl Iterator<Item = &'a String>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if name.is_empty() {
            return Err(DescriptorError::invalid(kind, attribute, "names cannot be empty"));
        }
        if !seen.insert(name.as_str()) {
            return Err(DescriptorError::invalid(
                kind,
                attribute,
                format!("duplicate name `{name}`"),
            ));
        }
    }
    Ok(())
}

fn check_fields(kind: TypeKind, fields: &[Field]) -> Result<()> {
    check_names(kind, "fields", fields.iter().map(|f| &f.name))?;
    for field in fields {
        check_sized(kind, "fields", &field.ty)?;
    }
    Ok(())
}

fn check_enum(kind: TypeKind, tag: &TypeDescriptor, variants: &[EnumVariant]) -> Result<()> {
    if tag.kind() != TypeKind::Int {
        return Err(DescriptorError::invalid(
            kind,
            "tag",
            format!("enum tag must be an integer, got {}", tag.kind()),
        ));
    }
    tag.validate()?;
    check_names(kind, "variants", variants.iter().map(|v| &v.name))?;

    let mut values = HashSet::new();
    for variant in variants {
        if !tag.int_fits(variant.value) {
            return Err(DescriptorError::invalid(
                kind,
                "variants",
                format!("value {} of `{}` does not fit in {tag}", variant.value, variant.name),
            ));
        }
        if !values.insert(variant.value) {
            return Err(DescriptorError::invalid(
                kind,
                "variants",
                format!("duplicate value {}", variant.value),
            ));
        }
    }
    Ok(())
}

fn check_union_tag(kind: TypeKind, tag: &TypeDescriptor, fields: &[Field]) -> Result<()> {
    let TypeDescriptor::Enum { variants, .. } = tag else {
        return Err(DescriptorError::invalid(
            kind,
            "tag",
            format!("union tag must be an enum, got {}", tag.kind()),
        ));
    };
    tag.validate()?;

    let tag_names: HashSet<_> = variants.iter().map(|v| v.name.as_str()).collect();
    let field_names: HashSet<_> = fields.iter().map(|f| f.name.as_str()).collect();
    if tag_names != field_names {
        return Err(DescriptorError::invalid(
            kind,
            "tag",
            "tag variants must match the union fields",
        ));
    }
    Ok(())
}
