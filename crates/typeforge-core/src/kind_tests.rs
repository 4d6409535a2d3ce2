use super::*;

#[test]
fn from_u8_valid() {
    assert_eq!(TypeKind::from_u8(0), Some(TypeKind::Void));
    assert_eq!(TypeKind::from_u8(2), Some(TypeKind::Int));
    assert_eq!(TypeKind::from_u8(6), Some(TypeKind::Vector));
    assert_eq!(TypeKind::from_u8(10), Some(TypeKind::Struct));
    assert_eq!(TypeKind::from_u8(14), Some(TypeKind::Opaque));
}

#[test]
fn from_u8_invalid() {
    assert_eq!(TypeKind::from_u8(15), None);
    assert_eq!(TypeKind::from_u8(255), None);
}

#[test]
fn discriminants_match_table_order() {
    for (i, kind) in TypeKind::ALL.iter().enumerate() {
        assert_eq!(*kind as u8 as usize, i);
    }
}

#[test]
fn is_scalar() {
    assert!(TypeKind::Void.is_scalar());
    assert!(TypeKind::Bool.is_scalar());
    assert!(TypeKind::Int.is_scalar());
    assert!(TypeKind::Float.is_scalar());
    assert!(!TypeKind::Pointer.is_scalar());
    assert!(!TypeKind::Struct.is_scalar());
}

#[test]
fn is_numeric() {
    assert!(TypeKind::Int.is_numeric());
    assert!(TypeKind::Float.is_numeric());
    assert!(!TypeKind::Bool.is_numeric());
    assert!(!TypeKind::Vector.is_numeric());
}

#[test]
fn is_wrapper() {
    assert!(TypeKind::Pointer.is_wrapper());
    assert!(TypeKind::Array.is_wrapper());
    assert!(TypeKind::Vector.is_wrapper());
    assert!(TypeKind::Optional.is_wrapper());
    assert!(!TypeKind::ErrorUnion.is_wrapper());
    assert!(!TypeKind::Struct.is_wrapper());
}

#[test]
fn is_composite() {
    assert!(TypeKind::Struct.is_composite());
    assert!(TypeKind::Enum.is_composite());
    assert!(TypeKind::Union.is_composite());
    assert!(!TypeKind::Function.is_composite());
    assert!(!TypeKind::Array.is_composite());
}

#[test]
fn synthesizable_kinds() {
    let synthesizable: Vec<_> = TypeKind::ALL
        .into_iter()
        .filter(|k| k.is_synthesizable())
        .collect();
    assert_eq!(
        synthesizable,
        vec![
            TypeKind::Void,
            TypeKind::Bool,
            TypeKind::Int,
            TypeKind::Float,
            TypeKind::Pointer,
            TypeKind::Array,
            TypeKind::Vector,
            TypeKind::Optional,
        ]
    );
}

#[test]
fn reflectable_kinds() {
    assert!(TypeKind::Struct.is_reflectable());
    assert!(TypeKind::Union.is_reflectable());
    assert!(!TypeKind::Function.is_reflectable());
    assert!(!TypeKind::Opaque.is_reflectable());
}

#[test]
fn display_uses_name() {
    assert_eq!(TypeKind::ErrorUnion.to_string(), "error union");
    assert_eq!(TypeKind::Int.to_string(), "int");
}
