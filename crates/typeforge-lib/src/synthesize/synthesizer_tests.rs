use typeforge_core::{Field, PointerSize, TypeDescriptor, TypeKind};

use crate::context::TypeContext;

use super::*;

#[test]
fn round_trip_builtin_scalars() {
    let mut ctx = TypeContext::new();
    let names = [
        "void", "bool", "u8", "u16", "u32", "u64", "u128", "i8", "i16", "i32", "i64", "i128",
        "f16", "f32", "f64", "f80", "f128",
    ];

    for name in names {
        let id = ctx.lookup(name).unwrap();
        let ty = ctx.reflect(id).unwrap();
        assert_eq!(ctx.synthesize(&ty).unwrap(), id, "{name}");
    }
}

#[test]
fn round_trip_wrappers() {
    let mut ctx = TypeContext::new();
    let u8_ty = TypeDescriptor::unsigned(8).unwrap();
    let wrappers = [
        TypeDescriptor::pointer(PointerSize::Slice, true, u8_ty.clone()).unwrap(),
        TypeDescriptor::array(u8_ty.clone(), 5).unwrap().with_sentinel(0).unwrap(),
        TypeDescriptor::vector(TypeDescriptor::float(32).unwrap(), 4).unwrap(),
        TypeDescriptor::optional(u8_ty).unwrap(),
    ];

    for ty in wrappers {
        let id = ctx.synthesize(&ty).unwrap();
        assert_eq!(ctx.reflect(id).unwrap(), ty);
        assert_eq!(ctx.synthesize(&ty).unwrap(), id);
    }
}

#[test]
fn widen_u8_to_u9() {
    let mut ctx = TypeContext::new();
    let u8_id = ctx.lookup("u8").unwrap();

    let wider = ctx.reflect(u8_id).unwrap().widened(1).unwrap();
    let u9_id = ctx.synthesize(&wider).unwrap();

    assert_ne!(u9_id, u8_id);
    assert_eq!(ctx.name_of(u9_id), "u9");
    assert_eq!(ctx.synthesize(&"u9".parse().unwrap()).unwrap(), u9_id);
}

#[test]
fn widen_i31_to_i32() {
    let mut ctx = TypeContext::new();
    let i31 = ctx.synthesize(&TypeDescriptor::signed(31).unwrap()).unwrap();

    let wider = ctx.reflect(i31).unwrap().widened(1).unwrap();
    assert_eq!(ctx.synthesize(&wider).unwrap(), ctx.type_of::<i32>().unwrap());
}

#[test]
fn struct_is_not_synthesizable() {
    let mut ctx = TypeContext::new();
    let point = TypeDescriptor::structure("Point", vec![Field::new("x", TypeDescriptor::Bool)])
        .unwrap();

    let err = ctx.synthesize(&point).unwrap_err();
    assert_eq!(
        err,
        SynthesizeError::UnsynthesizableKind {
            kind: TypeKind::Struct,
            name: "Point".to_string(),
        }
    );
    assert_eq!(err.to_string(), "cannot synthesize struct type `Point`");
}

#[test]
fn other_nominal_kinds_rejected() {
    let mut ctx = TypeContext::new();
    let rejected = [
        TypeDescriptor::error_set(["Oops"]).unwrap(),
        TypeDescriptor::opaque("Handle").unwrap(),
        TypeDescriptor::function(vec![], TypeDescriptor::Void).unwrap(),
    ];

    for ty in rejected {
        assert!(matches!(
            ctx.synthesize(&ty),
            Err(SynthesizeError::UnsynthesizableKind { .. })
        ));
    }
}

#[test]
fn undeclared_child_rejected_declared_child_accepted() {
    let mut ctx = TypeContext::new();
    let point = TypeDescriptor::structure("Point", vec![Field::new("x", TypeDescriptor::Bool)])
        .unwrap();
    let ptr = TypeDescriptor::pointer(PointerSize::One, false, point.clone()).unwrap();

    assert!(matches!(
        ctx.synthesize(&ptr),
        Err(SynthesizeError::UnsynthesizableKind {
            kind: TypeKind::Struct,
            ..
        })
    ));

    ctx.declare(point).unwrap();
    let id = ctx.synthesize(&ptr).unwrap();
    assert_eq!(ctx.name_of(id), "*struct Point");
}

#[test]
fn invalid_descriptor_rejected() {
    let mut ctx = TypeContext::new();
    let zero_bits: TypeDescriptor =
        serde_json::from_str(r#"{"kind":"int","signedness":"unsigned","bits":0}"#).unwrap();

    let err = ctx.synthesize(&zero_bits).unwrap_err();
    assert!(matches!(&err, SynthesizeError::InvalidDescriptor(e) if e.attribute() == "bits"));
    assert!(err.to_string().starts_with("invalid descriptor: "));
}

#[test]
fn synthesize_never_duplicates() {
    let mut ctx = TypeContext::new();
    let before = ctx.len();
    let ty = TypeDescriptor::unsigned(7).unwrap();

    let a = ctx.synthesize(&ty).unwrap();
    let b = ctx.synthesize(&ty).unwrap();

    assert_eq!(a, b);
    assert_eq!(ctx.len(), before + 1);
}
