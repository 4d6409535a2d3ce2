use super::*;

#[test]
fn int_constructor_accepts_full_range() {
    let one = TypeDescriptor::unsigned(1).unwrap();
    let max = TypeDescriptor::signed(65535).unwrap();

    assert_eq!(one.bits(), Some(1));
    assert_eq!(max.bits(), Some(65535));
    assert_eq!(max.signedness(), Some(Signedness::Signed));
}

#[test]
fn zero_bit_width_is_invalid_attribute() {
    let err = TypeDescriptor::unsigned(0).unwrap_err();

    assert_eq!(err.attribute(), "bits");
    assert!(matches!(
        err,
        DescriptorError::InvalidAttribute {
            kind: TypeKind::Int,
            ..
        }
    ));
}

#[test]
fn oversized_bit_width_is_invalid_attribute() {
    let err = TypeDescriptor::signed(65536).unwrap_err();
    assert_eq!(err.attribute(), "bits");
}

#[test]
fn float_widths_are_a_closed_set() {
    for bits in [16, 32, 64, 80, 128] {
        assert_eq!(TypeDescriptor::float(bits).unwrap().bits(), Some(bits));
    }
    assert!(TypeDescriptor::float(24).is_err());
    assert!(TypeDescriptor::float(0).is_err());
}

#[test]
fn structural_equality() {
    let a = TypeDescriptor::array(TypeDescriptor::float(32).unwrap(), 4).unwrap();
    let b = TypeDescriptor::array(TypeDescriptor::float(32).unwrap(), 4).unwrap();
    let c = TypeDescriptor::array(TypeDescriptor::float(32).unwrap(), 5).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn accessors_by_kind() {
    let u8_ty = TypeDescriptor::unsigned(8).unwrap();
    let arr = TypeDescriptor::array(u8_ty.clone(), 3).unwrap();
    let vec = TypeDescriptor::vector(u8_ty.clone(), 4).unwrap();

    assert_eq!(arr.kind(), TypeKind::Array);
    assert_eq!(arr.len(), Some(3));
    assert_eq!(arr.child(), Some(&u8_ty));
    assert_eq!(vec.len(), Some(4));
    assert_eq!(u8_ty.child(), None);
    assert_eq!(u8_ty.len(), None);
    assert_eq!(TypeDescriptor::Bool.bits(), None);
    assert_eq!(TypeDescriptor::Bool.signedness(), None);
}

#[test]
fn struct_fields_keep_declaration_order() {
    let point = TypeDescriptor::structure(
        "Point",
        vec![
            Field::new("y", TypeDescriptor::float(32).unwrap()),
            Field::new("x", TypeDescriptor::float(32).unwrap()),
        ],
    )
    .unwrap();

    let names: Vec<_> = point.fields().unwrap().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["y", "x"]);
    assert_eq!(point.name(), Some("Point"));
}

#[test]
fn widened_produces_new_descriptor() {
    let u8_ty = TypeDescriptor::unsigned(8).unwrap();
    let u9_ty = u8_ty.widened(1).unwrap();

    assert_eq!(u8_ty.bits(), Some(8));
    assert_eq!(u9_ty, TypeDescriptor::unsigned(9).unwrap());

    let i31 = TypeDescriptor::signed(31).unwrap();
    assert_eq!(i31.widened(1).unwrap(), TypeDescriptor::signed(32).unwrap());
}

#[test]
fn widened_past_max_is_invalid() {
    let max = TypeDescriptor::unsigned(65535).unwrap();
    assert_eq!(max.widened(1).unwrap_err().attribute(), "bits");
}

#[test]
fn widened_rejects_non_integers() {
    let err = TypeDescriptor::float(32).unwrap().widened(1).unwrap_err();
    assert!(matches!(
        err,
        DescriptorError::InvalidAttribute {
            kind: TypeKind::Float,
            attribute: "bits",
            ..
        }
    ));
}

#[test]
fn with_signedness_flips_integer() {
    let u16_ty = TypeDescriptor::unsigned(16).unwrap();
    assert_eq!(
        u16_ty.with_signedness(Signedness::Signed).unwrap(),
        TypeDescriptor::signed(16).unwrap()
    );
    assert!(TypeDescriptor::Bool
        .with_signedness(Signedness::Signed)
        .is_err());
}

#[test]
fn with_sentinel_on_array() {
    let arr = TypeDescriptor::array(TypeDescriptor::unsigned(8).unwrap(), 5).unwrap();
    let terminated = arr.with_sentinel(0).unwrap();

    assert_eq!(terminated.sentinel(), Some(0));
    assert_eq!(arr.sentinel(), None);
    assert_ne!(arr, terminated);
}

#[test]
fn sentinel_must_fit_child() {
    let arr = TypeDescriptor::array(TypeDescriptor::unsigned(8).unwrap(), 5).unwrap();
    assert_eq!(arr.with_sentinel(256).unwrap_err().attribute(), "sentinel");
    assert_eq!(arr.with_sentinel(-1).unwrap_err().attribute(), "sentinel");
}

#[test]
fn single_item_pointer_has_no_sentinel() {
    let ptr = TypeDescriptor::pointer(PointerSize::One, true, TypeDescriptor::unsigned(8).unwrap())
        .unwrap();
    assert!(ptr.with_sentinel(0).is_err());

    let many = TypeDescriptor::pointer(PointerSize::Many, true, TypeDescriptor::unsigned(8).unwrap())
        .unwrap();
    assert_eq!(many.with_sentinel(0).unwrap().sentinel(), Some(0));
}

#[test]
fn signed_numeric() {
    assert!(TypeDescriptor::signed(8).unwrap().is_signed_numeric());
    assert!(TypeDescriptor::float(64).unwrap().is_signed_numeric());
    assert!(!TypeDescriptor::unsigned(8).unwrap().is_signed_numeric());
    assert!(!TypeDescriptor::Bool.is_signed_numeric());
}

#[test]
fn int_ranges() {
    assert!(int_fits(Signedness::Unsigned, 8, 255));
    assert!(!int_fits(Signedness::Unsigned, 8, 256));
    assert!(!int_fits(Signedness::Unsigned, 8, -1));
    assert!(int_fits(Signedness::Signed, 8, -128));
    assert!(!int_fits(Signedness::Signed, 8, -129));
    assert!(int_fits(Signedness::Signed, 1, -1));
    assert!(!int_fits(Signedness::Signed, 1, 1));
    assert!(int_fits(Signedness::Signed, 128, i128::MIN));
    assert!(int_fits(Signedness::Unsigned, 127, i128::MAX));
    assert!(uint_fits(128, u128::MAX));
    assert!(!uint_fits(127, u128::MAX));
}

#[test]
fn zero_width_holds_no_values() {
    assert!(!int_fits(Signedness::Signed, 0, 0));
    assert!(!int_fits(Signedness::Signed, 0, -1));
    assert!(!int_fits(Signedness::Unsigned, 0, 0));
    assert!(!uint_fits(0, 0));
}

#[test]
fn serde_shape_is_tagged_by_kind() {
    let ty = TypeDescriptor::array(TypeDescriptor::unsigned(9).unwrap(), 2).unwrap();
    let json = serde_json::to_string(&ty).unwrap();

    insta::assert_snapshot!(json, @r#"{"kind":"array","len":2,"child":{"kind":"int","signedness":"unsigned","bits":9}}"#);
}

#[test]
fn serde_float_bits_round_trip_as_numbers() {
    let json = r#"{"kind":"float","bits":80}"#;
    let ty: TypeDescriptor = serde_json::from_str(json).unwrap();

    assert_eq!(ty, TypeDescriptor::float(80).unwrap());
    assert!(serde_json::from_str::<TypeDescriptor>(r#"{"kind":"float","bits":24}"#).is_err());
}

#[test]
fn deserialized_descriptor_can_be_invalid_until_validated() {
    let ty: TypeDescriptor =
        serde_json::from_str(r#"{"kind":"int","signedness":"signed","bits":0}"#).unwrap();

    assert_eq!(ty.validate().unwrap_err().attribute(), "bits");
    assert!(!ty.int_fits(0));
    assert!(!ty.int_fits(i128::MIN));
}
