use typeforge_core::TypeDescriptor;

use super::*;

#[test]
fn ints_checked_against_width() {
    let u8_ty = TypeDescriptor::unsigned(8).unwrap();
    let i8_ty = TypeDescriptor::signed(8).unwrap();

    assert!(Value::UInt(255).inhabits(&u8_ty));
    assert!(!Value::UInt(256).inhabits(&u8_ty));
    assert!(Value::Int(0).inhabits(&u8_ty));
    assert!(!Value::Int(-1).inhabits(&u8_ty));

    assert!(Value::Int(-128).inhabits(&i8_ty));
    assert!(!Value::Int(128).inhabits(&i8_ty));
    assert!(Value::UInt(127).inhabits(&i8_ty));
    assert!(!Value::UInt(u128::MAX).inhabits(&i8_ty));
}

#[test]
fn wide_signed_ints_hold_every_u128() {
    let i200 = TypeDescriptor::signed(200).unwrap();
    let i128_ty = TypeDescriptor::signed(128).unwrap();

    assert!(Value::UInt(u128::MAX).inhabits(&i200));
    assert!(Value::Int(i128::MIN).inhabits(&i200));
    assert!(!Value::UInt(u128::MAX).inhabits(&i128_ty));
    assert!(Value::UInt(i128::MAX as u128).inhabits(&i128_ty));
}

#[test]
fn kinds_must_match() {
    let f32_ty = TypeDescriptor::float(32).unwrap();

    assert!(Value::Float(-1.5).inhabits(&f32_ty));
    assert!(!Value::Int(1).inhabits(&f32_ty));
    assert!(!Value::Float(1.0).inhabits(&TypeDescriptor::Bool));
    assert!(Value::Bool(false).inhabits(&TypeDescriptor::Bool));
    assert!(!Value::Bool(false).inhabits(&TypeDescriptor::Void));
}

#[test]
fn display() {
    assert_eq!(Value::Float(10.0).to_string(), "10");
    assert_eq!(Value::Float(-2.5).to_string(), "-2.5");
    assert_eq!(Value::Int(-3).to_string(), "-3");
    assert_eq!(Value::from(true).to_string(), "true");
}

#[test]
fn json_shape() {
    let values = vec![Value::Int(-3), Value::UInt(7), Value::Bool(true), Value::Float(0.5)];
    insta::assert_snapshot!(
        serde_json::to_string(&values).unwrap(),
        @r#"[{"int":-3},{"uint":7},{"bool":true},{"float":0.5}]"#
    );
}
