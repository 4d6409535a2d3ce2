use typeforge_core::TypeDescriptor;
use typeforge_lib::Value;

use super::abs::{abs, parse_value};
use super::session::Session;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn float_vector() {
    let mut session = Session::new(0, false);
    let result = abs(&mut session, "f32", &strings(&["10", "-10", "5"])).unwrap();

    assert_eq!(result.to_string(), "{10, 10, 5}");
}

#[test]
fn odd_width_signed_vector() {
    let mut session = Session::new(0, false);
    let result = abs(&mut session, "i7", &strings(&["-64", "63"]));

    assert_eq!(
        result.unwrap_err(),
        "absolute value of element 0 overflows `i7`"
    );

    let result = abs(&mut session, "i7", &strings(&["-63", "0"])).unwrap();
    assert_eq!(result.data(), &[Value::Int(63), Value::Int(0)]);
}

#[test]
fn unsigned_vector_rejected() {
    let mut session = Session::new(0, false);
    let err = abs(&mut session, "u8", &strings(&["1", "2"])).unwrap_err();

    assert_eq!(err, "`abs` is not supported for element type `u8`");
}

#[test]
fn out_of_range_literal() {
    let mut session = Session::new(0, false);
    let err = abs(&mut session, "i8", &strings(&["1", "200"])).unwrap_err();

    assert_eq!(err, "element 1 is not a value of type `i8`");
}

#[test]
fn parse_by_element_kind() {
    let u8_ty = TypeDescriptor::unsigned(8).unwrap();

    assert_eq!(parse_value(&TypeDescriptor::Bool, "true"), Ok(Value::Bool(true)));
    assert_eq!(parse_value(&u8_ty, "7"), Ok(Value::UInt(7)));
    assert_eq!(
        parse_value(&u8_ty, "-7"),
        Err("`-7` is not a value of type `u8`".to_string())
    );
    assert_eq!(
        parse_value(&TypeDescriptor::float(64).unwrap(), "2.5"),
        Ok(Value::Float(2.5))
    );
}
