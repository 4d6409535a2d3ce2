use typeforge_core::{EnumVariant, Field, PointerSize, Signedness, TypeDescriptor};

use crate::{reflect_enum, reflect_struct};

use super::*;

#[test]
fn integer_widths_follow_rust() {
    assert_eq!(u8::describe(), TypeDescriptor::unsigned(8).unwrap());
    assert_eq!(i128::describe(), TypeDescriptor::signed(128).unwrap());
    assert_eq!(usize::describe().bits(), Some(usize::BITS as u16));
    assert_eq!(isize::describe().signedness(), Some(Signedness::Signed));
}

#[test]
fn references_and_raw_pointers() {
    let shared = <&u8>::describe();
    assert_eq!(shared.to_string(), "*const u8");

    let exclusive = <&mut u8>::describe();
    assert_eq!(exclusive.to_string(), "*u8");

    let raw = <*const u8>::describe();
    assert_eq!(
        raw,
        TypeDescriptor::pointer(PointerSize::Many, true, TypeDescriptor::unsigned(8).unwrap())
            .unwrap()
    );
}

#[test]
fn nested_wrappers() {
    assert_eq!(<[[f32; 2]; 3]>::describe().to_string(), "[3][2]f32");
    assert_eq!(<Option<&i32>>::describe().to_string(), "?*const i32");
}

#[test]
fn function_pointers() {
    assert_eq!(<fn()>::describe().to_string(), "fn() void");
    assert_eq!(<fn(u8, bool) -> f64>::describe().to_string(), "fn(u8, bool) f64");
}

#[allow(dead_code)]
struct Point {
    x: f32,
    y: f32,
}

reflect_struct!(Point { x: f32, y: f32 });

#[allow(dead_code)]
#[repr(u8)]
enum Color {
    Red = 0,
    Green = 1,
    Blue = 4,
}

reflect_enum!(Color: u8 { Red = 0, Green = 1, Blue = 4 });

#[test]
fn struct_macro() {
    let expected = TypeDescriptor::structure(
        "Point",
        vec![
            Field::new("x", TypeDescriptor::float(32).unwrap()),
            Field::new("y", TypeDescriptor::float(32).unwrap()),
        ],
    )
    .unwrap();
    assert_eq!(Point::describe(), expected);
    assert!(<&Point>::describe().validate().is_ok());
}

#[test]
fn enum_macro() {
    let expected = TypeDescriptor::enumeration(
        "Color",
        TypeDescriptor::unsigned(8).unwrap(),
        vec![
            EnumVariant::new("Red", 0),
            EnumVariant::new("Green", 1),
            EnumVariant::new("Blue", 4),
        ],
    )
    .unwrap();
    assert_eq!(Color::describe(), expected);
}
