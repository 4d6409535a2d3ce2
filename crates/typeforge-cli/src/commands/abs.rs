use typeforge_core::{Signedness, TypeDescriptor};
use typeforge_lib::{CompositeValue, Value};

use super::session::Session;

pub struct AbsArgs {
    pub type_name: String,
    pub values: Vec<String>,
    pub verbose: u8,
    pub color: bool,
}

pub fn run(args: AbsArgs) {
    let mut session = Session::new(args.verbose, args.color);

    match abs(&mut session, &args.type_name, &args.values) {
        Ok(result) => {
            let c = session.colors;
            println!("{}{}{}", c.value, result, c.reset);
        }
        Err(msg) => session.fail(msg),
    }

    session.finish();
}

/// Instantiate `Vec(N, element)` over the given values and take their
/// absolute value.
pub fn abs(session: &mut Session, element: &str, values: &[String]) -> Result<CompositeValue, String> {
    let element = session.resolve(element)?;
    let count = u32::try_from(values.len()).map_err(|_| "too many values".to_string())?;
    let vector = session
        .ctx
        .instantiate_with(element, count, &mut session.tracer)
        .map_err(|e| e.to_string())?;

    let data = values
        .iter()
        .map(|text| parse_value(vector.element_type(), text))
        .collect::<Result<Vec<_>, _>>()?;
    let value = vector.construct(data).map_err(|e| e.to_string())?;
    vector.elementwise_abs(&value).map_err(|e| e.to_string())
}

/// Parse a literal as a value of the element type's variant.
///
/// Range checks happen later, in `Composite::construct`.
pub fn parse_value(element: &TypeDescriptor, text: &str) -> Result<Value, String> {
    let parsed = match element {
        TypeDescriptor::Bool => text.parse().ok().map(Value::Bool),
        TypeDescriptor::Int {
            signedness: Signedness::Signed,
            ..
        } => text.parse().ok().map(Value::Int),
        TypeDescriptor::Int {
            signedness: Signedness::Unsigned,
            ..
        } => text.parse().ok().map(Value::UInt),
        TypeDescriptor::Float { .. } => text.parse().ok().map(Value::Float),
        _ => None,
    };
    parsed.ok_or_else(|| format!("`{text}` is not a value of type `{element}`"))
}
