//! A guided tour: each step exercises one component against a shared registry.

use std::fmt::{Arguments, Display, Write as _};

use typeforge_core::{Colors, TypeDescriptor};
use typeforge_lib::{TypeId, Value};

use super::session::Session;
use super::widen::widen;

pub struct DemoArgs {
    pub verbose: u8,
    pub color: bool,
}

pub fn run(args: DemoArgs) {
    let mut session = Session::new(args.verbose, args.color);

    match render(&mut session) {
        Ok(out) => print!("{out}"),
        Err(msg) => session.fail(msg),
    }

    session.finish();
}

fn msg(e: impl Display) -> String {
    e.to_string()
}

/// Run every step and collect the report.
pub fn render(session: &mut Session) -> Result<String, String> {
    let mut out = Report::new(session);

    // Reflect, widen, synthesize.
    let (u8_id, u9_id) = widen(session, "u8", 1)?;
    out.step(
        "widen",
        format_args!("{} -> {} {u9_id}", name(session, u8_id), name(session, u9_id)),
    );

    let (i31_id, wider) = widen(session, "i31", 1)?;
    let i32_id = session.ctx.type_of::<i32>().map_err(msg)?;
    out.step(
        "widen",
        format_args!(
            "{} -> {} {wider}, builtin i32 is {i32_id}",
            name(session, i31_id),
            name(session, wider)
        ),
    );

    // Matrix identity.
    let f32_id = session.resolve("f32")?;
    let square = matrix(session, f32_id, 2, 2)?;
    let again = matrix(session, f32_id, 2, 2)?;
    let wide = matrix(session, f32_id, 3, 2)?;
    out.step(
        "matrix",
        format_args!(
            "{} {square}, again {again}; {} {wide}",
            name(session, square),
            name(session, wide)
        ),
    );

    // Vector template with a bound operation.
    let vec3 = session
        .ctx
        .instantiate_with(f32_id, 3, &mut session.tracer)
        .map_err(msg)?;
    let input = vec3
        .construct(vec![Value::Float(10.0), Value::Float(-10.0), Value::Float(5.0)])
        .map_err(msg)?;
    let result = vec3.elementwise_abs(&input).map_err(msg)?;
    out.step(
        "abs",
        format_args!("{} {input} -> {}", vec3.name(), value(session, &result)),
    );

    // Rejections.
    let bytes = session
        .ctx
        .instantiate_with(u8_id, 2, &mut session.tracer)
        .map_err(msg)?;
    let pair = bytes
        .construct(vec![Value::UInt(1), Value::UInt(2)])
        .map_err(msg)?;
    if let Err(e) = bytes.elementwise_abs(&pair) {
        out.step("reject", format_args!("{}: {e}", bytes.name()));
    }

    let signature =
        TypeDescriptor::function(vec![TypeDescriptor::signed(32).map_err(msg)?], TypeDescriptor::Bool)
            .map_err(msg)?;
    let f = session.ctx.declare(signature).map_err(msg)?;
    if let Err(e) = session.ctx.reflect_with(f, &mut session.tracer) {
        out.step("reject", format_args!("{e}"));
    }

    Ok(out.finish())
}

fn matrix(session: &mut Session, element: TypeId, width: u32, height: u32) -> Result<TypeId, String> {
    session
        .ctx
        .instantiate_matrix_with(element, width, height, &mut session.tracer)
        .map_err(msg)
}

fn name(session: &Session, id: TypeId) -> String {
    let c = session.colors;
    format!("{}{}{}", c.name, session.ctx.name_of(id), c.reset)
}

fn value(session: &Session, v: &impl Display) -> String {
    let c = session.colors;
    format!("{}{v}{}", c.value, c.reset)
}

/// Collects one aligned line per step.
struct Report {
    text: String,
    colors: Colors,
}

impl Report {
    fn new(session: &Session) -> Self {
        Self {
            text: String::new(),
            colors: session.colors,
        }
    }

    fn step(&mut self, label: &str, text: Arguments<'_>) {
        let c = self.colors;
        let _ = writeln!(self.text, "{}{label:<7}{} {text}", c.meta, c.reset);
    }

    fn finish(self) -> String {
        self.text
    }
}
