use typeforge_core::TypeDescriptor;
use typeforge_lib::TypeId;

use super::session::Session;

pub struct WidenArgs {
    pub type_name: String,
    pub by: u16,
    pub verbose: u8,
    pub color: bool,
}

pub fn run(args: WidenArgs) {
    let mut session = Session::new(args.verbose, args.color);

    match widen(&mut session, &args.type_name, args.by) {
        Ok((from, to)) => {
            let c = session.colors;
            println!(
                "{}{}{} -> {}{}{} {}{}{}",
                c.name,
                session.ctx.name_of(from),
                c.reset,
                c.name,
                session.ctx.name_of(to),
                c.reset,
                c.meta,
                to,
                c.reset
            );
        }
        Err(msg) => session.fail(msg),
    }

    session.finish();
}

/// Reflect `name`, add `by` bits and synthesize the wider type.
pub fn widen(session: &mut Session, name: &str, by: u16) -> Result<(TypeId, TypeId), String> {
    let from = session.resolve(name)?;
    let ty = session
        .ctx
        .reflect_with(from, &mut session.tracer)
        .map_err(|e| e.to_string())?;
    let wider: TypeDescriptor = ty.widened(by).map_err(|e| e.to_string())?;
    let to = session
        .ctx
        .synthesize_with(&wider, &mut session.tracer)
        .map_err(|e| e.to_string())?;
    Ok((from, to))
}
