use super::session::Session;

pub struct MatrixArgs {
    pub type_name: String,
    pub width: u32,
    pub height: u32,
    pub verbose: u8,
    pub color: bool,
}

pub fn run(args: MatrixArgs) {
    let mut session = Session::new(args.verbose, args.color);

    let element = session
        .resolve(&args.type_name)
        .unwrap_or_else(|msg| session.fail(msg));
    let id = match session.ctx.instantiate_matrix_with(
        element,
        args.width,
        args.height,
        &mut session.tracer,
    ) {
        Ok(id) => id,
        Err(e) => session.fail(e),
    };

    let c = session.colors;
    println!(
        "{}{}{} {}{}{}",
        c.name,
        session.ctx.name_of(id),
        c.reset,
        c.meta,
        id,
        c.reset
    );

    session.finish();
}
