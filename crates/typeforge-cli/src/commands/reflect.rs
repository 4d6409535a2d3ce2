use super::session::Session;

pub struct ReflectArgs {
    pub type_name: String,
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
}

pub fn run(args: ReflectArgs) {
    let mut session = Session::new(args.verbose, args.color);

    let id = session
        .resolve(&args.type_name)
        .unwrap_or_else(|msg| session.fail(msg));
    let ty = match session.ctx.reflect_with(id, &mut session.tracer) {
        Ok(ty) => ty,
        Err(e) => session.fail(e),
    };

    if args.json {
        match serde_json::to_string_pretty(&ty) {
            Ok(json) => println!("{json}"),
            Err(e) => session.fail(e),
        }
    } else {
        println!("{}", ty.outline(session.colors));
    }

    session.finish();
}
