mod cli;
mod commands;

use cli::{AbsParams, DemoParams, MatrixParams, ReflectParams, WidenParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("reflect", m)) => {
            let params = ReflectParams::from_matches(m);
            commands::reflect::run(params.into());
        }
        Some(("widen", m)) => {
            let params = WidenParams::from_matches(m);
            commands::widen::run(params.into());
        }
        Some(("matrix", m)) => {
            let params = MatrixParams::from_matches(m);
            commands::matrix::run(params.into());
        }
        Some(("abs", m)) => {
            let params = AbsParams::from_matches(m);
            commands::abs::run(params.into());
        }
        Some(("demo", m)) => {
            let params = DemoParams::from_matches(m);
            commands::demo::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
