//! Command builders for the CLI.
//!
//! Every subcommand takes `--color` and `-v` from the shared builders.

use clap::Command;

use super::args::*;

fn with_common_args(cmd: Command) -> Command {
    cmd.arg(color_arg()).arg(verbose_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("typeforge")
        .about("Reflect, synthesize and instantiate types in a closed registry")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(reflect_command())
        .subcommand(widen_command())
        .subcommand(matrix_command())
        .subcommand(abs_command())
        .subcommand(demo_command())
}

/// Print the descriptor of a type.
pub fn reflect_command() -> Command {
    let cmd = Command::new("reflect")
        .about("Print the descriptor of a type")
        .after_help(
            r#"EXAMPLES:
  typeforge reflect u8                # outline
  typeforge reflect i31 --json        # serialized descriptor"#,
        )
        .arg(type_arg())
        .arg(json_arg());

    with_common_args(cmd)
}

/// Reflect an integer type, widen it and synthesize the result.
pub fn widen_command() -> Command {
    let cmd = Command::new("widen")
        .about("Synthesize a wider integer type")
        .after_help(
            r#"EXAMPLES:
  typeforge widen u8                  # u8 -> u9
  typeforge widen i31 --by 33         # i31 -> i64"#,
        )
        .arg(type_arg())
        .arg(by_arg());

    with_common_args(cmd)
}

/// Instantiate the matrix template.
pub fn matrix_command() -> Command {
    let cmd = Command::new("matrix")
        .about("Instantiate a WIDTH x HEIGHT matrix type")
        .arg(type_arg())
        .arg(width_arg())
        .arg(height_arg());

    with_common_args(cmd)
}

/// Instantiate the vector template and take the element-wise absolute value.
pub fn abs_command() -> Command {
    let cmd = Command::new("abs")
        .about("Element-wise absolute value of a vector")
        .after_help(
            r#"EXAMPLES:
  typeforge abs f32 10 -10 5          # {10, 10, 5}
  typeforge abs u8 1 2                # error: not supported for u8"#,
        )
        .arg(type_arg())
        .arg(values_arg());

    with_common_args(cmd)
}

/// Walk through reflection, synthesis and instantiation.
pub fn demo_command() -> Command {
    with_common_args(Command::new("demo").about("Run a guided tour of the registry"))
}
