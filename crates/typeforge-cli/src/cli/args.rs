//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be reused
//! across subcommands.

use clap::{Arg, ArgAction, value_parser};

/// Type name (positional): a builtin such as `u8`/`anyopaque`, or any
/// scalar name such as `u9` or `i31`.
pub fn type_arg() -> Arg {
    Arg::new("type")
        .value_name("TYPE")
        .required(true)
        .help("Builtin or scalar type name (u8, i31, f80, bool, ...)")
}

/// Print JSON instead of an outline (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the descriptor as JSON")
}

/// Bits to add when widening (--by).
pub fn by_arg() -> Arg {
    Arg::new("by")
        .long("by")
        .value_name("N")
        .default_value("1")
        .value_parser(value_parser!(u16))
        .help("Number of bits to add")
}

/// Matrix width (positional).
pub fn width_arg() -> Arg {
    Arg::new("width")
        .value_name("WIDTH")
        .required(true)
        .value_parser(value_parser!(u32))
        .help("Elements per row")
}

/// Matrix height (positional).
pub fn height_arg() -> Arg {
    Arg::new("height")
        .value_name("HEIGHT")
        .required(true)
        .value_parser(value_parser!(u32))
        .help("Number of rows")
}

/// Vector elements (positional, one or more).
pub fn values_arg() -> Arg {
    Arg::new("values")
        .value_name("VALUES")
        .required(true)
        .num_args(1..)
        .allow_negative_numbers(true)
        .help("Vector elements, parsed as the element type")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Registry trace on stderr (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Trace registry events (-v for new types, -vv to include cache hits)")
}
