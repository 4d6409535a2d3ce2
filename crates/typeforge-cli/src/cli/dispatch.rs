//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` mirror the command `*Args` but keep the raw `ColorChoice`;
//! the `Into<*Args>` impls resolve it against the terminal.

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::abs::AbsArgs;
use crate::commands::demo::DemoArgs;
use crate::commands::matrix::MatrixArgs;
use crate::commands::reflect::ReflectArgs;
use crate::commands::widen::WidenArgs;

pub struct ReflectParams {
    pub type_name: String,
    pub json: bool,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl ReflectParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            type_name: parse_type_name(m),
            json: m.get_flag("json"),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<ReflectParams> for ReflectArgs {
    fn from(p: ReflectParams) -> Self {
        Self {
            type_name: p.type_name,
            json: p.json,
            verbose: p.verbose,
            color: p.color.should_colorize(),
        }
    }
}

pub struct WidenParams {
    pub type_name: String,
    pub by: u16,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl WidenParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            type_name: parse_type_name(m),
            by: m.get_one::<u16>("by").copied().unwrap_or(1),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<WidenParams> for WidenArgs {
    fn from(p: WidenParams) -> Self {
        Self {
            type_name: p.type_name,
            by: p.by,
            verbose: p.verbose,
            color: p.color.should_colorize(),
        }
    }
}

pub struct MatrixParams {
    pub type_name: String,
    pub width: u32,
    pub height: u32,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl MatrixParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            type_name: parse_type_name(m),
            // Required args; clap rejects the command line before we get here.
            width: m.get_one::<u32>("width").copied().unwrap_or_default(),
            height: m.get_one::<u32>("height").copied().unwrap_or_default(),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<MatrixParams> for MatrixArgs {
    fn from(p: MatrixParams) -> Self {
        Self {
            type_name: p.type_name,
            width: p.width,
            height: p.height,
            verbose: p.verbose,
            color: p.color.should_colorize(),
        }
    }
}

pub struct AbsParams {
    pub type_name: String,
    pub values: Vec<String>,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl AbsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            type_name: parse_type_name(m),
            values: m
                .get_many::<String>("values")
                .map(|vals| vals.cloned().collect())
                .unwrap_or_default(),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<AbsParams> for AbsArgs {
    fn from(p: AbsParams) -> Self {
        Self {
            type_name: p.type_name,
            values: p.values,
            verbose: p.verbose,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DemoParams {
    pub verbose: u8,
    pub color: ColorChoice,
}

impl DemoParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<DemoParams> for DemoArgs {
    fn from(p: DemoParams) -> Self {
        Self {
            verbose: p.verbose,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_type_name(m: &ArgMatches) -> String {
    m.get_one::<String>("type").cloned().unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
