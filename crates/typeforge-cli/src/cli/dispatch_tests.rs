//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Every subcommand accepts the common `--color` and `-v` flags
//! 2. Params extraction: correct fields are extracted from ArgMatches
//! 3. Invalid input is rejected by clap before dispatch

use super::*;
use crate::cli::commands::{
    abs_command, build_cli, demo_command, matrix_command, reflect_command, widen_command,
};

#[test]
fn reflect_params() {
    let m = reflect_command()
        .try_get_matches_from(["reflect", "u9", "--json", "--color", "never"])
        .unwrap();
    let params = ReflectParams::from_matches(&m);

    assert_eq!(params.type_name, "u9");
    assert!(params.json);
    assert_eq!(params.verbose, 0);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn widen_defaults_to_one_bit() {
    let m = widen_command().try_get_matches_from(["widen", "u8"]).unwrap();
    let params = WidenParams::from_matches(&m);

    assert_eq!(params.by, 1);
    assert_eq!(params.color, ColorChoice::Auto);

    let m = widen_command()
        .try_get_matches_from(["widen", "i31", "--by", "33"])
        .unwrap();
    assert_eq!(WidenParams::from_matches(&m).by, 33);
}

#[test]
fn widen_rejects_out_of_range_step() {
    let result = widen_command().try_get_matches_from(["widen", "u8", "--by", "70000"]);
    assert!(result.is_err());
}

#[test]
fn matrix_params() {
    let m = matrix_command()
        .try_get_matches_from(["matrix", "f32", "3", "2", "-vv"])
        .unwrap();
    let params = MatrixParams::from_matches(&m);

    assert_eq!(params.type_name, "f32");
    assert_eq!((params.width, params.height), (3, 2));
    assert_eq!(params.verbose, 2);
}

#[test]
fn matrix_requires_dimensions() {
    assert!(matrix_command().try_get_matches_from(["matrix", "f32", "3"]).is_err());
    assert!(matrix_command().try_get_matches_from(["matrix", "f32", "x", "2"]).is_err());
}

#[test]
fn abs_accepts_negative_values() {
    let m = abs_command()
        .try_get_matches_from(["abs", "f32", "10", "-10", "5", "-v"])
        .unwrap();
    let params = AbsParams::from_matches(&m);

    assert_eq!(params.values, ["10", "-10", "5"]);
    assert_eq!(params.verbose, 1);
}

#[test]
fn abs_requires_values() {
    assert!(abs_command().try_get_matches_from(["abs", "f32"]).is_err());
}

#[test]
fn demo_accepts_common_flags() {
    let m = demo_command()
        .try_get_matches_from(["demo", "--color", "always", "-v"])
        .unwrap();
    let params = DemoParams::from_matches(&m);

    assert_eq!(params.color, ColorChoice::Always);
    assert_eq!(params.verbose, 1);
}

#[test]
fn subcommand_required() {
    assert!(build_cli().try_get_matches_from(["typeforge"]).is_err());

    let m = build_cli()
        .try_get_matches_from(["typeforge", "reflect", "bool"])
        .unwrap();
    assert_eq!(m.subcommand_name(), Some("reflect"));
}

#[test]
fn cli_is_well_formed() {
    build_cli().debug_assert();
}
