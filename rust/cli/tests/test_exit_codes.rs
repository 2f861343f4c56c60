//! Exit codes and stream usage of the klondike binary entry point.
//!
//! - A session that ends by QUIT, a win or EOF returns 0
//! - Argument errors return 2 and are written to stderr
//! - Help and version go to stdout with exit code 0

use std::io::Cursor;

fn run(args: &[&str], script: &str) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut input = Cursor::new(script.to_string());
    let code = patience_cli::run_with_input(args.iter().copied(), &mut input, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_quit_returns_zero() {
    let (code, out, err) = run(&["klondike", "--seed", "42"], "quit\n");
    assert_eq!(code, 0);
    assert!(out.contains("Game abandoned."));
    assert!(err.is_empty(), "unexpected stderr: {}", err);
}

#[test]
fn test_eof_returns_zero() {
    let (code, out, _) = run(&["klondike", "--seed", "42"], "");
    assert_eq!(code, 0);
    assert!(out.contains("Game left unfinished."));
}

#[test]
fn test_help_goes_to_stdout() {
    let (code, out, err) = run(&["klondike", "--help"], "");
    assert_eq!(code, 0);
    assert!(out.contains("Usage"));
    assert!(out.contains("--seed"));
    assert!(err.is_empty());
}

#[test]
fn test_version_goes_to_stdout() {
    let (code, out, _) = run(&["klondike", "--version"], "");
    assert_eq!(code, 0);
    assert!(out.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_flag_returns_two() {
    let (code, out, err) = run(&["klondike", "--turbo"], "quit\n");
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("--turbo"));
    assert!(err.contains("klondike --help"));
}

#[test]
fn test_non_numeric_seed_warns_and_plays() {
    let (code, out, err) = run(&["klondike", "--seed", "abc"], "quit\n");
    assert_eq!(code, 0);
    assert!(err.starts_with("WARNING: Seed 'abc' is not a number"));
    assert!(out.starts_with("Klondike, seed "));
}

#[test]
fn test_bad_commands_do_not_end_the_session() {
    let (code, out, err) = run(&["klondike", "--seed", "1"], "frobnicate\n\nmove\nquit\n");
    assert_eq!(code, 0);
    assert_eq!(err, "Error: Bad command\nError: Missing arguments\n");
    assert!(out.contains("Game abandoned."));
}
