//! Behavioral specs for command-line handling.

use crate::prelude::*;

/// > --show-defaults prints the built-in pattern file and exits 0
#[test]
fn show_defaults_prints_builtin_patterns() {
    untty_cmd()
        .arg("--show-defaults")
        .assert()
        .success()
        .stdout(predicates::str::contains("# untty escape expressions"))
        .stdout(predicates::str::contains(r"^\["));
}

/// > Unknown arguments are a setup error (exit 1)
#[test]
fn unknown_argument_exits_with_setup_error() {
    untty_cmd()
        .arg("--bogus")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("--bogus"));
}

/// > Only one input file is accepted
#[test]
fn second_input_file_is_rejected() {
    untty_cmd().args(["a.log", "b.log"]).assert().code(1);
}

/// > An input file that cannot be opened is a setup error, before any output
#[test]
fn missing_input_file_exits_with_setup_error() {
    untty_cmd()
        .arg("/nonexistent/console.log")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicates::str::contains("could not open"))
        .stderr(predicates::str::contains("/nonexistent/console.log"));
}

/// > --debug traces state transitions to stderr without changing stdout
#[test]
fn debug_flag_traces_transitions() {
    untty_cmd()
        .arg("--debug")
        .write_stdin("a\x1b[31mb")
        .assert()
        .success()
        .stdout("ab")
        .stderr(predicates::str::contains("NEED_ESCAPE->NEED_MATCH"))
        .stderr(predicates::str::contains("matched 5 characters"));
}

/// > UNTTY_DEBUG enables the same tracing
#[test]
fn debug_env_var_traces_transitions() {
    untty_cmd()
        .env("UNTTY_DEBUG", "1")
        .write_stdin("\x1b[m")
        .assert()
        .success()
        .stdout("")
        .stderr(predicates::str::contains("NEED_MATCH->NEED_ESCAPE"));
}

/// > Without --debug nothing is traced
#[test]
fn no_trace_by_default() {
    untty_cmd()
        .write_stdin("a\x1b[31mb\n")
        .assert()
        .success()
        .stdout("ab\n")
        .stderr("");
}

/// > An invalid --match-policy value is a setup error
#[test]
fn invalid_match_policy_exits_with_setup_error() {
    untty_cmd().args(["--match-policy", "greedy"]).assert().code(1);
}
