//! Behavioral specs for pattern file resolution and match policy.

use crate::prelude::*;

/// > ~/.config/untty/escape_exprs replaces the built-in patterns
#[test]
fn user_pattern_file_is_used() {
    let home = Home::with_patterns("# only x\n^x\n");
    untty_cmd()
        .env("HOME", home.path())
        .write_stdin("\x1bxA\x1b[1mB")
        .assert()
        .success()
        .stdout("A\\x1b[1mB");
}

/// > UNTTY_ESCAPE_EXPRS takes precedence over the home directory file
#[test]
fn env_override_takes_precedence() {
    let home = Home::with_patterns("^x\n");
    let custom = home.file("custom_exprs", "^y\n");
    untty_cmd()
        .env("HOME", home.path())
        .env("UNTTY_ESCAPE_EXPRS", &custom)
        .write_stdin("\x1byA\n")
        .assert()
        .success()
        .stdout("A\n");
}

/// > --patterns selects a pattern file explicitly
#[test]
fn patterns_flag_selects_file() {
    let home = Home::empty();
    let custom = home.file("exprs", "\n# blank lines and comments are skipped\n\n^z\n");
    untty_cmd()
        .arg("--patterns")
        .arg(&custom)
        .write_stdin("\x1bzA\n")
        .assert()
        .success()
        .stdout("A\n");
}

/// > A missing pattern file falls back to the built-in defaults
#[test]
fn missing_pattern_file_uses_defaults() {
    untty_cmd()
        .env("UNTTY_ESCAPE_EXPRS", "/nonexistent/escape_exprs")
        .write_stdin("\x1b[1mX\n")
        .assert()
        .success()
        .stdout("X\n");
}

/// > A pattern that fails to compile exits 1 before any output
#[test]
fn bad_pattern_exits_with_setup_error() {
    let home = Home::with_patterns("^ok\n(unclosed\n");
    untty_cmd()
        .env("HOME", home.path())
        .write_stdin("plain text\n")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicates::str::contains("could not compile regexp"))
        .stderr(predicates::str::contains("(unclosed"))
        .stderr(predicates::str::contains("line 2"));
}

/// > A pattern file that exists but cannot be read exits 1
#[test]
fn unreadable_pattern_file_exits_with_setup_error() {
    let home = Home::empty();
    untty_cmd()
        .env("UNTTY_ESCAPE_EXPRS", home.path())
        .write_stdin("plain\n")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicates::str::contains("could not read"));
}

/// > Shortest match is the default; --match-policy longest changes the winner
#[test]
fn match_policy_controls_overlapping_patterns() {
    let home = Home::with_patterns("^\\[1\\B\n^\\[1m\n");

    untty_cmd()
        .env("HOME", home.path())
        .write_stdin("\x1b[1mX")
        .assert()
        .success()
        .stdout("mX");

    untty_cmd()
        .env("HOME", home.path())
        .args(["--match-policy", "longest"])
        .write_stdin("\x1b[1mX")
        .assert()
        .success()
        .stdout("X");
}
