//! Behavioral specs for stream filtering.

use crate::prelude::*;

/// > Input without escape bytes or CR passes through unchanged
#[test]
fn plain_text_passes_through() {
    untty_cmd()
        .write_stdin("hello\tworld\n\u{e9}t\u{e9}\n")
        .assert()
        .success()
        .stdout("hello\tworld\n\u{e9}t\u{e9}\n");
}

/// > ESC [ 31 m between a and b is removed
#[test]
fn sgr_sequence_is_removed() {
    untty_cmd().write_stdin("a\x1b[31mb").assert().success().stdout("ab");
}

/// > CRLF and CRCR collapse to a single LF
#[test]
fn carriage_returns_are_normalized() {
    untty_cmd()
        .write_stdin("one\r\ntwo\r\rthree\r\n")
        .assert()
        .success()
        .stdout("one\ntwo\nthree\n");
}

/// > An overlong unmatched sequence is flushed with \xHH escaping
#[test]
fn overlong_sequence_is_flushed_literally() {
    untty_cmd()
        .write_stdin("\x1b]0;a very long title\x07ok\n")
        .assert()
        .success()
        .stdout("\\x1b]0;a very long title\x07ok\n");
}

/// > A new escape inside an unresolved sequence flushes the prefix
#[test]
fn interrupted_sequence_is_flushed() {
    untty_cmd()
        .write_stdin("\x1b[3\x1b[1mbold\n")
        .assert()
        .success()
        .stdout("\\x1b[3bold\n");
}

/// > A trailing partial sequence is rendered, exit 0, with a warning
#[test]
fn trailing_partial_sequence_warns() {
    untty_cmd()
        .write_stdin("text\x1b[")
        .assert()
        .success()
        .stdout("text\\x1b[")
        .stderr(predicates::str::contains("unmatched escape at end of input"));
}

/// > Screen(1) garbage `ESC [ [ timestamp ]` loses its ESC [ prefix
#[test]
fn screen_timestamp_garbage_is_cleaned() {
    untty_cmd()
        .write_stdin("\x1b[[    5.953653] usb 1-1: new device\n")
        .assert()
        .success()
        .stdout("[    5.953653] usb 1-1: new device\n");
}

/// > --keep-garbage-prefix flushes it unchanged
#[test]
fn keep_garbage_prefix_flag() {
    untty_cmd()
        .arg("--keep-garbage-prefix")
        .write_stdin("\x1b[[    5.953653] usb\n")
        .assert()
        .success()
        .stdout("\\x1b[[    5.953653] usb\n");
}

/// > The built-in patterns handle a typical colored console session
#[test]
fn typical_console_session() {
    untty_cmd()
        .write_stdin(
            "\x1b]0;host: ~\x07\x1b[?2004h\x1b[01;32muser@host\x1b[00m:\x1b[01;34m~\x1b[00m$ ls\r\n\x1b[?2004l\r\n",
        )
        .assert()
        .success()
        .stdout("user@host:~$ ls\n\n");
}

/// > Input can be read from a file argument
#[test]
fn reads_input_file() {
    let home = Home::empty();
    let log = home.file("console.log", "boot \x1b[1;32mOK\x1b[0m\r\n");
    untty_cmd().arg(&log).assert().success().stdout("boot OK\n");
}

/// > A read failure mid-stream exits 2
#[test]
fn unreadable_input_exits_with_read_error() {
    let home = Home::empty();
    untty_cmd()
        .arg(home.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("could not read input"));
}

/// > Filtering already-filtered output is a no-op
#[test]
fn filtering_is_idempotent() {
    let input = "\x1b[1mtitle\x1b[0m\r\n\x1b[3x\x1b[Kdone\r\n\x1b[";
    let first = untty_cmd().write_stdin(input).output().unwrap();
    assert!(first.status.success());
    let second = untty_cmd().write_stdin(first.stdout.clone()).output().unwrap();
    assert!(second.status.success());
    assert_eq!(second.stdout, first.stdout);
}

/// > With --space-as-escape, unmatched runs after spaces are kept
#[test]
fn space_as_escape_keeps_unmatched_words() {
    untty_cmd()
        .arg("-s")
        .write_stdin("a b")
        .assert()
        .success()
        .stdout("a b")
        .stderr(predicates::str::contains("unmatched").not());
}
