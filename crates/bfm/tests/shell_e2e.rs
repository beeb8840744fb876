//! End-to-end tests for the interactive shell, driving the `bfm` binary
//! over stdin the way a user would.

// Integration tests have relaxed clippy settings for test infrastructure.
// Production code (src/) must use strict zero-unwrap/panic patterns.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bfm() -> Command {
    Command::cargo_bin("bfm").expect("bfm binary builds")
}

/// Run the shell with the given stdin script and return captured stdout.
fn shell_stdout(stdin: &str) -> String {
    let output = bfm()
        .write_stdin(stdin.to_string())
        .output()
        .expect("bfm runs");
    assert!(output.status.success(), "bfm exited nonzero");
    String::from_utf8(output.stdout).expect("stdout is UTF-8")
}

#[test]
fn exit_terminates_cleanly() {
    bfm().write_stdin("en\nexit\n").assert().success();
}

#[test]
fn greeting_is_bilingual_and_language_choice_is_confirmed() {
    let stdout = shell_stdout("en\nexit\n");
    assert!(stdout.contains("Welcome to the BFM batch file manager!"));
    assert!(stdout.contains("¡Bienvenido al gestor de archivos por lotes BFM!"));
    assert!(stdout.contains("You have chosen English."));
}

#[test]
fn invalid_language_reprompts_until_valid() {
    let stdout = shell_stdout("de\nes\nexit\n");
    assert!(stdout.contains("Please type a valid language (en/es):"));
    assert!(stdout.contains("Por favor, escribe un idioma válido (en/es):"));
    assert!(stdout.contains("Has elegido Español."));
}

#[test]
fn help_lists_all_commands_in_registration_order() {
    let stdout = shell_stdout("en\nhelp\nexit\n");

    let copy_all_at = stdout
        .find("copyAll - Copy all files from one folder to another")
        .expect("copyAll is listed");
    let help_at = stdout
        .find("help - Lists all commands, or detailed information about a single command")
        .expect("help is listed");
    assert!(copy_all_at < help_at, "listing must follow registration order");
}

#[test]
fn help_for_single_command_prints_its_argument_table_only() {
    let stdout = shell_stdout("en\nhelp -command copyAll\nexit\n");

    assert!(stdout.contains("Arguments:"));
    assert!(stdout.contains("-source"));
    assert!(stdout.contains("aliases: -s -src"));
    assert!(stdout.contains("purpose: Path of the directory where files will be copied from"));
    assert!(stdout.contains("-destination"));
    assert!(stdout.contains("aliases: -d -dst"));
    assert!(stdout.contains("required: yes"));
    // help's own argument table must not appear
    assert!(!stdout.contains("Command to get information about"));
}

#[test]
fn help_selector_works_through_its_alias() {
    let stdout = shell_stdout("en\nhelp -cmd copyAll\nexit\n");
    assert!(stdout.contains("aliases: -s -src"));
}

#[test]
fn help_for_unknown_command_reports_lookup_failure() {
    let stdout = shell_stdout("en\nhelp -command frobnicate\nexit\n");
    assert!(stdout.contains("[Error]: Couldn't find any command named 'frobnicate'"));
}

#[test]
fn unknown_command_reports_not_found_and_shell_continues() {
    let stdout = shell_stdout("en\nfrobnicate\nhelp\nexit\n");
    assert!(stdout.contains("[Error]: Couldn't find any command named 'frobnicate'"));
    // The shell kept going after the error.
    assert!(stdout.contains("copyAll - Copy all files from one folder to another"));
}

#[test]
fn copy_all_reports_missing_required_arguments() {
    let stdout = shell_stdout("en\ncopyAll -source somewhere\nexit\n");
    assert!(stdout.contains("[Error]:"));
    assert!(stdout.contains("missing arguments"));
    assert!(stdout.contains("destination"));
}

#[test]
fn copy_all_with_empty_source_dir_fails_before_any_prompt() {
    let source = TempDir::new().expect("tempdir");
    let destination = TempDir::new().expect("tempdir");

    let script = format!(
        "en\ncopyAll -source {} -destination {}\nexit\n",
        source.path().display(),
        destination.path().display()
    );
    let stdout = shell_stdout(&script);

    assert!(stdout.contains("[Error]:"));
    assert!(stdout.contains("no files to copy"));
    // Failing before the confirmation prompt means no question was asked.
    assert!(!stdout.contains("[y/N]"));
}

#[test]
fn copy_all_copies_every_regular_file_after_confirmation() {
    let source = TempDir::new().expect("tempdir");
    let destination = TempDir::new().expect("tempdir");
    fs::write(source.path().join("a.txt"), "alpha").expect("write a");
    fs::write(source.path().join("b.txt"), "beta").expect("write b");
    fs::create_dir(source.path().join("nested")).expect("mkdir");

    let script = format!(
        "en\ncopyAll -source {} -destination {}\ny\nexit\n",
        source.path().display(),
        destination.path().display()
    );
    let stdout = shell_stdout(&script);

    assert!(stdout.contains("Copied a.txt"));
    assert!(stdout.contains("Copied b.txt"));
    assert!(stdout.contains("Copied 2 file(s)"));
    assert_eq!(
        fs::read_to_string(destination.path().join("a.txt")).expect("read a"),
        "alpha"
    );
    assert_eq!(
        fs::read_to_string(destination.path().join("b.txt")).expect("read b"),
        "beta"
    );
    // Subdirectories are skipped, not recursed into.
    assert!(!destination.path().join("nested").exists());
}

#[test]
fn copy_all_accepts_quoted_paths_with_spaces() {
    let workdir = TempDir::new().expect("tempdir");
    fs::create_dir(workdir.path().join("my folder")).expect("mkdir");
    fs::write(workdir.path().join("my folder").join("note.txt"), "hi").expect("write");

    let output = bfm()
        .current_dir(workdir.path())
        .write_stdin("en\ncopyAll -src \"my folder\" -dst out\ny\nexit\n")
        .output()
        .expect("bfm runs");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");

    assert!(stdout.contains("Copied note.txt"));
    assert_eq!(
        fs::read_to_string(workdir.path().join("out").join("note.txt")).expect("read copy"),
        "hi"
    );
}

#[test]
fn copy_all_declined_confirmation_copies_nothing() {
    let source = TempDir::new().expect("tempdir");
    let destination = TempDir::new().expect("tempdir");
    fs::write(source.path().join("a.txt"), "alpha").expect("write");

    let script = format!(
        "en\ncopyAll -source {} -destination {}\nn\nexit\n",
        source.path().display(),
        destination.path().display()
    );
    let stdout = shell_stdout(&script);

    assert!(stdout.contains("[Error]: copy cancelled"));
    assert!(!destination.path().join("a.txt").exists());
}

#[test]
fn copy_all_overwrites_conflicts_only_after_second_confirmation() {
    let source = TempDir::new().expect("tempdir");
    let destination = TempDir::new().expect("tempdir");
    fs::write(source.path().join("a.txt"), "new").expect("write");
    fs::write(destination.path().join("a.txt"), "old").expect("write");

    let script = format!(
        "en\ncopyAll -source {} -destination {}\ny\ny\nexit\n",
        source.path().display(),
        destination.path().display()
    );
    let stdout = shell_stdout(&script);

    assert!(stdout.contains("already exist"));
    assert_eq!(
        fs::read_to_string(destination.path().join("a.txt")).expect("read"),
        "new"
    );
}

#[test]
fn copy_all_declined_overwrite_leaves_destination_untouched() {
    let source = TempDir::new().expect("tempdir");
    let destination = TempDir::new().expect("tempdir");
    fs::write(source.path().join("a.txt"), "new").expect("write");
    fs::write(destination.path().join("a.txt"), "old").expect("write");

    let script = format!(
        "en\ncopyAll -source {} -destination {}\ny\nn\nexit\n",
        source.path().display(),
        destination.path().display()
    );
    let stdout = shell_stdout(&script);

    assert!(stdout.contains("[Error]: copy cancelled: destination files left untouched"));
    assert_eq!(
        fs::read_to_string(destination.path().join("a.txt")).expect("read"),
        "old"
    );
}

#[test]
fn empty_line_is_an_unknown_command() {
    bfm()
        .write_stdin("en\n\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Error]: Couldn't find any command named ''"));
}
