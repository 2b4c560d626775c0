//! cargo test --test integration -- --nocapture

mod utils;

use assert_cmd::Command;
use gitlite::App;
use gitlite::Config;
use gitlite::clock::FixedClock;
use gitlite::ops::process::ShellRunner;
use predicates::prelude::*;

const HELP_TEXT: &str = "Usage: gitlite [OPTION]\nOptions: [-h | --help | -H] [-v | --version | -V]\n";

#[ctor::ctor]
fn init() {
    // Disable colors for all integration tests to get clean output
    colored::control::set_override(false);
}

fn gitlite() -> Command {
    Command::cargo_bin("gitlite").unwrap()
}

fn repo_app(dir: &std::path::Path) -> App<ShellRunner, FixedClock> {
    App::new(
        Config::default(),
        ShellRunner::new(dir.to_path_buf()),
        FixedClock::default(),
    )
}

// -----------------------------------------------------------------------------
// Flag handling

#[test]
fn help_flag_prints_usage() -> anyhow::Result<()> {
    for flag in ["-h", "--help", "-H"] {
        gitlite().arg(flag).assert().success().stdout(HELP_TEXT);
    }
    Ok(())
}

#[test]
fn unknown_option_prints_help_and_skips_the_menu() {
    gitlite()
        .arg("--bogus")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "Unknown Option: --bogus\n{HELP_TEXT}"
        )))
        .stdout(predicate::str::contains("Choose an option").not());
}

#[test]
fn version_in_a_repo_reports_hash_and_date() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    utils::create_git_repo(dir.path())?;
    utils::commit_file(dir.path(), "alpha", "alpha\n", "initial commit")?;

    gitlite()
        .arg("--version")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("GitLite 0.8.0\n"))
        .stdout(predicate::str::is_match(r"Commit Hash: [0-9a-f]{7}\n")?)
        .stdout(predicate::str::is_match(r"Compiled: \w+, \d+ \w+ \d{4}")?);
    Ok(())
}

#[test]
fn version_outside_a_repo_degrades_to_empty_values() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    gitlite()
        .arg("-V")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("GitLite 0.8.0\n"))
        .stdout(predicate::str::contains("Error getting commit hash"));
    Ok(())
}

// -----------------------------------------------------------------------------
// Interactive sessions against the built binary

#[test]
fn quit_leaves_the_menu() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    utils::create_git_repo(dir.path())?;
    utils::commit_file(dir.path(), "alpha", "alpha\n", "initial commit")?;

    gitlite()
        .current_dir(dir.path())
        .write_stdin("13\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Start\n"))
        .stdout(predicate::str::contains("13. Quit\n"));
    Ok(())
}

#[test]
fn invalid_choice_reprompts() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    utils::create_git_repo(dir.path())?;
    utils::commit_file(dir.path(), "alpha", "alpha\n", "initial commit")?;

    gitlite()
        .current_dir(dir.path())
        .write_stdin("99\n13\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice.\n"));
    Ok(())
}

#[test]
fn end_of_input_exits_cleanly() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    utils::create_git_repo(dir.path())?;

    gitlite().current_dir(dir.path()).write_stdin("").assert().success();
    Ok(())
}

#[test]
fn pending_changes_are_reported_before_the_menu() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    utils::create_git_repo(dir.path())?;
    utils::commit_file(dir.path(), "alpha", "alpha\n", "initial commit")?;
    std::fs::write(dir.path().join("beta"), "beta\n")?;

    gitlite()
        .current_dir(dir.path())
        .write_stdin("13\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("---Changes---"))
        .stdout(predicate::str::contains("beta"));
    Ok(())
}

#[test]
fn pending_stashes_are_reported_before_the_menu() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    utils::create_git_repo(dir.path())?;
    utils::commit_file(dir.path(), "alpha", "alpha\n", "initial commit")?;
    std::fs::write(dir.path().join("alpha"), "changed\n")?;
    utils::git(dir.path(), &["stash"])?;

    gitlite()
        .current_dir(dir.path())
        .write_stdin("13\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("---Stashes---"))
        .stdout(predicate::str::contains("stash@{0}"));
    Ok(())
}

#[test]
fn commit_entry_commits_staged_changes() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    utils::create_git_repo(dir.path())?;
    utils::commit_file(dir.path(), "alpha", "alpha\n", "initial commit")?;
    std::fs::write(dir.path().join("beta"), "beta\n")?;
    utils::git(dir.path(), &["add", "beta"])?;

    gitlite()
        .current_dir(dir.path())
        .write_stdin("8\nfix-typo\n13\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter commit message"));

    assert!(utils::latest_commit_line(dir.path())?.contains("fix-typo"));
    Ok(())
}

#[test]
fn empty_commit_message_cancels() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    utils::create_git_repo(dir.path())?;
    utils::commit_file(dir.path(), "alpha", "alpha\n", "initial commit")?;
    std::fs::write(dir.path().join("beta"), "beta\n")?;
    utils::git(dir.path(), &["add", "beta"])?;

    gitlite()
        .current_dir(dir.path())
        .write_stdin("8\n\n13\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Canceled commit.\n"));

    assert!(utils::latest_commit_line(dir.path())?.contains("initial commit"));
    Ok(())
}

// -----------------------------------------------------------------------------
// Library against a real repository

#[test]
fn status_predicates_track_the_working_tree() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    utils::create_git_repo(dir.path())?;
    utils::commit_file(dir.path(), "alpha", "alpha\n", "initial commit")?;

    let app = repo_app(dir.path());
    let mut out = Vec::new();
    assert!(!app.has_changes(&mut out)?);
    assert!(!app.has_stashes(&mut out)?);

    std::fs::write(dir.path().join("beta"), "beta\n")?;
    assert!(app.has_changes(&mut out)?);

    let mut block = Vec::new();
    app.print_changes(&mut block)?;
    let block = String::from_utf8(block)?;
    assert!(block.contains("---Changes---"));
    assert!(block.contains("beta"));
    Ok(())
}

#[test]
fn commit_handler_accepts_a_multi_word_message() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    utils::create_git_repo(dir.path())?;
    utils::commit_file(dir.path(), "alpha", "alpha\n", "initial commit")?;
    std::fs::write(dir.path().join("beta"), "beta\n")?;
    utils::git(dir.path(), &["add", "beta"])?;

    let app = repo_app(dir.path());
    let mut input = std::io::Cursor::new("fix the typo\n".to_string());
    let mut out = Vec::new();
    app.cmd_commit(&mut input, &mut out)?;

    assert!(utils::latest_commit_line(dir.path())?.contains("fix the typo"));
    Ok(())
}

#[test]
fn fetch_without_a_remote_reports_and_continues() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    utils::create_git_repo(dir.path())?;
    utils::commit_file(dir.path(), "alpha", "alpha\n", "initial commit")?;

    let app = repo_app(dir.path());
    let mut out = Vec::new();
    // No origin configured, so the fetch fails; the session must not.
    app.cmd_fetch(&mut out)?;
    let out = String::from_utf8(out)?;
    assert!(out.contains("Error executing command:"));
    assert!(out.contains("working tree clean") || out.contains("On branch"));
    Ok(())
}
