use std::path::Path;
use std::process::Command;
use std::process::Output;
use std::process::Stdio;

/// Runs git in the given directory and returns its output.
pub fn git(dir: &Path, args: &[&str]) -> anyhow::Result<Output> {
    let output = Command::new("git").args(args).current_dir(dir).output()?;
    anyhow::ensure!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(output)
}

/// Creates a git repository in the given directory.
///
/// This initializes the repo and sets basic git config needed for commits.
/// The directory should already exist.
pub fn create_git_repo(dir: &Path) -> anyhow::Result<()> {
    let status = Command::new("git")
        .args(["init"])
        .current_dir(dir)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;
    anyhow::ensure!(status.success(), "git init failed");

    git(dir, &["config", "user.name", "Test User"])?;
    git(dir, &["config", "user.email", "test@example.com"])?;

    Ok(())
}

/// Writes a file and commits it.
pub fn commit_file(dir: &Path, name: &str, contents: &str, message: &str) -> anyhow::Result<()> {
    std::fs::write(dir.join(name), contents)?;
    git(dir, &["add", name])?;
    git(dir, &["commit", "-m", message])?;
    Ok(())
}

/// First line of `git log --oneline`.
pub fn latest_commit_line(dir: &Path) -> anyhow::Result<String> {
    let output = git(dir, &["log", "--oneline", "-n", "1"])?;
    Ok(String::from_utf8(output.stdout)?.trim().to_string())
}
