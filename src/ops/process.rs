use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::HashSet;
use std::path::PathBuf;
use std::process::Command;

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use tracing::debug;

// -----------------------------------------------------------------------------
// CommandRunner trait

/// Capability to run external programs.
///
/// Two modes: `run_captured` collects stdout for the caller to inspect,
/// `run_streamed` connects the child directly to the terminal. Both report a
/// launch failure or non-zero exit as an `Err`; callers decide whether that
/// matters (in this program it never aborts the session).
pub trait CommandRunner {
    fn run_captured(&self, program: &str, args: &[&str]) -> Result<Vec<u8>>;
    fn run_streamed(&self, program: &str, args: &[&str]) -> Result<()>;
}

// -----------------------------------------------------------------------------
// ShellRunner

/// Real implementation that spawns child processes in a fixed working
/// directory.
pub struct ShellRunner {
    path: PathBuf,
}

impl ShellRunner {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CommandRunner for ShellRunner {
    fn run_captured(&self, program: &str, args: &[&str]) -> Result<Vec<u8>> {
        debug!("capturing: {} {}", program, args.join(" "));
        let output = Command::new(program)
            .current_dir(&self.path)
            .args(args)
            .output()
            .with_context(|| format!("Failed to execute {program}"))?;

        if !output.status.success() {
            bail!(
                "{} command failed: {}",
                program,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(output.stdout)
    }

    fn run_streamed(&self, program: &str, args: &[&str]) -> Result<()> {
        debug!("streaming: {} {}", program, args.join(" "));
        // status() inherits stdin/stdout/stderr, so interactive children
        // (editor, `checkout -p`, `clean -i`) talk to the terminal directly.
        let status = Command::new(program)
            .current_dir(&self.path)
            .args(args)
            .status()
            .with_context(|| format!("Failed to execute {program}"))?;

        if !status.success() {
            bail!("{program} exited with {status}");
        }

        Ok(())
    }
}

// -----------------------------------------------------------------------------
// RecordingRunner

/// Test double that records every invocation as a joined command line and
/// serves canned output, without touching the system.
#[derive(Default)]
pub struct RecordingRunner {
    outputs: HashMap<String, Vec<u8>>,
    failures: HashSet<String>,
    calls: RefCell<Vec<String>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canned stdout for one exact command line, e.g. `"git stash list"`.
    pub fn with_output(mut self, command: &str, output: &str) -> Self {
        self.outputs
            .insert(command.to_string(), output.as_bytes().to_vec());
        self
    }

    /// Make one exact command line fail.
    pub fn with_failure(mut self, command: &str) -> Self {
        self.failures.insert(command.to_string());
        self
    }

    /// Every command line run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, program: &str, args: &[&str]) -> String {
        let line = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        self.calls.borrow_mut().push(line.clone());
        line
    }
}

impl CommandRunner for RecordingRunner {
    fn run_captured(&self, program: &str, args: &[&str]) -> Result<Vec<u8>> {
        let line = self.record(program, args);
        if self.failures.contains(&line) {
            bail!("{line}: command failed");
        }
        Ok(self.outputs.get(&line).cloned().unwrap_or_default())
    }

    fn run_streamed(&self, program: &str, args: &[&str]) -> Result<()> {
        let line = self.record(program, args);
        if self.failures.contains(&line) {
            bail!("{line}: command failed");
        }
        Ok(())
    }
}
