use std::io::Write;

use anyhow::Result;
use colored::Colorize;

use crate::App;
use crate::clock::Clock;
use crate::ops::process::CommandRunner;

impl<R: CommandRunner, C: Clock> App<R, C> {
    /// Print the version banner. The hash and date come from the repository
    /// the program is run in; if either query fails the value is left empty
    /// rather than failing the command.
    pub fn cmd_version(&self, out: &mut impl Write) -> Result<()> {
        let commit_hash = self.commit_hash(out)?;
        let compiled = self.compiled_date(out)?;

        writeln!(out, "{} {}", "GitLite".bold(), env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "Author: {}", env!("CARGO_PKG_AUTHORS"))?;
        writeln!(out, "Commit Hash: {commit_hash}")?;
        writeln!(out, "Compiled: {compiled}")?;
        Ok(())
    }

    /// Short hash of the newest commit, or empty if the query fails.
    fn commit_hash(&self, out: &mut impl Write) -> Result<String> {
        match self.runner.run_captured("git", &["log", "--oneline", "-n", "1"]) {
            Ok(output) => {
                let line = String::from_utf8_lossy(&output);
                Ok(line.trim().chars().take(7).collect())
            }
            Err(err) => {
                writeln!(out, "{}", format!("Error getting commit hash: {err}").red())?;
                Ok(String::new())
            }
        }
    }

    /// Committer date of the newest commit, cut before the timezone offset.
    fn compiled_date(&self, out: &mut impl Write) -> Result<String> {
        match self.runner.run_captured("git", &["show", "-s", "--format=%cD"]) {
            Ok(output) => {
                let line = String::from_utf8_lossy(&output);
                let date = line.split(" -").next().unwrap_or("");
                Ok(date.trim().to_string())
            }
            Err(err) => {
                writeln!(out, "{}", format!("Error getting compiled date: {err}").red())?;
                Ok(String::new())
            }
        }
    }
}
