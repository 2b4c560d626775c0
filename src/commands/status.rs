use std::io::Write;

use anyhow::Result;
use colored::Colorize;

use crate::App;
use crate::clock::Clock;
use crate::ops::process::CommandRunner;

impl<R: CommandRunner, C: Clock> App<R, C> {
    /// Print pending stash entries in a bordered block, if any exist.
    pub fn print_stashes(&self, out: &mut impl Write) -> Result<()> {
        if !self.has_stashes(out)? {
            return Ok(());
        }
        match self.runner.run_captured("git", &["stash", "list"]) {
            Ok(output) => self.print_block(out, "---Stashes---", &output)?,
            Err(err) => {
                writeln!(out, "{}", format!("Error getting stash list: {err}").red())?;
            }
        }
        Ok(())
    }

    /// True if the repository has stash entries. A failed query is reported
    /// and counts as "none".
    pub fn has_stashes(&self, out: &mut impl Write) -> Result<bool> {
        match self.runner.run_captured("git", &["stash", "list"]) {
            Ok(output) => Ok(!output.is_empty()),
            Err(err) => {
                writeln!(out, "{}", format!("Error checking for stashes: {err}").red())?;
                Ok(false)
            }
        }
    }

    /// Print pending working-tree changes in a bordered block, if any exist.
    pub fn print_changes(&self, out: &mut impl Write) -> Result<()> {
        if !self.has_changes(out)? {
            return Ok(());
        }
        match self.runner.run_captured("git", &["status", "--short"]) {
            Ok(output) => self.print_block(out, "---Changes---", &output)?,
            Err(err) => {
                writeln!(out, "{}", format!("Error getting git status: {err}").red())?;
            }
        }
        Ok(())
    }

    /// True if the working tree has uncommitted changes, per the porcelain
    /// status. A failed query is reported and counts as "none".
    pub fn has_changes(&self, out: &mut impl Write) -> Result<bool> {
        match self.runner.run_captured("git", &["status", "--porcelain"]) {
            Ok(output) => Ok(!output.is_empty()),
            Err(err) => {
                writeln!(out, "{}", format!("Error checking for changes: {err}").red())?;
                Ok(false)
            }
        }
    }

    fn print_block(&self, out: &mut impl Write, header: &str, body: &[u8]) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "{header}")?;
        writeln!(out, "{}", String::from_utf8_lossy(body))?;
        writeln!(out, "-------------")?;
        Ok(())
    }
}
