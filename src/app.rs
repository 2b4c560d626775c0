use std::io::Write;

use anyhow::Result;
use colored::Colorize;

use crate::clock::Clock;
use crate::config::Config;
use crate::ops::process::CommandRunner;

/// The interactive session: configuration plus the injected capabilities
/// every handler works through.
pub struct App<R, C> {
    pub config: Config,
    pub runner: R,
    pub clock: C,
}

impl<R: CommandRunner, C: Clock> App<R, C> {
    pub fn new(config: Config, runner: R, clock: C) -> Self {
        Self {
            config,
            runner,
            clock,
        }
    }
}

/// Shared helper methods for App
impl<R: CommandRunner, C: Clock> App<R, C> {
    /// Run a command with its output connected to the terminal. A failure is
    /// reported on one line and swallowed; no child failure ends the session.
    pub(crate) fn stream(&self, out: &mut impl Write, program: &str, args: &[&str]) -> Result<()> {
        if let Err(err) = self.runner.run_streamed(program, args) {
            writeln!(out, "{}", format!("Error executing command: {err}").red())?;
        }
        Ok(())
    }

    /// Run a command captured and forward whatever it printed.
    pub(crate) fn print_captured(
        &self,
        out: &mut impl Write,
        program: &str,
        args: &[&str],
    ) -> Result<()> {
        match self.runner.run_captured(program, args) {
            Ok(output) if output.is_empty() => {}
            Ok(output) => write!(out, "{}", String::from_utf8_lossy(&output))?,
            Err(err) => writeln!(out, "{}", format!("Error executing command: {err}").red())?,
        }
        Ok(())
    }

    /// Handler for menu entries that are wired up but not built yet.
    pub(crate) fn not_yet_available(&self, out: &mut impl Write, feature: &str) -> Result<()> {
        writeln!(out, "{}", format!("{feature} is not available yet.").yellow())?;
        Ok(())
    }
}
