use std::io::BufRead;
use std::io::Write;

use anyhow::Result;

use crate::App;
use crate::clock::Clock;
use crate::ops::process::CommandRunner;

impl<R: CommandRunner, C: Clock> App<R, C> {
    /// Prompt for a commit message and commit the staged changes.
    ///
    /// The whole line is the message, so multi-word messages work. An empty
    /// line cancels; cancellation is a normal outcome, not an error.
    pub fn cmd_commit(&self, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
        write!(out, "Enter commit message (or pass empty message to cancel): ")?;
        out.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        let message = line.trim();

        if message.is_empty() {
            writeln!(out, "Canceled commit.")?;
        } else {
            self.stream(out, "git", &["commit", "-m", message])?;
        }
        Ok(())
    }
}
