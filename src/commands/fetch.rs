use std::io::Write;

use anyhow::Result;

use crate::App;
use crate::clock::Clock;
use crate::ops::process::CommandRunner;

impl<R: CommandRunner, C: Clock> App<R, C> {
    /// Fetch from the remote, then show the full working-tree status.
    pub fn cmd_fetch(&self, out: &mut impl Write) -> Result<()> {
        self.print_captured(out, "git", &["fetch"])?;
        self.print_captured(out, "git", &["status"])
    }
}
