use std::io::BufRead;
use std::io::Write;

use anyhow::Result;

use crate::App;
use crate::clock::Clock;
use crate::menu::Menu;
use crate::menu::MenuOutcome;
use crate::ops::process::CommandRunner;

const LOG_MENU: [&str; 3] = ["Simple", "Verbose", "Cancel"];

impl<R: CommandRunner, C: Clock> App<R, C> {
    /// Log sub-menu. Every valid choice leaves the sub-menu after running,
    /// so one history view is shown per visit.
    pub fn cmd_log(&self, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
        Menu::new(&LOG_MENU).run(input, out, |choice, _input, out| {
            match choice {
                1 => self.stream(out, "git", &["log", "--oneline", "--all"])?,
                2 => self.stream(out, "git", &["log", "-p", "--oneline"])?,
                3 => {}
                _ => unreachable!(),
            }
            Ok(MenuOutcome::Exit)
        })
    }
}
