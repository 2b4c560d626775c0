use std::io::BufRead;
use std::io::Write;

use anyhow::Result;

use crate::App;
use crate::clock::Clock;
use crate::menu::Menu;
use crate::menu::MenuOutcome;
use crate::ops::process::CommandRunner;

const MAIN_MENU: [&str; 13] = [
    "Start", "Fetch", "Log", "Diff", "Pull", "Push", "Stage", "Commit", "Stash", "Revert",
    "Discard", "Reset", "Quit",
];

impl<R: CommandRunner, C: Clock> App<R, C> {
    /// Top-level menu loop. Runs until Quit or end of input.
    pub fn cmd_main_menu(&self, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
        Menu::new(&MAIN_MENU).run(input, out, |choice, input, out| {
            match choice {
                1 => self.cmd_start(input, out)?,
                2 => self.cmd_fetch(out)?,
                3 => self.cmd_log(input, out)?,
                4 => self.stream(out, "git", &["diff"])?,
                5 => self.stream(out, "git", &["pull"])?,
                6 => self.stream(out, "git", &["push"])?,
                7 => self.not_yet_available(out, "Stage")?,
                8 => self.cmd_commit(input, out)?,
                9 => self.not_yet_available(out, "Stash")?,
                10 => self.stream(out, "git", &["checkout", "-p"])?,
                11 => self.stream(out, "git", &["clean", "-i", "-d"])?,
                12 => self.not_yet_available(out, "Reset")?,
                13 => return Ok(MenuOutcome::Exit),
                _ => unreachable!(),
            }
            Ok(MenuOutcome::Continue)
        })
    }
}
