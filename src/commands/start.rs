use std::io::BufRead;
use std::io::Write;

use anyhow::Result;

use crate::App;
use crate::clock::Clock;
use crate::menu::Menu;
use crate::menu::MenuOutcome;
use crate::ops::process::CommandRunner;

const START_MENU: [&str; 5] = ["New", "Resume", "Browse", "Daily-Note", "Cancel"];

impl<R: CommandRunner, C: Clock> App<R, C> {
    /// Start sub-menu: launch the editor or browser, or open today's note.
    pub fn cmd_start(&self, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
        Menu::new(&START_MENU).run(input, out, |choice, _input, out| {
            match choice {
                1 => self.stream(out, &self.config.editor, &[])?,
                2 => self.not_yet_available(out, "Resume")?,
                3 => self.stream(out, &self.config.browser, &[])?,
                4 => self.open_daily_note(out)?,
                5 => return Ok(MenuOutcome::Exit),
                _ => unreachable!(),
            }
            Ok(MenuOutcome::Continue)
        })
    }

    /// Open `<notes dir>/<year-month>/<date>.md` in the configured editor.
    /// The file itself is the editor's business; nothing is created here.
    fn open_daily_note(&self, out: &mut impl Write) -> Result<()> {
        let path = format!(
            "{}/{}/{}.md",
            self.config.daily_notes_dir,
            self.clock.year_month(),
            self.clock.date()
        );
        self.stream(out, &self.config.editor, &[&path])
    }
}
