use std::io::BufRead;
use std::io::Write;

use anyhow::Result;

// -----------------------------------------------------------------------------
// Menu engine

/// Signal from a dispatch function: keep looping or leave the menu.
pub enum MenuOutcome {
    Continue,
    Exit,
}

/// A numbered menu over an ordered list of labels.
///
/// All three menus in the program (main, start, log) share this loop:
/// render, read one integer, dispatch in range, complain out of range.
pub struct Menu<'a> {
    labels: &'a [&'a str],
}

impl<'a> Menu<'a> {
    pub fn new(labels: &'a [&'a str]) -> Self {
        Self { labels }
    }

    /// Run the menu loop until the dispatch function signals exit or input
    /// ends.
    ///
    /// `dispatch` is invoked with the 1-indexed choice, exactly once per
    /// valid selection. Out-of-range and malformed input print
    /// `Invalid choice.` and redisplay without dispatching.
    pub fn run<I, O, F>(&self, input: &mut I, out: &mut O, mut dispatch: F) -> Result<()>
    where
        I: BufRead,
        O: Write,
        F: FnMut(usize, &mut I, &mut O) -> Result<MenuOutcome>,
    {
        loop {
            self.render(out)?;
            let Some(choice) = self.read_choice(input, out)? else {
                // Input ended; there is nothing left to dispatch.
                return Ok(());
            };

            if (1..=self.labels.len()).contains(&choice) {
                if let MenuOutcome::Exit = dispatch(choice, &mut *input, &mut *out)? {
                    return Ok(());
                }
            } else {
                writeln!(out, "Invalid choice.")?;
            }
        }
    }

    fn render(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "Choose an option:")?;
        for (index, label) in self.labels.iter().enumerate() {
            writeln!(out, "{}. {}", index + 1, label)?;
        }
        Ok(())
    }

    /// Read one choice; `None` means end of input. Malformed input parses
    /// to 0, which no option matches.
    fn read_choice(&self, input: &mut impl BufRead, out: &mut impl Write) -> Result<Option<usize>> {
        write!(out, "Enter choice: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().parse().unwrap_or(0)))
    }
}
