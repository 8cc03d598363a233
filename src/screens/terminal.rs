//! Text presenter for terminals
//!
//! Each screen is printed as a titled block with numbered buttons. The user
//! answers with a button number; end of input closes the application.

use owo_colors::OwoColorize;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::screens::{NavAction, Presenter, PresenterError, Screen, ScreenContent};

pub struct TerminalPresenter<R, W> {
    input: R,
    output: W,
    colored: bool,
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            colored: true,
        }
    }

    /// Disable ANSI styling, e.g. when output is not a terminal
    pub fn plain(mut self) -> Self {
        self.colored = false;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    fn show(&mut self, content: &ScreenContent) -> Result<(), PresenterError> {
        let rule = "=".repeat(content.title.chars().count());

        writeln!(self.output)?;
        if self.colored {
            writeln!(self.output, "{}", content.title.bold())?;
        } else {
            writeln!(self.output, "{}", content.title)?;
        }
        writeln!(self.output, "{rule}")?;

        for line in &content.lines {
            writeln!(self.output, "{line}")?;
        }
        for step in &content.steps {
            writeln!(self.output, "{}", step.label())?;
        }

        writeln!(self.output)?;
        for (index, button) in content.buttons.iter().enumerate() {
            let number = format!("[{}]", index + 1);
            if self.colored {
                writeln!(self.output, "  {} {}", number.cyan(), button.label)?;
            } else {
                writeln!(self.output, "  {} {}", number, button.label)?;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn hide(&mut self, screen: Screen) -> Result<(), PresenterError> {
        // Printed screens scroll away on their own
        debug!(screen = %screen, "Screen hidden");
        Ok(())
    }

    fn next_action(&mut self, content: &ScreenContent) -> Result<NavAction, PresenterError> {
        loop {
            write!(self.output, "{} > ", content.prompt)?;
            self.output.flush()?;

            // Bytes, not read_line: a line that is not UTF-8 is just a bad choice
            let mut raw = Vec::new();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                writeln!(self.output)?;
                return Ok(NavAction::Terminate);
            }
            let line = String::from_utf8_lossy(&raw);

            if let Some(action) = line.trim().parse::<usize>().ok().and_then(|n| content.action_for(n)) {
                return Ok(action);
            }
            debug!(input = %line.trim(), "Unrecognized choice");
        }
    }
}
