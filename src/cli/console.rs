//! Line-based console over any reader/writer pair.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Prompt/answer console shared by every player at the keyboard.
pub(crate) struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub(crate) fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Print a prompt and read one line. `None` at end of input.
    pub(crate) fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string()))
    }

    /// Ask a yes/no question; anything but `y`/`yes` is no.
    pub(crate) fn confirm(&mut self, prompt: &str) -> io::Result<Option<bool>> {
        Ok(self.ask(prompt)?.map(|answer| {
            matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
        }))
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}
