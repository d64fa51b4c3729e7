//! Line-oriented text I/O

use std::io::{self, BufRead, Write};

/// What the game needs from a text surface
pub trait Console {
    /// Next line of input without its line ending, or `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write text without a trailing newline (prompts)
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Write a full line
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.write(line)?;
        self.write("\n")
    }

    /// Show a prompt and read the answer
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.write(text)?;
        self.read_line()
    }
}

/// Console over any buffered reader and writer
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    /// Console attached to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink (tests read what was printed)
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }
}
