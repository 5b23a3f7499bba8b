use std::io::{self, BufRead, Write};

/// Line-oriented prompt over any input/output pair.
///
/// The binaries use stdin/stdout; tests drive it with in-memory buffers.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Print `prompt` without a newline and read one line.
    ///
    /// Returns `None` at end of input. The line is returned without its
    /// line ending but otherwise untrimmed.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    /// Like [`ask`](Self::ask), treating end of input as an empty answer.
    pub fn ask_or_empty(&mut self, prompt: &str) -> io::Result<String> {
        Ok(self.ask(prompt)?.unwrap_or_default())
    }

    /// Where messages go
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
