//! Operator input. Every prompt consumes exactly one line.

use std::io::{self, BufRead, IsTerminal, StdinLock, Write};

pub trait Console {
    /// Print `prompt` and read one line. `None` on end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Like `read_line`, without echoing what the operator types.
    fn read_secret(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Console over the process stdin. Secrets are read from the terminal with
/// echo disabled; when stdin is piped there is nothing to hide and the line is
/// read from the pipe like any other.
pub struct TerminalConsole<R: BufRead> {
    input: R,
    interactive: bool,
}

impl TerminalConsole<StdinLock<'static>> {
    pub fn stdin() -> Self {
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();
        Self {
            input: stdin.lock(),
            interactive,
        }
    }
}

impl<R: BufRead> TerminalConsole<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            interactive: false,
        }
    }

    /// Bytes that are not UTF-8 become U+FFFD instead of failing the read,
    /// so a garbled line is just an answer the caller rejects.
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R: BufRead> Console for TerminalConsole<R> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;
        self.next_line()
    }

    fn read_secret(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if self.interactive {
            return rpassword::prompt_password(prompt).map(Some);
        }
        self.read_line(prompt)
    }
}

/// Pre-recorded answers, one per prompt.
#[cfg(test)]
pub(crate) struct ScriptedConsole {
    answers: std::collections::VecDeque<String>,
    pub prompts: Vec<String>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }

    fn read_secret(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.read_line(prompt)
    }
}
