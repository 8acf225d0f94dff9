//! Line-oriented console used by the quiz session.

use crossterm::style::Stylize;
use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

/// How a line of output should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Success,
    Warning,
    Failure,
}

pub trait Console {
    /// Show `prompt` and read one line without its line ending. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn say_with(&mut self, tone: Tone, text: &str) -> io::Result<()>;

    fn say(&mut self, text: &str) -> io::Result<()> {
        self.say_with(Tone::Plain, text)
    }
}

/// Stdin/stdout console. Colors are only used when stdout is a terminal.
#[derive(Debug)]
pub struct TerminalConsole {
    color: bool,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            color: io::stdout().is_terminal(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            writeln!(stdout)?;
            return Ok(None);
        }
        Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn say_with(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        if !self.color {
            return writeln!(stdout, "{}", text);
        }
        match tone {
            Tone::Plain => writeln!(stdout, "{}", text),
            Tone::Heading => writeln!(stdout, "{}", text.bold()),
            Tone::Success => writeln!(stdout, "{}", text.green()),
            Tone::Warning => writeln!(stdout, "{}", text.yellow()),
            Tone::Failure => writeln!(stdout, "{}", text.red()),
        }
    }
}

/// Console fed from a fixed list of inputs that records everything shown.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Prompts and printed lines, in order.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.push(prompt.to_string());
        Ok(self.inputs.pop_front())
    }

    fn say_with(&mut self, _tone: Tone, text: &str) -> io::Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }
}
