//! Line-based console for terminals without cursor control and for piped input

use super::console::{Console, MenuChoice};
use crate::document::{Document, DocumentKind};
use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};

/// Reads answers line by line and writes prompts and status lines.
///
/// Errors and warnings go to the error writer. End of input behaves like
/// choosing Exit: text prompts return empty strings and questions answer no.
pub struct PlainConsole<R, W, E> {
    input: R,
    output: W,
    errors: E,
    closed: bool,
}

impl PlainConsole<StdinLock<'static>, Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> PlainConsole<R, W, E> {
    pub fn new(input: R, output: W, errors: E) -> Self {
        Self {
            input,
            output,
            errors,
            closed: false,
        }
    }

    /// Consume the console, returning its writers
    pub fn into_writers(self) -> (W, E) {
        (self.output, self.errors)
    }

    fn prompt(&mut self, prompt: &str) -> Result<()> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        if self.closed {
            return Ok(None);
        }

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.closed = true;
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn parse_kind(input: &str) -> Option<DocumentKind> {
    let input = input.trim();
    if input.is_empty() {
        return Some(DocumentKind::default());
    }
    if let Ok(number) = input.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|idx| DocumentKind::ALL.get(idx).copied());
    }
    DocumentKind::from_str(input, true).ok()
}

impl<R: BufRead, W: Write, E: Write> Console for PlainConsole<R, W, E> {
    fn intro(&mut self, title: &str) -> Result<()> {
        writeln!(self.output, "{}", title.cyan().bold())?;
        Ok(())
    }

    fn outro(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn menu(&mut self) -> Result<MenuChoice> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Available commands:")?;
            writeln!(self.output, "{}", MenuChoice::menu_text())?;
            self.prompt("Enter command")?;

            let Some(line) = self.read_line()? else {
                return Ok(MenuChoice::Exit);
            };

            match MenuChoice::parse(&line) {
                Some(choice) => return Ok(choice),
                None => writeln!(self.output, "{}", "Invalid command. Try again.".yellow())?,
            }
        }
    }

    fn input(&mut self, prompt: &str, required: bool) -> Result<String> {
        loop {
            self.prompt(prompt)?;

            let Some(line) = self.read_line()? else {
                return Ok(String::new());
            };

            if required && line.trim().is_empty() {
                writeln!(self.errors, "{} A value is required.", "Warning:".yellow())?;
                continue;
            }

            return Ok(line);
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        writeln!(self.output)?;
        self.prompt(&format!("{} (yes/no)", prompt))?;

        let answer = self.read_line()?.unwrap_or_default();
        let answer = answer.trim();
        Ok(answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y"))
    }

    fn select_kind(&mut self) -> Result<DocumentKind> {
        for (idx, kind) in DocumentKind::ALL.iter().enumerate() {
            writeln!(self.output, "  {}. {}", idx + 1, kind)?;
        }

        loop {
            self.prompt("Document kind [1]")?;

            let Some(line) = self.read_line()? else {
                return Ok(DocumentKind::default());
            };

            match parse_kind(&line) {
                Some(kind) => return Ok(kind),
                None => writeln!(self.output, "{}", "Invalid kind. Try again.".yellow())?,
            }
        }
    }

    fn show_document(&mut self, title: &str, document: &Document) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}:", title.bold())?;
        writeln!(self.output, "{}", document)?;
        Ok(())
    }

    fn list(&mut self, title: &str, items: &[&str]) -> Result<()> {
        writeln!(self.output, "{}:", title)?;
        for item in items {
            writeln!(self.output, "- {}", item)?;
        }
        Ok(())
    }

    fn info(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn success(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message.green())?;
        Ok(())
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        writeln!(self.errors, "{} {}", "Warning:".yellow(), message)?;
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        writeln!(self.errors, "{} {}", "Error:".red(), message)?;
        Ok(())
    }
}
