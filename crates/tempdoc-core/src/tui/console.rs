//! Console abstraction the menu loop is written against

use crate::document::{Document, DocumentKind};
use anyhow::Result;

/// Entries of the main menu, numbered from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Create,
    Add,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::List,
        MenuChoice::Create,
        MenuChoice::Add,
        MenuChoice::Exit,
    ];

    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::List => 1,
            MenuChoice::Create => 2,
            MenuChoice::Add => 3,
            MenuChoice::Exit => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::List => "List templates",
            MenuChoice::Create => "Create document from template",
            MenuChoice::Add => "Add new template",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Parse a menu number typed by the user
    pub fn parse(input: &str) -> Option<Self> {
        let number: u8 = input.trim().parse().ok()?;
        Self::ALL.into_iter().find(|choice| choice.number() == number)
    }

    /// Numbered menu, one entry per line
    pub fn menu_text() -> String {
        Self::ALL
            .iter()
            .map(|choice| format!("{}. {}", choice.number(), choice.label()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Prompts and status output used by the menu loop.
///
/// Errors are terminal I/O failures only; store errors are reported through
/// [`Console::error`] and never returned.
pub trait Console {
    /// Banner shown once when the loop starts
    fn intro(&mut self, title: &str) -> Result<()>;

    /// Message shown once when the loop ends
    fn outro(&mut self, message: &str) -> Result<()>;

    /// Show the menu and return a valid choice, re-prompting on bad input
    fn menu(&mut self) -> Result<MenuChoice>;

    /// Read one line of text. When `required` is set, empty input is rejected.
    fn input(&mut self, prompt: &str, required: bool) -> Result<String>;

    /// Ask a yes/no question
    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    /// Pick the kind of a new template
    fn select_kind(&mut self) -> Result<DocumentKind>;

    /// Render a document under a title
    fn show_document(&mut self, title: &str, document: &Document) -> Result<()>;

    /// Render a titled bullet list
    fn list(&mut self, title: &str, items: &[&str]) -> Result<()>;

    fn info(&mut self, message: &str) -> Result<()>;

    fn success(&mut self, message: &str) -> Result<()>;

    fn warning(&mut self, message: &str) -> Result<()>;

    fn error(&mut self, message: &str) -> Result<()>;
}
