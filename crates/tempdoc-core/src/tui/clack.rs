//! Charm-style console using cliclack

use super::console::{Console, MenuChoice};
use crate::document::{Document, DocumentKind};
use anyhow::Result;

/// Interactive console backed by cliclack prompts
#[derive(Debug, Clone, Default)]
pub struct ClackConsole;

impl ClackConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for ClackConsole {
    fn intro(&mut self, title: &str) -> Result<()> {
        cliclack::intro(title)?;
        Ok(())
    }

    fn outro(&mut self, message: &str) -> Result<()> {
        cliclack::outro(message)?;
        Ok(())
    }

    fn menu(&mut self) -> Result<MenuChoice> {
        cliclack::note("Available commands", MenuChoice::menu_text())?;

        let input: String = cliclack::input("Enter command")
            .placeholder("1-4")
            .validate(|input: &String| match MenuChoice::parse(input) {
                Some(_) => Ok(()),
                None => Err("Invalid command. Try again."),
            })
            .interact()?;

        // Validation above guarantees a match
        MenuChoice::parse(&input).ok_or_else(|| anyhow::anyhow!("Invalid command: {}", input))
    }

    fn input(&mut self, prompt: &str, required: bool) -> Result<String> {
        let value: String = cliclack::input(prompt).required(required).interact()?;
        Ok(value)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer: bool = cliclack::confirm(prompt).initial_value(false).interact()?;
        Ok(answer)
    }

    fn select_kind(&mut self) -> Result<DocumentKind> {
        let mut select = cliclack::select("Document kind");
        for kind in DocumentKind::ALL {
            select = select.item(kind, kind.display_name(), "");
        }

        let kind: DocumentKind = select.initial_value(DocumentKind::default()).interact()?;
        Ok(kind)
    }

    fn show_document(&mut self, title: &str, document: &Document) -> Result<()> {
        cliclack::note(title, document)?;
        Ok(())
    }

    fn list(&mut self, title: &str, items: &[&str]) -> Result<()> {
        let body = items
            .iter()
            .map(|item| format!("- {}", item))
            .collect::<Vec<_>>()
            .join("\n");
        cliclack::note(title, body)?;
        Ok(())
    }

    fn info(&mut self, message: &str) -> Result<()> {
        cliclack::log::info(message)?;
        Ok(())
    }

    fn success(&mut self, message: &str) -> Result<()> {
        cliclack::log::success(message)?;
        Ok(())
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        cliclack::log::warning(message)?;
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        cliclack::log::error(message)?;
        Ok(())
    }
}
