//! The numbered menu loop

use super::clack::ClackConsole;
use super::console::{Console, MenuChoice};
use super::plain::PlainConsole;
use crate::config::StoreConfig;
use crate::store::{LoadReport, TemplateStore};
use anyhow::{Context, Result};

/// Arguments for the interactive menu
#[derive(Debug, Clone, Default)]
pub struct MenuArgs {
    /// Templates directory and copy strategy
    pub config: StoreConfig,

    /// Use line-based prompts instead of cliclack
    pub plain: bool,
}

/// Load the templates directory and run the menu until the user exits
pub fn run(args: MenuArgs) -> Result<()> {
    let (mut store, report) = TemplateStore::open(&args.config).with_context(|| {
        format!(
            "Failed to open templates directory {}",
            args.config.templates_dir.display()
        )
    })?;

    if args.plain {
        let mut console = PlainConsole::stdio();
        run_with(&mut console, &mut store, &report)
    } else {
        let mut console = ClackConsole::new();
        run_with(&mut console, &mut store, &report)
    }
}

/// Drive the menu loop on any console
pub fn run_with<C: Console>(
    console: &mut C,
    store: &mut TemplateStore,
    report: &LoadReport,
) -> Result<()> {
    console.intro("tempdoc")?;
    report_load(console, store, report)?;

    loop {
        match console.menu()? {
            MenuChoice::List => list_templates(console, store)?,
            MenuChoice::Create => create_document(console, store)?,
            MenuChoice::Add => add_template(console, store)?,
            MenuChoice::Exit => break,
        }
    }

    console.outro("Goodbye!")?;
    Ok(())
}

fn report_load<C: Console>(
    console: &mut C,
    store: &TemplateStore,
    report: &LoadReport,
) -> Result<()> {
    for skipped in &report.skipped {
        console.warning(&format!(
            "Skipped {}: {}",
            skipped.path.display(),
            skipped.reason
        ))?;
    }

    console.info(&format!(
        "Loaded {} template(s) from {} ({} copies)",
        report.loaded.len(),
        store.directory().display(),
        store.strategy()
    ))
}

fn list_templates<C: Console>(console: &mut C, store: &TemplateStore) -> Result<()> {
    let names = store.list_templates();
    if names.is_empty() {
        return console.info("No templates available. Add one with option 3.");
    }
    console.list("Available templates", &names)
}

fn create_document<C: Console>(console: &mut C, store: &TemplateStore) -> Result<()> {
    let name = console.input("Enter template name", true)?;

    let mut document = match store.create_document(name.trim()) {
        Ok(document) => document,
        Err(e) => return console.error(&e.to_string()),
    };

    console.show_document(
        &format!("New document created ({})", document.kind()),
        &document,
    )?;

    if console.confirm("Do you want to edit the content?")? {
        let content = console.input("Enter new content", false)?;
        document.set_content(content);
        console.show_document("Updated document", &document)?;
    }

    if console.confirm("Do you want to save this document to a file?")? {
        let filename = console.input("Enter filename", true)?;
        match document.save_to_file(filename.trim()) {
            Ok(path) => console.success(&format!("Document saved to {}", path.display()))?,
            Err(e) => console.error(&format!("Unable to save document. {}", e))?,
        }
    }

    Ok(())
}

fn add_template<C: Console>(console: &mut C, store: &mut TemplateStore) -> Result<()> {
    let name = console.input("Enter template name", true)?;
    let kind = console.select_kind()?;
    let content = console.input("Enter template content", false)?;

    let name = name.trim();
    match store.add_template_as(kind, name, content) {
        Ok(path) => console.success(&format!("Template saved to {}", path.display()))?,
        Err(e) => console.error(&format!("Unable to save template. {}", e))?,
    }

    // A rejected name leaves the store unchanged
    if store.get(name).is_some() {
        console.info("Template added successfully.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, DocumentKind};
    use crate::strategy::CopyStrategy;
    use std::collections::VecDeque;
    use std::fs;
    use tempfile::TempDir;

    /// Console fed from a fixed script that records everything shown
    #[derive(Default)]
    struct ScriptedConsole {
        choices: VecDeque<MenuChoice>,
        inputs: VecDeque<String>,
        confirms: VecDeque<bool>,
        kinds: VecDeque<DocumentKind>,
        transcript: Vec<String>,
    }

    impl ScriptedConsole {
        fn new(choices: &[MenuChoice]) -> Self {
            Self {
                choices: choices.iter().copied().collect(),
                ..Self::default()
            }
        }

        fn inputs(mut self, inputs: &[&str]) -> Self {
            self.inputs = inputs.iter().map(|s| s.to_string()).collect();
            self
        }

        fn confirms(mut self, confirms: &[bool]) -> Self {
            self.confirms = confirms.iter().copied().collect();
            self
        }

        fn kinds(mut self, kinds: &[DocumentKind]) -> Self {
            self.kinds = kinds.iter().copied().collect();
            self
        }

        fn shown(&self, needle: &str) -> bool {
            self.transcript.iter().any(|line| line.contains(needle))
        }
    }

    impl Console for ScriptedConsole {
        fn intro(&mut self, title: &str) -> Result<()> {
            self.transcript.push(format!("intro: {}", title));
            Ok(())
        }

        fn outro(&mut self, message: &str) -> Result<()> {
            self.transcript.push(format!("outro: {}", message));
            Ok(())
        }

        fn menu(&mut self) -> Result<MenuChoice> {
            Ok(self.choices.pop_front().unwrap_or(MenuChoice::Exit))
        }

        fn input(&mut self, prompt: &str, _required: bool) -> Result<String> {
            self.transcript.push(format!("input: {}", prompt));
            Ok(self.inputs.pop_front().expect("script ran out of inputs"))
        }

        fn confirm(&mut self, prompt: &str) -> Result<bool> {
            self.transcript.push(format!("confirm: {}", prompt));
            Ok(self.confirms.pop_front().expect("script ran out of confirms"))
        }

        fn select_kind(&mut self) -> Result<DocumentKind> {
            Ok(self.kinds.pop_front().unwrap_or_default())
        }

        fn show_document(&mut self, title: &str, document: &Document) -> Result<()> {
            self.transcript.push(format!("{}:\n{}", title, document));
            Ok(())
        }

        fn list(&mut self, title: &str, items: &[&str]) -> Result<()> {
            self.transcript
                .push(format!("{}: {}", title, items.join(", ")));
            Ok(())
        }

        fn info(&mut self, message: &str) -> Result<()> {
            self.transcript.push(format!("info: {}", message));
            Ok(())
        }

        fn success(&mut self, message: &str) -> Result<()> {
            self.transcript.push(format!("success: {}", message));
            Ok(())
        }

        fn warning(&mut self, message: &str) -> Result<()> {
            self.transcript.push(format!("warning: {}", message));
            Ok(())
        }

        fn error(&mut self, message: &str) -> Result<()> {
            self.transcript.push(format!("error: {}", message));
            Ok(())
        }
    }

    fn create_temp_store() -> (TemplateStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let mut store =
            TemplateStore::new(temp_dir.path().join("templates"), CopyStrategy::Prototype);
        store.load_templates().unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_edit_and_save_scenario() {
        let (mut store, temp_dir) = create_temp_store();
        store.add_template("Report", "Quarterly numbers").unwrap();
        let out = temp_dir.path().join("out");

        let mut console = ScriptedConsole::new(&[MenuChoice::Create])
            .inputs(&["Report", "Revised numbers", out.to_str().unwrap()])
            .confirms(&[true, true]);

        run_with(&mut console, &mut store, &LoadReport::default()).unwrap();

        assert!(console.shown("Document: Report\nContent: Quarterly numbers"));
        assert!(console.shown("Updated document:\nDocument: Report\nContent: Revised numbers"));
        assert!(console.shown("success: Document saved to"));
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("out.txt")).unwrap(),
            "Document: Report\nContent: Revised numbers\n"
        );
        assert_eq!(store.get("Report").unwrap().content(), "Quarterly numbers");
    }

    #[test]
    fn test_unknown_template_is_reported_and_loop_continues() {
        let (mut store, _temp_dir) = create_temp_store();
        let mut console = ScriptedConsole::new(&[MenuChoice::Create, MenuChoice::List])
            .inputs(&["Memo"]);

        run_with(&mut console, &mut store, &LoadReport::default()).unwrap();

        assert!(console.shown("error: Template for Memo not found."));
        assert!(console.shown("info: No templates available"));
        assert!(console.shown("outro: Goodbye!"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_declining_edit_and_save_writes_nothing() {
        let (mut store, temp_dir) = create_temp_store();
        store.add_template("Report", "Quarterly numbers").unwrap();
        let mut console = ScriptedConsole::new(&[MenuChoice::Create])
            .inputs(&["Report"])
            .confirms(&[false, false]);

        run_with(&mut console, &mut store, &LoadReport::default()).unwrap();

        assert!(!console.shown("Updated document"));
        assert!(!console.shown("saved to"));
        let entries = fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(entries, 1, "only the templates directory should exist");
    }

    #[test]
    fn test_add_then_list() {
        let (mut store, _temp_dir) = create_temp_store();
        let mut console = ScriptedConsole::new(&[MenuChoice::Add, MenuChoice::List])
            .inputs(&[" Lease ", "Twelve months"])
            .kinds(&[DocumentKind::Contract]);

        run_with(&mut console, &mut store, &LoadReport::default()).unwrap();

        assert!(console.shown("success: Template saved to"));
        assert!(console.shown("info: Template added successfully."));
        assert!(console.shown("Available templates: Lease"));
        let lease = store.get("Lease").unwrap();
        assert_eq!(lease.kind(), DocumentKind::Contract);
        assert_eq!(lease.content(), "Twelve months");
        assert!(store.directory().join("Lease.txt").is_file());
    }

    #[test]
    fn test_rejected_template_name_is_not_added() {
        let (mut store, _temp_dir) = create_temp_store();
        let mut console = ScriptedConsole::new(&[MenuChoice::Add])
            .inputs(&["../escape", "body"]);

        run_with(&mut console, &mut store, &LoadReport::default()).unwrap();

        assert!(console.shown("error: Unable to save template."));
        assert!(!console.shown("Template added successfully."));
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_save_is_reported() {
        let (mut store, temp_dir) = create_temp_store();
        store.add_template("Report", "numbers").unwrap();
        let target = temp_dir.path().join("missing").join("out");
        let mut console = ScriptedConsole::new(&[MenuChoice::Create])
            .inputs(&["Report", target.to_str().unwrap()])
            .confirms(&[false, true]);

        run_with(&mut console, &mut store, &LoadReport::default()).unwrap();

        assert!(console.shown("error: Unable to save document."));
    }

    #[test]
    fn test_load_report_is_shown() {
        let (mut store, _temp_dir) = create_temp_store();
        let report = LoadReport {
            loaded: vec!["Memo".to_string()],
            skipped: vec![crate::store::SkippedFile {
                path: "templates/Bad.txt".into(),
                reason: "stream did not contain valid UTF-8".to_string(),
            }],
        };
        let mut console = ScriptedConsole::new(&[]);

        run_with(&mut console, &mut store, &report).unwrap();

        assert!(console.shown("warning: Skipped templates/Bad.txt"));
        assert!(console.shown("info: Loaded 1 template(s)"));
        assert!(console.shown("prototype copies"));
    }
}
