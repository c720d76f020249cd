//! tempdoc CLI - create documents from plain-text templates

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tempdoc_core::tui::MenuArgs;
use tempdoc_core::{CopyStrategy, DocumentKind, StoreConfig, TemplateStore};

#[derive(Parser, Debug)]
#[command(name = "tempdoc")]
#[command(about = "Create documents from plain-text templates")]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Use line-based prompts instead of the interactive TUI
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(ClapArgs, Debug)]
pub struct StoreArgs {
    /// Directory holding <name>.txt template files
    #[arg(long = "templates-dir", global = true)]
    pub templates_dir: Option<PathBuf>,

    /// How documents are copied from templates
    #[arg(long, value_enum, global = true)]
    pub strategy: Option<CopyStrategy>,
}

impl From<StoreArgs> for StoreConfig {
    fn from(args: StoreArgs) -> Self {
        StoreConfig::default()
            .with_templates_dir(args.templates_dir)
            .with_strategy(args.strategy)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive menu (default)
    Menu,
    /// List available templates
    List,
    /// Add or overwrite a template
    Add(AddArgs),
    /// Create a document from a template
    Create(CreateArgs),
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Template name (also the file name, without .txt)
    pub name: String,

    /// Template content
    pub content: String,

    /// Document kind produced from this template
    #[arg(short, long, value_enum, default_value_t = DocumentKind::Report)]
    pub kind: DocumentKind,
}

#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Template to copy
    pub template: String,

    /// Replace the copied content
    #[arg(short, long)]
    pub content: Option<String>,

    /// Save the document to <OUTPUT>.txt
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn open_store(config: &StoreConfig) -> Result<TemplateStore> {
    let (store, report) = TemplateStore::open(config).with_context(|| {
        format!(
            "Failed to open templates directory {}",
            config.templates_dir.display()
        )
    })?;

    for skipped in &report.skipped {
        eprintln!(
            "{} Skipped {}: {}",
            "Warning:".yellow(),
            skipped.path.display(),
            skipped.reason
        );
    }

    Ok(store)
}

fn list_templates(config: &StoreConfig) -> Result<()> {
    let store = open_store(config)?;

    if store.is_empty() {
        println!("No templates in {}", store.directory().display());
        return Ok(());
    }

    println!("{}", "Available templates:".cyan().bold());
    for name in store.list_templates() {
        println!("- {}", name);
    }

    Ok(())
}

fn add_template(config: &StoreConfig, args: AddArgs) -> Result<()> {
    let mut store = open_store(config)?;

    let path = store
        .add_template_as(args.kind, args.name.trim(), args.content)
        .context("Unable to save template")?;

    println!("{} Template saved to {}", "done".green(), path.display());
    Ok(())
}

fn create_document(config: &StoreConfig, args: CreateArgs) -> Result<()> {
    let store = open_store(config)?;

    let mut document = match store.create_document(&args.template) {
        Ok(document) => document,
        Err(e) if e.is_not_found() => {
            anyhow::bail!(
                "{} Available templates: {}",
                e,
                store.list_templates().join(", ")
            );
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(content) = args.content {
        document.set_content(content);
    }

    println!("{}", document);

    if let Some(output) = args.output {
        let path = document
            .save_to_file(&output)
            .context("Unable to save document")?;
        println!("{} Document saved to {}", "done".green(), path.display());
    }

    Ok(())
}

fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config: StoreConfig = args.store.into();

    match args.command {
        Some(Command::List) => list_templates(&config),
        Some(Command::Add(add_args)) => add_template(&config, add_args),
        Some(Command::Create(create_args)) => create_document(&config, create_args),
        Some(Command::Menu) | None => {
            let result = tempdoc_core::run(MenuArgs {
                config,
                plain: args.plain,
            });

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}
