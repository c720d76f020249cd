//! Tempdoc Core - document templates stored as plain text files
//!
//! This library keeps a registry of named text templates backed by a directory
//! on disk, and manufactures independent, editable documents from them.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - the two-line text format, documents, and the template store
//! - **Layer 2: Copy Strategies** - `CopyStrategy` decides how a template becomes a document
//! - **Layer 3: CLI/TUI Interface** - the interactive menu loop and its consoles (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based menu and the plain line console
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use tempdoc_core::{CopyStrategy, StoreConfig, TemplateStore};
//!
//! let mut store = TemplateStore::new("templates", CopyStrategy::Prototype);
//! store.load_templates()?;
//! store.add_template("Report", "Quarterly numbers")?;
//!
//! let mut doc = store.create_document("Report")?;
//! doc.set_content("Revised numbers");
//! doc.save_to_file("out")?;
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod store;
pub mod strategy;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::StoreConfig;
pub use document::{Document, DocumentKind, SaveState};
pub use error::{StoreError, StoreResult};
pub use store::{LoadReport, Template, TemplateStore};
pub use strategy::CopyStrategy;

#[cfg(feature = "tui")]
pub use tui::run;
