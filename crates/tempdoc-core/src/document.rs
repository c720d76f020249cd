//! Editable documents created from templates

use crate::error::{StoreError, StoreResult};
use crate::format;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix appended to every saved document and template file
pub const FILE_SUFFIX: &str = ".txt";

/// Document variants. They carry identical fields; the kind only travels
/// with the value so a copy keeps the variant it was made from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum DocumentKind {
    #[default]
    Report,
    Article,
    Contract,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Report,
        DocumentKind::Article,
        DocumentKind::Contract,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentKind::Report => "Report",
            DocumentKind::Article => "Article",
            DocumentKind::Contract => "Contract",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Persistence state of a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SaveState {
    #[default]
    Unsaved,
    /// Last successful save went to this path
    Saved(PathBuf),
}

/// An independently owned document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    kind: DocumentKind,
    name: String,
    content: String,
    state: SaveState,
}

impl Document {
    /// Create a new unsaved document
    pub fn new(kind: DocumentKind, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            content: content.into(),
            state: SaveState::Unsaved,
        }
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn state(&self) -> &SaveState {
        &self.state
    }

    pub fn is_saved(&self) -> bool {
        matches!(self.state, SaveState::Saved(_))
    }

    /// Replace the content in place
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Write the document to `<filename>.txt`, overwriting any existing file.
    /// The header carries the document's own name, not the filename.
    pub fn save_to_file(&mut self, filename: impl AsRef<Path>) -> StoreResult<PathBuf> {
        let path = with_file_suffix(filename.as_ref());

        fs::write(&path, format::render(&self.name, &self.content))
            .map_err(|e| StoreError::file_access(&path, e))?;

        self.state = SaveState::Saved(path.clone());
        Ok(path)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}\n{}{}",
            format::HEADER_PREFIX,
            self.name,
            format::CONTENT_PREFIX,
            self.content
        )
    }
}

/// Append `.txt` to a filename without touching any extension it already has
pub(crate) fn with_file_suffix(filename: &Path) -> PathBuf {
    let mut name = filename.as_os_str().to_os_string();
    name.push(FILE_SUFFIX);
    PathBuf::from(name)
}
