//! Error types for template store operations.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for store and document operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while working with templates and documents.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No template is registered under the requested name.
    #[error("Template for {0} not found.")]
    TemplateNotFound(String),

    /// A template or document file could not be opened, read or written.
    #[error("Unable to access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub(crate) fn file_access(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True for the template-not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TemplateNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_template() {
        let err = StoreError::TemplateNotFound("Memo".to_string());
        assert_eq!(err.to_string(), "Template for Memo not found.");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_file_access_message_includes_path() {
        let err = StoreError::file_access(
            "templates/Memo.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("templates/Memo.txt"));
        assert!(message.contains("denied"));
        assert!(!err.is_not_found());
    }
}
