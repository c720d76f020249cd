//! Store configuration

use crate::strategy::CopyStrategy;
use std::path::PathBuf;

/// Directory scanned for templates when none is given
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Where templates live and how documents are copied from them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding `<name>.txt` template files
    pub templates_dir: PathBuf,

    /// Copy strategy used by `create_document`
    pub strategy: CopyStrategy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from(DEFAULT_TEMPLATES_DIR),
            strategy: CopyStrategy::default(),
        }
    }
}

impl StoreConfig {
    pub fn with_templates_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.templates_dir = dir;
        }
        self
    }

    pub fn with_strategy(mut self, strategy: Option<CopyStrategy>) -> Self {
        if let Some(strategy) = strategy {
            self.strategy = strategy;
        }
        self
    }
}
