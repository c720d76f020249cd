//! Template registry backed by a directory of two-line text files

use crate::config::StoreConfig;
use crate::document::{with_file_suffix, Document, DocumentKind};
use crate::error::{StoreError, StoreResult};
use crate::format;
use crate::strategy::CopyStrategy;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A named template. It keeps its fields as a prototype document that
/// copy strategies read from or clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    prototype: Document,
}

impl Template {
    pub fn new(kind: DocumentKind, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            prototype: Document::new(kind, name, content),
        }
    }

    pub fn kind(&self) -> DocumentKind {
        self.prototype.kind()
    }

    pub fn name(&self) -> &str {
        self.prototype.name()
    }

    pub fn content(&self) -> &str {
        self.prototype.content()
    }

    /// The unsaved document every prototype copy starts from
    pub fn prototype(&self) -> &Document {
        &self.prototype
    }
}

/// A template file that could not be loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of scanning the templates directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Names registered from disk, in directory order
    pub loaded: Vec<String>,

    /// Files that were present but unreadable
    pub skipped: Vec<SkippedFile>,
}

/// In-memory template registry persisted as `<dir>/<name>.txt` files
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
    strategy: CopyStrategy,
    templates: BTreeMap<String, Template>,
}

impl TemplateStore {
    /// Create an empty store rooted at `dir`. Nothing is read until
    /// [`TemplateStore::load_templates`] is called.
    pub fn new(dir: impl Into<PathBuf>, strategy: CopyStrategy) -> Self {
        Self {
            dir: dir.into(),
            strategy,
            templates: BTreeMap::new(),
        }
    }

    /// Create a store from config and load its directory
    pub fn open(config: &StoreConfig) -> StoreResult<(Self, LoadReport)> {
        let mut store = Self::new(config.templates_dir.clone(), config.strategy);
        let report = store.load_templates()?;
        Ok((store, report))
    }

    pub fn directory(&self) -> &Path {
        &self.dir
    }

    pub fn strategy(&self) -> CopyStrategy {
        self.strategy
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Register every regular file directly inside the templates directory,
    /// creating the directory first if it does not exist.
    ///
    /// The template name is the file stem; the first line is a header and is
    /// ignored, the second line is the content. Unreadable files are skipped
    /// and listed in the report.
    pub fn load_templates(&mut self) -> StoreResult<LoadReport> {
        self.ensure_directory()?;

        let mut report = LoadReport::default();

        let walker = WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(StoreError::file_access(&self.dir, io::Error::from(e)));
                }
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                    report.skipped.push(SkippedFile {
                        path,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let Some(name) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
                continue;
            };

            match fs::read_to_string(path) {
                Ok(text) => {
                    let record = format::parse(&text);
                    self.templates.insert(
                        name.clone(),
                        Template::new(DocumentKind::default(), name.clone(), record.content),
                    );
                    report.loaded.push(name);
                }
                Err(e) => report.skipped.push(SkippedFile {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }),
            }
        }

        Ok(report)
    }

    /// Register a report template and write it to `<dir>/<name>.txt`
    pub fn add_template(
        &mut self,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> StoreResult<PathBuf> {
        self.add_template_as(DocumentKind::default(), name, content)
    }

    /// Insert or overwrite a template, then persist it.
    ///
    /// Names that cannot be used as a file name inside the templates
    /// directory are rejected before anything changes. Otherwise the
    /// in-memory record is updated even when the write fails; the error is
    /// returned for the caller to report.
    pub fn add_template_as(
        &mut self,
        kind: DocumentKind,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> StoreResult<PathBuf> {
        let template = Template::new(kind, name, content);
        let name = template.name().to_string();
        self.check_name(&name)?;
        self.templates.insert(name.clone(), template);

        let template = &self.templates[&name];
        self.ensure_directory()?;

        let path = with_file_suffix(&self.dir.join(&name));
        fs::write(&path, format::render(template.name(), template.content()))
            .map_err(|e| StoreError::file_access(&path, e))?;

        Ok(path)
    }

    /// Names of all registered templates, in sorted order
    pub fn list_templates(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }

    /// Manufacture a new document from the named template
    pub fn create_document(&self, name: &str) -> StoreResult<Document> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| StoreError::TemplateNotFound(name.to_string()))?;

        Ok(self.strategy.instantiate(template))
    }

    /// A name must map to exactly one file directly inside the directory
    fn check_name(&self, name: &str) -> StoreResult<()> {
        let reason = if name.trim().is_empty() {
            Some("template name is empty")
        } else if name == "." || name == ".." || name.chars().any(std::path::is_separator) {
            Some("template name must be a plain file name")
        } else if name.contains(['\n', '\r']) {
            Some("template name must be a single line")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(StoreError::file_access(
                with_file_suffix(&self.dir.join(name)),
                io::Error::new(io::ErrorKind::InvalidInput, reason),
            )),
            None => Ok(()),
        }
    }

    fn ensure_directory(&self) -> StoreResult<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| StoreError::file_access(&self.dir, e))?;
        }
        Ok(())
    }
}
