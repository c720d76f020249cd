//! How a stored template becomes a new document

use crate::document::Document;
use crate::format;
use crate::store::Template;
use std::fmt;

/// Strategy used by the store to manufacture documents.
///
/// Every strategy yields a document equal in kind, name and content to the
/// template, owning its own strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum CopyStrategy {
    /// Copy the name and content strings one field at a time
    Fields,
    /// Render the template to its text form and parse it back
    Rebuild,
    /// Clone the template's prototype document
    #[default]
    Prototype,
}

impl CopyStrategy {
    pub fn display_name(&self) -> &'static str {
        match self {
            CopyStrategy::Fields => "fields",
            CopyStrategy::Rebuild => "rebuild",
            CopyStrategy::Prototype => "prototype",
        }
    }

    /// Produce a new, independent document from a template
    pub fn instantiate(&self, template: &Template) -> Document {
        match self {
            CopyStrategy::Fields => Document::new(
                template.kind(),
                template.name().to_string(),
                template.content().to_string(),
            ),
            CopyStrategy::Rebuild => {
                let text = format::render(template.name(), template.content());
                match format::parse_rendered(&text) {
                    Some(record) if !template.name().contains('\n') => {
                        Document::new(template.kind(), record.header, record.content)
                    }
                    // A line break in the name makes the text form ambiguous
                    _ => CopyStrategy::Fields.instantiate(template),
                }
            }
            CopyStrategy::Prototype => template.prototype().clone(),
        }
    }
}

impl fmt::Display for CopyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
