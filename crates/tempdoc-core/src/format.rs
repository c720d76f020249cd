//! Two-line text format shared by templates and saved documents
//!
//! ```text
//! Document: <name>
//! Content: <content>
//! ```

/// Prefix of the header line
pub const HEADER_PREFIX: &str = "Document: ";

/// Prefix of the content line
pub const CONTENT_PREFIX: &str = "Content: ";

/// Fields recovered from a two-line record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRecord {
    /// Name from the header line (prefix removed when present)
    pub header: String,

    /// Second line (prefix removed when present)
    pub content: String,
}

/// Render a record in the on-disk format, trailing newline included
pub fn render(name: &str, content: &str) -> String {
    format!("{HEADER_PREFIX}{name}\n{CONTENT_PREFIX}{content}\n")
}

/// Parse the first two lines of a record. Missing lines become empty strings
/// and anything after the second line is ignored.
pub fn parse(text: &str) -> ParsedRecord {
    let mut lines = text.lines().map(|line| line.trim_end_matches('\r'));

    let header = lines.next().unwrap_or_default();
    let content = lines.next().unwrap_or_default();

    ParsedRecord {
        header: header.strip_prefix(HEADER_PREFIX).unwrap_or(header).to_string(),
        content: content
            .strip_prefix(CONTENT_PREFIX)
            .unwrap_or(content)
            .to_string(),
    }
}

/// Recover a record produced by [`render`] without losing any part of the
/// content: everything after the `Content: ` prefix up to the final newline.
///
/// Returns `None` when the text is not in rendered form. The header must not
/// contain a line break for the split to be unambiguous.
pub fn parse_rendered(text: &str) -> Option<ParsedRecord> {
    let body = text.strip_prefix(HEADER_PREFIX)?.strip_suffix('\n')?;
    let (header, rest) = body.split_once('\n')?;
    let content = rest.strip_prefix(CONTENT_PREFIX)?;

    Some(ParsedRecord {
        header: header.to_string(),
        content: content.to_string(),
    })
}
