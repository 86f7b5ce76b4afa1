//! Core domain types and models
//!
//! Defines DocBlock, Stub and the scan report handed from the extractor to
//! the renderer.

use serde::Serialize;
use std::fmt;

use crate::error::FilterError;

/// Kind of declaration synthesized for a DocBlock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StubKind {
    Class,
    Function,
    Variable,
}

impl StubKind {
    /// Render the placeholder declaration for `argument`.
    pub fn render(self, argument: &str) -> String {
        match self {
            StubKind::Class => format!("class {}{{}}", argument),
            StubKind::Function => format!("function {}{{}}", argument),
            StubKind::Variable => format!("var {};", argument),
        }
    }
}

/// A synthesized declaration attached to a DocBlock
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stub {
    pub kind: StubKind,

    /// Name (and signature, for functions) taken from the tag line
    pub argument: String,
}

impl fmt::Display for Stub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind.render(&self.argument))
    }
}

/// A documentation comment block captured from the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocBlock {
    /// Line holding the open marker (1-indexed)
    pub start_line: usize,

    /// Physical lines spanned, open and close lines included
    pub line_count: usize,

    /// Block lines exactly as read, terminators included
    pub raw_text: String,

    /// Declaration derived from the first matching tag
    pub stub: Option<Stub>,
}

impl DocBlock {
    /// Stub text as emitted after the block; empty when no tag matched.
    pub fn stub_text(&self) -> String {
        self.stub.as_ref().map(Stub::to_string).unwrap_or_default()
    }

    /// Last input line covered by the block (inclusive)
    pub fn end_line(&self) -> usize {
        self.start_line + self.line_count - 1
    }
}

/// Result of one scan pass over the input
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Table of contents, in scan order
    pub blocks: Vec<DocBlock>,

    /// Physical lines consumed before the scan stopped
    pub lines_read: usize,

    /// Set when reading failed before reaching end of input
    pub read_error: Option<FilterError>,
}
