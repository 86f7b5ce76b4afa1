//! Tag lookup inside a single DocBlock.

use crate::domain::{Stub, StubKind};

/// A tag marker and the declaration it produces.
pub struct TagRule {
    pub marker: &'static str,
    pub kind: StubKind,
}

/// Tried in order; the first marker present in the block wins.
pub const TAG_RULES: &[TagRule] = &[
    TagRule { marker: "@class ", kind: StubKind::Class },
    TagRule { marker: "@fn ", kind: StubKind::Function },
    TagRule { marker: "@var ", kind: StubKind::Variable },
];

/// Derive the declaration stub for one block's raw text.
///
/// The argument runs from the end of the marker to the next newline. A tag on
/// the block's last line has no newline after trimming, so the argument stops
/// at `close_marker` instead, or at end of text when that is missing too.
pub fn parse_stub(block_text: &str, close_marker: &str) -> Option<Stub> {
    let text = block_text.trim();
    TAG_RULES.iter().find_map(|rule| {
        tag_argument(text, rule.marker, close_marker)
            .map(|argument| Stub { kind: rule.kind, argument: argument.to_string() })
    })
}

fn tag_argument<'a>(text: &'a str, marker: &str, close_marker: &str) -> Option<&'a str> {
    let start = text.find(marker)? + marker.len();
    let rest = &text[start..];
    let end = rest
        .find('\n')
        .or_else(|| rest.find(close_marker))
        .unwrap_or(rest.len());
    Some(rest[..end].trim())
}
