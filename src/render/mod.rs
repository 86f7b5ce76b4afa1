//! Output rendering.
//!
//! Every block is replayed at the line it occupied in the input, with the
//! lines in between replaced by blank lines, so that line numbers reported by
//! the documentation generator point back into the original file.

use std::io::Write;

use anyhow::Result;

use crate::config::LineEnding;
use crate::domain::DocBlock;

/// Render the blocks and their stubs as one string.
///
/// Each block is followed by its stub on a line of its own; a block without a
/// stub still gets the (empty) line so later blocks stay aligned. Nothing is
/// written after the last stub.
pub fn render_blocks(blocks: &[DocBlock], line_ending: LineEnding) -> String {
    let eol = line_ending.as_str();
    let capacity = blocks.iter().map(|b| b.raw_text.len() + 32).sum::<usize>();
    let mut out = String::with_capacity(capacity);

    // Number of the next output line.
    let mut cursor = 1usize;

    for block in blocks {
        while cursor < block.start_line {
            out.push_str(eol);
            cursor += 1;
        }

        out.push_str(&block.raw_text);
        if !block.raw_text.ends_with('\n') {
            out.push_str(eol);
        }
        out.push_str(&block.stub_text());
        out.push_str(eol);

        cursor += block.line_count + 1;
    }

    out
}

/// Write rendered output in one go.
pub fn write_output<W: Write>(mut writer: W, rendered: &str) -> Result<()> {
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    Ok(())
}
