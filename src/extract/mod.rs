//! DocBlock extraction.
//!
//! A single pass over the input lines tracks whether a block is open, collects
//! its text, and tags each closed block with a declaration stub. Lines outside
//! blocks are discarded; only their count matters for alignment later.

use std::io::BufRead;
use tracing::debug;

use crate::config::{CLOSE_MARKER, OPEN_MARKER};
use crate::domain::{DocBlock, ScanReport};
use crate::error::FilterError;

pub mod tags;

pub use tags::{parse_stub, TagRule, TAG_RULES};

#[derive(Debug, Default)]
enum ScanState {
    #[default]
    Idle,
    InBlock {
        start_line: usize,
        line_count: usize,
        text: String,
    },
}

#[derive(Debug, Default)]
pub struct BlockExtractor {
    state: ScanState,
    line_number: usize,
    blocks: Vec<DocBlock>,
}

impl BlockExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `reader` to the end and return every closed block.
    ///
    /// A read failure stops the scan but keeps the blocks collected so far;
    /// the failure is reported through [`ScanReport::read_error`].
    pub fn scan<R: BufRead>(mut reader: R) -> ScanReport {
        let mut extractor = Self::new();
        let mut read_error = None;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => extractor.feed_line(&String::from_utf8_lossy(&buf)),
                Err(source) => {
                    read_error =
                        Some(FilterError::UnexpectedRead { line: extractor.line_number, source });
                    break;
                }
            }
        }

        let mut report = extractor.finish();
        report.read_error = read_error;
        report
    }

    /// Process one physical line, terminator included.
    pub fn feed_line(&mut self, line: &str) {
        self.line_number += 1;

        if matches!(self.state, ScanState::Idle) && line.contains(OPEN_MARKER) {
            self.state = ScanState::InBlock {
                start_line: self.line_number,
                line_count: 0,
                text: String::new(),
            };
        }

        let closes = match &mut self.state {
            ScanState::Idle => false,
            ScanState::InBlock { line_count, text, .. } => {
                *line_count += 1;
                text.push_str(line);
                line.contains(CLOSE_MARKER)
            }
        };

        if closes {
            self.close_block();
        }
    }

    fn close_block(&mut self) {
        if let ScanState::InBlock { start_line, line_count, text } = std::mem::take(&mut self.state)
        {
            let stub = parse_stub(&text, CLOSE_MARKER);
            let block = DocBlock { start_line, line_count, raw_text: text, stub };
            debug!(start_line, end_line = block.end_line(), stub = ?block.stub, "closed DocBlock");
            self.blocks.push(block);
        }
    }

    /// End the scan. An unterminated block is dropped.
    pub fn finish(self) -> ScanReport {
        if let ScanState::InBlock { start_line, line_count, .. } = &self.state {
            debug!(start_line, line_count, "dropping unterminated DocBlock at end of input");
        }

        ScanReport { blocks: self.blocks, lines_read: self.line_number, read_error: None }
    }
}

/// Scan an in-memory source text.
pub fn scan_str(text: &str) -> ScanReport {
    BlockExtractor::scan(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::{scan_str, BlockExtractor};
    use crate::error::FilterError;
    use std::io::{self, BufReader, Cursor, Read};

    fn scan(text: &str) -> crate::domain::ScanReport {
        scan_str(text)
    }

    #[test]
    fn no_blocks_in_plain_source() {
        let report = scan("fn main() {}\n// comment\n");
        assert!(report.blocks.is_empty());
        assert_eq!(report.lines_read, 2);
        assert!(report.read_error.is_none());
    }

    #[test]
    fn multi_line_block_records_position_and_text() {
        let source = "let a = 1;\n\n/**\n * Adds.\n * @fn add(a, b)\n */\nfunction add(a, b) {}\n";
        let report = scan(source);
        assert_eq!(report.blocks.len(), 1);

        let block = &report.blocks[0];
        assert_eq!(block.start_line, 3);
        assert_eq!(block.line_count, 4);
        assert_eq!(block.raw_text, "/**\n * Adds.\n * @fn add(a, b)\n */\n");
        assert_eq!(block.stub_text(), "function add(a, b){}");
    }

    #[test]
    fn close_marker_before_open_is_ignored() {
        let source = "x = 1; */\n/** @var x */\n";
        let report = scan(source);
        assert_eq!(report.blocks.len(), 1);
        assert_eq!(report.blocks[0].start_line, 2);
        assert_eq!(report.blocks[0].line_count, 1);
    }

    #[test]
    fn open_and_close_on_one_line() {
        let report = scan("a\nb\n/** @class Foo */\n");
        assert_eq!(report.blocks.len(), 1);
        assert_eq!(report.blocks[0].start_line, 3);
        assert_eq!(report.blocks[0].line_count, 1);
        assert_eq!(report.blocks[0].stub_text(), "class Foo{}");
    }

    #[test]
    fn open_marker_inside_block_is_content() {
        let source = "/**\n * see /** here\n * @var inner\n */\n";
        let report = scan(source);
        assert_eq!(report.blocks.len(), 1);
        assert_eq!(report.blocks[0].start_line, 1);
        assert_eq!(report.blocks[0].line_count, 4);
        assert_eq!(report.blocks[0].raw_text, source);
    }

    #[test]
    fn unterminated_block_is_dropped() {
        let source = "/** @class A */\ncode\n/**\n * @class B\n";
        let report = scan(source);
        assert_eq!(report.blocks.len(), 1);
        assert_eq!(report.blocks[0].stub_text(), "class A{}");
        assert_eq!(report.lines_read, 4);
    }

    #[test]
    fn blocks_come_out_in_line_order() {
        let source = "/** @class A */\n\n/**\n * @fn b()\n */\n\n/** @var c */\n";
        let starts: Vec<usize> = scan(source).blocks.iter().map(|b| b.start_line).collect();
        assert_eq!(starts, vec![1, 3, 7]);
    }

    #[test]
    fn last_line_without_terminator_still_closes() {
        let report = scan("x\n/** @var tail */");
        assert_eq!(report.blocks.len(), 1);
        assert_eq!(report.blocks[0].raw_text, "/** @var tail */");
    }

    #[test]
    fn invalid_utf8_does_not_stop_scan() {
        let bytes: &[u8] = b"\xff\xfe junk\n/** @var ok */\n";
        let report = BlockExtractor::scan(bytes);
        assert_eq!(report.blocks.len(), 1);
        assert_eq!(report.blocks[0].start_line, 2);
    }

    struct FailAtEnd {
        data: Cursor<Vec<u8>>,
    }

    impl Read for FailAtEnd {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.data.read(buf)?;
            if n == 0 {
                Err(io::Error::new(io::ErrorKind::Other, "device went away"))
            } else {
                Ok(n)
            }
        }
    }

    #[test]
    fn read_failure_keeps_collected_blocks() {
        let reader = BufReader::new(FailAtEnd {
            data: Cursor::new(b"/** @class A */\nx\n/** partial".to_vec()),
        });
        let report = BlockExtractor::scan(reader);

        assert_eq!(report.blocks.len(), 1);
        assert_eq!(report.lines_read, 2);
        assert!(matches!(report.read_error, Some(FilterError::UnexpectedRead { line: 2, .. })));
    }
}
