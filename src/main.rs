//! docblock-filter: Doxygen input filter for languages Doxygen does not support
//!
//! Prints a PHP-like stand-in for the given source file, made of its
//! DocBlocks and one declaration stub per block.

use anyhow::Result;

fn main() -> Result<()> {
    docblock_filter::cli::run()
}
