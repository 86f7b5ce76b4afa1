//! Filter configuration
//!
//! There is no config file: defaults live here and the CLI layers its
//! overrides on top through [`merge_cli_with_config`].

use clap::ValueEnum;
use serde::Serialize;

mod merge;

pub use merge::{merge_cli_with_config, CliOverrides};

/// Three-character sequence opening a DocBlock
pub const OPEN_MARKER: &str = "/**";

/// Two-character sequence closing a DocBlock
pub const CLOSE_MARKER: &str = "*/";

/// Line terminator used for synthesized lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\r\n` on Windows, `\n` elsewhere
    #[default]
    Native,
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    pub line_ending: LineEnding,
}
