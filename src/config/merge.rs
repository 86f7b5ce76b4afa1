//! CLI argument merging with config

use super::{FilterConfig, LineEnding};

#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub line_ending: Option<LineEnding>,
}

pub fn merge_cli_with_config(mut base_config: FilterConfig, cli: CliOverrides) -> FilterConfig {
    if let Some(line_ending) = cli.line_ending {
        base_config.line_ending = line_ending;
    }

    base_config
}
