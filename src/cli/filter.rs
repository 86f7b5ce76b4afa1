//! Filter command implementation

use anyhow::Result;
use clap::CommandFactory;
use console::style;
use std::fs::File;
use std::io::{self, BufReader, Write};
use tracing::{debug, warn};

use super::{Cli, RunContext};
use crate::domain::ScanReport;
use crate::error::FilterError;
use crate::extract::BlockExtractor;
use crate::render::{render_blocks, write_output};

pub fn run(ctx: &RunContext) -> Result<()> {
    let report = match scan_input(ctx) {
        Ok(report) => report,
        Err(err) => {
            show_error(&err)?;
            show_usage()?;
            return Ok(());
        }
    };

    if let Some(err) = &report.read_error {
        warn!(error = %err, "input ended early; rendering blocks read so far");
        show_error(err)?;
    }
    debug!(blocks = report.blocks.len(), lines = report.lines_read, "scan complete");

    let rendered = if ctx.toc {
        let mut json = serde_json::to_string_pretty(&report.blocks)?;
        json.push('\n');
        json
    } else {
        render_blocks(&report.blocks, ctx.config.line_ending)
    };

    write_output(io::stdout().lock(), &rendered)
}

/// Open the input and scan it. The file is closed before this returns.
fn scan_input(ctx: &RunContext) -> Result<ScanReport, FilterError> {
    let path = ctx.input.as_deref().ok_or(FilterError::InsufficientParameters)?;
    let file = File::open(path)
        .map_err(|source| FilterError::FileOpen { path: path.to_path_buf(), source })?;
    debug!(path = %path.display(), "scanning input");
    Ok(BlockExtractor::scan(BufReader::new(file)))
}

fn show_error(err: &FilterError) -> io::Result<()> {
    let message = match err {
        FilterError::UnexpectedRead { source, .. } => format!("Error: {}: {}", err, source),
        _ => format!("Error: {}", err),
    };
    let mut stderr = io::stderr().lock();
    writeln!(stderr)?;
    writeln!(stderr, "{}", style(message).red())
}

fn show_usage() -> io::Result<()> {
    let help = Cli::command().render_help();
    let mut stderr = io::stderr().lock();
    writeln!(stderr)?;
    write!(stderr, "{}", help)
}
