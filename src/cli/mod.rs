//! Command-line interface for docblock-filter
//!
//! Reads one source file and prints the filtered stand-in source on stdout.

use anyhow::Result;
use clap::parser::ValueSource;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{merge_cli_with_config, CliOverrides, FilterConfig, LineEnding};

mod filter;
mod manual;

/// Doxygen input filter: keeps DocBlocks and adds declaration stubs for @class, @fn and @var
#[derive(Parser)]
#[command(name = "docblock-filter")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Source file to filter
    #[arg(value_name = "INPUT_FILE", allow_hyphen_values = true)]
    input: Option<PathBuf>,

    /// Ignored words after the input file
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    rest: Vec<String>,

    /// Show usage
    #[arg(short, long)]
    help: bool,

    /// Show manual
    #[arg(short, long)]
    manual: bool,

    /// Show version
    #[arg(short = 'v', long)]
    version: bool,

    /// Print the table of contents as JSON instead of the filtered source
    #[arg(long)]
    toc: bool,

    /// Line terminator for the lines this tool writes
    #[arg(long, value_name = "STYLE", value_enum)]
    line_ending: Option<LineEnding>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(long)]
    verbose: bool,
}

/// Per-run state threaded through the pipeline.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub version: &'static str,
    pub input: Option<PathBuf>,
    pub config: FilterConfig,
    pub toc: bool,
}

/// Informational flags; only honored when given before the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Help,
    Manual,
    Version,
}

pub fn run() -> Result<()> {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let config = merge_cli_with_config(
        FilterConfig::default(),
        CliOverrides { line_ending: cli.line_ending },
    );
    let ctx = RunContext {
        version: env!("CARGO_PKG_VERSION"),
        input: cli.input,
        config,
        toc: cli.toc,
    };

    if !cli.rest.is_empty() {
        debug!(ignored = ?cli.rest, "ignoring arguments after the input file");
    }

    match leading_action(&matches) {
        Some(Action::Help) => {
            Cli::command().print_help()?;
            Ok(())
        }
        Some(Action::Manual) => {
            print!("{}", manual::render(&ctx));
            Ok(())
        }
        Some(Action::Version) => {
            println!("{}", ctx.version);
            Ok(())
        }
        None => filter::run(&ctx),
    }
}

/// The earliest informational flag on the command line, unless the input
/// file comes before it.
fn leading_action(matches: &ArgMatches) -> Option<Action> {
    let input_index = matches.index_of("input");
    [("help", Action::Help), ("manual", Action::Manual), ("version", Action::Version)]
        .into_iter()
        .filter(|(id, _)| matches.value_source(id) == Some(ValueSource::CommandLine))
        .filter_map(|(id, action)| matches.index_of(id).map(|index| (index, action)))
        .filter(|(index, _)| input_index.map_or(true, |input| *index < input))
        .min_by_key(|(index, _)| *index)
        .map(|(_, action)| action)
}

#[cfg(test)]
mod tests {
    use super::{leading_action, Action, Cli};
    use clap::CommandFactory;

    fn action_for(args: &[&str]) -> Option<Action> {
        let matches = Cli::command()
            .try_get_matches_from(std::iter::once("docblock-filter").chain(args.iter().copied()))
            .expect("valid arguments");
        leading_action(&matches)
    }

    #[test]
    fn first_flag_wins() {
        assert_eq!(action_for(&["-m"]), Some(Action::Manual));
        assert_eq!(action_for(&["-v", "-m"]), Some(Action::Version));
        assert_eq!(action_for(&["--help", "-v"]), Some(Action::Help));
        assert_eq!(action_for(&["-m", "a.js"]), Some(Action::Manual));
    }

    #[test]
    fn flags_after_input_are_ignored() {
        assert_eq!(action_for(&["a.js"]), None);
        assert_eq!(action_for(&["a.js", "-m"]), None);
        assert_eq!(action_for(&["a.js", "extra", "-v"]), None);
    }
}
