use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use cz::writer::OutputFormat;

mod config;
mod convert;
mod inspect;

/// cz - infer field types in delimited text and emit a typed binary record stream
#[derive(Parser)]
#[command(name = "cz")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    convert: ConvertArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Output format selection.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    /// Self-describing binary record stream
    Binary,
    /// One JSON object per line
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Binary => OutputFormat::Binary,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Arguments of the default convert action.
#[derive(Args)]
pub struct ConvertArgs {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Keep every field as a string instead of inferring types
    #[arg(short = 's', long)]
    strings_only: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum)]
    format: Option<FormatArg>,

    /// Field delimiter (single ASCII character)
    #[arg(short = 'd', long)]
    delimiter: Option<char>,

    /// Flush output after every record
    #[arg(long)]
    flush: bool,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a binary record stream as JSON lines
    Inspect {
        /// Binary stream file (defaults to stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Inspect { file }) => inspect::run(file),
        None => convert::run(cli.convert),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn inspect_file(cli: &Cli) -> Option<&PathBuf> {
        match &cli.command {
            Some(Commands::Inspect { file }) => file.as_ref(),
            None => None,
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_before_subcommand() {
        let cli = Cli::try_parse_from(["cz", "-v", "inspect", "out.czb"]).unwrap();
        assert_eq!(cli.verbosity(), 1);
        assert_eq!(inspect_file(&cli), Some(&PathBuf::from("out.czb")));
        assert!(cli.convert.input.is_none());
    }

    #[test]
    fn test_verbose_after_subcommand() {
        let cli = Cli::try_parse_from(["cz", "inspect", "-vv", "out.czb"]).unwrap();
        assert_eq!(cli.verbosity(), 2);
        assert_eq!(inspect_file(&cli), Some(&PathBuf::from("out.czb")));
    }

    #[test]
    fn test_default_convert_action() {
        let cli = Cli::try_parse_from(["cz", "-v", "-s", "--format", "json", "in.csv"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbosity(), 1);
        assert!(cli.convert.strings_only);
        assert!(matches!(cli.convert.format, Some(FormatArg::Json)));
        assert_eq!(cli.convert.input, Some(PathBuf::from("in.csv")));
    }

    #[test]
    fn test_unknown_argument_is_rejected() {
        // Parsing fails before dispatch, so no input is opened or read
        let err = Cli::try_parse_from(["cz", "--bogus", "in.csv"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);

        let err = Cli::try_parse_from(["cz", "--format", "xml"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
