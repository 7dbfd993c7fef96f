use clap::{Args, Parser, Subcommand, ValueEnum};
use molmass::core::io::format::DatasetFormat;
use std::path::PathBuf;

use crate::config::ConfigOverrides;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Jordan Rodger",
    version,
    about = "molmass - generate a chemical element reference dataset and calculate molar masses of chemical formulas.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    /// Defaults to `molmass.toml` in the platform configuration directory, if present.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S calculation.precision=4
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the element reference dataset built from the embedded table.
    Generate(GenerateArgs),
    /// Calculate the molar mass of a chemical formula.
    Calc(CalcArgs),
    /// Show the dataset record for an element, by symbol or atomic number.
    Lookup(LookupArgs),
}

impl Commands {
    pub fn config_overrides(&self) -> ConfigOverrides {
        match self {
            Commands::Generate(args) => ConfigOverrides {
                dataset_path: args.output.clone(),
                dataset_format: args.format.map(Into::into),
                ..Default::default()
            },
            Commands::Calc(args) => ConfigOverrides {
                dataset_path: args.dataset.clone(),
                strict: args.parse_mode.as_override(),
                precision: args.precision,
                ..Default::default()
            },
            Commands::Lookup(args) => ConfigOverrides {
                dataset_path: args.dataset.clone(),
                ..Default::default()
            },
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Json,
    Csv,
}

impl From<FormatArg> for DatasetFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => DatasetFormat::Json,
            FormatArg::Csv => DatasetFormat::Csv,
        }
    }
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Destination of the dataset file. Overwritten if it exists.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format. Inferred from the file extension when omitted.
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Arguments for the `calc` subcommand.
#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Formula to evaluate, e.g. 'Al2(SO4)3'. Prompted for on standard input when omitted.
    pub formula: Option<String>,

    /// Path to the element dataset file.
    #[arg(short, long, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    #[command(flatten)]
    pub parse_mode: ParseModeFlags,

    /// Number of decimal places in the reported mass.
    #[arg(short, long, value_name = "INT")]
    pub precision: Option<usize>,

    /// Also print the flattened element counts.
    #[arg(long)]
    pub show_composition: bool,
}

/// A group to handle mutually exclusive parse mode flags.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(required = false, multiple = false)]
pub struct ParseModeFlags {
    /// Reject malformed formulas instead of skipping the unparseable parts.
    #[arg(long)]
    pub strict: bool,
    /// Skip unrecognized characters, stray counts and unbalanced parentheses.
    #[arg(long)]
    pub lenient: bool,
}

impl ParseModeFlags {
    pub fn as_override(&self) -> Option<bool> {
        match (self.strict, self.lenient) {
            (true, false) => Some(true),
            (false, true) => Some(false),
            _ => None,
        }
    }
}

/// Arguments for the `lookup` subcommand.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Element symbol (case-sensitive, e.g. 'Pb') or atomic number (e.g. 82).
    #[arg(required = true)]
    pub element: String,

    /// Path to the element dataset file.
    #[arg(short, long, value_name = "PATH")]
    pub dataset: Option<PathBuf>,
}
