//! Command-line interface definitions.
//!
//! Defines the `bolao` CLI using `clap`: room odds evaluation, pool share,
//! tax-id checks and configuration utilities.

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::{parse_brl, ProbabilityMode};
use crate::infrastructure::config::settings::DEFAULT_CONFIG_PATH;

/// Room payout and tax-id tooling for the pool-betting back office
#[derive(Parser, Debug)]
#[command(name = "bolao")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the bolao CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the payout multiplier of one room
    Multiplier(MultiplierArgs),

    /// Compute the pool share paid out by a full room
    PoolShare(PoolShareArgs),

    /// Evaluate every room in a JSON file
    Rooms(RoomsArgs),

    /// Validate and format CPF/CNPJ values
    #[command(subcommand)]
    TaxId(TaxIdCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `bolao tax-id`.
#[derive(Subcommand, Debug)]
pub enum TaxIdCommand {
    /// Classify a value; exits non-zero when it is not a valid CPF or CNPJ.
    Check {
        /// Value to check, punctuation allowed.
        raw: String,
    },
    /// Print the progressive display form of a (possibly partial) value.
    Format {
        /// Value to format, punctuation allowed.
        raw: String,
    },
}

/// Subcommands for `bolao config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that take a configuration path.
#[derive(Args, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

/// Arguments for the `multiplier` subcommand.
///
/// Room parameters come either from a JSON file (`--room`) or from the
/// individual flags.
#[derive(Args, Debug)]
pub struct MultiplierArgs {
    /// JSON file holding a single room record.
    #[arg(long, conflicts_with_all = ["base_rate", "probability_primary", "probability_secondary"])]
    pub room: Option<PathBuf>,

    /// House base payout ratio.
    #[arg(long, required_unless_present = "room")]
    pub base_rate: Option<Decimal>,

    /// Primary probability denominator.
    #[arg(long, required_unless_present = "room")]
    pub probability_primary: Option<Decimal>,

    /// Secondary probability denominator (fraction is truncated).
    #[arg(long, required_unless_present = "room")]
    pub probability_secondary: Option<Decimal>,

    /// Stake per participant (`10.5`, `10,50` or `R$ 1.234,56`).
    #[arg(long, default_value = "1", value_parser = parse_stake)]
    pub stake: Decimal,

    /// Participant limit.
    #[arg(long, default_value_t = 1)]
    pub limit: u32,

    /// Force adjustment on the 0..70 scale.
    #[arg(long, allow_hyphen_values = true)]
    pub force: Option<Decimal>,

    /// Lower clamp.
    #[arg(long)]
    pub min: Option<Decimal>,

    /// Upper clamp.
    #[arg(long)]
    pub max: Option<Decimal>,

    /// Probability mode (primary, secondary, A or B); defaults to config.
    #[arg(long)]
    pub mode: Option<ProbabilityMode>,

    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

/// Arguments for the `pool-share` subcommand.
#[derive(Args, Debug)]
pub struct PoolShareArgs {
    /// Stake per participant (`10.5`, `10,50` or `R$ 1.234,56`).
    #[arg(long, value_parser = parse_stake)]
    pub stake: Decimal,

    /// Participant limit.
    #[arg(long)]
    pub limit: u32,

    /// Percentage of the pool returned as prize.
    #[arg(long)]
    pub return_percentage: Decimal,
}

/// Arguments for the `rooms` subcommand.
#[derive(Args, Debug)]
pub struct RoomsArgs {
    /// JSON file holding an array of room records.
    pub file: PathBuf,

    /// Probability mode; defaults to config.
    #[arg(long)]
    pub mode: Option<ProbabilityMode>,

    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

/// Parse a stake given either as a plain decimal or in pt-BR notation.
///
/// A comma or the currency symbol selects pt-BR, where dots group thousands.
fn parse_stake(raw: &str) -> Result<Decimal, String> {
    if raw.contains(',') || raw.contains("R$") {
        parse_brl(raw).map_err(|e| e.to_string())
    } else {
        Decimal::from_str(raw.trim()).map_err(|e| e.to_string())
    }
}

impl Commands {
    /// Configuration file the command reads, if any.
    #[must_use]
    pub fn config_path(&self) -> Option<&PathBuf> {
        match self {
            Self::Multiplier(args) => Some(&args.config),
            Self::Rooms(args) => Some(&args.config),
            Self::Config(ConfigCommand::Show(arg) | ConfigCommand::Validate(arg)) => {
                Some(&arg.config)
            }
            Self::PoolShare(_) | Self::TaxId(_) => None,
        }
    }
}
