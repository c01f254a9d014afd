//! CLI module graph.

pub mod command;
pub mod config;
pub mod multiplier;
pub mod output;
pub mod rooms;
pub mod tax_id;

use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use command::{Commands, ConfigCommand, TaxIdCommand};

/// Dispatch a parsed command to its handler.
pub fn run(command: &Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Multiplier(args) => multiplier::execute(args, config),
        Commands::PoolShare(args) => multiplier::execute_pool_share(args),
        Commands::Rooms(args) => rooms::execute(args, config),
        Commands::TaxId(TaxIdCommand::Check { raw }) => tax_id::execute_check(raw),
        Commands::TaxId(TaxIdCommand::Format { raw }) => tax_id::execute_format(raw),
        Commands::Config(ConfigCommand::Show(arg)) => config::execute_show(&arg.config),
        Commands::Config(ConfigCommand::Validate(arg)) => config::execute_validate(&arg.config),
    }
}
