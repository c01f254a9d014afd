use std::process::ExitCode;

use clap::Parser;

use bolao::adapter::inbound::cli::command::{Cli, ColorChoice, Commands};
use bolao::adapter::inbound::cli::output::{self, OutputConfig};
use bolao::adapter::inbound::cli::run;
use bolao::domain::redact_tax_ids;
use bolao::infrastructure::config::settings::Config;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let config = match cli.command.config_path().map(Config::load_or_default) {
        Some(Ok(config)) => config,
        // The config commands load the file themselves and report the error.
        Some(Err(_)) if matches!(cli.command, Commands::Config(_)) => Config::default(),
        Some(Err(e)) => {
            output::error(&format!("failed to load config: {e}"));
            return ExitCode::FAILURE;
        }
        None => Config::default(),
    };

    config.logging.clone().with_verbosity(cli.verbose).init();

    match run(&cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = e.to_string();
            tracing::debug!(error = %redact_tax_ids(&message), "command failed");
            output::error(&message);
            ExitCode::FAILURE
        }
    }
}
