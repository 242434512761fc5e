//! Top-level command handler.

use std::io::IsTerminal;

use tracing::info;

use crate::adapter::inbound::cli::command::{Cli, ColorChoice};
use crate::adapter::inbound::cli::output::{self, OutputConfig};
use crate::adapter::inbound::cli::dispatch;
use crate::adapter::outbound::http::client::EmployeeApiClient;
use crate::application::statistics::EmployeeStatistics;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Apply output flags, load configuration, and run the requested reports.
///
/// # Errors
///
/// Returns configuration errors as well as any fetch, parse or statistics
/// error raised while printing reports.
pub fn execute(cli: &Cli) -> Result<()> {
    output::configure(OutputConfig::new(cli.json, cli.quiet));
    owo_colors::set_override(match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stdout().is_terminal(),
    });

    let config = Config::load_or_default(&cli.config)?
        .with_overrides(cli.base_url.as_deref(), cli.log_level.as_deref())?;
    config.logging.init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.api.base_url,
        "Starting empstats"
    );

    let client = EmployeeApiClient::new(&config.api.base_url)?;
    let stats = EmployeeStatistics::new(client);
    dispatch::dispatch(&stats, &cli.options)
}
