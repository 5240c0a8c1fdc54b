pub use pywalfox_core::config::*;

use pywalfox_core::DayInterval;

use crate::cli::Cli;

pub fn from_cli(cli: &Cli) -> anyhow::Result<AppConfig> {
    let config = AppConfig::discover(cli.data_dir.clone())?;
    Ok(config.with_day_interval(DayInterval::new(cli.day_start, cli.day_end)))
}
