use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = pywalfox::cli::Cli::parse();
    pywalfox::telemetry::init_tracing(cli.log_filter.as_deref())?;

    let config = pywalfox::config::from_cli(&cli)?;
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    pywalfox::commands::execute(&config, cli.mode, cli.command, &mut handle)?;

    Ok(())
}
