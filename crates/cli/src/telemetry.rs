use anyhow::Result;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_DIRECTIVE: &str = "warn";

/// Install a compact stderr subscriber. Repeated calls keep the first one.
pub fn init_tracing(filter: Option<&str>) -> Result<()> {
    let directive: Directive = filter.unwrap_or(DEFAULT_LOG_DIRECTIVE).parse()?;
    let env_filter = EnvFilter::builder()
        .with_default_directive(directive)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
    Ok(())
}
