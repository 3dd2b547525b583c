use anyhow::{anyhow, Result};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install the global subscriber, writing to stderr so token output on
/// stdout stays clean.
///
/// `RUST_LOG` wins when set; otherwise the level is `warn`, or `debug` when
/// `verbose` is set.
pub fn init_logger(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_line_number(verbose)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Failed to install logger: {}", e))?;
    debug!("Logger initialized");

    Ok(())
}
