use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wallclock::demo;
use wallclock::prelude::*;
use wallclock::{CLOCK_NAME, VERSION};

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the demo output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = DemoConfig::load().context("failed to load the demo configuration")?;
    info!(
        "{} v{} running {} style(s) from {} with {} advance(s).",
        CLOCK_NAME,
        VERSION,
        config.styles.len(),
        config.seed,
        config.advances
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run_all(&mut out, &config).context("failed to write the demo output")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
