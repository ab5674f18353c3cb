use anyhow::{Context, Result};
use std::io::Write;

/// Install the stderr logger.
///
/// `filters` uses the `RUST_LOG` syntax (`info`, `storefront_nav=debug`, ...).
/// Stdout is left to command output.
pub fn init_logger(filters: &str) -> Result<()> {
    env_logger::Builder::new()
        .parse_filters(filters)
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            let timestamp = chrono::Local::now().format("%H:%M:%S");
            let level = record.level();
            let message = record.args();
            let target = record.target();

            // Include the target when it differs from the module, e.g. for dependencies
            if target != record.module_path().unwrap_or("unknown") {
                writeln!(buf, "[{timestamp}] {level} [{target}]: {message}")
            } else {
                writeln!(buf, "[{timestamp}] {level}: {message}")
            }
        })
        .try_init()
        .context("Failed to initialize logger")?;

    log::debug!("Logger initialized with filters '{filters}'");
    Ok(())
}
