//! Logging and tracing bootstrap.

use anyhow::anyhow;
use shloka_kernel::settings::{LogFormat, TelemetrySettings};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing pipeline.
///
/// `RUST_LOG` overrides the filter; otherwise everything at `info` and above
/// is emitted. The output format follows `telemetry.log_format`.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match settings.log_format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| anyhow!("failed to initialize tracing subscriber: {e}"))?;

    tracing::debug!(format = ?settings.log_format, "telemetry initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent_enough_for_tests() {
        let settings = TelemetrySettings::default();
        // First call may win or lose against another test's subscriber; a
        // second call must report the conflict rather than panic.
        let first = init(&settings);
        let second = init(&settings);
        assert!(first.is_ok() || second.is_err());
    }
}
