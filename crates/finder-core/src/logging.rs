use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Layer};

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "FINDER_LOG";

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "scan");
/// // Or with additional fields:
/// trace_time!(start, "scan", entity = "team");
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Install the global subscriber: compact or JSON lines on stderr.
///
/// `FINDER_LOG` wins over `log_level`, which wins over `verbose`.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(directive(verbose, log_level)));

    let layer = if log_json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
            .boxed()
    } else {
        fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()?;
    Ok(())
}

/// Filter directive for the CLI flags. A bare level applies to both crates.
fn directive(verbose: bool, log_level: Option<&str>) -> String {
    let level = log_level.unwrap_or(if verbose { "debug" } else { "warn" });
    if level.contains('=') {
        level.to_string()
    } else {
        format!("finder={level},finder_core={level}")
    }
}
