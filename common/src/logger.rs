use tracing_subscriber::{fmt::time::LocalTime, EnvFilter};

/// Installs the stderr subscriber. Stdout carries only report text.
///
/// Verbosity comes from `RUST_LOG` and defaults to `warn`. Calling this more
/// than once is harmless.
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::rfc_3339())
        .with_writer(std::io::stderr)
        .try_init();
}
