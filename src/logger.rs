use tracing_subscriber::{fmt, EnvFilter};

/// Diagnostics go to stderr; stdout is reserved for the prompt and
/// confirmation. `RUST_LOG` overrides the default `warn` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Already installed (tests, repeated calls) is fine.
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
