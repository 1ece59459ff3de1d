use tracing_subscriber::{fmt, EnvFilter};

/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `--debug`.
pub fn init_tracing(debug: bool) {
    let fallback = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    // A second init (tests, embedding) is not an error worth surfacing.
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
