use tracing_subscriber::{fmt, EnvFilter};

/// Install the global fmt subscriber, writing to stderr.
///
/// `RUST_LOG` filters the output; without it only `info` and above are shown.
/// Returns false if a subscriber was already installed.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
