use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber for a run. `SUSHIGO_LOG` overrides the
/// requested level with a full `EnvFilter` directive string.
pub fn init_logging(level: Level) {
    let filter = EnvFilter::try_from_env("SUSHIGO_LOG")
        .unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    // Ignore the error if a subscriber is already set (e.g. in tests).
    let _ = tracing::subscriber::set_global_default(subscriber);
}
