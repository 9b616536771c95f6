//! Tracing initialisation for the `keel` binary.
//!
//! Logs always go to stderr; stdout is reserved for command output and
//! NDJSON events.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Verbosity;

/// Initialise the global tracing subscriber.
///
/// `RUST_LOG` wins over `verbosity` when set. With `json`, log lines are
/// JSON objects. Only the first call in a process takes effect.
pub fn init_tracing(json: bool, verbosity: Verbosity) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_level()));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .ok();
    }
}
