//! Subscriber setup for the binary. The library only emits events.

use std::io;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber.
///
/// `RUST_LOG` wins over the default level (`warn`, or `debug` when verbose).
pub fn init(verbose: bool) {
    let default_level = if verbose { Level::DEBUG } else { Level::WARN };
    let env_filter =
        EnvFilter::builder().with_default_directive(default_level.into()).from_env_lossy();

    // A subscriber may already be installed (e.g. by an embedding test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
