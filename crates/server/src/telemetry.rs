use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install the tracing subscriber for the server process.
///
/// Filter comes from `RUST_LOG`; defaults keep our crates at debug and
/// everything else at info. `try_init` so a subscriber installed earlier
/// in the process (e.g. by the launcher) wins silently.
pub fn init_telemetry() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,server=debug,app=debug"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init();
}
