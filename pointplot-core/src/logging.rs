//! Tracing subscriber setup shared by the binaries

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr fmt subscriber filtered by `RUST_LOG` (default INFO).
///
/// With `debug` set, all `pointplot` targets log at debug level regardless of
/// the environment. Calling this twice is harmless; the second call is ignored.
pub fn enable_tracing(debug: bool) {
    let mut filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    if debug {
        if let Ok(directive) = "pointplot=debug".parse() {
            filter = filter.add_directive(directive);
        }
    }

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
