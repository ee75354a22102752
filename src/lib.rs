pub mod checker;
pub mod config;
pub mod input;
pub mod models;
pub mod notify;
pub mod runner;

use tracing_subscriber::EnvFilter;

/// Initialize logging at `info` for our own targets while quieting the
/// browser driver's per-event chatter. `RUST_LOG` overrides the default.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,headless_chrome=warn,tungstenite=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
