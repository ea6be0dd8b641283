//! Shared test setup: one tracing subscriber per test binary

use std::sync::Once;

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Install the test subscriber once. `RUST_LOG` overrides the `debug` default.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let layer = fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_filter(env_filter);

        if tracing_subscriber::registry().with(layer).try_init().is_err() {
            eprintln!("tracing subscriber already set");
        }
        info!("Test Setup complete");
    });
}
