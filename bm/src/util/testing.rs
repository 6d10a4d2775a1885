// src/util/testing.rs

use std::env;
use std::sync::OnceLock;
use tracing::{debug, info, instrument};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::config::DB_PATH_ENV;

static TEST_ENV: OnceLock<()> = OnceLock::new();

/// Initializes test logging exactly once per test binary.
pub fn init_test_env() {
    TEST_ENV.get_or_init(|| {
        setup_test_logging();
        info!("Test environment initialized");
    });
}

/// Logging setup only runs once; subsequent calls do nothing if `tracing` is already set.
fn setup_test_logging() {
    debug!("Attempting logger init from testing.rs");
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
        return;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    subscriber.try_init().unwrap_or_else(|e| {
        eprintln!("Error: Failed to set up logging: {}", e);
    });
}

/// Restores `BM_DB_PATH` to its previous value when dropped.
#[derive(Debug, Clone)]
pub struct EnvGuard {
    db_path: Option<String>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    pub fn new() -> Self {
        Self {
            db_path: env::var(DB_PATH_ENV).ok(),
        }
    }
}

impl Drop for EnvGuard {
    #[instrument(level = "trace")]
    fn drop(&mut self) {
        env::remove_var(DB_PATH_ENV);
        if let Some(val) = &self.db_path {
            env::set_var(DB_PATH_ENV, val);
        }
    }
}
