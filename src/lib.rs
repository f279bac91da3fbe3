#![doc(test(attr(deny(warnings))))]

//! GlassBudget keeps a weekly budget tracker and a debate practice console in
//! sync with a string-keyed JSON store: every mutation persists the full
//! state, every view is recomputed from scratch.

pub mod cache;
pub mod cli;
pub mod config;
pub mod debate;
pub mod domain;
pub mod errors;
pub mod format;
pub mod state;
pub mod storage;
pub mod summary;
pub mod time;
pub mod week;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("glassbudget=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("GlassBudget tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
