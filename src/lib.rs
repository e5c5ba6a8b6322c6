pub mod board;
pub mod clock;
pub mod config;
pub mod error;
pub mod planner;
pub mod prompt;
pub mod state;
pub mod storage;
pub mod tasks;

use tracing_subscriber::EnvFilter;

use config::PlannerConfig;

/// Installs the fmt subscriber. `RUST_LOG` wins over `config.log_filter`.
/// Calling it again after a subscriber is set does nothing.
pub fn init_tracing(config: &PlannerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
