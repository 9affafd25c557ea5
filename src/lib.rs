pub mod assessment; // Rule-based symptom assessment
pub mod calendar;
pub mod chat; // Companion chat + crisis flagging
pub mod config;
pub mod core_state;
pub mod crisis; // Hotlines, coping strategies, deep links
pub mod error;
pub mod exercises; // Guided exercises + countdown
pub mod journal;
pub mod knowledge; // Read-only reference data
pub mod models;
pub mod mood;
pub mod voice;
pub mod wellbeing; // Strategy selector + quick check

use tracing_subscriber::EnvFilter;

pub use core_state::CoreState;
pub use error::CoreError;

/// Install the global tracing subscriber.
///
/// Reads `RUST_LOG`, falling back to [`config::default_log_filter`]. Safe to
/// call more than once; later calls leave the first subscriber in place.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
    }
}
