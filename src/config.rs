use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Solace";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable pointing at a knowledge-base override directory.
pub const KNOWLEDGE_DIR_ENV: &str = "SOLACE_KNOWLEDGE_DIR";

/// Symptom count above which an assessment asks for a follow-up.
pub const FOLLOW_UP_SYMPTOM_THRESHOLD: usize = 3;

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "solace_lib=info"
}

/// Get the application data directory
/// ~/Solace/ on all platforms, falling back to the working directory
/// when no home directory can be determined.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Get the default knowledge-base override directory
pub fn knowledge_dir() -> PathBuf {
    app_data_dir().join("knowledge")
}

/// Runtime configuration resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding JSON overrides for the built-in knowledge base.
    pub knowledge_dir: PathBuf,
}

impl AppConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary key lookup (tests inject a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let knowledge_dir = lookup(KNOWLEDGE_DIR_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(knowledge_dir);
        Self { knowledge_dir }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            knowledge_dir: knowledge_dir(),
        }
    }
}
