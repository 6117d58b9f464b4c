mod config;
mod store;

pub use config::Config;
pub use store::{SubjectStore, SUBJECTS_RECORD};

use std::path::PathBuf;

/// Returns `~/.config/bunkguard[-dev]/` based on BUNKGUARD_ENV.
///
/// Set BUNKGUARD_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("BUNKGUARD_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("bunkguard-dev")
    } else {
        base_dir.join("bunkguard")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
