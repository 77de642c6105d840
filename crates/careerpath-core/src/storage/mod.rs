mod config;
pub mod database;

pub use config::{AssessmentConfig, Config, OutputConfig};
pub use database::Database;

use std::path::PathBuf;

/// Returns `~/.config/careerpath[-dev]/` based on CAREERPATH_ENV.
///
/// Set CAREERPATH_ENV=dev to use the development data directory, or
/// CAREERPATH_DATA_DIR to use an explicit directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let dir = match std::env::var_os("CAREERPATH_DATA_DIR") {
        Some(explicit) => PathBuf::from(explicit),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("CAREERPATH_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("careerpath-dev")
            } else {
                base_dir.join("careerpath")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
