//! Storage initialization
//!
//! Handles first-run setup: directories, empty stores and default preferences.

use std::path::PathBuf;

use tracing::info;

use crate::config::paths::FlowPaths;
use crate::config::preferences::Preferences;
use crate::error::FlowResult;

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Existing files are left untouched.
pub fn initialize_storage(paths: &FlowPaths) -> FlowResult<()> {
    paths.ensure_directories()?;

    for path in store_files(paths) {
        if !path.exists() {
            write_json_atomic(&path, &serde_json::json!({}))?;
            info!(path = %path.display(), "created empty store");
        }
    }

    if !paths.preferences_file().exists() {
        Preferences::default().save(paths)?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &FlowPaths) -> bool {
    !paths.is_initialized()
}

fn store_files(paths: &FlowPaths) -> [PathBuf; 5] {
    [
        paths.accounts_file(),
        paths.income_file(),
        paths.recurring_payments_file(),
        paths.cards_file(),
        paths.settings_file(),
    ]
}
