// moo-core/src/install/user_config.rs
use std::fs;
use std::path::{Path, PathBuf};

use moo_common::error::{MooError, Result};
use tracing::debug;

use super::binary::set_executable;

/// Result of mirroring the installed binary into the user's config directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSync {
    pub target: PathBuf,
    /// `true` when a file already existed at `target` before the copy.
    pub was_update: bool,
}

/// Copies `installed_path` to `user_config_dir/file_name` with mode 0755,
/// creating `user_config_dir` and its parents as needed.
///
/// Running it again with an unchanged source leaves the same bytes and mode
/// behind; only `was_update` differs.
pub fn sync_to_user_config(
    installed_path: &Path,
    user_config_dir: &Path,
    file_name: &str,
) -> Result<ConfigSync> {
    fs::create_dir_all(user_config_dir).map_err(|e| {
        MooError::fs("Failed to create user config directory", user_config_dir, e)
    })?;

    let target = user_config_dir.join(file_name);
    let was_update = target.exists();
    if was_update {
        debug!("Updating existing {}", target.display());
    } else {
        debug!("Installing to {}", target.display());
    }

    // fs::copy onto itself truncates the source before reading it.
    if was_update && is_same_file(installed_path, &target) {
        debug!(
            "{} already resolves to {}, skipping copy",
            target.display(),
            installed_path.display()
        );
        set_executable(&target)?;
        return Ok(ConfigSync { target, was_update });
    }

    let bytes = fs::copy(installed_path, &target).map_err(|e| {
        MooError::FilesystemError(format!(
            "Failed to copy {} to {}: {}",
            installed_path.display(),
            target.display(),
            e
        ))
    })?;
    debug!("Copied {} bytes to {}", bytes, target.display());

    set_executable(&target)?;

    Ok(ConfigSync { target, was_update })
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
