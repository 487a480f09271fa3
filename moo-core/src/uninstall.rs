// moo-core/src/uninstall.rs
use std::fs;
use std::io;
use std::path::PathBuf;

use moo_common::config::Config;
use moo_common::error::{MooError, Result};
use moo_common::model::Formula;
use tracing::debug;

/// Removes the formula's binary from the managed binary directory.
///
/// The copy under the user's config directory belongs to the user and is
/// left alone.
pub fn uninstall_binary(formula: &Formula, config: &Config) -> Result<PathBuf> {
    let binary = config.bin_dir().join(&formula.binary.installed_name);
    debug!("Removing installed binary at: {}", binary.display());
    match fs::remove_file(&binary) {
        Ok(()) => Ok(binary),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(MooError::NotFound(format!(
            "{} is not installed ({} does not exist)",
            formula.name,
            binary.display()
        ))),
        Err(e) => Err(MooError::fs("Failed to remove", &binary, e)),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn removes_binary_but_not_user_copy() {
        let prefix = tempdir().unwrap();
        let home = tempdir().unwrap();
        let config = Config {
            prefix: prefix.path().to_path_buf(),
            home_dir: home.path().to_path_buf(),
        };
        let formula = Formula::moo_statusline();
        fs::create_dir_all(config.bin_dir()).unwrap();
        fs::write(config.bin_dir().join("moo-statusline"), b"x").unwrap();
        fs::create_dir_all(home.path().join(".claude")).unwrap();
        fs::write(home.path().join(".claude/statusline.sh"), b"x").unwrap();

        let removed = uninstall_binary(&formula, &config).unwrap();
        assert!(!removed.exists());
        assert!(home.path().join(".claude/statusline.sh").exists());

        let err = uninstall_binary(&formula, &config).unwrap_err();
        assert!(matches!(err, MooError::NotFound(_)));
    }
}
