// moo-core/src/check/installed.rs
use std::path::PathBuf;

use moo_common::config::Config;
use moo_common::model::Formula;

/// What of a formula is currently present on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallState {
    pub binary_path: PathBuf,
    pub binary_present: bool,
    pub user_config_path: PathBuf,
    pub user_config_present: bool,
}

impl InstallState {
    pub fn inspect(formula: &Formula, config: &Config) -> Self {
        let binary_path = config.bin_dir().join(&formula.binary.installed_name);
        let user_config_path = config
            .user_config_dir(&formula.user_config.dir_name)
            .join(&formula.user_config.file_name);
        Self {
            binary_present: binary_path.is_file(),
            user_config_present: user_config_path.is_file(),
            binary_path,
            user_config_path,
        }
    }
}
