// ===== moo-core/src/install/mod.rs =====
pub mod binary;
pub mod extract;
pub mod user_config;

pub use binary::{install_binary, set_executable, EXECUTABLE_MODE};
pub use extract::{extract_entry, ArchiveType};
pub use user_config::{sync_to_user_config, ConfigSync};
