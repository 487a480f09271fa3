// moo-core/src/lib.rs

// Declare the top-level modules within the library crate
pub mod caveats;
pub mod check;
pub mod install;
pub mod lifecycle;
pub mod uninstall;

// Re-export key types for easier use by the CLI crate
pub use caveats::render_caveats;
pub use check::{InstallState, SelfTestReport};
pub use install::ConfigSync;
pub use lifecycle::{Hook, HookOutcome, Installer};
pub use uninstall::uninstall_binary;
