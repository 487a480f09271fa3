pub mod dependencies;
pub mod installed;
pub mod self_test;

pub use dependencies::missing_dependencies;
pub use installed::InstallState;
pub use self_test::{run_self_test, SelfTestReport};
