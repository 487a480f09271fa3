// moo-common/src/model/mod.rs
pub mod artifact;
pub mod formula;

// Re-export
pub use artifact::Artifact;
pub use formula::{BinarySpec, Formula, SelfTestSpec, UserConfigSpec};
