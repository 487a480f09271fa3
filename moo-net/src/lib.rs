// moo-net/src/lib.rs
pub mod http;
pub mod validation;

pub use http::{build_http_client, download_and_verify, fetch_and_verify};
pub use moo_common::{
    error::{MooError, Result},
    model::Artifact,
    Config,
};
pub use validation::{sha256_file, validate_url, verify_checksum};
