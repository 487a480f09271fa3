// moo-common/src/model/artifact.rs
use serde::{Deserialize, Serialize};

use crate::error::{MooError, Result};

/// A named, versioned, checksummed remote source archive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub version: String,
    pub url: String,
    pub sha256: String,
    pub license: String,
}

impl Artifact {
    /// Name of the file the archive is stored under in the download cache.
    pub fn cache_file_name(&self) -> String {
        let last_segment = self
            .url
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty());
        match last_segment {
            // GitHub tag archives are named `v1.1.0.tar.gz`; prefix them so
            // different formulae never share a cache entry.
            Some(segment) if segment.starts_with(&self.name) => segment.to_string(),
            Some(segment) => format!("{}-{}", self.name, segment),
            None => format!("{}-{}.download", self.name, self.version),
        }
    }

    /// Checks that the declared checksum is a 64 digit hex SHA-256.
    pub fn validate_checksum_format(&self) -> Result<()> {
        let valid =
            self.sha256.len() == 64 && self.sha256.chars().all(|c| c.is_ascii_hexdigit());
        if valid {
            Ok(())
        } else {
            Err(MooError::ValidationError(format!(
                "Artifact '{}' declares an invalid SHA-256 '{}' (expected 64 hex digits; pass --sha256)",
                self.name, self.sha256
            )))
        }
    }
}
