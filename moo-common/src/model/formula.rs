// moo-common/src/model/formula.rs
use serde::{Deserialize, Serialize};

use super::artifact::Artifact;

/// Which file of the archive becomes the installed executable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BinarySpec {
    /// Entry name inside the archive, relative to its top-level directory.
    pub source: String,
    /// File name under the managed binary directory.
    pub installed_name: String,
}

/// Where post-install mirrors the executable inside the user's home.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserConfigSpec {
    pub dir_name: String,
    pub file_name: String,
}

/// What the installed executable prints and returns when run bare.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelfTestSpec {
    pub expected_output: String,
    pub expected_status: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Formula {
    pub name: String,
    pub desc: String,
    pub homepage: String,
    pub artifact: Artifact,
    #[serde(default)]
    pub depends_on: Vec<String>,
    pub binary: BinarySpec,
    pub user_config: UserConfigSpec,
    pub test: SelfTestSpec,
}

impl Formula {
    /// The `moo-statusline` recipe as published upstream.
    pub fn moo_statusline() -> Self {
        Self {
            name: "moo-statusline".to_string(),
            desc: "Beautiful statusline for Claude Code showing git, model, context, and rate limits"
                .to_string(),
            homepage: "https://github.com/moogento/moo-statusline".to_string(),
            artifact: Artifact {
                name: "moo-statusline".to_string(),
                version: "1.1.0".to_string(),
                url: "https://github.com/moogento/moo-statusline/archive/refs/tags/v1.1.0.tar.gz"
                    .to_string(),
                sha256: "PLACEHOLDER_SHA256".to_string(),
                license: "MIT".to_string(),
            },
            depends_on: vec!["jq".to_string()],
            binary: BinarySpec {
                source: "statusline.sh".to_string(),
                installed_name: "moo-statusline".to_string(),
            },
            user_config: UserConfigSpec {
                dir_name: ".claude".to_string(),
                file_name: "statusline.sh".to_string(),
            },
            test: SelfTestSpec {
                expected_output: "jq".to_string(),
                expected_status: 1,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.artifact.version
    }

    /// Applies command-line overrides to the artifact. A new version without
    /// a new URL rewrites the `v<version>` tag in the existing URL.
    pub fn with_overrides(
        mut self,
        url: Option<&str>,
        version: Option<&str>,
        sha256: Option<&str>,
    ) -> Self {
        if let Some(version) = version {
            if url.is_none() {
                let old_tag = format!("v{}", self.artifact.version);
                self.artifact.url = self.artifact.url.replace(&old_tag, &format!("v{version}"));
            }
            self.artifact.version = version.to_string();
        }
        if let Some(url) = url {
            self.artifact.url = url.to_string();
        }
        if let Some(sha256) = sha256 {
            self.artifact.sha256 = sha256.trim().to_ascii_lowercase();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_formula_matches_upstream_recipe() {
        let formula = Formula::moo_statusline();
        assert_eq!(formula.name(), "moo-statusline");
        assert_eq!(formula.version(), "1.1.0");
        assert_eq!(formula.depends_on, vec!["jq".to_string()]);
        assert_eq!(formula.binary.installed_name, "moo-statusline");
        assert_eq!(formula.user_config.dir_name, ".claude");
        assert_eq!(formula.test.expected_status, 1);
    }

    #[test]
    fn version_override_rewrites_tag_url() {
        let formula = Formula::moo_statusline().with_overrides(None, Some("1.2.0"), Some(" ABCD "));
        assert_eq!(formula.version(), "1.2.0");
        assert_eq!(
            formula.artifact.url,
            "https://github.com/moogento/moo-statusline/archive/refs/tags/v1.2.0.tar.gz"
        );
        assert_eq!(formula.artifact.sha256, "abcd");

        let formula = Formula::moo_statusline().with_overrides(
            Some("https://mirror.example.com/moo.tar.gz"),
            Some("1.2.0"),
            None,
        );
        assert_eq!(formula.artifact.url, "https://mirror.example.com/moo.tar.gz");
    }

    #[test]
    fn formula_json_round_trips_through_serde() {
        let formula = Formula::moo_statusline();
        let json = serde_json::to_string(&formula).unwrap();
        let parsed: Formula = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, formula);
    }
}
