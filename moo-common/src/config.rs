// moo-common/src/config.rs
use std::env;
use std::path::PathBuf;

use directories::UserDirs;
use tracing::debug;

use super::error::{MooError, Result};

// Fallback when neither MOO_PREFIX nor HOMEBREW_PREFIX is set or non-empty.
#[cfg(target_os = "macos")]
const DEFAULT_FALLBACK_PREFIX: &str = "/opt/homebrew";
#[cfg(not(target_os = "macos"))]
const DEFAULT_FALLBACK_PREFIX: &str = "/usr/local";

#[derive(Debug, Clone)]
pub struct Config {
    pub prefix: PathBuf,
    /// Home directory the user configuration directory is resolved against.
    pub home_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup instead of the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Loading moo configuration");
        let non_empty = |key: &str| lookup(key).filter(|s| !s.is_empty());

        let prefix_str = non_empty("MOO_PREFIX")
            .or_else(|| non_empty("HOMEBREW_PREFIX"))
            .unwrap_or_else(|| {
                debug!(
                    "MOO_PREFIX / HOMEBREW_PREFIX not set or empty, falling back to default: {}",
                    DEFAULT_FALLBACK_PREFIX
                );
                DEFAULT_FALLBACK_PREFIX.to_string()
            });
        let prefix = PathBuf::from(prefix_str);
        debug!("Effective prefix set to: {}", prefix.display());

        let home_dir = match non_empty("MOO_HOME") {
            Some(home) => PathBuf::from(home),
            None => UserDirs::new()
                .map(|ud| ud.home_dir().to_path_buf())
                .ok_or_else(|| {
                    MooError::Config(
                        "Could not determine the home directory (set MOO_HOME)".to_string(),
                    )
                })?,
        };
        debug!("Effective home directory: {}", home_dir.display());

        Ok(Self { prefix, home_dir })
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.prefix.join("bin")
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.prefix.join("moo_cache")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.prefix.join("moo_logs")
    }

    /// Per-application directory under the user's home, e.g. `~/.claude`.
    pub fn user_config_dir(&self, dir_name: &str) -> PathBuf {
        self.home_dir.join(dir_name)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::Path;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn moo_prefix_wins_over_homebrew_prefix() {
        let config = Config::from_lookup(lookup_from(&[
            ("MOO_PREFIX", "/tmp/moo"),
            ("HOMEBREW_PREFIX", "/opt/homebrew"),
            ("MOO_HOME", "/home/tester"),
        ]))
        .unwrap();
        assert_eq!(config.prefix, Path::new("/tmp/moo"));
        assert_eq!(config.bin_dir(), PathBuf::from("/tmp/moo/bin"));
        assert_eq!(config.cache_dir(), PathBuf::from("/tmp/moo/moo_cache"));
    }

    #[test]
    fn empty_values_fall_through() {
        let config = Config::from_lookup(lookup_from(&[
            ("MOO_PREFIX", ""),
            ("HOMEBREW_PREFIX", "/home/linuxbrew/.linuxbrew"),
            ("MOO_HOME", "/home/tester"),
        ]))
        .unwrap();
        assert_eq!(config.prefix, Path::new("/home/linuxbrew/.linuxbrew"));

        let config = Config::from_lookup(lookup_from(&[("MOO_HOME", "/home/tester")])).unwrap();
        assert_eq!(config.prefix, Path::new(DEFAULT_FALLBACK_PREFIX));
    }

    #[test]
    fn user_config_dir_is_under_injected_home() {
        let config = Config::from_lookup(lookup_from(&[("MOO_HOME", "/home/tester")])).unwrap();
        assert_eq!(
            config.user_config_dir(".claude"),
            PathBuf::from("/home/tester/.claude")
        );
    }
}
