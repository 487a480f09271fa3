// moo-core/src/lifecycle.rs
//! The formula's lifecycle hooks as independently invocable entry points.
use std::fmt;
use std::path::PathBuf;

use moo_common::config::Config;
use moo_common::error::Result;
use moo_common::model::Formula;
use tracing::{debug, instrument, warn};

use crate::caveats::render_caveats;
use crate::check::{missing_dependencies, run_self_test, SelfTestReport};
use crate::install::{install_binary, sync_to_user_config, ConfigSync};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    Install,
    PostInstall,
    Caveats,
    Test,
}

impl Hook {
    /// Order in which a package manager dispatches the hooks.
    pub const ORDER: [Hook; 4] = [Hook::Install, Hook::PostInstall, Hook::Caveats, Hook::Test];

    pub fn name(self) -> &'static str {
        match self {
            Hook::Install => "install",
            Hook::PostInstall => "post_install",
            Hook::Caveats => "caveats",
            Hook::Test => "test",
        }
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    Installed(PathBuf),
    Synced(ConfigSync),
    Caveats(&'static str),
    Tested(SelfTestReport),
}

pub struct Installer<'a> {
    formula: &'a Formula,
    config: &'a Config,
}

impl<'a> Installer<'a> {
    pub fn new(formula: &'a Formula, config: &'a Config) -> Self {
        Self { formula, config }
    }

    pub fn installed_path(&self) -> PathBuf {
        self.config
            .bin_dir()
            .join(&self.formula.binary.installed_name)
    }

    pub fn user_config_dir(&self) -> PathBuf {
        self.config
            .user_config_dir(&self.formula.user_config.dir_name)
    }

    /// Fetches and verifies the artifact, then installs the binary into the
    /// managed binary directory.
    #[instrument(skip(self), fields(formula = %self.formula.name))]
    pub async fn install(&self) -> Result<PathBuf> {
        for tool in missing_dependencies(&self.formula.depends_on) {
            warn!(
                "Dependency '{}' of {} was not found on PATH",
                tool, self.formula.name
            );
        }

        let archive = moo_net::fetch_and_verify(&self.formula.artifact, self.config).await?;
        debug!("Verified archive at {}", archive.display());
        let installed = install_binary(&archive, &self.config.bin_dir(), &self.formula.binary)?;
        debug!("Installed {}", installed.display());
        Ok(installed)
    }

    /// Mirrors the installed binary into the user's config directory.
    #[instrument(skip(self), fields(formula = %self.formula.name))]
    pub fn post_install(&self) -> Result<ConfigSync> {
        sync_to_user_config(
            &self.installed_path(),
            &self.user_config_dir(),
            &self.formula.user_config.file_name,
        )
    }

    pub fn caveats(&self) -> &'static str {
        render_caveats()
    }

    #[instrument(skip(self), fields(formula = %self.formula.name))]
    pub fn test(&self) -> Result<SelfTestReport> {
        run_self_test(&self.installed_path(), &self.formula.test)
    }

    pub async fn run_hook(&self, hook: Hook) -> Result<HookOutcome> {
        debug!("Running {} hook for {}", hook, self.formula.name);
        Ok(match hook {
            Hook::Install => HookOutcome::Installed(self.install().await?),
            Hook::PostInstall => HookOutcome::Synced(self.post_install()?),
            Hook::Caveats => HookOutcome::Caveats(self.caveats()),
            Hook::Test => HookOutcome::Tested(self.test()?),
        })
    }

    /// Runs every hook a plain install dispatches (all but `test`), in order,
    /// stopping at the first failure.
    pub async fn run_install_hooks(&self) -> Result<Vec<HookOutcome>> {
        let mut outcomes = Vec::new();
        for hook in Hook::ORDER.into_iter().filter(|h| *h != Hook::Test) {
            outcomes.push(self.run_hook(hook).await?);
        }
        Ok(outcomes)
    }
}
