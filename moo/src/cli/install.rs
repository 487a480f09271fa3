// moo/src/cli/install.rs
use clap::Args;
use colored::Colorize;
use moo_common::config::Config;
use moo_common::error::Result;
use moo_common::model::Formula;
use moo_core::{HookOutcome, Installer};
use tracing::{debug, instrument};

use crate::cli::ohai;
use crate::cli::post_install::report_sync;

#[derive(Debug, Args)]
pub struct InstallArgs {
    /// Do not print the activation instructions afterwards
    #[arg(long)]
    pub no_caveats: bool,
}

impl InstallArgs {
    #[instrument(skip(self, formula, config), fields(formula = %formula.name))]
    pub async fn run(&self, formula: &Formula, config: &Config) -> Result<()> {
        ohai(&format!(
            "Installing {} {}",
            formula.name,
            formula.version()
        ));
        let installer = Installer::new(formula, config);

        for outcome in installer.run_install_hooks().await? {
            match outcome {
                HookOutcome::Installed(path) => {
                    println!("✓ Installed {}", path.display().to_string().green());
                }
                HookOutcome::Synced(sync) => report_sync(&sync),
                HookOutcome::Caveats(text) => {
                    if self.no_caveats {
                        debug!("Skipping caveats (--no-caveats)");
                    } else {
                        ohai("Caveats");
                        print!("{text}");
                    }
                }
                HookOutcome::Tested(report) => {
                    debug!("Unexpected self-test during install: {:?}", report);
                }
            }
        }
        Ok(())
    }
}
