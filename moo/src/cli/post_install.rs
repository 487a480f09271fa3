// moo/src/cli/post_install.rs
use clap::Args;
use colored::Colorize;
use moo_common::config::Config;
use moo_common::error::Result;
use moo_common::model::Formula;
use moo_core::{ConfigSync, Installer};

use crate::cli::ohai;

#[derive(Debug, Args)]
pub struct PostInstall;

impl PostInstall {
    pub fn run(&self, formula: &Formula, config: &Config) -> Result<()> {
        let sync = Installer::new(formula, config).post_install()?;
        report_sync(&sync);
        Ok(())
    }
}

pub(crate) fn report_sync(sync: &ConfigSync) {
    if sync.was_update {
        ohai(&format!("Updated existing {}", sync.target.display()));
    } else {
        ohai(&format!("Installed to {}", sync.target.display()));
    }
    println!("✓ {} is executable (0755)", sync.target.display().to_string().green());
}
