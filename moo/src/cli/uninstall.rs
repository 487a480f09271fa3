use clap::Args;
use colored::Colorize;
use moo_common::config::Config;
use moo_common::error::Result;
use moo_common::model::Formula;
use moo_core::{uninstall_binary, InstallState};
use tracing::debug;

#[derive(Args, Debug)]
pub struct Uninstall;

impl Uninstall {
    pub fn run(&self, formula: &Formula, config: &Config) -> Result<()> {
        println!("Uninstalling {}...", formula.name);
        let removed = uninstall_binary(formula, config)?;
        debug!("Removed {}", removed.display());
        println!("✓ Uninstalled {}", formula.name.green());

        let state = InstallState::inspect(formula, config);
        if state.user_config_present {
            println!(
                "{} {} was left in place; remove it yourself if you no longer want it.",
                "Note:".yellow(),
                state.user_config_path.display()
            );
        }
        Ok(())
    }
}
