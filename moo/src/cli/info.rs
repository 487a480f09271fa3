// moo/src/cli/info.rs
//! Contains the logic for the `info` command.
use clap::Args;
use colored::Colorize;
use moo_common::config::Config;
use moo_common::error::Result;
use moo_common::model::Formula;
use moo_core::InstallState;

#[derive(Args, Debug)]
pub struct Info {
    /// Print the formula as JSON
    #[arg(long)]
    pub json: bool,
}

impl Info {
    pub fn run(&self, formula: &Formula, config: &Config) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(formula)?);
            return Ok(());
        }

        let state = InstallState::inspect(formula, config);
        println!(
            "{} {}",
            formula.name.green().bold(),
            formula.version().bold()
        );
        println!("{}", formula.desc);
        println!("{}", formula.homepage.blue().underline());
        println!("License: {}", formula.artifact.license);
        println!("From: {}", formula.artifact.url);
        if !formula.depends_on.is_empty() {
            println!("Depends on: {}", formula.depends_on.join(", "));
        }
        println!(
            "Binary: {} ({})",
            state.binary_path.display(),
            presence(state.binary_present)
        );
        println!(
            "User copy: {} ({})",
            state.user_config_path.display(),
            presence(state.user_config_present)
        );
        Ok(())
    }
}

fn presence(present: bool) -> colored::ColoredString {
    if present {
        "installed".green()
    } else {
        "not installed".yellow()
    }
}
