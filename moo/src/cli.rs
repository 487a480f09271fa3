// moo/src/cli.rs
//! Defines the command-line argument structure using clap.
use clap::{ArgAction, Args, Parser, Subcommand};
use colored::Colorize;
use moo_common::error::Result;
use moo_common::{Config, Formula};

// Module declarations
pub mod caveats;
pub mod info;
pub mod install;
pub mod post_install;
pub mod uninstall;

use crate::cli::caveats::Caveats;
use crate::cli::info::Info;
use crate::cli::install::InstallArgs;
use crate::cli::post_install::PostInstall;
use crate::cli::test::Test;
use crate::cli::uninstall::Uninstall;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, name = "moo", bin_name = "moo")]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(flatten)]
    pub artifact: ArtifactOverrides,

    #[command(subcommand)]
    pub command: Command,
}

/// Replaces parts of the built-in artifact, e.g. to supply its checksum.
#[derive(Args, Debug, Default)]
pub struct ArtifactOverrides {
    /// Download the archive from this URL instead
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Install this release instead of the built-in one
    #[arg(long, global = true, value_name = "VERSION")]
    pub artifact_version: Option<String>,

    /// Expected SHA-256 of the archive
    #[arg(long, global = true, value_name = "HEX")]
    pub sha256: Option<String>,
}

impl ArtifactOverrides {
    pub fn apply(&self, formula: Formula) -> Formula {
        formula.with_overrides(
            self.url.as_deref(),
            self.artifact_version.as_deref(),
            self.sha256.as_deref(),
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download, verify and install the statusline, then copy it into place
    Install(InstallArgs),
    /// Copy the installed statusline into the user config directory
    PostInstall(PostInstall),
    /// Show activation instructions
    Caveats(Caveats),
    /// Run the installed statusline's self-test
    Test(Test),
    /// Remove the installed statusline binary
    Uninstall(Uninstall),
    /// Describe the formula and what is installed
    Info(Info),
}

impl Command {
    pub async fn run(&self, formula: &Formula, config: &Config) -> Result<()> {
        match self {
            Self::Install(command) => command.run(formula, config).await,
            Self::PostInstall(command) => command.run(formula, config),
            Self::Caveats(command) => command.run(),
            Self::Test(command) => command.run(formula, config),
            Self::Uninstall(command) => command.run(formula, config),
            Self::Info(command) => command.run(formula, config),
        }
    }
}

/// Prints a `==> ` status line.
pub fn ohai(message: &str) {
    println!("{}{}", "==> ".bold().blue(), message.bold());
}
