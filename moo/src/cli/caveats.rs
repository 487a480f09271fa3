use clap::Args;
use moo_common::error::Result;

#[derive(Debug, Args)]
pub struct Caveats;

impl Caveats {
    pub fn run(&self) -> Result<()> {
        print!("{}", moo_core::render_caveats());
        Ok(())
    }
}
