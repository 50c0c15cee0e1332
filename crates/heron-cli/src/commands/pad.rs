//! Pad command - zero-pad a number.

use anyhow::Result;
use clap::Args;
use heron_util::pad_zero;

#[derive(Args)]
pub struct PadCommand {
    /// Number to pad
    #[arg(allow_negative_numbers = true)]
    pub number: i64,

    /// Minimum width, including any minus sign
    #[arg(default_value_t = 2)]
    pub width: usize,
}

impl PadCommand {
    pub fn run(&self) -> Result<()> {
        println!("{}", pad_zero(self.number, self.width));
        Ok(())
    }
}
