//! Query command - print one query parameter of a URL.

use anyhow::Result;
use clap::Args;
use heron_util::query_param;

#[derive(Args)]
pub struct QueryCommand {
    /// Absolute URL to inspect
    pub url: String,

    /// Parameter name
    pub key: String,
}

impl QueryCommand {
    pub fn run(&self) -> Result<()> {
        if let Some(value) = query_param(&self.url, &self.key)? {
            println!("{value}");
        }
        Ok(())
    }
}
