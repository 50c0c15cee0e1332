//! Date command - format a date with a placeholder pattern.

use anyhow::{Context, Result};
use chrono::DateTime;
use clap::Args;
use heron_util::{format_date, format_now};

#[derive(Args)]
pub struct DateCommand {
    /// Output pattern (y, M, d, h, m, s, q, S placeholders)
    #[arg(long, short, default_value = "yyyy-MM-dd hh:mm:ss")]
    pub pattern: String,

    /// RFC 3339 timestamp to format instead of the current time
    #[arg(long)]
    pub at: Option<String>,
}

impl DateCommand {
    pub fn run(&self) -> Result<()> {
        let text = match &self.at {
            Some(at) => {
                let date = DateTime::parse_from_rfc3339(at)
                    .with_context(|| format!("Invalid RFC 3339 timestamp: {at}"))?;
                format_date(&date, &self.pattern)
            }
            None => format_now(&self.pattern),
        };
        println!("{text}");
        Ok(())
    }
}
