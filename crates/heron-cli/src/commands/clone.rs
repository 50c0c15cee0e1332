//! Clone command - deep copy a JSON document and check the result.

use anyhow::{Context, Result};
use clap::Args;
use heron_value::{CloneConfig, DeepCopier, Value, structurally_equal};
use std::path::PathBuf;
use tracing::debug;

#[derive(Args)]
pub struct CloneCommand {
    /// JSON file to copy
    pub file: PathBuf,

    /// Fail when containers nest deeper than this
    #[arg(long)]
    pub max_depth: Option<usize>,
}

impl CloneCommand {
    pub fn run(&self) -> Result<()> {
        let source = std::fs::read_to_string(&self.file)
            .with_context(|| format!("Failed to read {}", self.file.display()))?;
        let json: serde_json::Value = serde_json::from_str(&source)
            .with_context(|| format!("Invalid JSON in {}", self.file.display()))?;
        let original = Value::from_json(&json);
        debug!(file = %self.file.display(), kind = original.type_name(), "document loaded");

        let mut copier = DeepCopier::with_config(CloneConfig {
            max_depth: self.max_depth,
            ..CloneConfig::default()
        });
        let copy = copier.copy(&original)?;

        if !structurally_equal(&original, &copy) {
            anyhow::bail!("Copy of {} differs from the original", self.file.display());
        }

        let stats = copier.stats();
        println!("containers copied: {}", stats.containers_copied);
        println!("shared references: {}", stats.cache_hits);
        println!("atomic values:     {}", stats.atomics_passed);
        Ok(())
    }
}
