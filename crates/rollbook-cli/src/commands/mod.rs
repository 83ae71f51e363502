//! Subcommand implementations.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use rollbook_core::{load_config_from, ListingStyle, RollbookConfig};

pub mod init;
pub mod interactive;
pub mod list;

/// Options shared by every command that seeds a store.
#[derive(Debug, Clone, Default, Args)]
pub struct SessionArgs {
    /// Config file path (defaults to ./rollbook.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start with an empty store instead of the two sample records
    #[arg(long)]
    pub no_samples: bool,

    /// Listing style: plain, table
    #[arg(long)]
    pub style: Option<ListingStyle>,
}

impl SessionArgs {
    /// Load the config file and apply command-line overrides on top.
    pub fn load_config(&self) -> Result<RollbookConfig> {
        let mut config = load_config_from(self.config.as_deref())?;
        if self.no_samples {
            config.load_samples = false;
        }
        if let Some(style) = self.style {
            config.listing_style = style;
        }
        Ok(config)
    }
}
