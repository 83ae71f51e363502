//! Configuration loading and store seeding.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::StudentRecord;
use crate::store::RecordStore;

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "rollbook.toml";

/// How listings are rendered on the console.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStyle {
    /// One `Roll: .. | Name: ..` line per record between dashed rules.
    #[default]
    Plain,
    /// A bordered table.
    Table,
}

impl fmt::Display for ListingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingStyle::Plain => write!(f, "plain"),
            ListingStyle::Table => write!(f, "table"),
        }
    }
}

impl FromStr for ListingStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "text" => Ok(ListingStyle::Plain),
            "table" => Ok(ListingStyle::Table),
            other => Err(format!("unknown listing style: {other}")),
        }
    }
}

/// A record to insert at startup, as written in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedRecord {
    pub roll_no: i32,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub course: String,
    pub marks: f64,
}

impl From<SeedRecord> for StudentRecord {
    fn from(seed: SeedRecord) -> Self {
        StudentRecord::new(seed.roll_no, seed.name, seed.email, seed.course, seed.marks)
    }
}

/// Top-level rollbook configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollbookConfig {
    /// Load the two built-in sample records.
    #[serde(default = "default_true")]
    pub load_samples: bool,
    /// Print the sample detail views before the menu.
    #[serde(default = "default_true")]
    pub show_banner: bool,
    /// Listing renderer.
    #[serde(default)]
    pub listing_style: ListingStyle,
    /// Extra records inserted after the samples.
    #[serde(default)]
    pub students: Vec<SeedRecord>,
}

fn default_true() -> bool {
    true
}

impl Default for RollbookConfig {
    fn default() -> Self {
        Self {
            load_samples: true,
            show_banner: true,
            listing_style: ListingStyle::default(),
            students: Vec::new(),
        }
    }
}

/// Load config from an explicit path, or fall back to `rollbook.toml` in the
/// working directory, or defaults if neither exists.
///
/// Environment variable override: `ROLLBOOK_LISTING_STYLE`.
pub fn load_config_from(path: Option<&Path>) -> Result<RollbookConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from(DEFAULT_CONFIG_FILE);
            local.exists().then_some(local)
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::info!(path = %path.display(), "loaded config");
            config
        }
        None => RollbookConfig::default(),
    };

    if let Ok(style) = std::env::var("ROLLBOOK_LISTING_STYLE") {
        config.listing_style = style
            .parse()
            .map_err(|e: String| anyhow::anyhow!("ROLLBOOK_LISTING_STYLE: {e}"))?;
    }

    Ok(config)
}

/// Parse a TOML string into a config.
pub fn parse_config_str(content: &str) -> Result<RollbookConfig> {
    Ok(toml::from_str(content)?)
}

/// Build the startup store: samples first (if enabled), then configured
/// students. Seeds that collide with an existing roll number are skipped.
pub fn seed_store(config: &RollbookConfig) -> RecordStore {
    let mut store = RecordStore::new();
    if config.load_samples {
        store.load_sample_data();
    }
    for seed in &config.students {
        let roll = seed.roll_no;
        if let Err(e) = store.add(seed.clone().into()) {
            tracing::warn!(roll, "skipping configured student: {e}");
        }
    }
    store
}
