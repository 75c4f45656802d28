use crate::i18n::Language;
use crate::reveal::RevealSchedule;
use anyhow::{bail, Context, Result};
use luckydraw_core::NonZeroUsize;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// A lot count outside the configured `[min_lots, max_lots]` range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Lots must be between {min} and {max}, got {lots}")]
pub struct LotsOutOfRange {
    pub lots: usize,
    pub min: usize,
    pub max: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub language: Language,
    /// Smallest number of lots the prompt and `draw` accept.
    pub min_lots: usize,
    /// Largest number of lots the prompt and `draw` accept.
    pub max_lots: usize,
    pub drawing_delay_ms: u64,
    pub reveal_interval_ms: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            min_lots: 1,
            max_lots: 50,
            drawing_delay_ms: 1500,
            reveal_interval_ms: 300,
        }
    }
}

impl CliConfig {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("luckydraw")
            .join("config.json")
    }

    /// Read the config at `path`, or the defaults if there is no file.
    pub async fn load(path: &Path) -> Result<Self> {
        if !tokio::fs::try_exists(path).await.unwrap_or(false) {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        config.validate()?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Like `load`, but an unreadable or invalid file falls back to the
    /// defaults so `config` commands can still show or replace it.
    pub async fn load_or_default(path: &Path) -> Self {
        match Self::load(path).await {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, content).await?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_lots == 0 {
            bail!("min_lots must be at least 1");
        }

        if self.min_lots > self.max_lots {
            bail!(
                "min_lots ({}) cannot exceed max_lots ({})",
                self.min_lots,
                self.max_lots
            );
        }

        Ok(())
    }

    /// Check a requested number of lots against the configured bounds.
    pub fn winner_count(&self, lots: usize) -> Result<NonZeroUsize> {
        NonZeroUsize::new(lots)
            .filter(|_| (self.min_lots..=self.max_lots).contains(&lots))
            .ok_or(LotsOutOfRange {
                lots,
                min: self.min_lots,
                max: self.max_lots,
            })
            .map_err(Into::into)
    }

    pub fn reveal_schedule(&self) -> RevealSchedule {
        RevealSchedule::new(
            Duration::from_millis(self.drawing_delay_ms),
            Duration::from_millis(self.reveal_interval_ms),
        )
    }
}
