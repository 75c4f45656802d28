use crate::config::CliConfig;
use anyhow::{bail, Result};
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub async fn handle_config_command(
    cmd: ConfigCommands,
    config: &CliConfig,
    path: &Path,
) -> Result<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("Config file: {}", path.display());
            println!("{}", serde_json::to_string_pretty(config)?);
        }

        ConfigCommands::Init { force } => {
            if !force && tokio::fs::try_exists(path).await.unwrap_or(false) {
                bail!(
                    "{} already exists, use --force to overwrite",
                    path.display()
                );
            }

            CliConfig::default().save(path).await?;
            tracing::info!("Wrote default config to {}", path.display());
            println!("Config written to {}", path.display());
        }
    }

    Ok(())
}
