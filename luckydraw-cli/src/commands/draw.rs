use crate::config::CliConfig;
use crate::i18n::Messages;
use crate::report::DrawReport;
use crate::reveal::{show_draw, RevealSchedule};
use anyhow::{Context, Result};
use clap::Args;
use luckydraw_core::DrawRequest;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct DrawArgs {
    /// Participant names, one per slot
    pub names: Vec<String>,

    /// Number of lots (winners to draw)
    #[arg(short = 'n', long, default_value_t = 1)]
    pub lots: usize,

    /// Read more participants from a file, one per line
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Seed for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print a JSON report instead of the reveal
    #[arg(long)]
    pub json: bool,

    /// Show all winners at once
    #[arg(long)]
    pub no_animation: bool,
}

pub async fn handle_draw_command(
    args: DrawArgs,
    config: &CliConfig,
    messages: &Messages<'_>,
) -> Result<()> {
    let entries = collect_entries(args.names, args.file.as_deref()).await?;
    let winner_count = config.winner_count(args.lots)?;
    let request = DrawRequest::new(entries, winner_count);

    tracing::debug!(
        "Drawing {} from {} entries ({} filled in)",
        winner_count,
        request.entries.len(),
        request.eligible_count()
    );

    let result = match args.seed {
        Some(seed) => request.draw_with_rng(&mut StdRng::seed_from_u64(seed))?,
        None => request.draw()?,
    };

    if args.json {
        let report = DrawReport::new(&request, &result, args.seed);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let schedule = if args.no_animation {
        RevealSchedule::immediate()
    } else {
        config.reveal_schedule()
    };
    show_draw(&result, &schedule, messages).await;

    Ok(())
}

/// Positional names first, then every line of `file`. Blank lines stay as
/// blank slots so slot numbers match line numbers.
pub async fn collect_entries(names: Vec<String>, file: Option<&Path>) -> Result<Vec<String>> {
    let mut entries = names;

    if let Some(path) = file {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read participants from {}", path.display()))?;
        entries.extend(content.lines().map(str::to_string));
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_collect_entries_keeps_blank_lines() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("people.txt");
        tokio::fs::write(&path, "Cara\n\nDan\n").await.unwrap();

        let entries = collect_entries(vec!["Ann".to_string()], Some(&path))
            .await
            .unwrap();
        assert_eq!(entries, vec!["Ann", "Cara", "", "Dan"]);

        let request = DrawRequest::new(entries, luckydraw_core::NonZeroUsize::new(1).unwrap());
        assert_eq!(request.participants()[2].position, 4);
    }

    #[tokio::test]
    async fn test_collect_entries_missing_file() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("nope.txt");
        assert!(collect_entries(Vec::new(), Some(&missing)).await.is_err());
    }
}
