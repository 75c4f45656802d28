mod commands;
mod config;
mod i18n;
mod report;
mod reveal;

use clap::{Parser, Subcommand};
use config::{CliConfig, LotsOutOfRange};
use i18n::{Language, Translations};
use luckydraw_core::DrawError;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "luckydraw")]
#[command(about = "Lucky Draw - fair and random winner selection")]
#[command(version)]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Display language
    #[arg(short, long, global = true, value_enum)]
    lang: Option<Language>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw winners from the given participants
    Draw(commands::DrawArgs),
    /// Enter participants and draw from prompts
    Interactive,
    /// List supported languages
    Languages,
    /// Configuration commands
    #[command(subcommand)]
    Config(commands::ConfigCommands),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "luckydraw={},luckydraw_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_path = cli.config.unwrap_or_else(CliConfig::default_path);
    // config commands must still work when the file itself is broken
    let config = match &cli.command {
        Commands::Config(_) => CliConfig::load_or_default(&config_path).await,
        _ => match CliConfig::load(&config_path).await {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                eprintln!("Use 'luckydraw config init --force' to reset it");
                std::process::exit(1);
            }
        },
    };

    let translations = Translations::embedded()?;
    let messages = translations.messages(cli.lang.unwrap_or(config.language));

    // Execute command
    let result = match cli.command {
        Commands::Draw(args) => commands::handle_draw_command(args, &config, &messages).await,
        Commands::Interactive => commands::run_interactive(&config, &messages).await,
        Commands::Languages => {
            commands::list_languages(&translations, messages.language());
            Ok(())
        }
        Commands::Config(cmd) => {
            commands::handle_config_command(cmd, &config, &config_path).await
        }
    };

    if let Err(e) = result {
        if let Some(draw_error) = e.downcast_ref::<DrawError>() {
            eprintln!("{}", messages.draw_error(draw_error));
        } else if let Some(bounds) = e.downcast_ref::<LotsOutOfRange>() {
            eprintln!("{}", messages.lots_out_of_range(bounds.min, bounds.max));
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }

    Ok(())
}
