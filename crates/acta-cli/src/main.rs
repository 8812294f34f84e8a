use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "acta")]
#[command(about = "ACTA CLI - Adaptive CTA rendering decisions", long_about = None)]
struct Cli {
    /// Engine config file (defaults to ~/.config/acta/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify device signals and show the selected pipeline
    Classify {
        /// JSON file with `device`, `behavior` and `user` sections
        #[arg(long)]
        signals: Option<PathBuf>,
    },
    /// Render an instance and print its adapted configuration
    Render {
        #[arg(long)]
        catalogue: PathBuf,
        #[arg(long)]
        instance: String,
        #[arg(long)]
        session: Option<String>,
        #[arg(long)]
        signals: Option<PathBuf>,
        /// Append analytics events to this JSON Lines file
        #[arg(long)]
        events: Option<PathBuf>,
    },
    /// Record an interaction and print the adaptations and next actions
    Interact {
        #[arg(long)]
        catalogue: PathBuf,
        #[arg(long)]
        instance: String,
        /// Interaction type, e.g. cta_click, view, rotate
        #[arg(long = "type")]
        interaction_type: String,
        /// Interaction payload as inline JSON
        #[arg(long)]
        data: Option<String>,
        #[arg(long)]
        session: Option<String>,
        #[arg(long)]
        signals: Option<PathBuf>,
        /// Append analytics events to this JSON Lines file
        #[arg(long)]
        events: Option<PathBuf>,
    },
    /// Validate a catalogue file
    Validate {
        #[arg(long)]
        catalogue: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = commands::utils::load_config(cli.config.as_deref())?;
    logging::init(&config.logging)?;

    match cli.command {
        Commands::Classify { signals } => commands::classify::run(signals.as_deref())?,
        Commands::Render {
            catalogue,
            instance,
            session,
            signals,
            events,
        } => {
            commands::render::run(
                &config,
                &catalogue,
                &instance,
                session,
                signals.as_deref(),
                events,
            )
            .await?
        }
        Commands::Interact {
            catalogue,
            instance,
            interaction_type,
            data,
            session,
            signals,
            events,
        } => {
            commands::interact::run(
                &config,
                commands::interact::InteractArgs {
                    catalogue: &catalogue,
                    instance: &instance,
                    interaction_type: &interaction_type,
                    data: data.as_deref(),
                    session,
                    signals: signals.as_deref(),
                    events,
                },
            )
            .await?
        }
        Commands::Validate { catalogue } => commands::validate::run(&catalogue)?,
    }

    Ok(())
}
