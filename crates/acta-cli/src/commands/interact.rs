use super::utils::{build_usecase, load_context, print_json};
use acta_core::config::EngineConfig;
use acta_core::session::InteractionData;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub struct InteractArgs<'a> {
    pub catalogue: &'a Path,
    pub instance: &'a str,
    pub interaction_type: &'a str,
    pub data: Option<&'a str>,
    pub session: Option<String>,
    pub signals: Option<&'a Path>,
    pub events: Option<PathBuf>,
}

pub async fn run(config: &EngineConfig, args: InteractArgs<'_>) -> Result<()> {
    let data = match args.data {
        Some(raw) => serde_json::from_str::<InteractionData>(raw)
            .context("Failed to parse --data as an interaction payload")?,
        None => InteractionData::default(),
    };
    let usecase = build_usecase(config, args.catalogue, args.events)?;
    let context = load_context(args.signals, args.session)?;

    let outcome = usecase
        .handle_interaction(args.instance, args.interaction_type, data, &context)
        .await;
    usecase.flush_analytics().await;
    print_json(&outcome?)
}
