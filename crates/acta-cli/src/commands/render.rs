use super::utils::{build_usecase, load_context, print_json};
use acta_core::config::EngineConfig;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub async fn run(
    config: &EngineConfig,
    catalogue: &Path,
    instance: &str,
    session: Option<String>,
    signals: Option<&Path>,
    events: Option<PathBuf>,
) -> Result<()> {
    let usecase = build_usecase(config, catalogue, events)?;
    let context = load_context(signals, session)?;

    let rendered = usecase.render_instance(instance, &context).await;
    usecase.flush_analytics().await;
    print_json(&rendered?)
}
