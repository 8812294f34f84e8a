use acta_infrastructure::load_catalogue;
use anyhow::Result;
use std::path::Path;

pub fn run(catalogue: &Path) -> Result<()> {
    match load_catalogue(catalogue) {
        Ok(loaded) => {
            println!(
                "✅ {} is valid: {} template(s), {} instance(s)",
                catalogue.display(),
                loaded.templates.len(),
                loaded.instances.len()
            );
            Ok(())
        }
        Err(e) => anyhow::bail!("{} is invalid: {}", catalogue.display(), e),
    }
}
