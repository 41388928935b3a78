use anyhow::{Context, Result};
use std::path::Path;

use kwtree_sim::simulation::Configuration;

use crate::printing::print_parameters;

pub fn validate_config(path: &Path) -> Result<()> {
    println!("🔍 Validating config: {}", path.display());

    let config = Configuration::load_from(path)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    print_parameters(&config);

    println!("✓ Validation complete: No issues found");
    Ok(())
}
