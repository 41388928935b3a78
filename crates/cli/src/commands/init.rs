use anyhow::{bail, Context, Result};

use kwtree_sim::simulation::Configuration;

use crate::args::InitArgs;

pub fn init_config(args: &InitArgs) -> Result<()> {
    let output = &args.output;
    if output.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            output.display()
        );
    }

    std::fs::write(output, Configuration::example_yaml())
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("✓ Wrote example configuration to {}", output.display());
    println!("💡 Next: kwtree generate {} <OUTPUT>", output.display());
    Ok(())
}
