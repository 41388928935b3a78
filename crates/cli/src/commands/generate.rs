use anyhow::{Context, Result};
use log::info;
use std::path::Path;

use kwtree_sim::simulation::{Configuration, Sample, Simulation};
use kwtree_sim::storage::{sample_paths, write_count_file, write_newick_file, write_sample};

use crate::args::GenerateArgs;
use crate::printing::{print_parameters, print_sample};
use crate::utils::{counts_path, newick_path, progress_bar};

pub fn generate(args: &GenerateArgs) -> Result<()> {
    println!("🌳 kwtree - Generating Trees");
    println!("============================================");

    let config = Configuration::load_from(&args.config)
        .with_context(|| format!("Failed to load config {}", args.config.display()))?;
    print_parameters(&config);

    let seed = args.seed.or(config.seed);
    let paths = sample_paths(&args.output, config.number_of_samples);
    let mut sim = Simulation::with_seed(config, seed).context("Failed to set up simulation")?;
    println!("🎲 Seed: {}", sim.seed());
    info!("Writing {} sample(s) to {}", paths.len(), args.output.display());

    let pb = progress_bar(paths.len(), args.progress);

    for path in &paths {
        let Some(result) = sim.next_sample() else {
            break;
        };
        let sample =
            result.with_context(|| format!("Failed to generate sample for {}", path.display()))?;

        write_outputs(args, path, &sample)?;

        match &pb {
            Some(pb) => pb.inc(1),
            None => print_sample(&sample, path),
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    println!("\n✓ Generated {} sample(s)", sim.generated());
    Ok(())
}

fn write_outputs(args: &GenerateArgs, path: &Path, sample: &Sample) -> Result<()> {
    write_sample(path, sample)?;
    if args.newick {
        write_newick_file(&newick_path(path), &sample.tree)?;
    }
    if args.counts {
        write_count_file(&counts_path(path), &sample.tree)?;
    }
    Ok(())
}
