use std::path::Path;

use kwtree_sim::base::ParameterSpec;
use kwtree_sim::simulation::{Configuration, Sample};
use kwtree_sim::tree::model::node_count;

pub fn print_parameters(config: &Configuration) {
    println!("\n📋 Simulation Configuration");
    println!("  • Species: {}", config.number_of_species);
    println!("  • Sites: {}", config.number_of_sites);
    match config.number_of_samples {
        Some(count) => println!("  • Samples: {count} (numbered outputs)"),
        None => println!("  • Samples: 1"),
    }
    if let Some(seed) = config.seed {
        println!("  • Random Seed: {seed} [--seed]");
    } else {
        println!("  • Random Seed: Random [--seed]");
    }

    let nodes = node_count(config.number_of_species);
    println!("\n🌳 Tree");
    println!("  • Nodes: {nodes} ({} edges)", nodes.saturating_sub(1));
    println!("  • Branch Lengths: {}", config.branch_length_distribution);

    println!("\n⚡ Birth-Death-Immigration Rates");
    match (&config.lambda, &config.mu, &config.m) {
        (Some(lambda), Some(mu), Some(m)) => {
            print_rate("lambda (birth)", lambda);
            print_rate("mu (death)", mu);
            print_rate("m (immigration)", m);
            println!(
                "  • Burn-in: start at {} for {} time units",
                config.burn_in.initial_state, config.burn_in.time
            );
        }
        _ => println!("  • Disabled: counts stay 0"),
    }
    println!();
}

fn print_rate(name: &str, spec: &ParameterSpec) {
    println!("  • {name}: {spec}");
}

pub fn print_sample(sample: &Sample, path: &Path) {
    match &sample.rates {
        Some(r) => println!(
            "✓ Sample {} → {} (lambda={}, mu={}, m={})",
            sample.index,
            path.display(),
            r.lambda,
            r.mu,
            r.m
        ),
        None => println!("✓ Sample {} → {}", sample.index, path.display()),
    }
}
