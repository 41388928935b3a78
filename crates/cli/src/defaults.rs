//! Shared default values for the command-line front end.

pub const CONFIG_FILE: &str = "kwtree.yaml";

pub const NEWICK_EXTENSION: &str = ".nwk";
pub const COUNTS_EXTENSION: &str = ".counts";

pub const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}";
