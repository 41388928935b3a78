use clap::Args;
use std::path::PathBuf;

use crate::defaults;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// YAML configuration file
    pub config: PathBuf,

    /// Output path
    ///
    /// With `number-of-samples` set, one file per sample is written to
    /// `<OUTPUT>-0`, `<OUTPUT>-1`, ...
    pub output: PathBuf,

    /// Override random seed (default: use configured seed)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also write each tree in Newick format to `<sample path>.nwk`
    #[arg(long)]
    pub newick: bool,

    /// Also write each k-word count table to `<sample path>.counts`
    #[arg(long)]
    pub counts: bool,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the example configuration
    #[arg(short, long, default_value = defaults::CONFIG_FILE)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
