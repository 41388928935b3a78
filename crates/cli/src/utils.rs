use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

use kwtree_sim::storage::append_to_path;

use crate::defaults::{COUNTS_EXTENSION, NEWICK_EXTENSION, PROGRESS_TEMPLATE};

/// Progress bar over `len` samples, or `None` when disabled.
pub fn progress_bar(len: usize, enabled: bool) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }
    let pb = ProgressBar::new(len as u64);
    // the template is a constant, so a parse failure falls back to the default style
    if let Ok(style) = ProgressStyle::default_bar().template(PROGRESS_TEMPLATE) {
        pb.set_style(style.progress_chars("#>-"));
    }
    Some(pb)
}

pub fn newick_path(sample_path: &Path) -> PathBuf {
    append_to_path(sample_path, NEWICK_EXTENSION)
}

pub fn counts_path(sample_path: &Path) -> PathBuf {
    append_to_path(sample_path, COUNTS_EXTENSION)
}
