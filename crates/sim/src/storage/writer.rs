//! Plain-text output of generated samples.
//!
//! The primary file of a sample has the layout
//!
//! ```text
//! <number of species>
//! <number of sites>
//! <lambda> <m> <mu>
//! <parent> <child> <branch length>      one line per edge, breadth first
//! <count> <count> ...                   one line per node id
//! ```
//!
//! When counts are not simulated the rate line reads `-1 -1 -1`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::StorageError;
use crate::simulation::Sample;
use crate::tree::PhyloTree;

/// Rate line written when no rates were resolved.
const DISABLED_RATES: &str = "-1 -1 -1";

/// Output paths of a batch.
///
/// A single unnumbered sample is written to `base` itself; a numbered batch
/// of `k` samples goes to `base-0` through `base-(k-1)`.
pub fn sample_paths(base: &Path, number_of_samples: Option<usize>) -> Vec<PathBuf> {
    match number_of_samples {
        None => vec![base.to_path_buf()],
        Some(count) => (0..count)
            .map(|index| append_to_path(base, &format!("-{index}")))
            .collect(),
    }
}

/// Append `suffix` to the final component of `path` (`out` -> `out-0`).
pub fn append_to_path(path: &Path, suffix: &str) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(suffix);
    PathBuf::from(os)
}

/// Write the primary representation of `tree` with optional `rates`.
pub fn write_tree<W: Write>(
    out: &mut W,
    tree: &PhyloTree,
    rates: Option<(f64, f64, f64)>,
) -> io::Result<()> {
    writeln!(out, "{}", tree.number_of_species())?;
    writeln!(out, "{}", tree.number_of_sites())?;
    match rates {
        Some((lambda, mu, m)) => writeln!(out, "{lambda} {m} {mu}")?,
        None => writeln!(out, "{DISABLED_RATES}")?,
    }

    for edge in tree.bfs_edges() {
        match edge.branch_length {
            Some(length) => writeln!(out, "{} {} {length}", edge.from, edge.to)?,
            None => writeln!(out, "{} {}", edge.from, edge.to)?,
        }
    }

    write_count_rows(out, tree)
}

/// Write the k-word count table: node count, site count, then one row per node.
pub fn write_counts<W: Write>(out: &mut W, tree: &PhyloTree) -> io::Result<()> {
    writeln!(out, "{}", tree.node_count())?;
    writeln!(out, "{}", tree.number_of_sites())?;
    write_count_rows(out, tree)
}

fn write_count_rows<W: Write>(out: &mut W, tree: &PhyloTree) -> io::Result<()> {
    let counts = tree.counts();
    for node in 0..tree.node_count() {
        let mut cells = counts.row(node).iter();
        if let Some(first) = cells.next() {
            write!(out, "{first}")?;
            for cell in cells {
                write!(out, " {cell}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write the primary file of `sample` to `path`.
pub fn write_sample(path: &Path, sample: &Sample) -> Result<(), StorageError> {
    let rates = sample.rates.map(|r| (r.lambda, r.mu, r.m));
    write_file(path, |out| write_tree(out, &sample.tree, rates))
}

/// Write the count dump of `tree` to `path`.
pub fn write_count_file(path: &Path, tree: &PhyloTree) -> Result<(), StorageError> {
    write_file(path, |out| write_counts(out, tree))
}

/// Create `path`, run `body` against a buffered writer and flush it.
pub(crate) fn write_file<F>(path: &Path, body: F) -> Result<(), StorageError>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let file = File::create(path).map_err(|e| StorageError::write(path, e))?;
    let mut out = BufWriter::new(file);
    body(&mut out).map_err(|e| StorageError::write(path, e))?;
    out.flush().map_err(|e| StorageError::write(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cherry(sites: usize) -> PhyloTree {
        let mut tree = PhyloTree::from_edges(2, sites, &[(0, 1), (0, 2)]);
        tree.set_branch_length(0, 1, 0.5);
        tree.set_branch_length(0, 2, 1.0);
        tree
    }

    fn render(tree: &PhyloTree, rates: Option<(f64, f64, f64)>) -> String {
        let mut buf = Vec::new();
        write_tree(&mut buf, tree, rates).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_tree_layout() {
        let mut tree = cherry(2);
        tree.counts_mut().row_mut(0).copy_from_slice(&[3, 4]);
        tree.counts_mut().row_mut(2).copy_from_slice(&[5, 0]);

        // rate line order is lambda, m, mu
        assert_eq!(
            render(&tree, Some((0.25, 0.5, 2.0))),
            "2\n2\n0.25 2 0.5\n0 1 0.5\n0 2 1\n3 4\n0 0\n5 0\n"
        );
    }

    #[test]
    fn test_disabled_rates_line() {
        let text = render(&cherry(1), None);
        assert_eq!(text.lines().nth(2), Some("-1 -1 -1"));
    }

    #[test]
    fn test_zero_sites_prints_empty_rows() {
        assert_eq!(render(&cherry(0), None), "2\n0\n-1 -1 -1\n0 1 0.5\n0 2 1\n\n\n\n");
    }

    #[test]
    fn test_write_counts() {
        let mut buf = Vec::new();
        write_counts(&mut buf, &cherry(3)).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "3\n3\n0 0 0\n0 0 0\n0 0 0\n");
    }

    #[test]
    fn test_sample_paths() {
        let base = Path::new("out/tree.txt");
        assert_eq!(sample_paths(base, None), vec![PathBuf::from("out/tree.txt")]);
        assert_eq!(
            sample_paths(base, Some(3)),
            vec![
                PathBuf::from("out/tree.txt-0"),
                PathBuf::from("out/tree.txt-1"),
                PathBuf::from("out/tree.txt-2"),
            ]
        );
        assert!(sample_paths(base, Some(0)).is_empty());
    }

    #[test]
    fn test_write_error_surfaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("tree.txt");
        let err = write_count_file(&path, &cherry(1)).unwrap_err();
        let StorageError::Write { path: reported, .. } = err;
        assert_eq!(reported, path);
    }
}
