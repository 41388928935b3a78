//! Newick serialization.
//!
//! Every node is written as its numeric id, internal nodes after their
//! parenthesized children, and each child carries `:<branch length>` when
//! one is assigned. A cherry rooted at 0 with leaves 1 and 2 becomes
//! `(1:0.5,2:1)0;`.

use std::fmt::Write as _;
use std::path::Path;

use crate::errors::StorageError;
use crate::tree::{NodeId, PhyloTree, ROOT};

struct Frame {
    node: NodeId,
    next_edge: usize,
    opened: bool,
    length: Option<f64>,
}

impl Frame {
    fn new(node: NodeId, length: Option<f64>) -> Self {
        Self {
            node,
            next_edge: 0,
            opened: false,
            length,
        }
    }
}

/// Render `tree` as a semicolon-terminated Newick string.
///
/// Children are visited depth first in adjacency order, using an explicit
/// stack rather than recursion.
pub fn to_newick(tree: &PhyloTree) -> String {
    let mut out = String::new();
    let mut visited = vec![false; tree.node_count()];
    let mut stack = vec![Frame::new(ROOT, None)];
    visited[ROOT] = true;

    while let Some(frame) = stack.last_mut() {
        let edges = tree.edges(frame.node);
        let child = edges[frame.next_edge..]
            .iter()
            .position(|e| !visited[e.to])
            .map(|offset| frame.next_edge + offset);

        match child {
            Some(i) => {
                frame.next_edge = i + 1;
                out.push(if frame.opened { ',' } else { '(' });
                frame.opened = true;

                let edge = edges[i];
                visited[edge.to] = true;
                stack.push(Frame::new(edge.to, edge.branch_length));
            }
            None => {
                if frame.opened {
                    out.push(')');
                }
                // writing to a String cannot fail
                let _ = write!(out, "{}", frame.node);
                if let Some(length) = frame.length {
                    let _ = write!(out, ":{length}");
                }
                stack.pop();
            }
        }
    }

    out.push(';');
    out
}

/// Write the Newick string of `tree` to `path`.
pub fn write_newick_file(path: &Path, tree: &PhyloTree) -> Result<(), StorageError> {
    std::fs::write(path, to_newick(tree)).map_err(|e| StorageError::write(path, e))
}
