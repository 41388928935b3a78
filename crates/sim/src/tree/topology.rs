//! Uniform random rooted binary topologies.
//!
//! Leaves are inserted one at a time by subdividing a uniformly chosen edge
//! of the current unrooted tree (Yule-style sequential insertion). The root
//! is placed last on another uniformly chosen edge, and leaf labels are then
//! permuted so that insertion order says nothing about leaf identity. Every
//! labeled rooted binary topology on `S` leaves is equally likely.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::TopologyError;
use crate::tree::model::{NodeId, PhyloTree, ROOT};

/// Generate a random topology on `number_of_species` leaves.
///
/// The returned tree has `2S - 1` nodes and `2S - 2` edges, no branch
/// lengths, and a zeroed count table with `number_of_sites` columns.
///
/// # Errors
/// Returns [`TopologyError::InvalidSpeciesCount`] when `number_of_species`
/// is 0.
pub fn generate_random_topology<R: Rng + ?Sized>(
    number_of_species: usize,
    number_of_sites: usize,
    rng: &mut R,
) -> Result<PhyloTree, TopologyError> {
    if number_of_species == 0 {
        return Err(TopologyError::InvalidSpeciesCount(number_of_species));
    }

    let s = number_of_species;
    let mut edges = random_unrooted_edges(s, rng);

    if !edges.is_empty() {
        let (u, v) = edges.swap_remove(rng.random_range(0..edges.len()));
        edges.push((ROOT, u));
        edges.push((ROOT, v));
    }

    // labels[i - 1] is the final label of the i-th inserted leaf
    let mut labels: Vec<NodeId> = (1..=s).collect();
    labels.shuffle(rng);
    let relabel = |node: NodeId| {
        if (1..=s).contains(&node) {
            labels[node - 1]
        } else {
            node
        }
    };

    let mut edges: Vec<(NodeId, NodeId)> = edges
        .into_iter()
        .map(|(u, v)| (relabel(u), relabel(v)))
        .collect();
    edges.sort_unstable();

    debug!("generated topology with {s} leaves and {} edges", edges.len());
    Ok(PhyloTree::from_edges(s, number_of_sites, &edges))
}

/// Build the unrooted tree on leaves `1..=s` by sequential insertion.
///
/// The edge list is indexed by rank so that each step can pick uniformly
/// among the edges present at that moment. Leaf `i` (for `i >= 3`) hangs
/// off the new internal node `s + i - 2`.
fn random_unrooted_edges<R: Rng + ?Sized>(s: usize, rng: &mut R) -> Vec<(NodeId, NodeId)> {
    let mut edges = Vec::with_capacity((2 * s).saturating_sub(2));
    if s < 2 {
        return edges;
    }

    edges.push((1, 2));
    for leaf in 3..=s {
        // 2(leaf - 1) - 3 edges in the tree on leaf - 1 leaves
        let (u, v) = edges.swap_remove(rng.random_range(0..edges.len()));
        let internal = s + leaf - 2;
        edges.push((internal, u));
        edges.push((internal, v));
        edges.push((internal, leaf));
    }

    edges
}
