//! Random branch lengths.

use rand::Rng;
use rand_distr::Distribution;

use crate::tree::model::PhyloTree;

/// Draw one length per undirected edge and store it on both records.
///
/// The record whose source id is the smaller endpoint triggers the draw, so
/// each physical edge consumes exactly one value. Edges are visited by
/// ascending node id and then in adjacency order. Drawn values are stored
/// as-is; a normal distribution can produce negative lengths.
pub fn assign_branch_lengths<D, R>(tree: &mut PhyloTree, dist: &D, rng: &mut R)
where
    D: Distribution<f64> + ?Sized,
    R: Rng + ?Sized,
{
    for u in 0..tree.node_count() {
        for j in 0..tree.degree(u) {
            let v = tree.edges(u)[j].to;
            if u < v {
                let length = dist.sample(rng);
                let assigned = tree.set_branch_length(u, v, length);
                debug_assert!(assigned, "edge {u}-{v} is missing its reverse record");
            }
        }
    }
}
