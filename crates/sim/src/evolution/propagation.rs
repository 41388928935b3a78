//! Evolve k-word counts from the root to the leaves.
//!
//! Every site evolves independently. The root row is seeded by a long
//! burn-in run of the chain, and each child's count is the state reached by
//! running the chain from its parent's count for the length of the
//! connecting branch.

use log::debug;
use rand::Rng;

use crate::errors::SimulationError;
use crate::evolution::ctmc::BirthDeathImmigration;
use crate::simulation::parameters::BurnIn;
use crate::tree::{PhyloTree, ROOT};

/// Draw one root state per site by running the chain through the burn-in.
///
/// A long burn-in brings each site close to the quasi-stationary
/// distribution of the process before evolution along the tree starts.
pub fn burn_in_root_states<R: Rng + ?Sized>(
    model: &BirthDeathImmigration,
    burn_in: &BurnIn,
    number_of_sites: usize,
    rng: &mut R,
) -> Result<Vec<u64>, SimulationError> {
    (0..number_of_sites)
        .map(|_| {
            model
                .simulate(burn_in.initial_state, burn_in.time, rng)
                .map(|t| t.state)
        })
        .collect()
}

/// Fill the count table of `tree`.
///
/// The root row is set to `root_states`. Edges are then processed in
/// breadth-first order away from the root, so a parent's row is final before
/// any child is computed; within an edge, sites are simulated in ascending
/// order.
///
/// # Errors
/// Fails on the first edge without a branch length, or with the chain's
/// error if a trajectory cannot be simulated. The table is left partially
/// filled in that case.
///
/// # Panics
/// Panics if `root_states.len()` differs from the tree's number of sites.
pub fn propagate_counts<R: Rng + ?Sized>(
    tree: &mut PhyloTree,
    model: &BirthDeathImmigration,
    root_states: &[u64],
    rng: &mut R,
) -> Result<(), SimulationError> {
    let sites = tree.number_of_sites();
    assert_eq!(root_states.len(), sites, "one root state per site");

    tree.counts_mut().row_mut(ROOT).copy_from_slice(root_states);

    let edges = tree.bfs_edges();
    for edge in &edges {
        let length = edge
            .branch_length
            .ok_or(SimulationError::MissingBranchLength {
                from: edge.from,
                to: edge.to,
            })?;

        for site in 0..sites {
            let parent_state = tree.counts().get(edge.from, site);
            let child_state = model.simulate(parent_state, length, rng)?.state;
            tree.counts_mut().set(edge.to, site, child_state);
        }
    }

    debug!("propagated {sites} sites along {} edges", edges.len());
    Ok(())
}
