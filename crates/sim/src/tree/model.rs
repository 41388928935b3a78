//! In-memory phylogenetic tree with per-node k-word counts.
//!
//! Node 0 is the root, nodes `1..=S` are the leaves and the remaining ids
//! are internal nodes created while the topology is generated. Every
//! undirected edge is stored twice, once in each endpoint's adjacency list,
//! and both records carry the same branch length.

use std::collections::VecDeque;

/// Index of a node in a [`PhyloTree`].
pub type NodeId = usize;

/// Id of the root node.
pub const ROOT: NodeId = 0;

/// One directional record of an undirected tree edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    /// `None` until branch lengths are assigned.
    pub branch_length: Option<f64>,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self {
            from,
            to,
            branch_length: None,
        }
    }
}

/// Dense `nodes × sites` table of k-word counts, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMatrix {
    nodes: usize,
    sites: usize,
    data: Vec<u64>,
}

impl CountMatrix {
    /// Create a zero-filled matrix.
    pub fn zeros(nodes: usize, sites: usize) -> Self {
        Self {
            nodes,
            sites,
            data: vec![0; nodes * sites],
        }
    }

    #[inline]
    pub fn sites(&self) -> usize {
        self.sites
    }

    /// Number of rows (nodes).
    #[inline]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// # Panics
    /// Panics if `node` or `site` is out of range.
    #[inline]
    pub fn get(&self, node: NodeId, site: usize) -> u64 {
        assert!(site < self.sites, "site {site} out of range");
        self.data[node * self.sites + site]
    }

    /// # Panics
    /// Panics if `node` or `site` is out of range.
    #[inline]
    pub fn set(&mut self, node: NodeId, site: usize, value: u64) {
        assert!(site < self.sites, "site {site} out of range");
        self.data[node * self.sites + site] = value;
    }

    /// Counts of all sites for one node.
    pub fn row(&self, node: NodeId) -> &[u64] {
        &self.data[node * self.sites..(node + 1) * self.sites]
    }

    pub fn row_mut(&mut self, node: NodeId) -> &mut [u64] {
        &mut self.data[node * self.sites..(node + 1) * self.sites]
    }
}

/// A rooted binary phylogenetic tree over `number_of_species` leaves.
#[derive(Debug, Clone, PartialEq)]
pub struct PhyloTree {
    number_of_species: usize,
    adjacency: Vec<Vec<Edge>>,
    counts: CountMatrix,
}

impl PhyloTree {
    /// Create a tree with `2S - 1` isolated nodes and a zeroed count table.
    ///
    /// `number_of_species` must be at least 1; the topology generator
    /// checks this before calling.
    pub fn empty(number_of_species: usize, number_of_sites: usize) -> Self {
        let n = node_count(number_of_species);
        Self {
            number_of_species,
            adjacency: vec![Vec::new(); n],
            counts: CountMatrix::zeros(n, number_of_sites),
        }
    }

    /// Build a tree from undirected `(u, v)` pairs.
    ///
    /// Each pair is stored in both directions, in the given order, without
    /// branch lengths.
    pub fn from_edges(
        number_of_species: usize,
        number_of_sites: usize,
        edges: &[(NodeId, NodeId)],
    ) -> Self {
        let mut tree = Self::empty(number_of_species, number_of_sites);
        for &(u, v) in edges {
            tree.add_edge(u, v);
        }
        tree
    }

    fn add_edge(&mut self, u: NodeId, v: NodeId) {
        self.adjacency[u].push(Edge::new(u, v));
        self.adjacency[v].push(Edge::new(v, u));
    }

    #[inline]
    pub fn number_of_species(&self) -> usize {
        self.number_of_species
    }

    #[inline]
    pub fn number_of_sites(&self) -> usize {
        self.counts.sites()
    }

    /// Total number of nodes, `2S - 1`.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Outgoing directional records of `node`.
    pub fn edges(&self, node: NodeId) -> &[Edge] {
        &self.adjacency[node]
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency[node].len()
    }

    pub fn is_leaf(&self, node: NodeId) -> bool {
        (1..=self.number_of_species).contains(&node)
    }

    /// Length stored on the record `from -> to`, if the edge exists and has one.
    pub fn branch_length(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.adjacency[from]
            .iter()
            .find(|e| e.to == to)
            .and_then(|e| e.branch_length)
    }

    /// Assign `length` to both records of the undirected edge `{u, v}`.
    ///
    /// Returns `false` if the edge does not exist.
    pub fn set_branch_length(&mut self, u: NodeId, v: NodeId, length: f64) -> bool {
        let Some(forward) = self.adjacency[u].iter_mut().find(|e| e.to == v) else {
            return false;
        };
        forward.branch_length = Some(length);

        match self.adjacency[v].iter_mut().find(|e| e.to == u) {
            Some(reverse) => {
                reverse.branch_length = Some(length);
                true
            }
            None => false,
        }
    }

    /// Edges oriented away from the root, in breadth-first discovery order.
    ///
    /// A node always appears as `to` before it appears as `from`, so walking
    /// this list visits parents strictly before their children.
    pub fn bfs_edges(&self) -> Vec<Edge> {
        let mut order = Vec::with_capacity(self.node_count().saturating_sub(1));
        let mut visited = vec![false; self.node_count()];
        let mut queue = VecDeque::new();

        visited[ROOT] = true;
        queue.push_back(ROOT);

        while let Some(node) = queue.pop_front() {
            for edge in &self.adjacency[node] {
                if !visited[edge.to] {
                    visited[edge.to] = true;
                    order.push(*edge);
                    queue.push_back(edge.to);
                }
            }
        }

        order
    }

    #[inline]
    pub fn counts(&self) -> &CountMatrix {
        &self.counts
    }

    #[inline]
    pub fn counts_mut(&mut self) -> &mut CountMatrix {
        &mut self.counts
    }
}

/// Number of nodes of a rooted binary tree with `number_of_species` leaves.
pub fn node_count(number_of_species: usize) -> usize {
    (2 * number_of_species).saturating_sub(1)
}
