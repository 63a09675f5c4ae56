//! Network topology model.
//!
//! A [`Network`] owns its nodes and edges outright and is the only place
//! role flags and vulnerabilities get mutated. Randomized (re-)configuration
//! runs through the `reset_*` operations, each of which takes an explicit
//! RNG so training episodes and tests can be reproduced from a seed.
//!
//! Structural invariants enforced here:
//!
//! - every edge joins two distinct, current member nodes;
//! - entry and high-value sets are subsets of the node set and disjoint
//!   whenever both counts are satisfiable;
//! - after a successful reset the entry/high-value set sizes equal the
//!   configured counts;
//! - vulnerabilities stay within the configured bounds.
//!
//! A failed operation leaves the network in its previous valid state.

pub mod layout;
pub mod node;
pub mod record;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

pub use node::{Node, NodeId};
pub use record::{NetworkRecord, NodeRecord};

/// Structural graph errors. All are raised synchronously at the point of
/// violation and never deferred.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("node '{id}' is already a member of the network")]
    DuplicateNode { id: NodeId },
    #[error("node '{id}' is not a member of the network")]
    UnknownNode { id: NodeId },
    #[error("invalid edge: node '{id}' cannot connect to itself")]
    InvalidEdge { id: NodeId },
    #[error(
        "cannot select {requested} random {role} nodes: \
         only {available} eligible nodes available"
    )]
    InsufficientNodes {
        role: NodeRole,
        requested: usize,
        available: usize,
    },
    #[error(
        "invalid vulnerability bounds: lower bound {lower} and upper bound {upper} \
         must be finite with lower <= upper"
    )]
    InvalidVulnerabilityBounds { lower: f64, upper: f64 },
    #[error(
        "node '{id}' has vulnerability {value} outside the configured \
         bounds [{lower}, {upper}]"
    )]
    VulnerabilityOutOfBounds {
        id: NodeId,
        value: f64,
        lower: f64,
        upper: f64,
    },
}

/// Special roles a node can hold within a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    /// A node through which simulated compromise may initially enter.
    Entry,
    /// A node whose compromise is weighted specially in reward computation.
    HighValue,
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRole::Entry => f.write_str("entry"),
            NodeRole::HighValue => f.write_str("high-value"),
        }
    }
}

/// An owned graph of [`Node`]s plus the parameters driving its randomized
/// role and vulnerability assignment.
#[derive(Debug, Clone, Default)]
pub struct Network {
    nodes: BTreeMap<NodeId, Node>,
    // Unordered pairs, stored with the smaller id first.
    edges: BTreeSet<(NodeId, NodeId)>,
    pub set_random_entry_nodes: bool,
    pub num_of_random_entry_nodes: usize,
    pub set_random_high_value_nodes: bool,
    pub num_of_random_high_value_nodes: usize,
    pub set_random_vulnerabilities: bool,
    pub vulnerability_lower_bound: f64,
    pub vulnerability_upper_bound: f64,
}

impl Network {
    /// Create an empty network with default vulnerability bounds and all
    /// randomization disabled.
    pub fn new() -> Self {
        Self {
            vulnerability_lower_bound: node::DEFAULT_VULNERABILITY,
            vulnerability_upper_bound: 1.0,
            ..Self::default()
        }
    }

    /// Insert a node, taking ownership of it.
    pub fn add_node(&mut self, node: Node) -> Result<(), NetworkError> {
        if self.nodes.contains_key(node.id()) {
            return Err(NetworkError::DuplicateNode {
                id: node.id().clone(),
            });
        }
        debug!("Adding node '{}' to network", node.id());
        self.nodes.insert(node.id().clone(), node);
        Ok(())
    }

    /// Insert an undirected edge between two member nodes. Re-adding an
    /// existing edge is a no-op.
    pub fn add_edge(&mut self, a: &NodeId, b: &NodeId) -> Result<(), NetworkError> {
        if a == b {
            return Err(NetworkError::InvalidEdge { id: a.clone() });
        }
        for id in [a, b] {
            if !self.nodes.contains_key(id) {
                return Err(NetworkError::UnknownNode { id: id.clone() });
            }
        }
        self.edges.insert(Self::edge_key(a, b));
        Ok(())
    }

    fn edge_key(a: &NodeId, b: &NodeId) -> (NodeId, NodeId) {
        if a <= b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// All member nodes, ordered by id.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All edges as endpoint-sorted id pairs.
    pub fn edges(&self) -> impl Iterator<Item = &(NodeId, NodeId)> {
        self.edges.iter()
    }

    pub fn has_edge(&self, a: &NodeId, b: &NodeId) -> bool {
        self.edges.contains(&Self::edge_key(a, b))
    }

    /// Read-only view of the nodes currently holding `role`.
    pub fn nodes_by_role(&self, role: NodeRole) -> impl Iterator<Item = &Node> {
        self.nodes.values().filter(move |n| match role {
            NodeRole::Entry => n.entry_node,
            NodeRole::HighValue => n.high_value_node,
        })
    }

    pub fn entry_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes_by_role(NodeRole::Entry)
    }

    pub fn high_value_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes_by_role(NodeRole::HighValue)
    }

    /// Re-randomize the entry node set.
    ///
    /// Samples `num_of_random_entry_nodes` distinct nodes without
    /// replacement, excluding nodes currently flagged high-value so the two
    /// role sets stay disjoint. On failure no flags are touched.
    pub fn reset_random_entry_nodes(
        &mut self,
        rng: &mut impl Rng,
    ) -> Result<(), NetworkError> {
        let chosen = self.sample_role_candidates(
            NodeRole::Entry,
            self.num_of_random_entry_nodes,
            rng,
        )?;
        for node in self.nodes.values_mut() {
            node.entry_node = chosen.contains(node.id());
        }
        debug!("Selected {} entry nodes", chosen.len());
        Ok(())
    }

    /// Re-randomize the high-value node set, excluding current entry nodes.
    pub fn reset_random_high_value_nodes(
        &mut self,
        rng: &mut impl Rng,
    ) -> Result<(), NetworkError> {
        let chosen = self.sample_role_candidates(
            NodeRole::HighValue,
            self.num_of_random_high_value_nodes,
            rng,
        )?;
        for node in self.nodes.values_mut() {
            node.high_value_node = chosen.contains(node.id());
        }
        debug!("Selected {} high-value nodes", chosen.len());
        Ok(())
    }

    /// Sample `requested` node ids for `role` from the pool of nodes not
    /// holding the opposite role. Over-constrained pools fail loudly rather
    /// than relaxing disjointness.
    fn sample_role_candidates(
        &self,
        role: NodeRole,
        requested: usize,
        rng: &mut impl Rng,
    ) -> Result<BTreeSet<NodeId>, NetworkError> {
        let pool: Vec<&NodeId> = self
            .nodes
            .values()
            .filter(|n| match role {
                NodeRole::Entry => !n.high_value_node,
                NodeRole::HighValue => !n.entry_node,
            })
            .map(Node::id)
            .collect();
        if requested > pool.len() {
            return Err(NetworkError::InsufficientNodes {
                role,
                requested,
                available: pool.len(),
            });
        }
        Ok(pool
            .choose_multiple(rng, requested)
            .map(|id| (*id).clone())
            .collect())
    }

    /// The configured vulnerability bounds, checked for usability: both
    /// finite, lower not above upper.
    pub fn vulnerability_bounds(&self) -> Result<(f64, f64), NetworkError> {
        let lower = self.vulnerability_lower_bound;
        let upper = self.vulnerability_upper_bound;
        if !lower.is_finite() || !upper.is_finite() || lower > upper {
            return Err(NetworkError::InvalidVulnerabilityBounds { lower, upper });
        }
        Ok((lower, upper))
    }

    /// Assign every node a vulnerability sampled uniformly from the
    /// configured bounds, overwriting previous values unconditionally.
    /// Fails without touching any node if the bounds are unusable.
    pub fn reset_random_vulnerabilities(
        &mut self,
        rng: &mut impl Rng,
    ) -> Result<(), NetworkError> {
        let (lower, upper) = self.vulnerability_bounds()?;
        for node in self.nodes.values_mut() {
            node.vulnerability = rng.gen_range(lower..=upper);
        }
        Ok(())
    }

    /// Run all enabled randomized resets.
    ///
    /// Order is fixed: entry nodes, then high-value nodes, then
    /// vulnerabilities. High-value selection therefore resolves disjointness
    /// against the freshly chosen entry set, deterministically for a given
    /// seed. Each reset fully recomputes its state, so repeated calls do not
    /// drift.
    pub fn reset(&mut self, rng: &mut impl Rng) -> Result<(), NetworkError> {
        if self.set_random_entry_nodes {
            self.reset_random_entry_nodes(rng)?;
        }
        if self.set_random_high_value_nodes {
            self.reset_random_high_value_nodes(rng)?;
        }
        if self.set_random_vulnerabilities {
            self.reset_random_vulnerabilities(rng)?;
        }
        Ok(())
    }

    /// Compute a 2D layout for all nodes.
    ///
    /// Pure presentation. The layout is a deterministic function of the
    /// current graph structure, so calling this twice without a mutation in
    /// between yields identical positions.
    pub fn set_node_positions(&mut self) {
        let ids: Vec<NodeId> = self.nodes.keys().cloned().collect();
        let index_of: BTreeMap<&NodeId, usize> =
            ids.iter().enumerate().map(|(i, id)| (id, i)).collect();
        let edges: Vec<(usize, usize)> = self
            .edges
            .iter()
            .map(|(a, b)| (index_of[a], index_of[b]))
            .collect();
        let positions = layout::force_directed(ids.len(), &edges);
        for (id, position) in ids.iter().zip(positions) {
            if let Some(node) = self.nodes.get_mut(id) {
                node.position = position;
            }
        }
    }
}
