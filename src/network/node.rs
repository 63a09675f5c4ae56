//! Node identity and per-node simulation state.
//!
//! Nodes are created standalone and handed to a [`Network`](crate::network::Network)
//! via `add_node`, which takes ownership. After that point all role and
//! vulnerability state is driven by the network's reset operations; external
//! code only ever sees shared references.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default vulnerability assigned to a freshly created node, before any
/// randomized reset has run.
pub const DEFAULT_VULNERABILITY: f64 = 0.01;

/// Stable unique identifier for a node.
///
/// Fresh nodes receive a random 128-bit hex identity. Nodes rebuilt from a
/// document record keep the id the record carries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    fn random() -> Self {
        let bits: u128 = rand::random();
        Self(format!("{bits:032x}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single vertex in the simulated network.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) name: Option<String>,
    pub(crate) position: (f64, f64),
    pub(crate) vulnerability: f64,
    pub(crate) entry_node: bool,
    pub(crate) high_value_node: bool,
}

impl Node {
    /// Create an anonymous node with a fresh random identity.
    pub fn new() -> Self {
        Self::with_id(NodeId::random())
    }

    /// Create a named node with a fresh random identity.
    pub fn named(name: impl Into<String>) -> Self {
        let mut node = Self::new();
        node.name = Some(name.into());
        node
    }

    /// Create a node carrying an explicit identity, e.g. one taken from a
    /// document record.
    pub fn with_id(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            position: (0.0, 0.0),
            vulnerability: DEFAULT_VULNERABILITY,
            entry_node: false,
            high_value_node: false,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Layout position. Presentation only, carries no simulation meaning.
    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    pub fn vulnerability(&self) -> f64 {
        self.vulnerability
    }

    pub fn is_entry_node(&self) -> bool {
        self.entry_node
    }

    pub fn is_high_value_node(&self) -> bool {
        self.high_value_node
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}
