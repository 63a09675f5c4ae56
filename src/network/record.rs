//! Serialized document representation of a network.
//!
//! This is the shape networks travel in outside the process: a node list,
//! an edge list, and the randomized-generation parameters. Turning a record
//! into a live [`Network`] replays `add_node`/`add_edge`, so untrusted
//! records cannot smuggle in a duplicate node, a dangling edge, or a
//! self-loop.

use serde::{Deserialize, Serialize};

use crate::network::node::DEFAULT_VULNERABILITY;
use crate::network::{Network, NetworkError, Node, NodeId};

/// One node as carried by a network document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub position: (f64, f64),
    #[serde(default = "default_vulnerability")]
    pub vulnerability: f64,
    #[serde(default)]
    pub entry_node: bool,
    #[serde(default)]
    pub high_value_node: bool,
}

fn default_vulnerability() -> f64 {
    DEFAULT_VULNERABILITY
}

/// A complete network document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<(NodeId, NodeId)>,
    #[serde(default)]
    pub set_random_entry_nodes: bool,
    #[serde(default)]
    pub num_of_random_entry_nodes: usize,
    #[serde(default)]
    pub set_random_high_value_nodes: bool,
    #[serde(default)]
    pub num_of_random_high_value_nodes: usize,
    #[serde(default)]
    pub set_random_vulnerabilities: bool,
    #[serde(default = "default_vulnerability")]
    pub vulnerability_lower_bound: f64,
    #[serde(default = "default_upper_bound")]
    pub vulnerability_upper_bound: f64,
}

fn default_upper_bound() -> f64 {
    1.0
}

impl NetworkRecord {
    /// Build a live network from this record, enforcing all structural
    /// invariants along the way: usable vulnerability bounds, every node
    /// vulnerability within them, no duplicate nodes, no dangling or
    /// self-loop edges.
    pub fn into_network(self) -> Result<Network, NetworkError> {
        let mut network = Network::new();
        network.set_random_entry_nodes = self.set_random_entry_nodes;
        network.num_of_random_entry_nodes = self.num_of_random_entry_nodes;
        network.set_random_high_value_nodes = self.set_random_high_value_nodes;
        network.num_of_random_high_value_nodes = self.num_of_random_high_value_nodes;
        network.set_random_vulnerabilities = self.set_random_vulnerabilities;
        network.vulnerability_lower_bound = self.vulnerability_lower_bound;
        network.vulnerability_upper_bound = self.vulnerability_upper_bound;
        let (lower, upper) = network.vulnerability_bounds()?;

        for record in self.nodes {
            if !record.vulnerability.is_finite()
                || !(lower..=upper).contains(&record.vulnerability)
            {
                return Err(NetworkError::VulnerabilityOutOfBounds {
                    id: record.id,
                    value: record.vulnerability,
                    lower,
                    upper,
                });
            }
            let mut node = Node::with_id(record.id);
            node.name = record.name;
            node.position = record.position;
            node.vulnerability = record.vulnerability;
            node.entry_node = record.entry_node;
            node.high_value_node = record.high_value_node;
            network.add_node(node)?;
        }
        for (a, b) in &self.edges {
            network.add_edge(a, b)?;
        }
        Ok(network)
    }

    /// Snapshot a live network back into document form.
    pub fn from_network(network: &Network, name: Option<String>) -> Self {
        Self {
            name,
            nodes: network
                .nodes()
                .map(|node| NodeRecord {
                    id: node.id().clone(),
                    name: node.name().map(str::to_string),
                    position: node.position(),
                    vulnerability: node.vulnerability(),
                    entry_node: node.is_entry_node(),
                    high_value_node: node.is_high_value_node(),
                })
                .collect(),
            edges: network.edges().cloned().collect(),
            set_random_entry_nodes: network.set_random_entry_nodes,
            num_of_random_entry_nodes: network.num_of_random_entry_nodes,
            set_random_high_value_nodes: network.set_random_high_value_nodes,
            num_of_random_high_value_nodes: network.num_of_random_high_value_nodes,
            set_random_vulnerabilities: network.set_random_vulnerabilities,
            vulnerability_lower_bound: network.vulnerability_lower_bound,
            vulnerability_upper_bound: network.vulnerability_upper_bound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD_YAML: &str = r#"
name: "two-node lab"
nodes:
  - id: "a"
    name: "router"
    vulnerability: 0.3
    entry_node: true
  - id: "b"
edges:
  - ["a", "b"]
set_random_entry_nodes: true
num_of_random_entry_nodes: 1
"#;

    #[test]
    fn test_record_instantiates_network() {
        let record: NetworkRecord = serde_yaml::from_str(RECORD_YAML).unwrap();
        let network = record.into_network().unwrap();
        assert_eq!(network.node_count(), 2);
        assert_eq!(network.edges().count(), 1);
        assert!(network.set_random_entry_nodes);
        assert_eq!(network.num_of_random_entry_nodes, 1);

        let a = network.get_node(&NodeId::from("a")).unwrap();
        assert_eq!(a.name(), Some("router"));
        assert_eq!(a.vulnerability(), 0.3);
        assert!(a.is_entry_node());

        // Omitted fields fall back to defaults.
        let b = network.get_node(&NodeId::from("b")).unwrap();
        assert_eq!(b.vulnerability(), DEFAULT_VULNERABILITY);
        assert!(!b.is_entry_node());
    }

    #[test]
    fn test_record_with_dangling_edge_is_rejected() {
        let mut record: NetworkRecord = serde_yaml::from_str(RECORD_YAML).unwrap();
        record.edges.push((NodeId::from("a"), NodeId::from("ghost")));
        let err = record.into_network().unwrap_err();
        assert!(matches!(err, NetworkError::UnknownNode { .. }));
    }

    #[test]
    fn test_record_with_duplicate_node_is_rejected() {
        let mut record: NetworkRecord = serde_yaml::from_str(RECORD_YAML).unwrap();
        record.nodes.push(record.nodes[0].clone());
        let err = record.into_network().unwrap_err();
        assert!(matches!(err, NetworkError::DuplicateNode { .. }));
    }

    #[test]
    fn test_record_with_inverted_bounds_is_rejected() {
        let mut record: NetworkRecord = serde_yaml::from_str(RECORD_YAML).unwrap();
        record.vulnerability_lower_bound = 0.9;
        record.vulnerability_upper_bound = 0.1;
        let err = record.into_network().unwrap_err();
        match err {
            NetworkError::InvalidVulnerabilityBounds { lower, upper } => {
                assert_eq!(lower, 0.9);
                assert_eq!(upper, 0.1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_record_with_inverted_bounds_never_reaches_reset() {
        // The full episode pipeline on a hostile record must surface a
        // typed error at instantiation, not fail later inside a reset.
        let mut record: NetworkRecord = serde_yaml::from_str(RECORD_YAML).unwrap();
        record.set_random_vulnerabilities = true;
        record.vulnerability_lower_bound = 0.9;
        record.vulnerability_upper_bound = 0.1;
        assert!(matches!(
            record.into_network(),
            Err(NetworkError::InvalidVulnerabilityBounds { .. })
        ));
    }

    #[test]
    fn test_record_with_out_of_bounds_vulnerability_is_rejected() {
        let mut record: NetworkRecord = serde_yaml::from_str(RECORD_YAML).unwrap();
        record.nodes[1].vulnerability = 7.5;
        let err = record.into_network().unwrap_err();
        match &err {
            NetworkError::VulnerabilityOutOfBounds { id, value, .. } => {
                assert_eq!(id, &NodeId::from("b"));
                assert_eq!(*value, 7.5);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("'b'"));
    }

    #[test]
    fn test_record_with_non_finite_vulnerability_is_rejected() {
        let mut record: NetworkRecord = serde_yaml::from_str(RECORD_YAML).unwrap();
        record.nodes[0].vulnerability = f64::NAN;
        assert!(matches!(
            record.into_network(),
            Err(NetworkError::VulnerabilityOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_round_trip_preserves_structure() {
        let record: NetworkRecord = serde_yaml::from_str(RECORD_YAML).unwrap();
        let network = record.into_network().unwrap();
        let back = NetworkRecord::from_network(&network, Some("two-node lab".into()));
        assert_eq!(back.nodes.len(), 2);
        assert_eq!(back.edges.len(), 1);
        assert_eq!(back.name.as_deref(), Some("two-node lab"));

        let json = serde_json::to_string(&back).unwrap();
        let reparsed: NetworkRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(reparsed.nodes.len(), 2);
    }
}
