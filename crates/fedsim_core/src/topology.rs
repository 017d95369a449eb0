//! Connectivity graph for fedsim
//!
//! Gantree: L1_NodeModel → Topology
//!
//! The latency-weighted connectivity graph a federation runs over.

use crate::error::{FedSimError, FedSimResult};
use crate::types::NodeId;
use std::collections::{HashMap, HashSet, VecDeque};

/// A federation's connectivity graph: which nodes exist, which pairs are
/// connected, and the latency (in nanoseconds) assigned to each edge.
///
/// Edges are undirected: `latency_ns(a, b) == latency_ns(b, a)`.
/// Gantree: Topology // 지연시간 그래프
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    node_ids: Vec<NodeId>,
    adjacency: HashMap<NodeId, Vec<NodeId>>,
    latencies: HashMap<(NodeId, NodeId), u64>,
    name: Option<String>,
}

impl Topology {
    /// Build a topology from an explicit node list and a set of
    /// `(a, b, latency_ns)` edges. Every edge's nodes must already appear in
    /// `node_ids`, and latency must be greater than zero.
    pub fn from_edges(
        node_ids: Vec<NodeId>,
        edges: Vec<(NodeId, NodeId, u64)>,
    ) -> FedSimResult<Self> {
        let known: HashSet<&NodeId> = node_ids.iter().collect();
        let mut adjacency: HashMap<NodeId, Vec<NodeId>> =
            node_ids.iter().map(|id| (id.clone(), Vec::new())).collect();
        let mut latencies = HashMap::new();

        for (a, b, latency_ns) in edges {
            if !known.contains(&a) {
                return Err(FedSimError::UnknownNodeId(a));
            }
            if !known.contains(&b) {
                return Err(FedSimError::UnknownNodeId(b));
            }
            if latency_ns == 0 {
                return Err(FedSimError::LatencyMustBePositive {
                    a,
                    b,
                    value: 0,
                });
            }

            adjacency.entry(a.clone()).or_default().push(b.clone());
            adjacency.entry(b.clone()).or_default().push(a.clone());
            latencies.insert((a.clone(), b.clone()), latency_ns);
            latencies.insert((b, a), latency_ns);
        }

        Ok(Self {
            node_ids,
            adjacency,
            latencies,
            name: None,
        })
    }

    /// Build a linear chain `node_ids[0] - node_ids[1] - ... - node_ids[n-1]`
    /// with a uniform per-edge latency.
    pub fn linear(node_ids: Vec<NodeId>, latency_ns: u64) -> FedSimResult<Self> {
        let edges = node_ids
            .windows(2)
            .map(|w| (w[0].clone(), w[1].clone(), latency_ns))
            .collect();
        let mut topo = Self::from_edges(node_ids, edges)?;
        topo.name = Some("linear".to_string());
        Ok(topo)
    }

    /// Build a ring `node_ids[0] - node_ids[1] - ... - node_ids[n-1] - node_ids[0]`
    /// with a uniform per-edge latency.
    pub fn ring(node_ids: Vec<NodeId>, latency_ns: u64) -> FedSimResult<Self> {
        let mut edges: Vec<(NodeId, NodeId, u64)> = node_ids
            .windows(2)
            .map(|w| (w[0].clone(), w[1].clone(), latency_ns))
            .collect();
        if node_ids.len() > 1 {
            edges.push((
                node_ids[node_ids.len() - 1].clone(),
                node_ids[0].clone(),
                latency_ns,
            ));
        }
        let mut topo = Self::from_edges(node_ids, edges)?;
        topo.name = Some("ring".to_string());
        Ok(topo)
    }

    /// Build a fully connected mesh with a uniform per-edge latency.
    pub fn all_to_all(node_ids: Vec<NodeId>, latency_ns: u64) -> FedSimResult<Self> {
        let mut edges = Vec::new();
        for i in 0..node_ids.len() {
            for j in (i + 1)..node_ids.len() {
                edges.push((node_ids[i].clone(), node_ids[j].clone(), latency_ns));
            }
        }
        let mut topo = Self::from_edges(node_ids, edges)?;
        topo.name = Some("all_to_all".to_string());
        Ok(topo)
    }

    /// Set a human-readable name for telemetry.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// All node ids known to this topology.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.node_ids
    }

    /// Ids of the nodes directly connected to `id`.
    pub fn neighbors(&self, id: &str) -> &[NodeId] {
        self.adjacency
            .get(id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Number of direct neighbors of `id`.
    pub fn degree(&self, id: &str) -> usize {
        self.neighbors(id).len()
    }

    /// Latency in nanoseconds of the edge between `a` and `b`, if one exists.
    pub fn latency_ns(&self, a: &str, b: &str) -> Option<u64> {
        self.latencies.get(&(a.to_string(), b.to_string())).copied()
    }

    /// The minimum latency across all edges incident to `id`, used to seed
    /// a node's per-edge-minimum quantum length. `None` if `id` has no edges.
    pub fn min_incident_latency_ns(&self, id: &str) -> Option<u64> {
        self.neighbors(id)
            .iter()
            .filter_map(|n| self.latency_ns(id, n))
            .min()
    }

    /// Whether every node is reachable from every other node.
    pub fn is_connected_graph(&self) -> bool {
        let Some(start) = self.node_ids.first() else {
            return true;
        };

        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue = VecDeque::new();
        visited.insert(start.as_str());
        queue.push_back(start.as_str());

        while let Some(current) = queue.pop_front() {
            for neighbor in self.neighbors(current) {
                if visited.insert(neighbor.as_str()) {
                    queue.push_back(neighbor.as_str());
                }
            }
        }

        visited.len() == self.node_ids.len()
    }
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Topology({} nodes, {} edges{})",
            self.node_ids.len(),
            self.latencies.len() / 2,
            self.name
                .as_ref()
                .map(|n| format!(", {}", n))
                .unwrap_or_default()
        )
    }
}
