//! Federation construction for fedsim
//!
//! Gantree: L4_Integration → Federation
//!
//! Wiring nodes into a topology, deriving quanta, and validating the
//! configuration before any simulation runs.

use std::collections::{HashMap, HashSet};

use fedsim_core::{FedSimError, FedSimResult, Node, NodeId, Topology};

use crate::config::{FederationConfig, QuantaPolicy};
use crate::master::MasterNode;

/// A fully wired, validated federation of nodes, ready to be driven by a
/// run driver.
/// Gantree: Federation // 연합 구성/검증
pub struct Federation {
    nodes: HashMap<NodeId, Node>,
    topology: Topology,
    config: FederationConfig,
    #[allow(dead_code)]
    master: Option<MasterNode>,
}

impl Federation {
    /// Construct a federation from its nodes, the edges connecting them
    /// (`(a, b, latency_ns)`), and a master node handle (required unless
    /// `config.is_distributed`).
    ///
    /// Performs every construction-time validation: unique node ids, a
    /// master node iff non-distributed, no `manages_quanta` node under
    /// non-distributed, a positive global quantum when configured globally,
    /// positive edge latencies, and quantum assignment by `config`'s
    /// [`QuantaPolicy`]. Every node is connected and initialized on success.
    pub fn new(
        config: FederationConfig,
        nodes: Vec<Node>,
        edges: Vec<(NodeId, NodeId, u64)>,
        master: Option<MasterNode>,
    ) -> FedSimResult<Self> {
        config.validate()?;

        let mut seen_ids = HashSet::new();
        for node in &nodes {
            if !seen_ids.insert(node.id().to_string()) {
                return Err(FedSimError::DuplicateNodeId(node.id().to_string()));
            }
        }

        if !config.is_distributed {
            if master.is_none() {
                return Err(FedSimError::MissingMaster);
            }
            for node in &nodes {
                if node.manages_quanta() {
                    return Err(FedSimError::ManagesQuantaInNonDistributed(
                        node.id().to_string(),
                    ));
                }
            }
        }

        let node_ids: Vec<NodeId> = nodes.iter().map(|n| n.id().to_string()).collect();
        let topology = Topology::from_edges(node_ids, edges.clone())?;

        let mut nodes: HashMap<NodeId, Node> =
            nodes.into_iter().map(|n| (n.id().to_string(), n)).collect();

        for (a, b, _) in &edges {
            nodes.get_mut(a).expect("validated above").connect(b.clone());
            nodes.get_mut(b).expect("validated above").connect(a.clone());
        }

        match config.quanta_policy {
            QuantaPolicy::Global(quanta_ns) => {
                for node in nodes.values_mut() {
                    node.set_quanta_ns(quanta_ns)?;
                }
            }
            QuantaPolicy::LinkDerived => {
                let derived: Vec<(NodeId, u64)> = nodes
                    .keys()
                    .map(|id| {
                        let quanta_ns = topology.min_incident_latency_ns(id).ok_or_else(|| {
                            FedSimError::QuantaMustBePositive {
                                node: id.clone(),
                                value: 0,
                            }
                        })?;
                        Ok((id.clone(), quanta_ns))
                    })
                    .collect::<FedSimResult<Vec<_>>>()?;
                for (id, quanta_ns) in derived {
                    nodes.get_mut(&id).expect("known id").set_quanta_ns(quanta_ns)?;
                }
            }
        }

        for node in nodes.values_mut() {
            node.initialize()?;
        }

        Ok(Self {
            nodes,
            topology,
            config,
            master,
        })
    }

    /// This federation's nodes, keyed by id.
    pub fn nodes(&self) -> &HashMap<NodeId, Node> {
        &self.nodes
    }

    /// Mutable access to this federation's nodes, for run drivers.
    pub fn nodes_mut(&mut self) -> &mut HashMap<NodeId, Node> {
        &mut self.nodes
    }

    /// This federation's topology.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// This federation's configuration.
    pub fn config(&self) -> &FederationConfig {
        &self.config
    }
}
