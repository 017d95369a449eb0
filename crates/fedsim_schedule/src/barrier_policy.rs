//! Barrier release disciplines for fedsim
//!
//! Gantree: L3_Schedule → BarrierPolicy
//!
//! Deciding which waiting nodes may advance into synchronization after a
//! scheduler step.

use std::collections::HashMap;

use fedsim_core::{Mode, Node, NodeId, Topology};
use serde::{Deserialize, Serialize};

/// Which discipline governs when a node leaves `Waiting`.
///
/// A node that has already reached its goal is parked in `Waiting`
/// permanently: neither discipline ever releases it, so it neither
/// re-enters the simulate/synchronize cycle nor blocks a neighbor that
/// hasn't finished yet.
/// Gantree: BarrierPolicy // enum, 배리어 해제 규율
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarrierPolicy {
    /// Release every waiting, unfinished node once every unfinished node is
    /// at-barrier (waiting or synchronizing).
    /// Gantree: Global // 전역 배리어
    Global,
    /// Release a waiting node once no unfinished neighbor is still running
    /// a quantum that puts it at or behind this node's target clock.
    /// Gantree: Local // 이웃 배리어
    Local,
}

impl BarrierPolicy {
    /// Re-evaluate every node's barrier status and release whichever ones
    /// this discipline allows. Called once per scheduler iteration, after
    /// every node has been stepped.
    pub fn update(&self, nodes: &mut HashMap<NodeId, Node>, topology: &Topology) {
        match self {
            BarrierPolicy::Global => update_global(nodes),
            BarrierPolicy::Local => update_local(nodes, topology),
        }
    }
}

fn at_barrier(node: &Node) -> bool {
    matches!(node.mode(), Mode::Waiting | Mode::Synchronizing(_))
}

fn update_global(nodes: &mut HashMap<NodeId, Node>) {
    let all_at_barrier = nodes.values().all(|n| n.is_done() || at_barrier(n));
    if !all_at_barrier {
        return;
    }
    for node in nodes.values_mut() {
        if !node.is_done() {
            node.release_from_barrier();
        }
    }
}

fn update_local(nodes: &mut HashMap<NodeId, Node>, topology: &Topology) {
    let to_release: Vec<NodeId> = nodes
        .values()
        .filter(|n| !n.is_done() && n.mode().is_waiting())
        .filter(|n| {
            !topology.neighbors(n.id()).iter().any(|peer_id| {
                nodes.get(peer_id).is_some_and(|peer| {
                    !peer.is_done()
                        && peer.mode().is_running()
                        && peer.current_target_ns() <= n.current_target_ns()
                })
            })
        })
        .map(|n| n.id().to_string())
        .collect();

    for id in to_release {
        if let Some(node) = nodes.get_mut(&id) {
            node.release_from_barrier();
        }
    }
}
