//! Federated scheduler loop for fedsim
//!
//! Gantree: L3_Schedule → Scheduler
//!
//! The main loop that drives every node through its quantum/barrier/
//! synchronization cycle until the federation is done.

use std::collections::HashMap;

use fedsim_core::{FedSimError, FedSimResult, Node, NodeId, Topology};

use crate::barrier_policy::BarrierPolicy;

/// Drives a federation's nodes to completion under one barrier discipline.
///
/// Each iteration computes the smallest time-left among nodes that still
/// have work to do, steps every node (including done and waiting ones, for
/// which the step is a no-op beyond idle host-time accounting) by that
/// amount, then lets the barrier policy release whichever waiting nodes it
/// allows.
/// Gantree: Scheduler // 연합 스케줄러 루프
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduler {
    barrier_policy: BarrierPolicy,
    verbose: bool,
}

impl Scheduler {
    /// A scheduler using the given barrier discipline, with tracing off.
    pub fn new(barrier_policy: BarrierPolicy) -> Self {
        Self {
            barrier_policy,
            verbose: false,
        }
    }

    /// Enable or disable per-iteration state dumps to stdout.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run every node to completion and return the federation's wall-clock
    /// result: the maximum `current_host_ns` across all nodes.
    ///
    /// Every node must already be connected, quantum-seeded, goal-seeded,
    /// and initialized.
    pub fn run(&self, nodes: &mut HashMap<NodeId, Node>, topology: &Topology) -> FedSimResult<u64> {
        let mut iteration = 0usize;

        loop {
            let eligible_time_left: Vec<i64> = nodes
                .values()
                .filter(|n| !n.is_done() && !n.mode().is_waiting())
                .filter_map(|n| n.time_left_ns())
                .collect();

            if eligible_time_left.is_empty() {
                if nodes.values().all(Node::is_done) {
                    break;
                }
                return Err(FedSimError::Deadlock {
                    remaining: nodes.values().filter(|n| !n.is_done()).count(),
                });
            }

            let delta = *eligible_time_left
                .iter()
                .min()
                .expect("eligible_time_left checked non-empty above");
            // A zero-length barrier overhead legitimately yields delta == 0: the
            // node steps straight through synchronization back into its next
            // quantum. Only a negative time-left, which would mean a node's
            // bookkeeping has overrun its mode, is an invariant violation.
            if delta < 0 {
                return Err(FedSimError::Deadlock {
                    remaining: nodes.values().filter(|n| !n.is_done()).count(),
                });
            }
            let delta = delta as u64;

            for node in nodes.values_mut() {
                node.simulate(delta)?;
            }

            self.barrier_policy.update(nodes, topology);

            if self.verbose {
                println!("-- iteration {iteration}: delta={delta}ns --");
                let mut ids: Vec<&NodeId> = nodes.keys().collect();
                ids.sort();
                for id in ids {
                    println!("   {}", nodes[id]);
                }
            }
            iteration += 1;
        }

        Ok(nodes.values().map(Node::current_host_ns).max().unwrap_or(0))
    }
}
