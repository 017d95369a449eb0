//! Run drivers for fedsim
//!
//! Gantree: L4_Integration → Run
//!
//! Translate a user-facing goal into a per-node stopping predicate and hand
//! the federation to the scheduler.

use fedsim_core::{FedSimError, FedSimResult, Goal};
use fedsim_schedule::Scheduler;

use crate::federation::Federation;

/// Run every node in `federation` until each has executed at least
/// `target_instructions` target instructions.
///
/// Returns the federation's wall-clock result: the maximum
/// `current_host_ns` across all nodes once every node is done.
/// Gantree: simulate_for_instructions(federation,target) -> u64 // 명령어 목표 실행
pub fn simulate_for_instructions(
    federation: &mut Federation,
    target_instructions: u64,
) -> FedSimResult<u64> {
    seed_goal(federation, Goal::Instructions(target_instructions));
    run(federation)
}

/// Run every node in `federation` until each has advanced its target clock
/// to at least `target_ns`.
///
/// Returns the federation's wall-clock result: the maximum
/// `current_host_ns` across all nodes once every node is done.
/// Gantree: simulate_for_target_ns(federation,target_ns) -> u64 // 타겟 시간 목표 실행
pub fn simulate_for_target_ns(federation: &mut Federation, target_ns: u64) -> FedSimResult<u64> {
    seed_goal(federation, Goal::TargetNs(target_ns));
    run(federation)
}

fn seed_goal(federation: &mut Federation, goal: Goal) {
    for node in federation.nodes_mut().values_mut() {
        node.set_goal(goal);
    }
}

fn run(federation: &mut Federation) -> FedSimResult<u64> {
    if federation.config().is_distributed {
        return Err(FedSimError::NotImplemented(
            "distributed (networked) scheduling is not implemented; run with is_distributed = false".to_string(),
        ));
    }

    let scheduler =
        Scheduler::new(federation.config().barrier_policy).with_verbose(federation.config().verbose);
    scheduler.run(federation.nodes_mut(), federation.topology())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FederationConfig;
    use crate::master::MasterNode;
    use fedsim_core::Node;
    use fedsim_rate::BaseRateModel;

    fn node(id: &str, ips: f64) -> Node {
        Node::new(id, ips, false, Box::new(BaseRateModel::fixed_sync(1_000)))
    }

    #[test]
    fn test_simulate_for_instructions_completes_every_node() {
        let nodes = vec![node("a", 5e6), node("b", 5e6)];
        let edges = vec![("a".to_string(), "b".to_string(), 500)];
        let config = FederationConfig::global_barrier(500);
        let mut federation =
            Federation::new(config, nodes, edges, Some(MasterNode::new("m"))).unwrap();

        let result = simulate_for_instructions(&mut federation, 5_000).unwrap();

        assert!(result > 0);
        for node in federation.nodes().values() {
            assert!(node.is_done());
        }
    }

    #[test]
    fn test_simulate_for_target_ns_completes_every_node() {
        let nodes = vec![node("a", 5e8)];
        let config = FederationConfig::global_barrier(100);
        let mut federation =
            Federation::new(config, nodes, vec![], Some(MasterNode::new("m"))).unwrap();

        simulate_for_target_ns(&mut federation, 1_000).unwrap();

        assert!(federation.nodes()["a"].current_target_ns() >= 1_000);
    }

    #[test]
    fn test_distributed_mode_is_not_implemented() {
        let nodes = vec![node("a", 5e8)];
        let config = FederationConfig::global_barrier(100).with_distributed(true);
        let mut federation = Federation::new(config, nodes, vec![], None).unwrap();

        let err = simulate_for_target_ns(&mut federation, 1_000).unwrap_err();
        assert!(err.is_unimplemented());
    }
}
