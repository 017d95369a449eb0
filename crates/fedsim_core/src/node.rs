//! Simulation node for fedsim
//!
//! Gantree: L1_NodeModel → Node
//!
//! The state machine spec'd for a single participant in a federation (a
//! QEMU/gem5-style instance, or a stand-in for one).

use crate::constants::{DEFAULT_INSTRUCTION_PER_CYCLE, DEFAULT_MACHINE_CYCLE_PER_NS};
use crate::error::{FedSimError, FedSimResult};
use crate::mode::{BarrierExecution, Mode, QuantaExecution};
use crate::types::{Goal, NodeId};
use std::fmt;

/// Host nanoseconds needed to simulate one target nanosecond, given the
/// node's instruction rate and its configured simulation speed.
///
/// `ceil((instruction_per_ns / simulation_speed_ips) * 1e9)`
/// Gantree: host_ns_per_target_ns(ipn,ips) -> u64 // 호스트/타겟 변환
#[inline]
pub fn host_ns_per_target_ns(instruction_per_ns: f64, simulation_speed_ips: f64) -> u64 {
    (instruction_per_ns / simulation_speed_ips * 1e9).ceil() as u64
}

/// Strategy hook for turning a quantum into host nanoseconds and for
/// resolving a node's barrier overhead.
///
/// Declared here (rather than in the rate-model crate) so `Node` can hold a
/// trait object without creating a dependency cycle. `fedsim_rate` supplies
/// the concrete implementations.
/// Gantree: NodeRateModel // trait, 변환 전략 훅
pub trait NodeRateModel: fmt::Debug {
    /// Host nanoseconds required to execute a quantum of the given length,
    /// for a node with the given instruction rate and simulation speed.
    /// Implementations may perturb the noise-free value and must advance
    /// any internal noise cursor by exactly one step per call.
    fn quantum_to_host_ns(
        &mut self,
        quanta_ns: u64,
        instruction_per_ns: f64,
        simulation_speed_ips: f64,
    ) -> u64;

    /// Resolve `(communication_overhead_ns, synchronization_overhead_ns)`
    /// given the noise-free host length of one quantum.
    fn barrier_overhead(&self, noise_free_quantum_host_ns: u64) -> (u64, u64);
}

/// A participant in a federation: a simulated hardware instance with its
/// own clock, quantum length, and barrier-overhead behavior.
/// Gantree: Node // 노드 상태 기계
#[derive(Debug)]
pub struct Node {
    id: NodeId,
    simulation_speed_ips: f64,
    machine_cycle_per_ns: f64,
    machine_instruction_per_cycle: f64,
    manages_quanta: bool,
    quanta_ns: Option<u64>,
    current_host_ns: u64,
    current_target_ns: u64,
    instructions_executed: u64,
    goal: Option<Goal>,
    neighbors: Vec<NodeId>,
    mode: Mode,
    initialized: bool,
    rate_model: Box<dyn NodeRateModel + Send>,
}

impl Node {
    /// Create a node with the default machine profile (2 GHz, 2 IPC).
    pub fn new(
        id: impl Into<NodeId>,
        simulation_speed_ips: f64,
        manages_quanta: bool,
        rate_model: Box<dyn NodeRateModel + Send>,
    ) -> Self {
        Self {
            id: id.into(),
            simulation_speed_ips,
            machine_cycle_per_ns: DEFAULT_MACHINE_CYCLE_PER_NS,
            machine_instruction_per_cycle: DEFAULT_INSTRUCTION_PER_CYCLE,
            manages_quanta,
            quanta_ns: None,
            current_host_ns: 0,
            current_target_ns: 0,
            instructions_executed: 0,
            goal: None,
            neighbors: Vec::new(),
            mode: Mode::Waiting,
            initialized: false,
            rate_model,
        }
    }

    /// Override the default machine profile (cycle rate and IPC).
    pub fn with_machine_profile(mut self, machine_cycle_per_ns: f64, instruction_per_cycle: f64) -> Self {
        self.machine_cycle_per_ns = machine_cycle_per_ns;
        self.machine_instruction_per_cycle = instruction_per_cycle;
        self
    }

    /// This node's id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether this node manages its own quanta (only meaningful when the
    /// federation is distributed).
    pub fn manages_quanta(&self) -> bool {
        self.manages_quanta
    }

    /// Host nanoseconds simulated so far across the whole run.
    pub fn current_host_ns(&self) -> u64 {
        self.current_host_ns
    }

    /// Target-clock nanoseconds this node has advanced through so far.
    pub fn current_target_ns(&self) -> u64 {
        self.current_target_ns
    }

    /// Target instructions retired so far.
    pub fn instructions_executed(&self) -> u64 {
        self.instructions_executed
    }

    /// This node's current mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Ids of the nodes this node is connected to.
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// This node's configured quantum length, if set.
    pub fn quanta_ns(&self) -> Option<u64> {
        self.quanta_ns
    }

    /// Machine instructions retired per host nanosecond.
    pub fn instruction_per_ns(&self) -> f64 {
        self.machine_cycle_per_ns * self.machine_instruction_per_cycle
    }

    /// Target instructions a quantum of the given length represents.
    pub fn instructions_per_quantum(&self, quanta_ns: u64) -> u64 {
        (self.instruction_per_ns() * quanta_ns as f64).round() as u64
    }

    /// Set this node's quantum length. Must be greater than zero.
    pub fn set_quanta_ns(&mut self, quanta_ns: u64) -> FedSimResult<()> {
        if quanta_ns == 0 {
            return Err(FedSimError::QuantaMustBePositive {
                node: self.id.clone(),
                value: 0,
            });
        }
        self.quanta_ns = Some(quanta_ns);
        Ok(())
    }

    /// Register a neighboring node. Idempotent.
    pub fn connect(&mut self, peer: NodeId) {
        if !self.neighbors.contains(&peer) {
            self.neighbors.push(peer);
        }
    }

    /// Set the stopping condition for the next run, resetting progress
    /// counters so the same node can be reused across successive runs.
    pub fn set_goal(&mut self, goal: Goal) {
        self.goal = Some(goal);
        self.instructions_executed = 0;
        self.current_target_ns = 0;
    }

    /// Whether this node has reached its configured goal. A node with no
    /// goal set is never done.
    pub fn is_done(&self) -> bool {
        match &self.goal {
            Some(goal) => goal.is_met(self.instructions_executed, self.current_target_ns),
            None => false,
        }
    }

    /// Move this node into its initial running quantum. Must be called
    /// exactly once, after `set_quanta_ns`, before `simulate`.
    pub fn initialize(&mut self) -> FedSimResult<()> {
        let quanta_ns = self.quanta_ns.ok_or_else(|| FedSimError::QuantaMustBePositive {
            node: self.id.clone(),
            value: 0,
        })?;
        self.enter_running(quanta_ns);
        self.initialized = true;
        Ok(())
    }

    /// Host nanoseconds remaining in the current mode; `None` while waiting
    /// on the barrier (there is nothing to simulate until it is released).
    pub fn time_left_ns(&self) -> Option<i64> {
        self.mode.time_left_ns()
    }

    /// Release this node from `Waiting` into `Synchronizing`.
    pub fn release_from_barrier(&mut self) {
        if self.mode.is_waiting() {
            self.enter_synchronizing();
        }
    }

    /// Advance this node's clock by `delta_ns` host nanoseconds.
    ///
    /// `delta_ns` must not exceed the time left in the node's current mode;
    /// the federated scheduler guarantees this by always stepping every
    /// node by the minimum time-left across the federation.
    pub fn simulate(&mut self, delta_ns: u64) -> FedSimResult<()> {
        if !self.initialized {
            return Err(FedSimError::NotInitialized(self.id.clone()));
        }

        if let Some(time_left) = self.mode.time_left_ns() {
            if (delta_ns as i64) > time_left {
                return Err(FedSimError::OverrunCurrentMode {
                    node: self.id.clone(),
                    requested: delta_ns,
                    available: time_left,
                });
            }
            match &mut self.mode {
                Mode::Running(q) => q.time_executed_ns += delta_ns,
                Mode::Synchronizing(b) => b.time_executed_ns += delta_ns,
                Mode::Waiting => unreachable!("Waiting carries no time-left"),
            }
        }

        self.current_host_ns += delta_ns;

        if let Mode::Running(q) = &self.mode {
            if q.time_left_ns() <= 0 {
                let instructions = q.instructions;
                let quanta_ns = self.quanta_ns.expect("initialized node always has quanta set");
                self.current_target_ns += quanta_ns;
                self.instructions_executed += instructions;
                self.mode = Mode::Waiting;
            }
        } else if let Mode::Synchronizing(b) = &self.mode {
            if b.time_left_ns() <= 0 {
                let quanta_ns = self.quanta_ns.expect("initialized node always has quanta set");
                self.enter_running(quanta_ns);
            }
        }

        Ok(())
    }

    fn enter_running(&mut self, quanta_ns: u64) {
        let instruction_per_ns = self.instruction_per_ns();
        let host_length_ns =
            self.rate_model
                .quantum_to_host_ns(quanta_ns, instruction_per_ns, self.simulation_speed_ips);
        let instructions = self.instructions_per_quantum(quanta_ns);
        self.mode = Mode::Running(QuantaExecution {
            host_length_ns,
            instructions,
            time_executed_ns: 0,
        });
    }

    fn enter_synchronizing(&mut self) {
        let quanta_ns = self.quanta_ns.unwrap_or(0);
        let noise_free_host_ns =
            host_ns_per_target_ns(self.instruction_per_ns(), self.simulation_speed_ips)
                .saturating_mul(quanta_ns);
        let (communication_overhead_ns, synchronization_overhead_ns) =
            self.rate_model.barrier_overhead(noise_free_host_ns);
        self.mode = Mode::Synchronizing(BarrierExecution {
            communication_overhead_ns,
            synchronization_overhead_ns,
            time_executed_ns: 0,
        });
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node({}, mode={:?}, host_ns={}, target_ns={})",
            self.id, self.mode, self.current_host_ns, self.current_target_ns
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct NoOpRateModel;

    impl NodeRateModel for NoOpRateModel {
        fn quantum_to_host_ns(&mut self, quanta_ns: u64, ipn: f64, ips: f64) -> u64 {
            host_ns_per_target_ns(ipn, ips) * quanta_ns
        }

        fn barrier_overhead(&self, _noise_free_quantum_host_ns: u64) -> (u64, u64) {
            (0, 0)
        }
    }

    fn make_node(ips: f64) -> Node {
        Node::new("n0", ips, false, Box::new(NoOpRateModel))
    }

    #[test]
    fn test_host_ns_per_target_ns() {
        // instruction_per_ns = 10 (default profile), ips = 1e9 -> 10 host ns/target ns
        assert_eq!(host_ns_per_target_ns(10.0, 1e9), 10);
    }

    #[test]
    fn test_initialize_requires_quanta() {
        let mut node = make_node(1e9);
        assert!(node.initialize().is_err());
        node.set_quanta_ns(100).unwrap();
        assert!(node.initialize().is_ok());
        assert!(node.mode().is_running());
    }

    #[test]
    fn test_quanta_must_be_positive() {
        let mut node = make_node(1e9);
        assert!(node.set_quanta_ns(0).is_err());
    }

    #[test]
    fn test_is_done_with_no_goal() {
        let node = make_node(1e9);
        assert!(!node.is_done());
    }

    #[test]
    fn test_full_quantum_transitions_to_waiting() {
        let mut node = make_node(1e9);
        node.set_quanta_ns(100).unwrap();
        node.initialize().unwrap();
        let host_len = node.time_left_ns().unwrap() as u64;
        node.simulate(host_len).unwrap();
        assert!(node.mode().is_waiting());
        assert_eq!(node.current_target_ns(), 100);
    }

    #[test]
    fn test_release_from_barrier_enters_synchronizing() {
        let mut node = make_node(1e9);
        node.set_quanta_ns(100).unwrap();
        node.initialize().unwrap();
        let host_len = node.time_left_ns().unwrap() as u64;
        node.simulate(host_len).unwrap();
        node.release_from_barrier();
        assert!(matches!(node.mode(), Mode::Synchronizing(_)));
    }

    #[test]
    fn test_simulate_before_initialize_fails() {
        let mut node = make_node(1e9);
        assert!(matches!(
            node.simulate(10),
            Err(FedSimError::NotInitialized(_))
        ));
    }

    #[test]
    fn test_overrun_current_mode_is_an_error() {
        let mut node = make_node(1e9);
        node.set_quanta_ns(100).unwrap();
        node.initialize().unwrap();
        let host_len = node.time_left_ns().unwrap() as u64;
        assert!(matches!(
            node.simulate(host_len + 1),
            Err(FedSimError::OverrunCurrentMode { .. })
        ));
    }

    #[test]
    fn test_goal_instructions() {
        let mut node = make_node(1e9);
        node.set_quanta_ns(100).unwrap();
        node.set_goal(Goal::Instructions(5));
        node.initialize().unwrap();
        assert!(!node.is_done());
        let instructions = node.instructions_per_quantum(100);
        let host_len = node.time_left_ns().unwrap() as u64;
        node.simulate(host_len).unwrap();
        assert_eq!(node.is_done(), instructions >= 5);
    }
}
