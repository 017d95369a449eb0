//! Scenario generators for benchmarking
//!
//! Gantree: L8_Benchmark → Generators
//!
//! Provides node and topology generators for federation benchmarks,
//! standing in for the historical QEMU / noisy-QEMU / gem5 node hierarchy
//! with presets built on the shared [`Node`] + [`NodeRateModel`] strategy.

use fedsim_core::Node;
use fedsim_rate::{BaseRateModel, NoiseSequence, NoisyRateModel};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Scenario generator for benchmarks
/// Gantree: ScenarioGenerator // 시나리오 생성기
pub struct ScenarioGenerator {
    /// Random seed
    seed: Option<u64>,
}

impl ScenarioGenerator {
    /// Create new generator
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Create generator with seed
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    // ========================================================================
    // Node Presets
    // ========================================================================

    /// A QEMU-style node: fast instruction rate, cheap per-barrier
    /// synchronization overhead, no communication overhead.
    pub fn qemu_style(&self, id: &str, simulation_speed_ips: f64) -> Node {
        Node::new(id, simulation_speed_ips, false, Box::new(BaseRateModel::fixed_sync(1_000)))
    }

    /// A QEMU-style node whose quantum length is perturbed by a cyclic
    /// sequence of recorded jitter factors, in the style of the historical
    /// pre-recorded-noise QEMU variant.
    pub fn noisy_qemu_style(&self, id: &str, simulation_speed_ips: f64, noise_factors: Vec<f64>) -> Node {
        let base = BaseRateModel::fixed_sync(1_000);
        let noise = NoiseSequence::new(noise_factors).expect("valid noise factors");
        Node::new(id, simulation_speed_ips, false, Box::new(NoisyRateModel::new(base, noise)))
    }

    /// A QEMU-style node whose jitter is drawn from this generator's RNG
    /// rather than an explicit sequence, covering the common "just add some
    /// noise" benchmark case.
    pub fn random_noisy_qemu_style(
        &self,
        id: &str,
        simulation_speed_ips: f64,
        jitter_points: usize,
        jitter_amplitude: f64,
    ) -> Node {
        let mut rng = self.get_rng();
        let factors: Vec<f64> = (0..jitter_points.max(1))
            .map(|_| rng.gen_range(-jitter_amplitude..jitter_amplitude))
            .collect();
        self.noisy_qemu_style(id, simulation_speed_ips, factors)
    }

    /// A gem5-style node: slower instruction rate than a QEMU-style node,
    /// and a heavier synchronization overhead reflecting gem5's
    /// cycle-accurate modeling cost.
    pub fn gem5_style(&self, id: &str, simulation_speed_ips: f64, synchronization_overhead_ns: u64) -> Node {
        Node::new(
            id,
            simulation_speed_ips,
            false,
            Box::new(BaseRateModel::fixed_sync(synchronization_overhead_ns)),
        )
    }

    // ========================================================================
    // Topology Generators
    // ========================================================================

    /// A pair of identical nodes joined by a single link, the S1-style
    /// two-node scenario.
    pub fn node_pair(
        &self,
        ips: f64,
        synchronization_overhead_ns: u64,
        latency_ns: u64,
    ) -> (Vec<Node>, Vec<(String, String, u64)>) {
        let nodes = vec![
            self.gem5_style("a", ips, synchronization_overhead_ns),
            self.gem5_style("b", ips, synchronization_overhead_ns),
        ];
        let edges = vec![("a".to_string(), "b".to_string(), latency_ns)];
        (nodes, edges)
    }

    /// `num_nodes` nodes in a line, each joined to its neighbor by a link of
    /// `latency_ns`, the S2/S5-style chain scenario.
    pub fn line(
        &self,
        num_nodes: usize,
        ips: f64,
        synchronization_overhead_ns: u64,
        latency_ns: u64,
    ) -> (Vec<Node>, Vec<(String, String, u64)>) {
        let ids: Vec<String> = (0..num_nodes).map(|i| format!("n{i}")).collect();
        let nodes = ids
            .iter()
            .map(|id| self.gem5_style(id, ips, synchronization_overhead_ns))
            .collect();
        let edges = ids
            .windows(2)
            .map(|pair| (pair[0].clone(), pair[1].clone(), latency_ns))
            .collect();
        (nodes, edges)
    }

    /// `num_nodes` fully-connected nodes, the S3-style gem5 mesh scenario.
    /// Synchronization overhead scales with the square of the federation
    /// size, mirroring an all-to-all barrier's cost.
    pub fn fully_connected_mesh(
        &self,
        num_nodes: usize,
        ips: f64,
        latency_ns: u64,
    ) -> (Vec<Node>, Vec<(String, String, u64)>) {
        let synchronization_overhead_ns = (num_nodes * num_nodes) as u64 * 5_000;
        let ids: Vec<String> = (0..num_nodes).map(|i| format!("n{i}")).collect();
        let nodes = ids
            .iter()
            .map(|id| self.gem5_style(id, ips, synchronization_overhead_ns))
            .collect();

        let mut edges = Vec::new();
        for i in 0..num_nodes {
            for j in (i + 1)..num_nodes {
                edges.push((ids[i].clone(), ids[j].clone(), latency_ns));
            }
        }
        (nodes, edges)
    }

    // ========================================================================
    // Utility
    // ========================================================================

    /// Get RNG with optional seed
    fn get_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for ScenarioGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qemu_style_node() {
        let gen = ScenarioGenerator::new();
        let node = gen.qemu_style("a", 5e6);
        assert_eq!(node.id(), "a");
    }

    #[test]
    fn test_noisy_qemu_style_accepts_explicit_factors() {
        let gen = ScenarioGenerator::new();
        let node = gen.noisy_qemu_style("a", 5e6, vec![0.1, -0.1]);
        assert_eq!(node.id(), "a");
    }

    #[test]
    fn test_random_noisy_qemu_style_is_reproducible_with_seed() {
        let gen1 = ScenarioGenerator::with_seed(42);
        let gen2 = ScenarioGenerator::with_seed(42);

        let n1 = gen1.random_noisy_qemu_style("a", 5e6, 5, 0.2);
        let n2 = gen2.random_noisy_qemu_style("a", 5e6, 5, 0.2);
        assert_eq!(n1.id(), n2.id());
    }

    #[test]
    fn test_node_pair() {
        let gen = ScenarioGenerator::new();
        let (nodes, edges) = gen.node_pair(5e6, 1_000, 500);

        assert_eq!(nodes.len(), 2);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0], ("a".to_string(), "b".to_string(), 500));
    }

    #[test]
    fn test_line_topology() {
        let gen = ScenarioGenerator::new();
        let (nodes, edges) = gen.line(4, 5e8, 500, 1_000);

        assert_eq!(nodes.len(), 4);
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0], ("n0".to_string(), "n1".to_string(), 1_000));
    }

    #[test]
    fn test_fully_connected_mesh() {
        let gen = ScenarioGenerator::new();
        let (nodes, edges) = gen.fully_connected_mesh(8, 62_500.0, 500);

        assert_eq!(nodes.len(), 8);
        assert_eq!(edges.len(), 8 * 7 / 2);
    }
}
